//! Game state and core simulation types
//!
//! One `GameState` owns every entity collection and session aggregate.
//! Nothing outside `tick` and the progression calls mutates it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, EnemyKind};
use super::particle::{self, Particle};
use super::pickup::{Chest, ExpOrb};
use super::player::Player;
use super::rewards::{ChestReward, Skill};
use super::schedule::Scheduler;
use crate::audio::SoundCue;
use crate::consts::*;
use crate::settings::Settings;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Waiting on a skill choice; the world is frozen
    LevelUp,
    /// Run ended
    GameOver(Outcome),
}

/// Something the host may want to react to (sound, overlay, log)
///
/// Pushed during `tick` and drained by the host after each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerHit { damage: f32 },
    EnemyKilled { kind: EnemyKind, pos: Vec2 },
    LevelUp { level: u32, choices: Vec<Skill> },
    SkillChosen { skill: Skill, auto: bool },
    ChestOpened { reward: ChestReward },
    BossSpawned { pos: Vec2 },
    BossAttack { origin: Vec2 },
    GameOver { outcome: Outcome },
}

impl GameEvent {
    /// Sound cue associated with this event, if any
    pub fn cue(&self) -> Option<SoundCue> {
        match self {
            GameEvent::PlayerHit { .. } => Some(SoundCue::Hit),
            GameEvent::LevelUp { .. } => Some(SoundCue::LevelUp),
            GameEvent::ChestOpened { .. } => Some(SoundCue::ChestOpen),
            GameEvent::BossSpawned { .. } => Some(SoundCue::BossAppear),
            GameEvent::GameOver { .. } => Some(SoundCue::GameOver),
            GameEvent::EnemyKilled { .. }
            | GameEvent::SkillChosen { .. }
            | GameEvent::BossAttack { .. } => None,
        }
    }
}

/// Tunables taken from `Settings` when a session is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub arena_radius: f32,
    /// Seconds before a pending skill choice is made automatically
    pub skill_auto_select: f32,
    pub max_particles: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_radius: ARENA_RADIUS,
            skill_auto_select: SKILL_AUTO_SELECT,
            max_particles: 500,
        }
    }
}

impl From<&Settings> for SimConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            arena_radius: settings.arena_radius,
            skill_auto_select: settings.skill_auto_select,
            max_particles: settings.max_particles(),
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub config: SimConfig,
    /// Bumped on every reset; deferred events from older sessions are stale
    pub session: u32,
    pub phase: GamePhase,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub orbs: Vec<ExpOrb>,
    pub chests: Vec<Chest>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Seconds survived this session
    pub survival_time: f32,
    pub score: u64,
    pub kill_count: u32,
    pub boss_spawned: bool,
    pub boss_alive: bool,
    pub boss_defeated: bool,
    pub minion_timer: f32,
    pub elite_timer: f32,
    pub chest_timer: f32,
    /// Offered skills while in `LevelUp`
    pub skill_choices: Vec<Skill>,
    /// Seconds left before a skill is picked automatically
    pub choice_timer: f32,
    /// Identifies the speed buff currently in force
    pub speed_buff_generation: u32,
    pub scheduler: Scheduler,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, SimConfig::default())
    }

    pub fn with_config(seed: u64, config: SimConfig) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            session: 0,
            phase: GamePhase::Playing,
            player: Player::default(),
            enemies: Vec::new(),
            orbs: Vec::new(),
            chests: Vec::new(),
            particles: Vec::new(),
            survival_time: 0.0,
            score: 0,
            kill_count: 0,
            boss_spawned: false,
            boss_alive: false,
            boss_defeated: false,
            minion_timer: 0.0,
            elite_timer: 0.0,
            chest_timer: 0.0,
            skill_choices: Vec::new(),
            choice_timer: 0.0,
            speed_buff_generation: 0,
            scheduler: Scheduler::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Start a fresh session
    ///
    /// The RNG stream continues and pending deferred events are kept; they
    /// carry the old session token and are discarded when they come due.
    pub fn reset(&mut self) {
        let mut next = Self::with_config(self.seed, self.config.clone());
        next.session = self.session.wrapping_add(1);
        next.rng = self.rng.clone();
        next.scheduler = std::mem::take(&mut self.scheduler);
        *self = next;
        log::info!("Session {} started", self.session);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand all pending events to the host
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn spawn_enemy(&mut self, kind: EnemyKind, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, kind, pos));
        id
    }

    /// Drop `count` orbs worth `total` exp, scattered around `pos`
    pub fn spawn_orbs(&mut self, pos: Vec2, total: u32, count: u32) {
        let value = (total / count.max(1)).max(1);
        for _ in 0..count {
            let offset = Vec2::new(
                self.rng.random_range(-15.0..15.0),
                self.rng.random_range(-15.0..15.0),
            );
            let id = self.next_entity_id();
            self.orbs.push(ExpOrb::new(id, pos + offset, value));
        }
    }

    pub fn spawn_chest(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.chests.push(Chest::new(id, pos));
        id
    }

    /// Particle burst, capped by the quality preset
    pub fn spawn_particles(&mut self, pos: Vec2, color: u32, count: usize) {
        let room = self.config.max_particles.saturating_sub(self.particles.len());
        let count = count.min(room);
        if count == 0 {
            return;
        }
        let parts = particle::burst(&mut self.rng, pos, color, count);
        self.particles.extend(parts);
    }

    /// Score is derived, never accumulated
    pub fn update_score(&mut self) {
        let bonus = if self.boss_defeated { VICTORY_BONUS } else { 0 };
        self.score = self.kill_count as u64 * SCORE_PER_KILL
            + self.survival_time.floor() as u64 * SCORE_PER_SECOND
            + bonus;
    }

    /// Move to a terminal phase (first outcome wins)
    pub fn end_run(&mut self, outcome: Outcome) {
        if self.is_over() {
            return;
        }
        self.phase = GamePhase::GameOver(outcome);
        log::info!(
            "Run over: {:?} at {:.1}s, level {}, {} kills",
            outcome,
            self.survival_time,
            self.player.level,
            self.kill_count
        );
        self.push_event(GameEvent::GameOver { outcome });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::schedule::DeferredEffect;

    #[test]
    fn test_new_state() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.hp, PLAYER_MAX_HP);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_score_formula() {
        let mut state = GameState::new(1);
        state.kill_count = 7;
        state.survival_time = 42.9;
        state.update_score();
        assert_eq!(state.score, 70 + 84);

        state.boss_defeated = true;
        state.update_score();
        assert_eq!(state.score, 70 + 84 + VICTORY_BONUS);
    }

    #[test]
    fn test_reset_bumps_session_and_keeps_queue() {
        let mut state = GameState::new(5);
        state.kill_count = 3;
        state.spawn_enemy(EnemyKind::Minion, Vec2::new(100.0, 0.0));
        state
            .scheduler
            .schedule(1.0, state.session, DeferredEffect::SpeedBuffExpire { generation: 1 });

        state.reset();
        assert_eq!(state.session, 1);
        assert_eq!(state.kill_count, 0);
        assert!(state.enemies.is_empty());
        assert_eq!(state.scheduler.len(), 1);
    }

    #[test]
    fn test_spawn_orbs_splits_value() {
        let mut state = GameState::new(5);
        state.spawn_orbs(Vec2::ZERO, 15, 3);
        assert_eq!(state.orbs.len(), 3);
        assert!(state.orbs.iter().all(|o| o.value == 5));

        // Never worth nothing
        state.spawn_orbs(Vec2::ZERO, 1, 3);
        assert!(state.orbs.iter().all(|o| o.value >= 1));
    }

    #[test]
    fn test_particle_cap() {
        let mut state = GameState::with_config(
            5,
            SimConfig {
                max_particles: 12,
                ..Default::default()
            },
        );
        state.spawn_particles(Vec2::ZERO, 0xffffff, 10);
        state.spawn_particles(Vec2::ZERO, 0xffffff, 10);
        assert_eq!(state.particles.len(), 12);
    }

    #[test]
    fn test_end_run_first_outcome_wins() {
        let mut state = GameState::new(5);
        state.end_run(Outcome::Victory);
        state.end_run(Outcome::Defeat);
        assert_eq!(state.phase, GamePhase::GameOver(Outcome::Victory));
        let events = state.drain_events();
        assert_eq!(events.len(), 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_event_cues() {
        assert_eq!(GameEvent::PlayerHit { damage: 1.0 }.cue(), Some(SoundCue::Hit));
        assert_eq!(
            GameEvent::ChestOpened {
                reward: ChestReward::WeaponSkin
            }
            .cue(),
            Some(SoundCue::ChestOpen)
        );
        assert_eq!(
            GameEvent::BossAttack { origin: Vec2::ZERO }.cue(),
            None
        );
    }
}
