//! HUD read model
//!
//! Plain values pulled from `GameState` once per frame. Hosts render these
//! however they like; nothing here writes back into the sim.

use serde::Serialize;

use crate::sim::{GamePhase, GameState, Outcome, RewardInfo};

/// Snapshot of everything the overlay shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub hp: f32,
    pub max_hp: f32,
    pub exp: u32,
    pub exp_to_next: u32,
    pub level: u32,
    pub power: u32,
    pub kills: u32,
    /// Whole seconds survived
    pub survival_secs: u32,
    pub score: u64,
    pub phase: &'static str,
    pub boss_alive: bool,
    /// Pending skill choices, empty unless leveling up
    pub choices: Vec<RewardInfo>,
    /// Whole seconds before the choice is made automatically
    pub choice_secs_left: u32,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let player = &state.player;
        let leveling = state.phase == GamePhase::LevelUp;
        Self {
            hp: player.hp,
            max_hp: player.max_hp,
            exp: player.exp,
            exp_to_next: player.exp_to_next,
            level: player.level,
            power: player.power(),
            kills: state.kill_count,
            survival_secs: state.survival_time.max(0.0) as u32,
            score: state.score,
            phase: phase_label(state.phase),
            boss_alive: state.boss_alive,
            choices: if leveling {
                state.skill_choices.iter().map(|s| s.info()).collect()
            } else {
                Vec::new()
            },
            choice_secs_left: if leveling {
                state.choice_timer.max(0.0).ceil() as u32
            } else {
                0
            },
        }
    }

    /// Fraction of the bar filled, 0.0 - 1.0
    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp <= 0.0 {
            0.0
        } else {
            (self.hp / self.max_hp).clamp(0.0, 1.0)
        }
    }

    pub fn exp_fraction(&self) -> f32 {
        if self.exp_to_next == 0 {
            0.0
        } else {
            (self.exp as f32 / self.exp_to_next as f32).clamp(0.0, 1.0)
        }
    }

    /// `mm:ss` survival clock
    pub fn clock(&self) -> String {
        format_time(self.survival_secs)
    }
}

pub fn phase_label(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Playing => "playing",
        GamePhase::LevelUp => "level_up",
        GamePhase::GameOver(Outcome::Victory) => "victory",
        GamePhase::GameOver(Outcome::Defeat) => "defeat",
    }
}

/// Format whole seconds as `mm:ss`
pub fn format_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
