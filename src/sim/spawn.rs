//! Spawn scheduling and difficulty escalation

use super::enemy::EnemyKind;
use super::state::{GameEvent, GameState};
use crate::consts::*;
use crate::{distance, random_in_disk, random_on_circle};

/// Minions per wave at a given survival time
pub fn minion_wave_size(survival_time: f32) -> u32 {
    (MINION_WAVE_BASE + (survival_time / 60.0).floor() as u32).min(MINION_WAVE_MAX)
}

/// Advance spawn timers and fire whichever are due
pub fn run_schedule(state: &mut GameState, dt: f32) {
    state.minion_timer += dt;
    if state.minion_timer >= MINION_WAVE_INTERVAL {
        state.minion_timer -= MINION_WAVE_INTERVAL;
        spawn_minion_wave(state);
    }

    if state.survival_time >= ELITE_START_TIME {
        state.elite_timer += dt;
        if state.elite_timer >= ELITE_INTERVAL {
            state.elite_timer -= ELITE_INTERVAL;
            spawn_on_edge(state, EnemyKind::Elite);
            log::debug!(
                "{} spawned at {:.1}s",
                EnemyKind::Elite.as_str(),
                state.survival_time
            );
        }
    }

    state.chest_timer += dt;
    if state.chest_timer >= CHEST_INTERVAL {
        state.chest_timer -= CHEST_INTERVAL;
        if !try_spawn_chest(state) {
            log::debug!("No room for a chest this cycle");
        }
    }
}

pub fn spawn_minion_wave(state: &mut GameState) -> u32 {
    let count = minion_wave_size(state.survival_time);
    for _ in 0..count {
        spawn_on_edge(state, EnemyKind::Minion);
    }
    log::debug!("Minion wave of {} at {:.1}s", count, state.survival_time);
    count
}

/// Spawn on the arena boundary at a random angle
pub fn spawn_on_edge(state: &mut GameState, kind: EnemyKind) -> u32 {
    let pos = random_on_circle(&mut state.rng, state.config.arena_radius);
    state.spawn_enemy(kind, pos)
}

/// Place a chest somewhere in the arena, away from the player
///
/// Returns false when every candidate landed too close.
pub fn try_spawn_chest(state: &mut GameState) -> bool {
    let usable = state.config.arena_radius - CHEST_RADIUS;
    for _ in 0..CHEST_SPAWN_ATTEMPTS {
        let pos = random_in_disk(&mut state.rng, usable);
        if distance(pos, state.player.pos) >= CHEST_MIN_PLAYER_DIST {
            state.spawn_chest(pos);
            return true;
        }
    }
    false
}

/// Bring in the boss once the level or time threshold is crossed
pub fn check_boss_spawn(state: &mut GameState) -> bool {
    if state.boss_spawned {
        return false;
    }
    if state.player.level < BOSS_LEVEL && state.survival_time < BOSS_TIME {
        return false;
    }
    let id = spawn_on_edge(state, EnemyKind::Boss);
    state.boss_spawned = true;
    state.boss_alive = true;
    let pos = state
        .enemies
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.pos)
        .unwrap_or_default();
    log::info!(
        "Boss spawned at {:.1}s (player level {})",
        state.survival_time,
        state.player.level
    );
    state.push_event(GameEvent::BossSpawned { pos });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SimConfig;

    fn count(state: &GameState, kind: EnemyKind) -> usize {
        state.enemies.iter().filter(|e| e.kind == kind).count()
    }

    #[test]
    fn test_wave_sizes() {
        assert_eq!(minion_wave_size(0.0), 3);
        assert_eq!(minion_wave_size(59.9), 3);
        assert_eq!(minion_wave_size(180.0), 6);
        assert_eq!(minion_wave_size(10_000.0), 8);
    }

    #[test]
    fn test_minion_timer_fires_at_ten_seconds() {
        let mut state = GameState::new(1);
        state.minion_timer = 9.9;
        run_schedule(&mut state, 0.2);
        assert_eq!(count(&state, EnemyKind::Minion), 3);

        let mut state = GameState::new(1);
        state.survival_time = 180.0;
        state.minion_timer = 9.9;
        run_schedule(&mut state, 0.2);
        assert_eq!(count(&state, EnemyKind::Minion), 6);
    }

    #[test]
    fn test_minions_spawn_on_boundary() {
        let mut state = GameState::new(9);
        spawn_minion_wave(&mut state);
        for e in &state.enemies {
            assert!((e.pos.length() - ARENA_RADIUS).abs() < 0.1);
        }
    }

    #[test]
    fn test_elites_wait_for_thirty_seconds() {
        let mut state = GameState::new(1);
        state.survival_time = 20.0;
        state.elite_timer = 29.99;
        run_schedule(&mut state, 0.05);
        assert_eq!(count(&state, EnemyKind::Elite), 0);

        state.survival_time = 31.0;
        run_schedule(&mut state, 0.05);
        assert_eq!(count(&state, EnemyKind::Elite), 1);
    }

    #[test]
    fn test_chest_spawns_away_from_player() {
        let mut state = GameState::new(3);
        state.chest_timer = CHEST_INTERVAL;
        run_schedule(&mut state, 0.0);
        assert_eq!(state.chests.len(), 1);
        assert!(distance(state.chests[0].pos, state.player.pos) >= CHEST_MIN_PLAYER_DIST);
    }

    #[test]
    fn test_chest_gives_up_when_no_room() {
        // Arena so small every candidate is within reach of the player
        let mut state = GameState::with_config(
            3,
            SimConfig {
                arena_radius: 60.0,
                ..Default::default()
            },
        );
        assert!(!try_spawn_chest(&mut state));
        assert!(state.chests.is_empty());
    }

    #[test]
    fn test_boss_spawns_once_on_level() {
        let mut state = GameState::new(1);
        state.player.level = BOSS_LEVEL;
        assert!(check_boss_spawn(&mut state));
        assert!(!check_boss_spawn(&mut state));
        state.survival_time = BOSS_TIME + 5.0;
        assert!(!check_boss_spawn(&mut state));
        assert_eq!(count(&state, EnemyKind::Boss), 1);
        assert!(state.boss_alive);
    }

    #[test]
    fn test_boss_spawns_on_time() {
        let mut state = GameState::new(1);
        state.survival_time = 119.0;
        assert!(!check_boss_spawn(&mut state));
        state.survival_time = BOSS_TIME;
        assert!(check_boss_spawn(&mut state));
        assert_eq!(count(&state, EnemyKind::Boss), 1);
        assert!(matches!(
            state.events.last(),
            Some(GameEvent::BossSpawned { .. })
        ));
    }
}
