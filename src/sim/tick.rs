//! Per-frame simulation step
//!
//! Core game loop that advances the world by one display frame.

use glam::Vec2;

use super::collision::weapon_hits;
use super::enemy::EnemyKind;
use super::schedule::DeferredEffect;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState, Outcome};
use crate::circle_overlap;
use crate::consts::*;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held direction keys as a vector (zero when idle)
    pub direction: Vec2,
    /// New pointer seek destination in arena coordinates
    pub pointer_target: Option<Vec2>,
    /// Forced orb attraction held
    pub attract: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    match state.phase {
        GamePhase::GameOver(_) => return,
        GamePhase::LevelUp => {
            state.tick_level_up(dt);
            return;
        }
        GamePhase::Playing => {}
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    // 1. Clock and deferred effects
    state.survival_time += dt;
    fire_due_events(state, dt);

    // 2. Player
    let arena_radius = state.config.arena_radius;
    state
        .player
        .update(dt, input.direction, input.pointer_target, arena_radius);
    if state.player.check_level_up() {
        state.enter_level_up();
        return;
    }

    // 3-4. Enemies, then compaction
    resolve_enemies(state, dt);
    state.enemies.retain(|e| !e.dead);

    // 5. Pickups
    collect_pickups(state, dt, input.attract);

    // 6. Particles
    for particle in state.particles.iter_mut() {
        particle.update(dt);
    }
    state.particles.retain(|p| !p.is_dead());

    // 7-8. Spawning
    spawn::run_schedule(state, dt);
    spawn::check_boss_spawn(state);

    // 9. Defeat
    if state.player.is_dead() {
        state.end_run(Outcome::Defeat);
    }

    // 10. Score
    state.update_score();
}

/// Fire deferred effects that came due, dropping stale ones
fn fire_due_events(state: &mut GameState, dt: f32) {
    for event in state.scheduler.advance(dt) {
        if event.session != state.session {
            log::debug!(
                "Dropping stale {:?} from session {} at {:.2}s",
                event.effect,
                event.session,
                state.scheduler.now()
            );
            continue;
        }
        match event.effect {
            DeferredEffect::BossBlast {
                boss_id,
                origin,
                radius,
                damage,
            } => {
                if state.is_over() {
                    continue;
                }
                if state.player.pos.distance(origin) <= radius
                    && state.player.take_damage(damage)
                {
                    log::debug!("Boss {} blast hit for {}", boss_id, damage);
                    state.push_event(GameEvent::PlayerHit { damage });
                }
            }
            DeferredEffect::SpeedBuffExpire { generation } => {
                if generation == state.speed_buff_generation {
                    state.player.speed_buff = 1.0;
                } else {
                    log::debug!("Speed buff {} already superseded", generation);
                }
            }
        }
    }
}

/// Move enemies, apply contact and weapon damage, resolve kills
fn resolve_enemies(state: &mut GameState, dt: f32) {
    let weapons = state.player.weapon_positions();
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;
    let weapon_damage = state.player.weapon_damage;

    // Deferred to avoid borrowing state while iterating enemies
    let mut kills: Vec<(EnemyKind, Vec2, u32)> = Vec::new();
    let mut blasts: Vec<Vec2> = Vec::new();

    for enemy in state.enemies.iter_mut() {
        if enemy.dead {
            continue;
        }
        enemy.update(dt, player_pos);

        if circle_overlap(enemy.pos, enemy.radius, player_pos, player_radius)
            && state.player.take_damage(enemy.damage)
        {
            state.events.push(GameEvent::PlayerHit {
                damage: enemy.damage,
            });
        }

        let hits = weapon_hits(&weapons, enemy.pos, enemy.radius);
        for _ in 0..hits {
            enemy.apply_slow();
            if enemy.take_damage(weapon_damage) {
                kills.push((enemy.kind, enemy.pos, enemy.exp_value()));
                break;
            }
        }

        if enemy.can_attack() {
            enemy.perform_attack();
            state.scheduler.schedule(
                BOSS_ATTACK_DELAY,
                state.session,
                DeferredEffect::BossBlast {
                    boss_id: enemy.id,
                    origin: enemy.pos,
                    radius: BOSS_ATTACK_RADIUS,
                    damage: BOSS_ATTACK_DAMAGE,
                },
            );
            state.events.push(GameEvent::BossAttack { origin: enemy.pos });
            blasts.push(enemy.pos);
        }
    }

    let boss_color = EnemyKind::Boss.stats().color;
    for origin in blasts {
        state.spawn_particles(origin, boss_color, PARTICLES_PER_KILL);
    }
    for (kind, pos, exp) in kills {
        resolve_kill(state, kind, pos, exp);
    }
}

/// Orbs, particles, score and (for the boss) the win
fn resolve_kill(state: &mut GameState, kind: EnemyKind, pos: Vec2, exp: u32) {
    state.spawn_orbs(pos, exp, ORBS_PER_KILL);
    state.spawn_particles(pos, kind.stats().color, PARTICLES_PER_KILL);
    state.kill_count += 1;
    state.push_event(GameEvent::EnemyKilled { kind, pos });
    log::debug!("{} killed ({} total)", kind.as_str(), state.kill_count);

    if kind == EnemyKind::Boss {
        state.boss_alive = false;
        state.boss_defeated = true;
        log::info!("Boss defeated at {:.1}s", state.survival_time);
        state.end_run(Outcome::Victory);
    }
}

fn collect_pickups(state: &mut GameState, dt: f32, attract: bool) {
    let mut exp = 0;
    for orb in state.orbs.iter_mut() {
        if let Some(value) = orb.update(dt, &state.player, attract) {
            exp += value;
        }
    }
    state.player.gain_exp(exp);
    state.orbs.retain(|o| !o.collected);

    let mut rewards = Vec::new();
    for chest in state.chests.iter_mut() {
        if let Some(reward) = chest.update(dt, &state.player, &mut state.rng) {
            rewards.push(reward);
        }
    }
    state.chests.retain(|c| !c.collected);
    for reward in rewards {
        state.apply_chest_reward(reward);
    }
}

/// Demo steering: flee nearby enemies, drift toward orbs, stay off the wall
fn autopilot(state: &GameState, input: &mut TickInput) {
    let pos = state.player.pos;
    let mut steer = Vec2::ZERO;

    for enemy in &state.enemies {
        let away = pos - enemy.pos;
        let dist = away.length();
        let danger = 250.0 + enemy.radius;
        if dist < danger {
            steer += away.normalize_or_zero() * (1.0 - dist / danger) * 2.0;
        }
    }

    let nearest_orb = state
        .orbs
        .iter()
        .map(|o| (o.pos, o.pos.distance(pos)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    if let Some((orb_pos, dist)) = nearest_orb {
        steer += (orb_pos - pos).normalize_or_zero();
        input.attract = dist < ORB_FORCE_RADIUS;
    }

    let wall = pos.length() / state.config.arena_radius;
    if wall > 0.7 {
        steer -= pos.normalize_or_zero() * (wall - 0.7) * 5.0;
    }

    input.direction = steer;
    input.pointer_target = None;
}
