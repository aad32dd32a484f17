//! Ring Survivor - A circular arena survival arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, spawning, progression)
//! - `platform`: Host input/time shims consumed by the sim
//! - `audio`: Sound cue sink (playback lives in the host)
//! - `ui`: Read-only HUD snapshot for overlays
//! - `settings`: Data-driven configuration

pub mod audio;
pub mod logging;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{QualityPreset, Settings, SettingsError};

use glam::Vec2;
use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Frame step used by the headless runner (60 Hz display cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest dt a single frame may integrate
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_RADIUS: f32 = 800.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 150.0;
    pub const PLAYER_MAX_SPEED: f32 = 200.0;
    pub const PLAYER_MAX_HP: f32 = 100.0;
    pub const PLAYER_EXP_TO_NEXT: u32 = 100;
    /// Threshold growth per level (floored)
    pub const EXP_GROWTH: f32 = 1.2;
    /// Pointer seek stops within this distance of the target
    pub const SEEK_EPSILON: f32 = 5.0;
    /// Post-hit grace window (seconds)
    pub const INVINCIBILITY_TIME: f32 = 0.5;
    pub const MAX_DEFENSE_RATE: f32 = 0.5;

    /// Orbit weapon defaults
    pub const WEAPON_COUNT: u32 = 1;
    pub const MAX_WEAPON_COUNT: u32 = 8;
    pub const WEAPON_DAMAGE: f32 = 10.0;
    pub const WEAPON_RADIUS: f32 = 80.0;
    pub const MAX_WEAPON_RADIUS: f32 = 150.0;
    /// Degrees per second
    pub const WEAPON_ROTATE_SPEED: f32 = 180.0;
    /// Hit radius of a single orbiting weapon
    pub const WEAPON_HIT_RADIUS: f32 = 15.0;
    pub const WEAPON_SKIN_COUNT: u8 = 4;

    /// Enemy tuning
    pub const SLOW_DURATION: f32 = 2.0;
    pub const SLOW_FACTOR: f32 = 0.7;
    pub const BOSS_ATTACK_INTERVAL: f32 = 5.0;
    pub const BOSS_ATTACK_DELAY: f32 = 0.5;
    pub const BOSS_ATTACK_RADIUS: f32 = 200.0;
    pub const BOSS_ATTACK_DAMAGE: f32 = 15.0;

    /// Pickups
    pub const ORB_RADIUS: f32 = 6.0;
    pub const ORB_ATTRACT_RADIUS: f32 = 100.0;
    pub const ORB_ATTRACT_SPEED: f32 = 250.0;
    pub const ORB_FORCE_RADIUS: f32 = 300.0;
    pub const ORB_FORCE_SPEED: f32 = 500.0;
    pub const ORBS_PER_KILL: u32 = 3;
    pub const CHEST_RADIUS: f32 = 20.0;

    /// Particles
    pub const PARTICLES_PER_KILL: usize = 10;

    /// Spawn schedule (seconds)
    pub const MINION_WAVE_INTERVAL: f32 = 10.0;
    pub const MINION_WAVE_BASE: u32 = 3;
    pub const MINION_WAVE_MAX: u32 = 8;
    pub const ELITE_START_TIME: f32 = 30.0;
    pub const ELITE_INTERVAL: f32 = 30.0;
    pub const CHEST_INTERVAL: f32 = 45.0;
    pub const CHEST_MIN_PLAYER_DIST: f32 = 80.0;
    pub const CHEST_SPAWN_ATTEMPTS: u32 = 10;
    pub const BOSS_LEVEL: u32 = 10;
    pub const BOSS_TIME: f32 = 120.0;

    /// Rewards
    pub const AUTO_COLLECT_TIME: f32 = 30.0;
    pub const SPEED_BUFF: f32 = 1.5;
    pub const SPEED_BUFF_TIME: f32 = 10.0;
    pub const SKILL_CHOICES: usize = 3;
    pub const SKILL_AUTO_SELECT: f32 = 3.0;

    /// Scoring
    pub const SCORE_PER_KILL: u64 = 10;
    pub const SCORE_PER_SECOND: u64 = 2;
    pub const VICTORY_BONUS: u64 = 1000;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Strict circle overlap: centers closer than the summed radii
#[inline]
pub fn circle_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    distance(a, b) < ra + rb
}

/// Uniform angle in [0, 2π)
#[inline]
pub fn random_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(0.0..std::f32::consts::TAU)
}

/// Point on a circle of radius `r` around the origin
pub fn random_on_circle<R: Rng + ?Sized>(rng: &mut R, r: f32) -> Vec2 {
    polar_to_cartesian(r, random_angle(rng))
}

/// Uniformly distributed point inside a disk of radius `r` around the origin
pub fn random_in_disk<R: Rng + ?Sized>(rng: &mut R, r: f32) -> Vec2 {
    let u: f32 = rng.random();
    polar_to_cartesian(r * u.sqrt(), random_angle(rng))
}
