//! Simulation module
//!
//! All gameplay logic lives here. This module must stay host-agnostic:
//! - Caller-supplied frame dt, clamped per frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies beyond plain data

pub mod collision;
pub mod enemy;
pub mod particle;
pub mod pickup;
pub mod player;
pub mod progression;
pub mod rewards;
pub mod schedule;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{confine_to_arena, outside_arena, weapon_hits};
pub use enemy::{Enemy, EnemyKind, EnemyStats};
pub use particle::Particle;
pub use pickup::{Chest, ExpOrb};
pub use player::{Player, WeaponSlot};
pub use rewards::{ChestReward, RewardCategory, RewardInfo, Skill};
pub use schedule::{DeferredEffect, ScheduledEvent, Scheduler};
pub use state::{GameEvent, GamePhase, GameState, Outcome, SimConfig};
pub use tick::{TickInput, tick};
