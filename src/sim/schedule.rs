//! Deferred effects
//!
//! Delayed side effects (boss blast landing, speed buff wearing off) are
//! queued here instead of running on wall-clock timers. Each event carries
//! the session token it was scheduled under; the driver re-validates that
//! token (and any effect-specific generation) when the event comes due and
//! drops stale ones.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What happens when an event fires
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DeferredEffect {
    /// Radial blast from a boss, resolved against the trigger position
    BossBlast {
        boss_id: u32,
        origin: Vec2,
        radius: f32,
        damage: f32,
    },
    /// Restore base speed, unless a newer buff has replaced this one
    SpeedBuffExpire { generation: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// Scheduler clock value at which the event fires
    pub fire_at: f64,
    /// Session the event belongs to
    pub session: u32,
    pub effect: DeferredEffect,
}

/// Time-ordered queue of deferred effects
///
/// The clock only moves while gameplay runs, so paused phases delay
/// pending effects instead of letting them fire into a frozen world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    /// Seconds of play since the scheduler was created; spans sessions
    now: f64,
    queue: Vec<ScheduledEvent>,
}

impl Scheduler {
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queue `effect` to fire `delay` seconds from now
    pub fn schedule(&mut self, delay: f32, session: u32, effect: DeferredEffect) {
        let fire_at = self.now + f64::from(delay.max(0.0));
        // Keep sorted by fire time; equal times keep insertion order
        let idx = self.queue.partition_point(|e| e.fire_at <= fire_at);
        self.queue.insert(
            idx,
            ScheduledEvent {
                fire_at,
                session,
                effect,
            },
        );
    }

    /// Advance the clock and take every event that is now due
    pub fn advance(&mut self, dt: f32) -> Vec<ScheduledEvent> {
        self.now += f64::from(dt);
        let due = self.queue.partition_point(|e| e.fire_at <= self.now);
        self.queue.drain(..due).collect()
    }
}
