//! Enemy archetypes and chase behaviour

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Enemy archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Minion,
    Elite,
    Boss,
}

/// Fixed stat preset for an archetype
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub hp: f32,
    pub speed: f32,
    pub damage: f32,
    pub exp: u32,
    pub radius: f32,
    /// 0xRRGGBB
    pub color: u32,
}

impl EnemyKind {
    pub fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Minion => EnemyStats {
                hp: 20.0,
                speed: 80.0,
                damage: 10.0,
                exp: 15,
                radius: 15.0,
                color: 0xff5555,
            },
            EnemyKind::Elite => EnemyStats {
                hp: 120.0,
                speed: 60.0,
                damage: 20.0,
                exp: 60,
                radius: 25.0,
                color: 0xaa44ff,
            },
            EnemyKind::Boss => EnemyStats {
                hp: 2000.0,
                speed: 45.0,
                damage: 30.0,
                exp: 300,
                radius: 60.0,
                color: 0xffaa00,
            },
        }
    }

    /// Whether slow debuffs take hold
    pub fn slowable(self) -> bool {
        match self {
            EnemyKind::Elite => true,
            EnemyKind::Minion | EnemyKind::Boss => false,
        }
    }

    /// Whether this archetype fires the delayed radial blast
    pub fn has_ranged_attack(self) -> bool {
        match self {
            EnemyKind::Boss => true,
            EnemyKind::Minion | EnemyKind::Elite => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnemyKind::Minion => "minion",
            EnemyKind::Elite => "elite",
            EnemyKind::Boss => "boss",
        }
    }
}

/// An enemy instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub hp: f32,
    pub max_hp: f32,
    pub speed: f32,
    pub damage: f32,
    pub radius: f32,
    pub dead: bool,
    /// Slow debuff remaining (seconds)
    pub slow_timer: f32,
    /// Boss only: seconds until the next blast may fire
    pub attack_cooldown: f32,
}

impl Enemy {
    pub fn new(id: u32, kind: EnemyKind, pos: Vec2) -> Self {
        let stats = kind.stats();
        Self {
            id,
            kind,
            pos,
            hp: stats.hp,
            max_hp: stats.hp,
            speed: stats.speed,
            damage: stats.damage,
            radius: stats.radius,
            dead: false,
            slow_timer: 0.0,
            attack_cooldown: BOSS_ATTACK_INTERVAL,
        }
    }

    /// Chase the player
    pub fn update(&mut self, dt: f32, player_pos: Vec2) {
        if self.dead {
            return;
        }

        let factor = if self.slow_timer > 0.0 {
            self.slow_timer = (self.slow_timer - dt).max(0.0);
            SLOW_FACTOR
        } else {
            1.0
        };
        let dir = (player_pos - self.pos).normalize_or_zero();
        self.pos += dir * self.speed * factor * dt;

        if self.kind.has_ranged_attack() {
            self.attack_cooldown -= dt;
        }
    }

    /// Returns true if this hit was the killing blow
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.dead {
            return false;
        }
        self.hp = (self.hp - amount).max(0.0);
        if self.hp <= 0.0 {
            self.dead = true;
            return true;
        }
        false
    }

    pub fn apply_slow(&mut self) {
        if self.kind.slowable() {
            self.slow_timer = SLOW_DURATION;
        }
    }

    pub fn is_slowed(&self) -> bool {
        self.slow_timer > 0.0
    }

    pub fn can_attack(&self) -> bool {
        !self.dead && self.kind.has_ranged_attack() && self.attack_cooldown <= 0.0
    }

    pub fn perform_attack(&mut self) {
        self.attack_cooldown = BOSS_ATTACK_INTERVAL;
    }

    pub fn exp_value(&self) -> u32 {
        self.kind.stats().exp
    }
}
