//! The player character and its orbiting weapons

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::confine_to_arena;
use crate::consts::*;
use crate::wrap_degrees;

/// One orbiting weapon, as seen by rendering and hit detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponSlot {
    pub pos: Vec2,
    /// Degrees
    pub angle: f32,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub hp: f32,
    pub max_hp: f32,
    /// Base movement speed (px/s)
    pub speed: f32,
    /// Temporary multiplier on `speed` (chest reward)
    pub speed_buff: f32,
    pub level: u32,
    pub exp: u32,
    pub exp_to_next: u32,
    pub weapon_count: u32,
    pub weapon_damage: f32,
    /// Orbit distance from the player center
    pub weapon_radius: f32,
    /// Degrees per second
    pub rotate_speed: f32,
    /// Current orbit angle in degrees, [0, 360)
    pub weapon_angle: f32,
    /// Fraction of incoming damage ignored, [0, 0.5]
    pub defense_rate: f32,
    /// Grace window remaining after a hit (seconds)
    pub invincible: f32,
    /// Orbs home in from any distance while > 0 (seconds)
    pub auto_collect: f32,
    /// Cosmetic weapon variant
    pub weapon_skin: u8,
    /// Pointer seek destination, cleared once reached
    pub move_target: Option<Vec2>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            speed: PLAYER_SPEED,
            speed_buff: 1.0,
            level: 1,
            exp: 0,
            exp_to_next: PLAYER_EXP_TO_NEXT,
            weapon_count: WEAPON_COUNT,
            weapon_damage: WEAPON_DAMAGE,
            weapon_radius: WEAPON_RADIUS,
            rotate_speed: WEAPON_ROTATE_SPEED,
            weapon_angle: 0.0,
            defense_rate: 0.0,
            invincible: 0.0,
            auto_collect: 0.0,
            weapon_skin: 0,
            move_target: None,
        }
    }
}

impl Player {
    /// Move, confine, spin weapons and tick down timers
    ///
    /// `direction` is the raw key intent (any length, zero when idle). A
    /// new `pointer_target` replaces the current seek destination.
    pub fn update(
        &mut self,
        dt: f32,
        direction: Vec2,
        pointer_target: Option<Vec2>,
        arena_radius: f32,
    ) {
        if pointer_target.is_some() {
            self.move_target = pointer_target;
        }

        let mut intent = direction;
        let mut seek_dist = None;
        if let Some(target) = self.move_target {
            let to_target = target - self.pos;
            let dist = to_target.length();
            if dist > SEEK_EPSILON {
                intent += to_target / dist;
                seek_dist = Some(dist);
            } else {
                self.move_target = None;
            }
        }

        let mut step_len = self.speed * self.speed_buff * dt;
        // Seeking alone lands on the target instead of stepping across it
        if direction == Vec2::ZERO {
            if let Some(dist) = seek_dist {
                if step_len >= dist {
                    step_len = dist;
                    self.move_target = None;
                }
            }
        }

        let step = intent.normalize_or_zero() * step_len;
        self.pos = confine_to_arena(self.pos + step, self.radius, arena_radius);

        self.weapon_angle = wrap_degrees(self.weapon_angle + self.rotate_speed * dt);

        self.invincible = (self.invincible - dt).max(0.0);
        self.auto_collect = (self.auto_collect - dt).max(0.0);
    }

    /// Apply incoming damage unless inside the grace window
    ///
    /// Returns true when hp actually changed.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.invincible > 0.0 {
            return false;
        }
        let dealt = (amount * (1.0 - self.defense_rate)).max(1.0);
        self.hp = (self.hp - dealt).max(0.0);
        self.invincible = INVINCIBILITY_TIME;
        true
    }

    pub fn heal(&mut self, amount: f32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    pub fn gain_exp(&mut self, amount: u32) {
        self.exp = self.exp.saturating_add(amount);
    }

    /// Advance at most one level
    ///
    /// Surplus beyond a second threshold stays banked and is picked up by
    /// the next call.
    pub fn check_level_up(&mut self) -> bool {
        if self.exp < self.exp_to_next {
            return false;
        }
        self.exp -= self.exp_to_next;
        self.level += 1;
        self.exp_to_next = (self.exp_to_next as f32 * EXP_GROWTH).floor() as u32;
        true
    }

    /// Weapon placements, evenly spaced around the current orbit angle
    pub fn weapon_positions(&self) -> Vec<WeaponSlot> {
        let count = self.weapon_count.max(1);
        let step = 360.0 / count as f32;
        (0..count)
            .map(|i| {
                let angle = wrap_degrees(self.weapon_angle + step * i as f32);
                let rad = angle.to_radians();
                WeaponSlot {
                    pos: self.pos + Vec2::new(rad.cos(), rad.sin()) * self.weapon_radius,
                    angle,
                }
            })
            .collect()
    }

    /// Display-only power rating
    pub fn power(&self) -> u32 {
        (100.0
            + self.weapon_count as f32 * 10.0
            + self.weapon_damage * 0.5
            + self.defense_rate * 800.0)
            .floor() as u32
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    pub fn add_weapons(&mut self, n: u32) {
        self.weapon_count = (self.weapon_count + n).clamp(1, MAX_WEAPON_COUNT);
    }

    pub fn add_defense(&mut self, amount: f32) {
        self.defense_rate = (self.defense_rate + amount).clamp(0.0, MAX_DEFENSE_RATE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_keyboard_move_is_normalized() {
        let mut p = Player::default();
        p.update(1.0, Vec2::new(1.0, 1.0), None, ARENA_RADIUS);
        assert!((p.pos.length() - PLAYER_SPEED).abs() < 0.01);
    }

    #[test]
    fn test_pointer_seek_clears_on_arrival() {
        let mut p = Player::default();
        let dt = 6.0 / PLAYER_SPEED;
        p.update(dt, Vec2::ZERO, Some(Vec2::new(10.0, 0.0)), ARENA_RADIUS);
        assert!(p.move_target.is_some());
        assert!((p.pos.x - 6.0).abs() < 0.01);
        // Close enough now, so the next frame drops the target without moving
        p.update(dt, Vec2::ZERO, None, ARENA_RADIUS);
        assert!((p.pos.x - 6.0).abs() < 0.01);
        assert!(p.move_target.is_none());
    }

    #[test]
    fn test_pointer_seek_settles_on_large_steps() {
        let mut p = Player {
            speed_buff: SPEED_BUFF,
            ..Default::default()
        };
        // 11.25 units per frame against a target 6 away
        p.update(0.05, Vec2::ZERO, Some(Vec2::new(6.0, 0.0)), ARENA_RADIUS);
        assert!((p.pos.x - 6.0).abs() < 0.001);
        assert!(p.move_target.is_none());
        for _ in 0..5 {
            p.update(0.05, Vec2::ZERO, None, ARENA_RADIUS);
        }
        assert!((p.pos.x - 6.0).abs() < 0.001);
    }

    #[test]
    fn test_held_keys_still_move_past_seek_target() {
        let mut p = Player::default();
        p.update(0.1, Vec2::new(1.0, 0.0), Some(Vec2::new(6.0, 0.0)), ARENA_RADIUS);
        assert!((p.pos.x - PLAYER_SPEED * 0.1).abs() < 0.01);
    }

    #[test]
    fn test_weapon_angle_wraps() {
        let mut p = Player::default();
        p.weapon_angle = 350.0;
        p.update(0.1, Vec2::ZERO, None, ARENA_RADIUS);
        assert!((p.weapon_angle - 8.0).abs() < 0.01);
    }

    #[test]
    fn test_timers_floor_at_zero() {
        let mut p = Player::default();
        p.invincible = 0.05;
        p.auto_collect = 0.05;
        p.update(0.1, Vec2::ZERO, None, ARENA_RADIUS);
        assert_eq!(p.invincible, 0.0);
        assert_eq!(p.auto_collect, 0.0);
    }

    #[test]
    fn test_damage_once_per_grace_window() {
        let mut p = Player::default();
        assert!(p.take_damage(10.0));
        assert!(!p.take_damage(10.0));
        assert_eq!(p.hp, 90.0);

        p.update(0.3, Vec2::ZERO, None, ARENA_RADIUS);
        assert!(!p.take_damage(10.0));
        assert_eq!(p.hp, 90.0);

        p.update(0.3, Vec2::ZERO, None, ARENA_RADIUS);
        assert!(p.take_damage(10.0));
        assert_eq!(p.hp, 80.0);
    }

    #[test]
    fn test_damage_minimum_and_floor() {
        let mut p = Player::default();
        p.defense_rate = 0.5;
        p.take_damage(1.0);
        assert_eq!(p.hp, 99.0);

        p.invincible = 0.0;
        p.take_damage(10_000.0);
        assert_eq!(p.hp, 0.0);
        assert!(p.is_dead());
    }

    #[test]
    fn test_level_up_exact_threshold() {
        let mut p = Player::default();
        p.exp = 100;
        p.gain_exp(0);
        assert!(p.check_level_up());
        assert_eq!(p.level, 2);
        assert_eq!(p.exp, 0);
        assert_eq!(p.exp_to_next, 120);
    }

    #[test]
    fn test_level_up_single_step_on_overflow() {
        let mut p = Player::default();
        p.exp = 250;
        assert!(p.check_level_up());
        assert_eq!(p.level, 2);
        assert_eq!(p.exp, 150);
    }

    #[test]
    fn test_weapon_positions_evenly_spaced() {
        let mut p = Player::default();
        p.weapon_count = 4;
        p.weapon_angle = 10.0;
        let slots = p.weapon_positions();
        assert_eq!(slots.len(), 4);
        for (i, slot) in slots.iter().enumerate() {
            assert!((slot.angle - (10.0 + 90.0 * i as f32)).abs() < 0.001);
            assert!((slot.pos.distance(p.pos) - p.weapon_radius).abs() < 0.01);
        }
    }

    #[test]
    fn test_power() {
        let mut p = Player::default();
        assert_eq!(p.power(), 115);
        p.weapon_count = 3;
        p.weapon_damage = 21.0;
        p.defense_rate = 0.1;
        // 100 + 30 + 10.5 + 80
        assert_eq!(p.power(), 220);
    }

    #[test]
    fn test_weapon_and_defense_caps() {
        let mut p = Player::default();
        p.add_weapons(20);
        assert_eq!(p.weapon_count, MAX_WEAPON_COUNT);
        p.add_defense(2.0);
        assert_eq!(p.defense_rate, MAX_DEFENSE_RATE);
    }

    proptest! {
        #[test]
        fn player_stays_in_arena(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            dx in -1.0f32..1.0,
            dy in -1.0f32..1.0,
            dt in 0.0f32..0.1,
        ) {
            let mut p = Player { pos: Vec2::new(x, y), ..Default::default() };
            p.update(dt, Vec2::new(dx, dy), None, ARENA_RADIUS);
            prop_assert!(p.pos.length() <= ARENA_RADIUS - p.radius + 0.01);
        }
    }
}
