//! Experience orbs and treasure chests

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::rewards::ChestReward;
use crate::circle_overlap;
use crate::consts::*;

/// Experience dropped by a dying enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpOrb {
    pub id: u32,
    pub pos: Vec2,
    pub value: u32,
    pub radius: f32,
    pub collected: bool,
    pub attract_radius: f32,
    pub attract_speed: f32,
    pub force_radius: f32,
    pub force_speed: f32,
}

impl ExpOrb {
    pub fn new(id: u32, pos: Vec2, value: u32) -> Self {
        Self {
            id,
            pos,
            value,
            radius: ORB_RADIUS,
            collected: false,
            attract_radius: ORB_ATTRACT_RADIUS,
            attract_speed: ORB_ATTRACT_SPEED,
            force_radius: ORB_FORCE_RADIUS,
            force_speed: ORB_FORCE_SPEED,
        }
    }

    /// Home in on the player and report the value once on contact
    pub fn update(&mut self, dt: f32, player: &Player, force_attract: bool) -> Option<u32> {
        if self.collected {
            return None;
        }

        let to_player = player.pos - self.pos;
        let dist = to_player.length();

        let speed = if force_attract && dist < self.force_radius {
            Some(self.force_speed)
        } else if dist < self.attract_radius || player.auto_collect > 0.0 {
            Some(self.attract_speed)
        } else {
            None
        };
        if let Some(speed) = speed {
            // Never step past the player center
            let step = (speed * dt).min(dist);
            self.pos += to_player.normalize_or_zero() * step;
        }

        if circle_overlap(self.pos, self.radius, player.pos, player.radius) {
            return Some(self.collect());
        }
        None
    }

    /// Mark collected and hand over the value
    pub fn collect(&mut self) -> u32 {
        self.collected = true;
        self.value
    }
}

/// A treasure chest holding one reward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chest {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub opened: bool,
    pub collected: bool,
    /// Cosmetic pulse phase (radians)
    pub glow: f32,
}

impl Chest {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            radius: CHEST_RADIUS,
            opened: false,
            collected: false,
            glow: 0.0,
        }
    }

    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        player: &Player,
        rng: &mut R,
    ) -> Option<ChestReward> {
        self.glow = (self.glow + dt * 3.0) % std::f32::consts::TAU;

        if self.collected {
            return None;
        }
        if circle_overlap(self.pos, self.radius, player.pos, player.radius) {
            self.opened = true;
            self.collected = true;
            return Some(ChestReward::random(rng));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_orb_collected_exactly_once() {
        let player = Player::default();
        let mut orb = ExpOrb::new(1, Vec2::new(5.0, 0.0), 7);
        assert_eq!(orb.update(0.016, &player, false), Some(7));
        assert!(orb.collected);
        assert_eq!(orb.update(0.016, &player, false), None);
        assert_eq!(orb.update(0.016, &player, true), None);
    }

    #[test]
    fn test_orb_idle_outside_radius() {
        let player = Player::default();
        let start = Vec2::new(200.0, 0.0);
        let mut orb = ExpOrb::new(1, start, 5);
        assert_eq!(orb.update(0.1, &player, false), None);
        assert_eq!(orb.pos, start);
    }

    #[test]
    fn test_orb_normal_attraction() {
        let player = Player::default();
        let mut orb = ExpOrb::new(1, Vec2::new(90.0, 0.0), 5);
        orb.update(0.1, &player, false);
        assert!((orb.pos.x - (90.0 - ORB_ATTRACT_SPEED * 0.1)).abs() < 0.01);
    }

    #[test]
    fn test_orb_forced_attraction_wins() {
        let player = Player::default();
        let mut orb = ExpOrb::new(1, Vec2::new(90.0, 0.0), 5);
        orb.update(0.1, &player, true);
        assert!((orb.pos.x - (90.0 - ORB_FORCE_SPEED * 0.1)).abs() < 0.01);

        let mut far = ExpOrb::new(2, Vec2::new(250.0, 0.0), 5);
        far.update(0.1, &player, true);
        assert!((far.pos.x - (250.0 - ORB_FORCE_SPEED * 0.1)).abs() < 0.01);
    }

    #[test]
    fn test_orb_step_never_overshoots() {
        let player = Player::default();
        let mut orb = ExpOrb::new(1, Vec2::new(30.0, 0.0), 5);
        assert_eq!(orb.update(1.0, &player, false), Some(5));
        assert_eq!(orb.pos, Vec2::ZERO);
    }

    #[test]
    fn test_orb_auto_collect_any_distance() {
        let player = Player {
            auto_collect: 10.0,
            ..Default::default()
        };
        let mut orb = ExpOrb::new(1, Vec2::new(700.0, 0.0), 5);
        orb.update(0.1, &player, false);
        assert!(orb.pos.x < 700.0);
    }

    #[test]
    fn test_chest_yields_one_catalog_reward() {
        let mut rng = Pcg32::seed_from_u64(11);
        let player = Player::default();
        let mut chest = Chest::new(1, Vec2::new(10.0, 0.0));
        let reward = chest.update(0.016, &player, &mut rng);
        let reward = reward.map(|r| r.info().id);
        assert!(reward.is_some());
        let ids: Vec<_> = ChestReward::ALL.iter().map(|r| r.info().id).collect();
        assert!(ids.contains(&reward.unwrap_or_default()));
        assert!(chest.opened && chest.collected);
        assert_eq!(chest.update(0.016, &player, &mut rng), None);
    }

    #[test]
    fn test_chest_glows_while_closed() {
        let mut rng = Pcg32::seed_from_u64(11);
        let player = Player::default();
        let mut chest = Chest::new(1, Vec2::new(400.0, 0.0));
        assert_eq!(chest.update(0.5, &player, &mut rng), None);
        assert!(chest.glow > 0.0);
        assert!(!chest.opened);
    }
}
