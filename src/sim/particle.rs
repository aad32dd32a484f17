//! Cosmetic particles (not gameplay-affecting)

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::random_angle;

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0xRRGGBB
    pub color: u32,
    pub size: f32,
    /// Seconds remaining
    pub life: f32,
    pub max_life: f32,
}

impl Particle {
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.life -= dt;
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}

/// Radial burst of `count` particles around `origin`
pub fn burst<R: Rng + ?Sized>(rng: &mut R, origin: Vec2, color: u32, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let theta = random_angle(rng);
            let speed: f32 = rng.random_range(60.0..180.0);
            let life: f32 = rng.random_range(0.4..0.9);
            Particle {
                pos: origin,
                vel: Vec2::new(theta.cos(), theta.sin()) * speed,
                color,
                size: rng.random_range(2.0..5.0),
                life,
                max_life: life,
            }
        })
        .collect()
}
