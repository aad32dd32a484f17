//! Collision helpers for circular bodies inside a circular arena
//!
//! Every body in Ring Survivor is a circle, so contact tests reduce to
//! center distance against summed radii. The arena wall is the one
//! concave boundary and is handled by radial clamping.

use glam::Vec2;

use super::player::WeaponSlot;
use crate::consts::WEAPON_HIT_RADIUS;
use crate::{cartesian_to_polar, circle_overlap, polar_to_cartesian};

/// Check whether a circle pokes out past the arena wall
#[inline]
pub fn outside_arena(pos: Vec2, radius: f32, arena_radius: f32) -> bool {
    pos.length() + radius > arena_radius
}

/// Clamp a circle back inside the arena wall
///
/// Keeps the polar angle and places the center at `arena_radius - radius`.
/// Circles already inside are returned untouched.
pub fn confine_to_arena(pos: Vec2, radius: f32, arena_radius: f32) -> Vec2 {
    if !outside_arena(pos, radius, arena_radius) {
        return pos;
    }
    let (_, theta) = cartesian_to_polar(pos);
    polar_to_cartesian((arena_radius - radius).max(0.0), theta)
}

/// Count the orbiting weapons currently overlapping a body
pub fn weapon_hits(weapons: &[WeaponSlot], pos: Vec2, radius: f32) -> usize {
    weapons
        .iter()
        .filter(|w| circle_overlap(w.pos, WEAPON_HIT_RADIUS, pos, radius))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_inside_is_untouched() {
        let pos = Vec2::new(100.0, -50.0);
        assert_eq!(confine_to_arena(pos, 20.0, 800.0), pos);
    }

    #[test]
    fn test_clamp_preserves_angle() {
        let pos = Vec2::new(0.0, 900.0);
        let clamped = confine_to_arena(pos, 20.0, 800.0);
        assert!(clamped.x.abs() < 0.001);
        assert!((clamped.y - 780.0).abs() < 0.001);
    }

    #[test]
    fn test_weapon_hits_counts_each_weapon() {
        let weapons = [
            WeaponSlot { pos: Vec2::new(10.0, 0.0), angle: 0.0 },
            WeaponSlot { pos: Vec2::new(12.0, 0.0), angle: 0.0 },
            WeaponSlot { pos: Vec2::new(-300.0, 0.0), angle: 180.0 },
        ];
        assert_eq!(weapon_hits(&weapons, Vec2::new(20.0, 0.0), 15.0), 2);
    }

    proptest! {
        #[test]
        fn confined_circle_never_leaves_arena(
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
            radius in 1.0f32..50.0,
        ) {
            let arena = 800.0;
            let p = confine_to_arena(Vec2::new(x, y), radius, arena);
            prop_assert!(p.length() <= arena - radius + 0.01);
        }
    }
}
