//! Level-up skills and chest rewards
//!
//! Both catalogs are closed enums; the descriptor tables are what the
//! overlay shows, `apply` is what the sim does.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::consts::*;

/// Grouping shown on reward cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardCategory {
    Weapon,
    Survival,
    Mobility,
    Utility,
}

/// Immutable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: RewardCategory,
    pub description: &'static str,
}

/// Level-up skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    ExtraWeapon,
    DamageUp,
    RangeUp,
    SpinUp,
    VitalityUp,
    SwiftUp,
    ArmorUp,
    Heal,
    Magnet,
}

impl Skill {
    pub const ALL: [Skill; 9] = [
        Skill::ExtraWeapon,
        Skill::DamageUp,
        Skill::RangeUp,
        Skill::SpinUp,
        Skill::VitalityUp,
        Skill::SwiftUp,
        Skill::ArmorUp,
        Skill::Heal,
        Skill::Magnet,
    ];

    pub fn info(self) -> RewardInfo {
        use RewardCategory::*;
        let (id, name, category, description) = match self {
            Skill::ExtraWeapon => ("extra_weapon", "Extra Blade", Weapon, "+1 orbiting weapon"),
            Skill::DamageUp => ("damage_up", "Honed Edge", Weapon, "+10% weapon damage"),
            Skill::RangeUp => ("range_up", "Wide Orbit", Weapon, "+10 orbit radius"),
            Skill::SpinUp => ("spin_up", "Whirlwind", Weapon, "+25% rotation speed"),
            Skill::VitalityUp => ("vitality_up", "Vitality", Survival, "+20 max HP"),
            Skill::SwiftUp => ("swift_up", "Swift Feet", Mobility, "+5% move speed"),
            Skill::ArmorUp => ("armor_up", "Iron Skin", Survival, "+10% damage reduction"),
            Skill::Heal => ("heal", "Second Wind", Survival, "Restore 40 HP"),
            Skill::Magnet => ("magnet", "Vacuum", Utility, "Collect every orb on the field"),
        };
        RewardInfo {
            id,
            name,
            category,
            description,
        }
    }

    /// Draw `n` distinct skills (shuffle-and-take)
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Skill> {
        let mut pool = Self::ALL.to_vec();
        pool.shuffle(rng);
        pool.truncate(n);
        pool
    }

    /// Mutate player stats
    ///
    /// `Magnet` needs the orb field and is resolved by the caller; here
    /// it only returns true so the caller knows to sweep.
    pub fn apply(self, player: &mut Player) -> bool {
        match self {
            Skill::ExtraWeapon => player.add_weapons(1),
            Skill::DamageUp => player.weapon_damage *= 1.1,
            Skill::RangeUp => {
                player.weapon_radius = (player.weapon_radius + 10.0).min(MAX_WEAPON_RADIUS)
            }
            Skill::SpinUp => player.rotate_speed *= 1.25,
            Skill::VitalityUp => {
                player.max_hp += 20.0;
                player.heal(20.0);
            }
            Skill::SwiftUp => player.speed = (player.speed * 1.05).min(PLAYER_MAX_SPEED),
            Skill::ArmorUp => player.add_defense(0.1),
            Skill::Heal => player.heal(40.0),
            Skill::Magnet => return true,
        }
        false
    }
}

/// Chest reward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChestReward {
    MultiWeapon,
    SharpUpgrade,
    MagnetBuff,
    SpeedBoost,
    WeaponSkin,
}

impl ChestReward {
    pub const ALL: [ChestReward; 5] = [
        ChestReward::MultiWeapon,
        ChestReward::SharpUpgrade,
        ChestReward::MagnetBuff,
        ChestReward::SpeedBoost,
        ChestReward::WeaponSkin,
    ];

    pub fn info(self) -> RewardInfo {
        use RewardCategory::*;
        let (id, name, category, description) = match self {
            ChestReward::MultiWeapon => {
                ("multi_weapon", "Blade Storm", Weapon, "+4 orbiting weapons")
            }
            ChestReward::SharpUpgrade => {
                ("sharp_upgrade", "Whetstone", Weapon, "+10 weapon damage")
            }
            ChestReward::MagnetBuff => {
                ("magnet_buff", "Lodestone", Utility, "Orbs fly to you for 30s")
            }
            ChestReward::SpeedBoost => {
                ("speed_boost", "Tailwind", Mobility, "x1.5 move speed for 10s")
            }
            ChestReward::WeaponSkin => ("weapon_skin", "New Look", Utility, "Reforge your blades"),
        };
        RewardInfo {
            id,
            name,
            category,
            description,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> ChestReward {
        *Self::ALL.choose(rng).unwrap_or(&ChestReward::SharpUpgrade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashSet;

    #[test]
    fn test_draw_is_without_replacement() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..50 {
            let picks = Skill::draw(&mut rng, SKILL_CHOICES);
            assert_eq!(picks.len(), 3);
            let unique: HashSet<_> = picks.iter().collect();
            assert_eq!(unique.len(), 3);
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let skills: HashSet<_> = Skill::ALL.iter().map(|s| s.info().id).collect();
        assert_eq!(skills.len(), 9);
        let chests: HashSet<_> = ChestReward::ALL.iter().map(|c| c.info().id).collect();
        assert_eq!(chests.len(), 5);
    }

    #[test]
    fn test_skill_caps() {
        let mut p = Player::default();
        for _ in 0..20 {
            Skill::RangeUp.apply(&mut p);
            Skill::SwiftUp.apply(&mut p);
            Skill::ArmorUp.apply(&mut p);
            Skill::ExtraWeapon.apply(&mut p);
        }
        assert_eq!(p.weapon_radius, MAX_WEAPON_RADIUS);
        assert_eq!(p.speed, PLAYER_MAX_SPEED);
        assert_eq!(p.defense_rate, MAX_DEFENSE_RATE);
        assert_eq!(p.weapon_count, MAX_WEAPON_COUNT);
    }

    #[test]
    fn test_vitality_and_heal() {
        let mut p = Player::default();
        p.hp = 50.0;
        Skill::VitalityUp.apply(&mut p);
        assert_eq!(p.max_hp, 120.0);
        assert_eq!(p.hp, 70.0);
        Skill::Heal.apply(&mut p);
        assert_eq!(p.hp, 110.0);
        Skill::Heal.apply(&mut p);
        assert_eq!(p.hp, 120.0);
    }

    #[test]
    fn test_multiplicative_skills() {
        let mut p = Player::default();
        Skill::DamageUp.apply(&mut p);
        assert!((p.weapon_damage - 11.0).abs() < 0.001);
        Skill::SpinUp.apply(&mut p);
        assert!((p.rotate_speed - 225.0).abs() < 0.001);
        assert!(Skill::Magnet.apply(&mut p));
    }
}
