//! Level-up choices and reward application

use rand::Rng;

use super::rewards::{ChestReward, Skill};
use super::schedule::DeferredEffect;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

impl GameState {
    /// Freeze gameplay and offer a fresh set of skills
    pub fn enter_level_up(&mut self) {
        self.skill_choices = Skill::draw(&mut self.rng, SKILL_CHOICES);
        self.choice_timer = self.config.skill_auto_select;
        self.phase = GamePhase::LevelUp;
        log::info!(
            "Level {} reached, offering {:?}",
            self.player.level,
            self.skill_choices
        );
        self.push_event(GameEvent::LevelUp {
            level: self.player.level,
            choices: self.skill_choices.clone(),
        });
    }

    /// Apply the offered skill at `index` and resume play
    ///
    /// Only one selection is accepted per level-up; calls outside the
    /// `LevelUp` phase or with an out-of-range index are ignored.
    pub fn select_skill(&mut self, index: usize) -> Option<Skill> {
        self.choose_skill(index, false)
    }

    fn choose_skill(&mut self, index: usize, auto: bool) -> Option<Skill> {
        if self.phase != GamePhase::LevelUp {
            log::debug!("Ignoring skill selection outside level-up");
            return None;
        }
        let skill = *self.skill_choices.get(index)?;

        if skill.apply(&mut self.player) {
            self.collect_all_orbs();
        }
        self.skill_choices.clear();
        self.choice_timer = 0.0;
        self.phase = GamePhase::Playing;
        log::info!("Skill chosen: {} (auto: {})", skill.info().id, auto);
        self.push_event(GameEvent::SkillChosen { skill, auto });
        Some(skill)
    }

    /// Count down a pending choice, picking at random when time runs out
    pub fn tick_level_up(&mut self, dt: f32) {
        if self.phase != GamePhase::LevelUp {
            return;
        }
        self.choice_timer -= dt;
        if self.choice_timer <= 0.0 && !self.skill_choices.is_empty() {
            let index = self.rng.random_range(0..self.skill_choices.len());
            self.choose_skill(index, true);
        }
    }

    /// Sweep every orb on the field straight into the player
    pub fn collect_all_orbs(&mut self) -> u32 {
        let mut total = 0;
        for orb in self.orbs.iter_mut().filter(|o| !o.collected) {
            total += orb.collect();
        }
        self.orbs.retain(|o| !o.collected);
        self.player.gain_exp(total);
        total
    }

    pub fn apply_chest_reward(&mut self, reward: ChestReward) {
        let player = &mut self.player;
        match reward {
            ChestReward::MultiWeapon => player.add_weapons(4),
            ChestReward::SharpUpgrade => player.weapon_damage += 10.0,
            ChestReward::MagnetBuff => player.auto_collect = AUTO_COLLECT_TIME,
            ChestReward::SpeedBoost => {
                player.speed_buff = SPEED_BUFF;
                self.speed_buff_generation = self.speed_buff_generation.wrapping_add(1);
                self.scheduler.schedule(
                    SPEED_BUFF_TIME,
                    self.session,
                    DeferredEffect::SpeedBuffExpire {
                        generation: self.speed_buff_generation,
                    },
                );
            }
            ChestReward::WeaponSkin => {
                player.weapon_skin = self.rng.random_range(0..WEAPON_SKIN_COUNT);
            }
        }
        log::debug!("Chest reward applied: {}", reward.info().id);
        self.push_event(GameEvent::ChestOpened { reward });
    }
}
