//! The player character and its combat-facing operations.

use super::attributes::{AttributeType, Attributes};
use super::inventory::{Equipment, Inventory};
use crate::combat::math::{self, AttackResult};
use crate::core::constants::*;
use crate::core::dice::Dice;
use crate::core::error::GameResult;
use crate::world::GameData;
use serde::{Deserialize, Serialize};

/// Reported when a character gains a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub new_level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub class_id: String,
    pub level: u32,
    pub experience: u32,
    pub exp_to_next_level: u32,
    pub hp: u32,
    pub max_hp: u32,
    /// Signed: skills may overdraw mana unless the session clamps it.
    pub mp: i32,
    pub max_mp: i32,
    pub attributes: Attributes,
    pub gold: u32,
    pub inventory: Inventory,
    pub equipment: Equipment,
}

impl Character {
    /// Creates a level 1 character from the class table.
    pub fn create(name: &str, class_id: &str, data: &GameData) -> GameResult<Self> {
        let template = data.class(class_id)?;
        let max_mp = i32::try_from(template.mp).unwrap_or(i32::MAX);

        Ok(Self {
            name: name.to_string(),
            class_id: template.id.clone(),
            level: STARTING_LEVEL,
            experience: 0,
            exp_to_next_level: STARTING_EXP_TO_LEVEL,
            hp: template.hp,
            max_hp: template.hp,
            mp: max_mp,
            max_mp,
            attributes: Attributes::from_class(template),
            gold: STARTING_GOLD,
            inventory: Inventory::new(),
            equipment: Equipment::new(),
        })
    }

    pub fn is_alive(&self) -> bool {
        math::is_alive(self.hp)
    }

    /// Applies a hit after constitution mitigation and returns what landed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = math::calculate_damage_taken(amount, self.attributes.constitution());
        self.hp = math::apply_damage(self.hp, actual);
        actual
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn restore(&mut self) {
        self.hp = self.max_hp;
        self.mp = self.max_mp;
    }

    /// Spends mana. With `clamp` the pool bottoms out at zero.
    pub fn spend_mp(&mut self, cost: i32, clamp: bool) {
        self.mp = self.mp.saturating_sub(cost);
        if clamp {
            self.mp = self.mp.max(0);
        }
    }

    /// Adds experience and levels up at most once, however large the gain.
    pub fn gain_experience(&mut self, amount: u32) -> Option<LevelUp> {
        self.experience = self.experience.saturating_add(amount);
        if self.experience >= self.exp_to_next_level {
            Some(self.level_up())
        } else {
            None
        }
    }

    /// Leftover experience is discarded.
    pub fn level_up(&mut self) -> LevelUp {
        self.level = self.level.saturating_add(1);
        self.experience = 0;
        self.exp_to_next_level = (self.exp_to_next_level as f64 * EXP_CURVE_MULTIPLIER) as u32;
        self.max_hp = self.max_hp.saturating_add(LEVEL_UP_MAX_HP);
        self.max_mp = self.max_mp.saturating_add(LEVEL_UP_MAX_MP);
        self.restore();
        self.attributes.raise(AttributeType::Strength, LEVEL_UP_STR);
        self.attributes.raise(AttributeType::Dexterity, LEVEL_UP_DEX);
        self.attributes.raise(AttributeType::Constitution, LEVEL_UP_CON);

        LevelUp {
            new_level: self.level,
        }
    }

    pub fn calculate_damage(&self, dice: &mut dyn Dice) -> AttackResult {
        math::roll_attack(
            self.attributes.strength(),
            self.attributes.dexterity(),
            dice,
        )
    }

    pub fn crit_chance(&self) -> f64 {
        math::crit_chance(self.attributes.dexterity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::ScriptedDice;
    use crate::core::error::GameError;

    fn warrior() -> Character {
        Character::create("Aria", "warrior", &GameData::builtin()).unwrap()
    }

    #[test]
    fn test_create_from_class() {
        let c = warrior();
        assert_eq!(c.name, "Aria");
        assert_eq!(c.class_id, "warrior");
        assert_eq!(c.level, 1);
        assert_eq!(c.experience, 0);
        assert_eq!(c.exp_to_next_level, 100);
        assert_eq!((c.hp, c.max_hp), (120, 120));
        assert_eq!((c.mp, c.max_mp), (30, 30));
        assert_eq!(c.attributes.strength(), 18);
        assert_eq!(c.gold, 100);
        assert!(c.inventory.is_empty());
        assert!(c.equipment.is_empty());
    }

    #[test]
    fn test_create_unknown_class_fails() {
        let err = Character::create("Aria", "bard", &GameData::builtin()).unwrap_err();
        assert!(matches!(err, GameError::UnknownClass(id) if id == "bard"));
    }

    #[test]
    fn test_take_damage_mitigated_by_con() {
        // Warrior CON 16 -> mitigation 3
        let mut c = warrior();
        assert_eq!(c.take_damage(10), 7);
        assert_eq!(c.hp, 113);
    }

    #[test]
    fn test_take_damage_minimum_one() {
        let mut c = warrior();
        assert_eq!(c.take_damage(0), 1);
        assert_eq!(c.take_damage(2), 1);
        assert_eq!(c.hp, 118);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut c = warrior();
        c.hp = 2;
        assert_eq!(c.take_damage(50), 47);
        assert_eq!(c.hp, 0);
        assert!(!c.is_alive());
        c.take_damage(50);
        assert_eq!(c.hp, 0);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut c = warrior();
        c.hp = 100;
        c.heal(10);
        assert_eq!(c.hp, 110);
        c.heal(30);
        assert_eq!(c.hp, 120);
        c.heal(u32::MAX);
        assert_eq!(c.hp, 120);
    }

    #[test]
    fn test_level_up() {
        let mut c = warrior();
        c.hp = 5;
        c.mp = 0;
        c.experience = 40;

        let level_up = c.level_up();

        assert_eq!(level_up.new_level, 2);
        assert_eq!(c.level, 2);
        assert_eq!(c.experience, 0);
        assert_eq!(c.exp_to_next_level, (100.0 * 1.15_f64) as u32);
        assert!(c.exp_to_next_level > 100);
        assert_eq!((c.hp, c.max_hp), (130, 130));
        assert_eq!((c.mp, c.max_mp), (35, 35));
        assert_eq!(c.attributes.strength(), 20);
        assert_eq!(c.attributes.dexterity(), 11);
        assert_eq!(c.attributes.constitution(), 17);
        assert_eq!(c.attributes.intelligence(), 8);
    }

    #[test]
    fn test_gain_experience_below_threshold() {
        let mut c = warrior();
        assert_eq!(c.gain_experience(99), None);
        assert_eq!(c.experience, 99);
        assert_eq!(c.level, 1);
    }

    #[test]
    fn test_gain_experience_levels_once_only() {
        let mut c = warrior();
        let level_up = c.gain_experience(500);
        assert_eq!(level_up, Some(LevelUp { new_level: 2 }));
        assert_eq!(c.level, 2);
        assert_eq!(c.experience, 0);
    }

    #[test]
    fn test_spend_mp_unclamped_goes_negative() {
        let mut c = warrior();
        c.mp = 10;
        c.spend_mp(15, false);
        assert_eq!(c.mp, -5);
    }

    #[test]
    fn test_spend_mp_clamped_stops_at_zero() {
        let mut c = warrior();
        c.mp = 10;
        c.spend_mp(15, true);
        assert_eq!(c.mp, 0);
    }

    #[test]
    fn test_calculate_damage_uses_strength() {
        let c = warrior();
        let mut dice = ScriptedDice::new([2], [false]);
        let attack = c.calculate_damage(&mut dice);
        assert_eq!(attack.damage, 20.0);
        assert!(!attack.is_crit);
    }

    #[test]
    fn test_restore_refills_both_pools() {
        let mut c = warrior();
        c.hp = 1;
        c.mp = -5;
        c.restore();
        assert_eq!(c.hp, c.max_hp);
        assert_eq!(c.mp, c.max_mp);
    }

    #[test]
    fn test_huge_class_stats_saturate() {
        let mut data = GameData::builtin();
        data.classes.push(crate::world::ClassTemplate::new(
            "titan",
            u32::MAX,
            u32::MAX,
            [u32::MAX; 6],
        ));
        let mut c = Character::create("Atlas", "titan", &data).unwrap();
        assert_eq!(c.max_mp, i32::MAX);

        c.level_up();
        assert_eq!(c.max_hp, u32::MAX);
        assert_eq!(c.max_mp, i32::MAX);
        assert_eq!(c.attributes.strength(), u32::MAX);

        c.mp = i32::MIN;
        c.spend_mp(15, false);
        assert_eq!(c.mp, i32::MIN);
    }
}
