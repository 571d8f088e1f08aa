//! Combat math shared by the character model, the engine and the simulator.
//!
//! These functions have no side effects beyond consuming dice rolls.

use crate::core::constants::*;
use crate::core::dice::Dice;

/// Result of a player attack roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackResult {
    /// Exact damage, crit multiplier included. Only the log floors it.
    pub damage: f64,
    pub is_crit: bool,
}

impl AttackResult {
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            damage: self.damage * factor,
            ..self
        }
    }

    /// Damage as the player sees it.
    pub fn reported(&self) -> u32 {
        floor_damage(self.damage)
    }
}

/// Crit probability from dexterity: 1% per point, capped at 30%.
pub fn crit_chance(dex: u32) -> f64 {
    (dex as f64 / CRIT_DEX_DIVISOR).min(CRIT_CHANCE_CAP)
}

pub fn roll_crit(chance: f64, dice: &mut dyn Dice) -> bool {
    dice.chance(chance)
}

/// Strength plus a d10 (0..=9), then a crit check.
pub fn roll_attack(strength: u32, dex: u32, dice: &mut dyn Dice) -> AttackResult {
    let base = strength.saturating_add(dice.below(ATTACK_ROLL_SIDES));
    let is_crit = roll_crit(crit_chance(dex), dice);
    attack_from_base(base, is_crit)
}

pub fn attack_from_base(base: u32, is_crit: bool) -> AttackResult {
    let damage = if is_crit {
        base as f64 * CRIT_MULTIPLIER
    } else {
        base as f64
    };
    AttackResult { damage, is_crit }
}

/// Flat reduction granted by constitution.
pub fn mitigation(con: u32) -> u32 {
    con / MITIGATION_CON_DIVISOR
}

/// Damage that lands after mitigation. A hit always does at least 1.
pub fn calculate_damage_taken(raw_damage: u32, con: u32) -> u32 {
    raw_damage
        .saturating_sub(mitigation(con))
        .max(MIN_DAMAGE_TAKEN)
}

/// Enemy template damage plus 0..=4.
pub fn roll_enemy_damage(base_damage: u32, dice: &mut dyn Dice) -> u32 {
    base_damage.saturating_add(dice.below(ENEMY_ATTACK_ROLL_SIDES))
}

pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

pub fn floor_damage(damage: f64) -> u32 {
    damage.max(0.0).floor() as u32
}

pub fn is_alive(current_hp: u32) -> bool {
    current_hp > 0
}
