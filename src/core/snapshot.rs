//! Read-only views of a session for the presentation layer.

use super::game_state::Screen;
use crate::character::Character;
use crate::combat::{CombatEngine, CombatPhase};
use crate::world::Location;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub screen: Screen,
    pub player: Option<PlayerSnapshot>,
    pub location: LocationSnapshot,
    pub combat: Option<CombatSnapshot>,
    pub awaiting_resolution: bool,
    /// Number of log entries so far.
    pub log_len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub class_id: String,
    pub level: u32,
    pub experience: u32,
    pub exp_to_next_level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: i32,
    pub max_mp: i32,
    pub str: u32,
    pub dex: u32,
    pub con: u32,
    pub int: u32,
    pub wis: u32,
    pub cha: u32,
    pub gold: u32,
    pub item_count: usize,
}

impl PlayerSnapshot {
    pub fn from_character(c: &Character) -> Self {
        Self {
            name: c.name.clone(),
            class_id: c.class_id.clone(),
            level: c.level,
            experience: c.experience,
            exp_to_next_level: c.exp_to_next_level,
            hp: c.hp,
            max_hp: c.max_hp,
            mp: c.mp,
            max_mp: c.max_mp,
            str: c.attributes.strength(),
            dex: c.attributes.dexterity(),
            con: c.attributes.constitution(),
            int: c.attributes.intelligence(),
            wis: c.attributes.wisdom(),
            cha: c.attributes.charisma(),
            gold: c.gold,
            item_count: c.inventory.len(),
        }
    }

    pub fn hp_fraction(&self) -> f64 {
        fraction(self.hp as f64, self.max_hp as f64)
    }

    pub fn mp_fraction(&self) -> f64 {
        fraction(self.mp as f64, self.max_mp as f64)
    }

    pub fn exp_fraction(&self) -> f64 {
        fraction(self.experience as f64, self.exp_to_next_level as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSnapshot {
    pub id: String,
    pub name: String,
    pub description: String,
    pub safe: bool,
}

impl LocationSnapshot {
    pub fn from_location(location: &Location) -> Self {
        Self {
            id: location.id.clone(),
            name: location.name.clone(),
            description: location.description.clone(),
            safe: location.is_safe(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombatSnapshot {
    pub phase: CombatPhase,
    pub enemy_name: String,
    pub enemy_emoji: String,
    pub enemy_level: u32,
    pub enemy_hp: f64,
    /// Floored for display.
    pub enemy_hp_shown: u32,
    pub enemy_max_hp: u32,
}

impl CombatSnapshot {
    /// `None` once the engine has no enemy, which is also when combat is over.
    pub fn from_engine(engine: &CombatEngine) -> Option<Self> {
        let enemy = engine.enemy()?;
        Some(Self {
            phase: engine.phase(),
            enemy_name: enemy.name.clone(),
            enemy_emoji: enemy.emoji.clone(),
            enemy_level: enemy.level,
            enemy_hp: enemy.hp,
            enemy_hp_shown: enemy.displayed_hp(),
            enemy_max_hp: enemy.max_hp,
        })
    }

    pub fn enemy_hp_fraction(&self) -> f64 {
        fraction(self.enemy_hp, self.enemy_max_hp as f64)
    }
}

/// `value / max` clamped to `[0, 1]`; zero when `max` is zero.
fn fraction(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}
