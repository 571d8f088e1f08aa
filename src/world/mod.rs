//! Static reference data: classes, enemies and locations.
//!
//! The core never mutates these tables. They are built in or loaded from JSON
//! once, validated, and then shared read-only by every session.

mod data;

pub use data::*;

use crate::core::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Base stats for a playable class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTemplate {
    pub id: String,
    pub hp: u32,
    pub mp: u32,
    pub str: u32,
    pub dex: u32,
    pub con: u32,
    pub int: u32,
    pub wis: u32,
    pub cha: u32,
}

impl ClassTemplate {
    /// `attrs` is STR, DEX, CON, INT, WIS, CHA.
    pub fn new(id: &str, hp: u32, mp: u32, attrs: [u32; 6]) -> Self {
        let [str, dex, con, int, wis, cha] = attrs;
        Self {
            id: id.to_string(),
            hp,
            mp,
            str,
            dex,
            con,
            int,
            wis,
            cha,
        }
    }
}

/// Spawn stats for an enemy, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub damage: u32,
    pub exp: u32,
    pub emoji: String,
}

impl EnemyTemplate {
    pub fn new(name: &str, level: u32, hp: u32, damage: u32, exp: u32, emoji: &str) -> Self {
        Self {
            name: name.to_string(),
            level,
            hp,
            damage,
            exp,
            emoji: emoji.to_string(),
        }
    }
}

/// A place the player can travel to. No enemies means no combat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub enemies: Vec<String>,
}

impl Location {
    pub fn new(id: &str, name: &str, description: &str, enemies: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            enemies: enemies.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn is_safe(&self) -> bool {
        self.enemies.is_empty()
    }
}

/// The three reference tables consumed by a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    pub classes: Vec<ClassTemplate>,
    pub enemies: Vec<EnemyTemplate>,
    pub locations: Vec<Location>,
}

impl Default for GameData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GameData {
    pub fn builtin() -> Self {
        Self {
            classes: builtin_classes(),
            enemies: builtin_enemies(),
            locations: builtin_locations(),
        }
    }

    /// Parses and validates a JSON table bundle.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let data: GameData = serde_json::from_str(json)?;
        data.validate()?;
        debug!(
            classes = data.classes.len(),
            enemies = data.enemies.len(),
            locations = data.locations.len(),
            "loaded game data"
        );
        Ok(data)
    }

    /// Checks the tables before a session may use them.
    ///
    /// Classes and locations must be non-empty, ids and names unique, every
    /// class must produce a living character with positive attributes, every
    /// enemy must have hp, and every location enemy must exist.
    pub fn validate(&self) -> GameResult<()> {
        if self.classes.is_empty() {
            return Err(GameError::InvalidData("no classes defined".to_string()));
        }
        if self.locations.is_empty() {
            return Err(GameError::InvalidData("no locations defined".to_string()));
        }

        let mut class_ids = HashSet::new();
        for class in &self.classes {
            if !class_ids.insert(class.id.as_str()) {
                return Err(GameError::InvalidData(format!(
                    "duplicate class '{}'",
                    class.id
                )));
            }
            let attrs = [
                class.str, class.dex, class.con, class.int, class.wis, class.cha,
            ];
            if class.hp == 0 || attrs.contains(&0) {
                return Err(GameError::InvalidData(format!(
                    "class '{}' needs positive hp and attributes",
                    class.id
                )));
            }
        }

        let mut enemy_names = HashSet::new();
        for enemy in &self.enemies {
            if !enemy_names.insert(enemy.name.as_str()) {
                return Err(GameError::InvalidData(format!(
                    "duplicate enemy '{}'",
                    enemy.name
                )));
            }
            if enemy.hp == 0 {
                return Err(GameError::InvalidData(format!(
                    "enemy '{}' has no hp",
                    enemy.name
                )));
            }
        }

        let mut location_ids = HashSet::new();
        for location in &self.locations {
            if !location_ids.insert(location.id.as_str()) {
                return Err(GameError::InvalidData(format!(
                    "duplicate location '{}'",
                    location.id
                )));
            }
            for name in &location.enemies {
                self.enemy(name)?;
            }
        }
        Ok(())
    }

    pub fn class(&self, id: &str) -> GameResult<&ClassTemplate> {
        self.classes
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| GameError::UnknownClass(id.to_string()))
    }

    pub fn first_class(&self) -> Option<&ClassTemplate> {
        self.classes.first()
    }

    pub fn enemy(&self, name: &str) -> GameResult<&EnemyTemplate> {
        self.enemies
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| GameError::UnknownEnemy(name.to_string()))
    }

    pub fn location(&self, id: &str) -> GameResult<&Location> {
        self.locations
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| GameError::InvalidLocation(id.to_string()))
    }
}
