//! Session configuration.

use super::constants::*;
use super::error::GameResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables a host may override when starting a session.
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay before the enemy answers a player action.
    pub enemy_turn_delay_ms: u64,

    /// Delay between the player's defeat and the combat being torn down.
    pub defeat_delay_ms: u64,

    /// When false, a skill used without enough mana drives mp negative.
    pub clamp_mp_on_skill: bool,

    pub skill_mp_cost: i32,

    /// Class used when character creation names an unknown class.
    /// `None` means the first entry of the class table.
    pub fallback_class: Option<String>,

    pub default_player_name: String,
    pub starting_location: String,
    pub starting_gold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enemy_turn_delay_ms: ENEMY_TURN_DELAY_MS,
            defeat_delay_ms: DEFEAT_FINALIZE_DELAY_MS,
            clamp_mp_on_skill: false,
            skill_mp_cost: SKILL_MP_COST,
            fallback_class: None,
            default_player_name: DEFAULT_PLAYER_NAME.to_string(),
            starting_location: STARTING_LOCATION.to_string(),
            starting_gold: STARTING_GOLD,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Config with clamped mana, for hosts that treat negative mp as a bug.
    pub fn clamped_mana() -> Self {
        Self {
            clamp_mp_on_skill: true,
            ..Default::default()
        }
    }

    pub fn enemy_turn_delay(&self) -> Duration {
        Duration::from_millis(self.enemy_turn_delay_ms)
    }

    pub fn defeat_delay(&self) -> Duration {
        Duration::from_millis(self.defeat_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_source_timing() {
        let config = GameConfig::default();
        assert_eq!(config.enemy_turn_delay(), Duration::from_millis(500));
        assert_eq!(config.defeat_delay(), Duration::from_millis(2000));
        assert!(!config.clamp_mp_on_skill);
        assert_eq!(config.skill_mp_cost, 15);
        assert_eq!(config.starting_gold, 100);
        assert_eq!(config.starting_location, "village");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{"clamp_mp_on_skill": true}"#).unwrap();
        assert!(config.clamp_mp_on_skill);
        assert_eq!(config.enemy_turn_delay_ms, 500);
        assert_eq!(config.default_player_name, "Hero");
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(GameConfig::from_json("{not json").is_err());
    }
}
