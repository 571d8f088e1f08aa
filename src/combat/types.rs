use crate::core::error::GameError;
use crate::world::EnemyTemplate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::math::floor_damage;

/// A live enemy spawned from a template for one encounter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyInstance {
    pub name: String,
    pub level: u32,
    /// Exact hit points. Player damage can be fractional.
    pub hp: f64,
    pub max_hp: u32,
    pub damage: u32,
    pub exp: u32,
    pub emoji: String,
}

impl EnemyInstance {
    pub fn spawn(template: &EnemyTemplate) -> Self {
        Self {
            name: template.name.clone(),
            level: template.level,
            hp: template.hp as f64,
            max_hp: template.hp,
            damage: template.damage,
            exp: template.exp,
            emoji: template.emoji.clone(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    pub fn take_damage(&mut self, amount: f64) {
        self.hp -= amount;
    }

    pub fn displayed_hp(&self) -> u32 {
        floor_damage(self.hp)
    }

    pub fn gold_reward(&self) -> u32 {
        self.level
            .saturating_mul(crate::core::constants::GOLD_PER_ENEMY_LEVEL)
    }
}

/// The four things a player can do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerAction {
    Attack,
    Skill,
    Defend,
    Potion,
}

impl PlayerAction {
    pub fn all() -> [PlayerAction; 4] {
        [
            PlayerAction::Attack,
            PlayerAction::Skill,
            PlayerAction::Defend,
            PlayerAction::Potion,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            PlayerAction::Attack => "attack",
            PlayerAction::Skill => "skill",
            PlayerAction::Defend => "defend",
            PlayerAction::Potion => "potion",
        }
    }
}

impl FromStr for PlayerAction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attack" => Ok(PlayerAction::Attack),
            "skill" => Ok(PlayerAction::Skill),
            "defend" => Ok(PlayerAction::Defend),
            "potion" => Ok(PlayerAction::Potion),
            other => Err(GameError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Where the combat state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CombatPhase {
    #[default]
    Idle,
    PlayerTurn,
    EnemyTurn,
    Won,
    Lost,
}

impl CombatPhase {
    pub fn is_active(&self) -> bool {
        !matches!(self, CombatPhase::Idle)
    }
}

/// Something that happened in combat. Each event renders to one log line.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    CombatStarted {
        enemy_name: String,
    },
    PlayerAttack {
        player_name: String,
        damage: f64,
        was_crit: bool,
    },
    PlayerSkill {
        player_name: String,
        damage: f64,
        was_crit: bool,
        mp_cost: i32,
    },
    PlayerDefend {
        player_name: String,
        healed: u32,
    },
    PlayerPotion {
        player_name: String,
        healed: u32,
    },
    EnemyAttack {
        enemy_name: String,
        damage: u32,
    },
    EnemyDefeated {
        enemy_name: String,
    },
    LevelUp {
        player_name: String,
        level: u32,
    },
    RewardsGained {
        exp: u32,
        gold: u32,
    },
    PlayerDefeated {
        player_name: String,
    },
    CombatEnded,
}

impl CombatEvent {
    /// The log line for this event, or `None` for bookkeeping events.
    pub fn message(&self) -> Option<String> {
        let line = match self {
            CombatEvent::CombatStarted { enemy_name } => {
                format!("Combat started! Facing {}...", enemy_name)
            }
            CombatEvent::PlayerAttack {
                player_name,
                damage,
                ..
            } => format!(
                "{} attacks for {} damage!",
                player_name,
                floor_damage(*damage)
            ),
            CombatEvent::PlayerSkill {
                player_name,
                damage,
                ..
            } => format!(
                "{} uses special skill for {} damage!",
                player_name,
                floor_damage(*damage)
            ),
            CombatEvent::PlayerDefend { player_name, .. } => {
                format!("{} takes a defensive stance!", player_name)
            }
            CombatEvent::PlayerPotion { player_name, .. } => {
                format!("{} drinks a potion!", player_name)
            }
            CombatEvent::EnemyAttack { enemy_name, damage } => {
                format!("{} attacks for {} damage!", enemy_name, damage)
            }
            CombatEvent::EnemyDefeated { enemy_name } => format!("{} defeated!", enemy_name),
            CombatEvent::LevelUp { player_name, level } => {
                format!("{} reached level {}!", player_name, level)
            }
            CombatEvent::RewardsGained { exp, gold } => {
                format!("Gained {} experience and {} gold!", exp, gold)
            }
            CombatEvent::PlayerDefeated { player_name } => {
                format!("{} was defeated! Restarting...", player_name)
            }
            CombatEvent::CombatEnded => return None,
        };
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::builtin_enemies;

    fn goblin() -> EnemyInstance {
        EnemyInstance::spawn(&builtin_enemies()[0])
    }

    #[test]
    fn test_spawn_copies_template() {
        let enemy = goblin();
        assert_eq!(enemy.name, "Goblin");
        assert_eq!(enemy.hp, 20.0);
        assert_eq!(enemy.max_hp, 20);
        assert_eq!(enemy.damage, 3);
        assert_eq!(enemy.exp, 50);
        assert!(enemy.is_alive());
    }

    #[test]
    fn test_enemy_takes_fractional_damage() {
        let mut enemy = goblin();
        enemy.take_damage(7.5);
        assert_eq!(enemy.hp, 12.5);
        assert_eq!(enemy.displayed_hp(), 12);

        enemy.take_damage(12.5);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_enemy_hp_may_go_negative() {
        let mut enemy = goblin();
        enemy.take_damage(25.0);
        assert_eq!(enemy.hp, -5.0);
        assert_eq!(enemy.displayed_hp(), 0);
    }

    #[test]
    fn test_gold_reward_scales_with_level() {
        let orc = EnemyInstance::spawn(&builtin_enemies()[1]);
        assert_eq!(orc.gold_reward(), 30);
    }

    #[test]
    fn test_gold_reward_saturates_for_huge_levels() {
        let template = EnemyTemplate::new("Titan", 500_000_000, 1, 1, 1, "🗿");
        assert_eq!(EnemyInstance::spawn(&template).gold_reward(), u32::MAX);
    }

    #[test]
    fn test_action_parsing() {
        for action in PlayerAction::all() {
            assert_eq!(action.id().parse::<PlayerAction>().unwrap(), action);
        }
        assert_eq!(" Attack ".parse::<PlayerAction>().unwrap(), PlayerAction::Attack);
        assert!(matches!(
            "flee".parse::<PlayerAction>(),
            Err(GameError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_event_messages() {
        let attack = CombatEvent::PlayerAttack {
            player_name: "Aria".to_string(),
            damage: 25.5,
            was_crit: true,
        };
        assert_eq!(attack.message().unwrap(), "Aria attacks for 25 damage!");

        let rewards = CombatEvent::RewardsGained { exp: 50, gold: 10 };
        assert_eq!(
            rewards.message().unwrap(),
            "Gained 50 experience and 10 gold!"
        );
        assert_eq!(CombatEvent::CombatEnded.message(), None);
    }

    #[test]
    fn test_only_idle_is_inactive() {
        assert!(!CombatPhase::Idle.is_active());
        assert!(CombatPhase::PlayerTurn.is_active());
        assert!(CombatPhase::Lost.is_active());
    }
}
