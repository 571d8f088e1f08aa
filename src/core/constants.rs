// Turn timing
pub const ENEMY_TURN_DELAY_MS: u64 = 500;
pub const DEFEAT_FINALIZE_DELAY_MS: u64 = 2000;

// Character creation
pub const STARTING_GOLD: u32 = 100;
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_EXP_TO_LEVEL: u32 = 100;
pub const DEFAULT_PLAYER_NAME: &str = "Hero";
pub const STARTING_LOCATION: &str = "village";
pub const NUM_ATTRIBUTES: usize = 6;

// XP and leveling
pub const EXP_CURVE_MULTIPLIER: f64 = 1.15;
pub const LEVEL_UP_MAX_HP: u32 = 10;
pub const LEVEL_UP_MAX_MP: i32 = 5;
pub const LEVEL_UP_STR: u32 = 2;
pub const LEVEL_UP_DEX: u32 = 1;
pub const LEVEL_UP_CON: u32 = 1;

// Damage and mitigation
pub const MITIGATION_CON_DIVISOR: u32 = 5;
pub const MIN_DAMAGE_TAKEN: u32 = 1;
pub const ATTACK_ROLL_SIDES: u32 = 10;
pub const ENEMY_ATTACK_ROLL_SIDES: u32 = 5;
pub const CRIT_CHANCE_CAP: f64 = 0.3;
pub const CRIT_DEX_DIVISOR: f64 = 100.0;
pub const CRIT_MULTIPLIER: f64 = 1.5;

// Player actions
pub const SKILL_DAMAGE_MULTIPLIER: f64 = 1.3;
pub const SKILL_MP_COST: i32 = 15;
pub const DEFEND_HEAL: u32 = 10;
pub const POTION_HEAL: u32 = 30;

// Rewards
pub const GOLD_PER_ENEMY_LEVEL: u32 = 10;
