// World geometry
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;
pub const PLAYER_START_X: f64 = 400.0;
pub const PLAYER_START_Y: f64 = 300.0;
pub const PLAYER_SPEED_PER_SECOND: f64 = 180.0;

// Proximity thresholds
pub const ATTACK_RANGE: f64 = 50.0;
pub const NPC_INTERACTION_RANGE: f64 = 50.0;
pub const NPC_COLLISION_RADIUS: f64 = 20.0;

// Turn timing
pub const TURN_TIMEOUT_SECONDS: f64 = 2.0;

// Combat tuning
pub const UNARMED_DAMAGE: f64 = 5.0;
pub const WARRIOR_STRENGTH_FACTOR: f64 = 2.0;
pub const ARCHER_DEXTERITY_FACTOR: f64 = 1.5;
pub const MAGE_INTELLIGENCE_FACTOR: f64 = 1.2;
pub const THIEF_DEXTERITY_FACTOR: f64 = 1.3;
pub const SKILL_DAMAGE_PER_LEVEL: u32 = 2;
pub const FLEE_CHANCE: f64 = 0.5;
pub const BOSS_SPECIAL_EVERY_N_TURNS: u32 = 3;
pub const BOSS_SPECIAL_MULTIPLIER: f64 = 1.5;
pub const MIN_DAMAGE_TAKEN: u32 = 1;

// Message windows
pub const COMBAT_LOG_CAPACITY: usize = 10;
pub const MESSAGE_LOG_CAPACITY: usize = 5;

// Player defaults
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_XP_TO_NEXT_LEVEL: u64 = 100;
pub const XP_THRESHOLD_GROWTH: f64 = 1.5;
pub const STARTING_HP: u32 = 100;
pub const STARTING_MP: u32 = 50;
pub const STARTING_GOLD: u64 = 50;
pub const STARTING_STRENGTH: u32 = 10;
pub const STARTING_DEXTERITY: u32 = 10;
pub const STARTING_INTELLIGENCE: u32 = 10;
pub const STARTING_DEFENSE: u32 = 5;
pub const STARTING_CRIT_CHANCE: f64 = 0.05;
pub const STARTING_CRIT_MULTIPLIER: f64 = 1.5;
pub const MAX_INVENTORY_SIZE: usize = 20;

// Monster scaling: (base, per_level)
pub const MONSTER_XP_REWARD: (u32, u32) = (10, 5);
pub const MONSTER_GOLD_REWARD: (u32, u32) = (5, 1);
pub const BOSS_XP_REWARD: (u32, u32) = (100, 25);
pub const BOSS_GOLD_REWARD: (u32, u32) = (50, 10);

// Autosave interval bounds (seconds)
pub const DEFAULT_AUTOSAVE_INTERVAL_SECONDS: f64 = 300.0;
pub const MIN_AUTOSAVE_INTERVAL_SECONDS: f64 = 10.0;
pub const MAX_AUTOSAVE_INTERVAL_SECONDS: f64 = 3600.0;

// Save format
pub const SAVE_FORMAT_VERSION: u32 = 1;
