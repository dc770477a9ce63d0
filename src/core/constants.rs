// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 FPS
pub const MAX_DELTA_SECONDS: f64 = 0.25;
pub const ANIMATION_DELAY_SECONDS: f64 = 0.5;
pub const HIT_FLASH_SECONDS: f64 = 0.2;

// Movement (world units per second)
pub const PLAYER_SPEED: f64 = 300.0;
pub const ENEMY_WANDER_SPEED: f64 = 50.0;
pub const WANDER_INTERVAL_MIN_SECONDS: f64 = 1.0;
pub const WANDER_INTERVAL_MAX_SECONDS: f64 = 3.0;
pub const DIAGONAL_FACTOR: f64 = 0.707;

// World layout
pub const ENTITY_SIZE: f64 = 50.0;
pub const WORLD_WIDTH: f64 = 1600.0;
pub const WORLD_HEIGHT: f64 = 1600.0;
pub const PLAYER_SPAWN_X: f64 = 640.0;
pub const PLAYER_SPAWN_Y: f64 = 360.0;
pub const ENEMY_SPAWN_MIN: i32 = 100;
pub const ENEMY_SPAWN_MAX: i32 = 1500;
pub const ROSTER_SIZE: usize = 5;

// Combat
pub const CRIT_CHANCE: f64 = 0.10;
pub const CRIT_MULTIPLIER: u32 = 2;
pub const MIN_DAMAGE: u32 = 1;
pub const COMBAT_LOG_CAPACITY: usize = 10;

// Leveling
pub const XP_PER_LEVEL: u32 = 100;
pub const LEVEL_UP_HP: u32 = 10;
pub const LEVEL_UP_ATK: u32 = 2;
pub const LEVEL_UP_DEFENSE: u32 = 1;

// New character
pub const STARTING_GOLD: u32 = 100;
pub const STARTING_POTIONS: usize = 2;
pub const POTION_HEAL: u32 = 20;
pub const POTION_VALUE: u32 = 50;
pub const MAX_NAME_LENGTH: usize = 15;

// Status messages shown inline by the presentation layer
pub const NO_ITEMS_MESSAGE: &str = "You have no items!";
pub const PERSISTENCE_UNAVAILABLE_MESSAGE: &str = "Saving and loading are not available yet.";
