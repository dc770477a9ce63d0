//! Session configuration.

use crate::core::constants::*;

/// Tunables a [`Session`](crate::core::session::Session) is built with.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Random seed for reproducible sessions (None = entropy)
    pub seed: Option<u64>,

    /// Number of enemies placed in the world when a new game starts
    pub enemy_count: usize,

    /// World bounds; player and enemies are clamped inside them
    pub world_width: f64,
    pub world_height: f64,

    /// Pacing wait between a combat action and its consequences (seconds)
    pub animation_delay: f64,

    /// Target frame interval for the tick loop
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            enemy_count: ROSTER_SIZE,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            animation_delay: ANIMATION_DELAY_SECONDS,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Default config with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Config with a custom roster size, used for scripted encounters
    pub fn with_enemies(enemy_count: usize) -> Self {
        Self {
            enemy_count,
            ..Default::default()
        }
    }

    /// Tick interval as seconds
    pub fn tick_seconds(&self) -> f64 {
        self.tick_interval_ms as f64 / 1000.0
    }
}
