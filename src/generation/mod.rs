//! # Generation Module
//!
//! Procedural map generation.
//!
//! The map is produced once at startup by per-cell independent sampling from
//! the texture catalog, seeded for reproducibility. There is no room layout,
//! connectivity pass, or meaningful exit placement. The scatter is the whole
//! algorithm.

pub mod dungeon;

pub use dungeon::*;

use crate::{WarrenError, WarrenResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for procedural generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Number of columns per row
    pub columns: u32,
    /// Number of rows
    pub rows: u32,
    /// Probability a cell is forced to the plain floor texture (0.0 to 1.0)
    pub floor_chance: f64,
}

impl GenerationConfig {
    /// Creates a generation configuration with the standard map shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.seed, 12345);
    /// assert!(config.floor_chance > 0.9);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            columns: crate::config::DEFAULT_TILES_PER_ROW,
            rows: 20,
            floor_chance: crate::config::DEFAULT_FLOOR_CHANCE,
        }
    }

    /// Creates a configuration for testing with a small map.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            columns: 6,
            rows: 6,
            floor_chance: crate::config::DEFAULT_FLOOR_CHANCE,
        }
    }

    /// Overrides the map dimensions, typically derived from the screen.
    pub fn with_dimensions(mut self, columns: u32, rows: u32) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Checks the configuration for values generation cannot work with.
    pub fn validate(&self) -> WarrenResult<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(WarrenError::GenerationFailed(format!(
                "map dimensions must be positive, got {}x{}",
                self.columns, self.rows
            )));
        }
        if !(0.0..=1.0).contains(&self.floor_chance) {
            return Err(WarrenError::GenerationFailed(format!(
                "floor_chance must be within [0, 1], got {}",
                self.floor_chance
            )));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WarrenResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> WarrenResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}
