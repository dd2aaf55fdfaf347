//! # Warren
//!
//! A single-screen dungeon stroll: a procedurally scattered tile map, one
//! avatar, and a hold-to-move directional controller.
//!
//! ## Architecture Overview
//!
//! The crate is split so that everything with rules in it is testable
//! without opening a window:
//!
//! - **Game State**: owned state for the map, avatar, and move loop; no
//!   ambient globals, so independent instances can coexist in tests
//! - **Tile Map**: immutable grid of terrain cells, the read-only collision
//!   source for the movement validator
//! - **Generation System**: seeded, reproducible scatter generation of the
//!   tile map
//! - **Rendering System**: macroquad-based display of the map, avatar, and
//!   on-screen directional pad
//! - **Input System**: per-frame polling of keyboard and touch controls into
//!   a single held direction
//!
//! Rendering and input live at the edges; the move loop is an explicit
//! state machine ticked once per frame.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod utils;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

// Explicit re-exports for commonly used types.
pub use game::{
    // From avatar
    Avatar,
    StepAnimation,
    // From state
    GameEvent,
    GameState,
    GameStatistics,
    MoveState,
    // From mod
    Movement,
    Position,
    // From world
    Terrain,
    TextureCatalog,
    TileMap,
    TileTexture,
};

pub use generation::{GenerationConfig, Generator, ScatterGenerator};

pub use rendering::{DirectionalPad, Display};

/// Core error type for the Warren game.
#[derive(thiserror::Error, Debug)]
pub enum WarrenError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// A required visual asset could not be loaded
    #[error("Missing asset: {0}")]
    AssetMissing(String),
}

/// Result type used throughout the Warren codebase.
pub type WarrenResult<T> = Result<T, WarrenError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Number of tiles in each map row
    pub const DEFAULT_TILES_PER_ROW: u32 = 12;

    /// Duration of a single one-tile step animation in seconds
    pub const STEP_DURATION_SECS: f32 = 0.5;

    /// Probability that a generated cell is forced to the plain floor texture
    pub const DEFAULT_FLOOR_CHANCE: f64 = 0.95;
}
