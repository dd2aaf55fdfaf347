//! # Game Module
//!
//! Core game state, the tile map, and the avatar.
//!
//! This module contains the fundamental building blocks of Warren:
//! - Grid coordinates and movement directions
//! - The tile map and its movement validator
//! - The avatar and its step animation
//! - The move-loop state machine that turns held input into tile steps

pub mod avatar;
pub mod state;
pub mod world;

pub use avatar::*;
pub use state::*;
pub use world::*;

use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate on the tile grid.
///
/// # Examples
///
/// ```
/// use warren::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// Directions the avatar can step in. No diagonal movement is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    Up,
    Down,
    Left,
    Right,
}

impl Movement {
    /// Converts a movement to a unit position delta in grid space.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{Movement, Position};
    ///
    /// let delta = Movement::Up.to_delta();
    /// assert_eq!(delta, Position::new(0, -1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Movement::Up => Position::new(0, -1),
            Movement::Down => Position::new(0, 1),
            Movement::Left => Position::new(-1, 0),
            Movement::Right => Position::new(1, 0),
        }
    }

    /// Converts a unit position delta to a movement.
    ///
    /// Returns None if the delta is not a cardinal unit step.
    pub fn from_delta(delta: Position) -> Option<Movement> {
        match (delta.x, delta.y) {
            (0, -1) => Some(Movement::Up),
            (0, 1) => Some(Movement::Down),
            (-1, 0) => Some(Movement::Left),
            (1, 0) => Some(Movement::Right),
            _ => None,
        }
    }

    /// Returns all four movements.
    pub fn all() -> [Movement; 4] {
        [Movement::Up, Movement::Down, Movement::Left, Movement::Right]
    }
}
