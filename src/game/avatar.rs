//! # Avatar Module
//!
//! The avatar's continuous pixel position and the one-tile step animation
//! that moves it. The discrete grid position is always derived from the
//! pixel position, never stored separately.

use crate::utils::math::{ease_in_out, lerp};
use crate::Position;
use serde::{Deserialize, Serialize};

/// The single player avatar: a mutable position in pixel space.
///
/// Only the move loop's animation tick mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Pixel-space x of the sprite origin
    pub x: f32,
    /// Pixel-space y of the sprite origin
    pub y: f32,
}

impl Avatar {
    /// Places the avatar exactly on a grid tile.
    pub fn at_tile(pos: Position, tile_size: f32) -> Self {
        Self {
            x: pos.x as f32 * tile_size,
            y: pos.y as f32 * tile_size,
        }
    }

    /// Derives the discrete grid position by integer division.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{Avatar, Position};
    ///
    /// let avatar = Avatar { x: 85.0, y: 48.0 };
    /// assert_eq!(avatar.grid_position(24.0), Position::new(3, 2));
    /// ```
    pub fn grid_position(&self, tile_size: f32) -> Position {
        Position::new((self.x / tile_size) as i32, (self.y / tile_size) as i32)
    }
}

/// A one-tile translation in progress: fixed duration, ease-in-ease-out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepAnimation {
    from: (f32, f32),
    to: (f32, f32),
    duration: f32,
    elapsed: f32,
}

impl StepAnimation {
    /// Starts an animation between two pixel positions.
    pub fn new(from: (f32, f32), to: (f32, f32), duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    /// Advances the animation clock, saturating at the full duration.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Current interpolated pixel position.
    pub fn position(&self) -> (f32, f32) {
        let t = ease_in_out(self.elapsed / self.duration);
        (
            lerp(self.from.0, self.to.0, t),
            lerp(self.from.1, self.to.1, t),
        )
    }

    /// The destination pixel position.
    pub fn target(&self) -> (f32, f32) {
        self.to
    }

    /// Whether the animation has run its full duration.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_grid_position_truncates() {
        let avatar = Avatar { x: 71.9, y: 0.0 };
        assert_eq!(avatar.grid_position(24.0), Position::new(2, 0));
    }

    #[test]
    fn test_avatar_tile_round_trip() {
        let pos = Position::new(4, 7);
        let avatar = Avatar::at_tile(pos, 32.0);
        assert_eq!(avatar.grid_position(32.0), pos);
    }

    #[test]
    fn test_animation_endpoints() {
        let mut anim = StepAnimation::new((0.0, 0.0), (24.0, 0.0), 0.5);
        assert_eq!(anim.position(), (0.0, 0.0));
        assert!(!anim.is_finished());

        anim.advance(0.5);
        assert!(anim.is_finished());
        assert_eq!(anim.position(), (24.0, 0.0));
    }

    #[test]
    fn test_animation_midpoint() {
        let mut anim = StepAnimation::new((0.0, 0.0), (24.0, 0.0), 0.5);
        anim.advance(0.25);
        let (x, _) = anim.position();
        // Ease-in-out passes through the halfway point at half time
        assert!((x - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_animation_saturates() {
        let mut anim = StepAnimation::new((0.0, 0.0), (0.0, 24.0), 0.5);
        anim.advance(10.0);
        assert!(anim.is_finished());
        assert_eq!(anim.position(), (0.0, 24.0));
        anim.advance(1.0);
        assert_eq!(anim.position(), (0.0, 24.0));
    }
}
