//! # Input Module
//!
//! Keyboard polling for the directional controls.
//!
//! The move loop wants exactly one piece of information per frame: which
//! direction, if any, is currently held. Press and release edges are derived
//! by the game state from consecutive polls, so the handler stays stateless.

use crate::Movement;
use macroquad::prelude::*;

/// Input handler polling the keyboard for held directions.
pub struct InputHandler {
    /// Whether to enable Vi-style movement keys (hjkl)
    pub vi_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use warren::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// let held = input_handler.held_direction();
    /// ```
    pub fn new() -> Self {
        Self {
            vi_keys_enabled: true,
        }
    }

    /// The direction currently held on the keyboard, if any.
    ///
    /// Arrow keys and WASD are always active; hjkl when Vi keys are enabled.
    /// When several keys are down at once the first match wins, so at most
    /// one direction is ever reported.
    pub fn held_direction(&self) -> Option<Movement> {
        if is_key_down(KeyCode::Up) || is_key_down(KeyCode::W) {
            return Some(Movement::Up);
        }
        if is_key_down(KeyCode::Down) || is_key_down(KeyCode::S) {
            return Some(Movement::Down);
        }
        if is_key_down(KeyCode::Left) || is_key_down(KeyCode::A) {
            return Some(Movement::Left);
        }
        if is_key_down(KeyCode::Right) || is_key_down(KeyCode::D) {
            return Some(Movement::Right);
        }

        if self.vi_keys_enabled {
            if is_key_down(KeyCode::K) {
                return Some(Movement::Up);
            }
            if is_key_down(KeyCode::J) {
                return Some(Movement::Down);
            }
            if is_key_down(KeyCode::H) {
                return Some(Movement::Left);
            }
            if is_key_down(KeyCode::L) {
                return Some(Movement::Right);
            }
        }

        None
    }

    /// Whether the player asked to quit.
    pub fn quit_requested(&self) -> bool {
        is_key_pressed(KeyCode::Escape)
    }
}
