//! # On-Screen Controls
//!
//! The touch directional pad: a 3×3 button grid in the bottom-left corner,
//! drawn over the controller background texture. Hit-testing is plain
//! geometry so it can be tested without a window.

use crate::Movement;
use macroquad::prelude::*;

/// Edge length of the whole controller in pixels.
pub const CONTROLLER_SIZE: f32 = 120.0;

/// Left margin of the controller.
const CONTROLLER_MARGIN: f32 = 20.0;

/// Distance from the bottom of the screen to the controller's top edge.
const CONTROLLER_BOTTOM_OFFSET: f32 = 200.0;

/// The on-screen directional pad.
///
/// Buttons occupy the plus-shape of a 3×3 grid: up on the top row, left and
/// right flanking the middle, down on the bottom row. The corners and the
/// center are dead zones.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalPad {
    /// Top-left corner x in pixels
    pub x: f32,
    /// Top-left corner y in pixels
    pub y: f32,
    /// Edge length in pixels
    pub size: f32,
}

impl DirectionalPad {
    /// Places the pad in the bottom-left corner for the given screen height.
    pub fn new(screen_height: f32) -> Self {
        Self {
            x: CONTROLLER_MARGIN,
            y: screen_height - CONTROLLER_BOTTOM_OFFSET,
            size: CONTROLLER_SIZE,
        }
    }

    /// Maps a screen point to the directional button under it, if any.
    pub fn hit_test(&self, px: f32, py: f32) -> Option<Movement> {
        let cell = self.size / 3.0;
        let col = ((px - self.x) / cell).floor();
        let row = ((py - self.y) / cell).floor();
        if !(0.0..3.0).contains(&col) || !(0.0..3.0).contains(&row) {
            return None;
        }

        match (col as i32, row as i32) {
            (1, 0) => Some(Movement::Up),
            (0, 1) => Some(Movement::Left),
            (2, 1) => Some(Movement::Right),
            (1, 2) => Some(Movement::Down),
            _ => None,
        }
    }

    /// The direction currently held on the pad, if any.
    ///
    /// Checks active touches first, then the pressed mouse button (which
    /// doubles as touch emulation on desktop).
    pub fn held_direction(&self) -> Option<Movement> {
        for touch in touches() {
            match touch.phase {
                TouchPhase::Started | TouchPhase::Stationary | TouchPhase::Moved => {
                    if let Some(movement) = self.hit_test(touch.position.x, touch.position.y) {
                        return Some(movement);
                    }
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {}
            }
        }

        if is_mouse_button_down(MouseButton::Left) {
            let (mx, my) = mouse_position();
            return self.hit_test(mx, my);
        }

        None
    }

    /// Draws the controller background and a highlight over the held button.
    pub fn render(&self, background: &Texture2D) {
        draw_texture_ex(
            background,
            self.x,
            self.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(self.size, self.size)),
                ..Default::default()
            },
        );

        if let Some(held) = self.held_direction() {
            let cell = self.size / 3.0;
            let (col, row) = match held {
                Movement::Up => (1.0, 0.0),
                Movement::Left => (0.0, 1.0),
                Movement::Right => (2.0, 1.0),
                Movement::Down => (1.0, 2.0),
            };
            draw_rectangle(
                self.x + col * cell,
                self.y + row * cell,
                cell,
                cell,
                Color::new(1.0, 1.0, 1.0, 0.3),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad() -> DirectionalPad {
        DirectionalPad {
            x: 20.0,
            y: 600.0,
            size: 120.0,
        }
    }

    #[test]
    fn test_hit_test_buttons() {
        let pad = pad();
        // Cell centers: up (middle of top row), left, right, down
        assert_eq!(pad.hit_test(80.0, 620.0), Some(Movement::Up));
        assert_eq!(pad.hit_test(40.0, 660.0), Some(Movement::Left));
        assert_eq!(pad.hit_test(120.0, 660.0), Some(Movement::Right));
        assert_eq!(pad.hit_test(80.0, 700.0), Some(Movement::Down));
    }

    #[test]
    fn test_hit_test_dead_zones() {
        let pad = pad();
        // Corners and center are not buttons
        assert_eq!(pad.hit_test(40.0, 620.0), None);
        assert_eq!(pad.hit_test(120.0, 620.0), None);
        assert_eq!(pad.hit_test(80.0, 660.0), None);
        assert_eq!(pad.hit_test(40.0, 700.0), None);
        assert_eq!(pad.hit_test(120.0, 700.0), None);
    }

    #[test]
    fn test_hit_test_outside() {
        let pad = pad();
        assert_eq!(pad.hit_test(0.0, 0.0), None);
        assert_eq!(pad.hit_test(19.0, 660.0), None);
        assert_eq!(pad.hit_test(141.0, 660.0), None);
        assert_eq!(pad.hit_test(80.0, 599.0), None);
        assert_eq!(pad.hit_test(80.0, 721.0), None);
    }
}
