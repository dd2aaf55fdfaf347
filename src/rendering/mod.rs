//! # Rendering Module
//!
//! Macroquad-based display of the tile map, avatar, and on-screen controls.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
