//! # Utilities Module
//!
//! Utility functions for interpolation and general game math.

pub mod math;

pub use math::*;
