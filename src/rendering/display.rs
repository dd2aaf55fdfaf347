//! # Display Management
//!
//! Screen layout and 2D rendering using macroquad.
//!
//! Layout is derived from the screen: tile size = screen width ÷ tiles per
//! row, row count = screen height ÷ tile size. Textures are loaded up front
//! from the assets folder; a missing asset aborts startup with an error
//! naming it.

use crate::rendering::DirectionalPad;
use crate::{GameState, Movement, Position, TextureCatalog, WarrenError, WarrenResult};
use macroquad::prelude::*;
use std::collections::HashMap;

/// Macroquad display manager for the game.
pub struct Display {
    /// Screen width in pixels
    pub screen_width: f32,
    /// Screen height in pixels
    pub screen_height: f32,
    /// Tile size in pixels, derived from screen width
    pub tile_size: f32,
    /// Map width in tiles
    pub columns: u32,
    /// Map height in tiles, derived from screen height
    pub rows: u32,
    /// Tile textures keyed by catalog name
    tile_textures: HashMap<String, Texture2D>,
    /// The avatar sprite
    avatar_texture: Texture2D,
    /// The controller background
    controller_texture: Texture2D,
    /// On-screen directional pad
    pub dpad: DirectionalPad,
    /// Message history
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
}

impl Display {
    /// Creates the display and loads every required texture.
    ///
    /// Fails fast with [`WarrenError::AssetMissing`] if any catalog texture,
    /// the avatar sprite, or the controller background cannot be loaded.
    pub async fn new(catalog: &TextureCatalog, columns: u32) -> WarrenResult<Self> {
        let screen_width = screen_width();
        let screen_height = screen_height();

        let tile_size = screen_width / columns as f32;
        let rows = (screen_height / tile_size).ceil() as u32;

        let mut tile_textures = HashMap::new();
        for texture in &catalog.textures {
            if !tile_textures.contains_key(&texture.name) {
                let loaded = load_asset(&texture.name).await?;
                tile_textures.insert(texture.name.clone(), loaded);
            }
        }
        let avatar_texture = load_asset("character").await?;
        let controller_texture = load_asset("controller").await?;

        Ok(Self {
            screen_width,
            screen_height,
            tile_size,
            columns,
            rows,
            tile_textures,
            avatar_texture,
            controller_texture,
            dpad: DirectionalPad::new(screen_height),
            messages: Vec::new(),
            max_messages: 100,
        })
    }

    /// Renders the complete frame: map, avatar, messages, readout, controls.
    pub fn render(&self, state: &GameState) {
        clear_background(BLACK);

        self.render_map(state);
        self.render_avatar(state);
        self.render_messages();
        self.render_readout(state);
        self.dpad.render(&self.controller_texture);
    }

    /// The direction currently held on the directional pad, if any.
    pub fn held_direction(&self) -> Option<Movement> {
        self.dpad.held_direction()
    }

    /// Adds a message to the message history.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);

        // Keep only the most recent messages
        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }

    /// Draws every terrain tile at its grid position.
    fn render_map(&self, state: &GameState) {
        for y in 0..state.map.rows() {
            for x in 0..state.map.columns() {
                let pos = Position::new(x as i32, y as i32);
                let Some(terrain) = state.map.terrain(pos) else {
                    continue;
                };
                if let Some(texture) = self.tile_textures.get(&terrain.texture.name) {
                    draw_texture_ex(
                        texture,
                        x as f32 * self.tile_size,
                        y as f32 * self.tile_size,
                        WHITE,
                        DrawTextureParams {
                            dest_size: Some(vec2(self.tile_size, self.tile_size)),
                            ..Default::default()
                        },
                    );
                }
            }
        }
    }

    /// Draws the avatar at its continuous pixel position.
    fn render_avatar(&self, state: &GameState) {
        draw_texture_ex(
            &self.avatar_texture,
            state.avatar.x,
            state.avatar.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(self.tile_size, self.tile_size)),
                ..Default::default()
            },
        );
    }

    /// Draws the grid-position and step-count readout.
    fn render_readout(&self, state: &GameState) {
        let pos = state.avatar_position();
        draw_text(
            &format!("x: {}  y: {}", pos.x, pos.y),
            10.0,
            24.0,
            20.0,
            WHITE,
        );
        draw_text(
            &format!("steps: {}", state.statistics.steps_taken),
            10.0,
            46.0,
            20.0,
            GRAY,
        );
    }

    /// Renders the last few messages over a dimmed strip.
    fn render_messages(&self) {
        let message_area_y = self.screen_height - 80.0;
        let message_count = 3;
        let line_height = 18.0;

        draw_rectangle(
            0.0,
            message_area_y - 10.0,
            self.screen_width,
            90.0,
            Color::new(0.0, 0.0, 0.0, 0.8),
        );

        let start_index = self.messages.len().saturating_sub(message_count);
        for (i, message) in self.messages.iter().skip(start_index).enumerate() {
            let y = message_area_y + i as f32 * line_height;
            draw_text(message, 10.0, y, 16.0, WHITE);
        }
    }
}

/// Loads one texture from the assets folder, naming it in the error.
async fn load_asset(name: &str) -> WarrenResult<Texture2D> {
    let path = format!("{name}.png");
    load_texture(&path).await.map_err(|e| {
        WarrenError::AssetMissing(format!(
            "required texture '{name}' could not be loaded from '{path}': {e:?}"
        ))
    })
}
