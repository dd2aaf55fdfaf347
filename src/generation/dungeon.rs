//! # Dungeon Generation
//!
//! Per-cell scatter generation of the tile map.
//!
//! Each cell rolls independently: with `floor_chance` probability it takes
//! the first catalog texture (plain floor), otherwise a uniformly random
//! catalog entry, which may itself be the plain floor again. The result is
//! a mostly-open map with sparsely scattered doors, walls, and floor
//! variants.

use crate::{
    GenerationConfig, Generator, Terrain, TextureCatalog, TileMap, WarrenError, WarrenResult,
};
use rand::{rngs::StdRng, Rng};

/// Scatter generator producing the single-screen dungeon map.
#[derive(Debug, Clone)]
pub struct ScatterGenerator {
    /// The texture catalog cells are sampled from
    pub catalog: TextureCatalog,
}

impl ScatterGenerator {
    /// Creates a generator over the given catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{ScatterGenerator, TextureCatalog};
    ///
    /// let generator = ScatterGenerator::new(TextureCatalog::standard());
    /// ```
    pub fn new(catalog: TextureCatalog) -> Self {
        Self { catalog }
    }

    /// Rolls one cell's texture.
    fn roll_texture(&self, config: &GenerationConfig, rng: &mut StdRng) -> Terrain {
        let texture = if rng.gen_bool(config.floor_chance) {
            self.catalog.textures[0].clone()
        } else {
            let index = rng.gen_range(0..self.catalog.len());
            self.catalog.textures[index].clone()
        };
        Terrain::new(texture)
    }
}

impl Generator<TileMap> for ScatterGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WarrenResult<TileMap> {
        config.validate()?;

        if self.catalog.is_empty() {
            return Err(WarrenError::GenerationFailed(
                "texture catalog is empty".to_string(),
            ));
        }

        let mut rows = Vec::with_capacity(config.rows as usize);
        for _ in 0..config.rows {
            let mut row = Vec::with_capacity(config.columns as usize);
            for _ in 0..config.columns {
                row.push(self.roll_texture(config, rng));
            }
            rows.push(row);
        }

        let map = TileMap::new(rows)?;
        self.validate(&map, config)?;
        Ok(map)
    }

    fn validate(&self, content: &TileMap, config: &GenerationConfig) -> WarrenResult<()> {
        if content.columns() != config.columns || content.rows() != config.rows {
            return Err(WarrenError::GenerationFailed(format!(
                "generated {}x{} map, expected {}x{}",
                content.columns(),
                content.rows(),
                config.columns,
                config.rows
            )));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "scatter"
    }
}
