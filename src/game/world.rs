//! # World Module
//!
//! The tile map: terrain cells, the texture catalog, and the movement
//! validator. The map is built once at startup and never mutated afterwards,
//! so it serves as a read-only collision source for the move loop.

use crate::{Movement, Position, WarrenError, WarrenResult};
use serde::{Deserialize, Serialize};

/// An immutable pairing of a visual asset name with a collision flag.
///
/// The renderer resolves `name` against the asset folder; the movement
/// validator only ever reads `blocked`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileTexture {
    /// Asset name, without extension
    pub name: String,
    /// Whether the avatar can stand on this tile
    pub blocked: bool,
}

impl TileTexture {
    /// Creates a new tile texture descriptor.
    pub fn new(name: impl Into<String>, blocked: bool) -> Self {
        Self {
            name: name.into(),
            blocked,
        }
    }
}

/// The fixed set of textures a map is scattered from.
///
/// Defined once at startup; index 0 is the plain floor texture that
/// generation is biased towards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureCatalog {
    pub textures: Vec<TileTexture>,
}

impl TextureCatalog {
    /// Creates a catalog from an explicit texture list.
    pub fn new(textures: Vec<TileTexture>) -> Self {
        Self { textures }
    }

    /// The standard seven-texture dungeon catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::TextureCatalog;
    ///
    /// let catalog = TextureCatalog::standard();
    /// assert_eq!(catalog.len(), 7);
    /// assert!(!catalog.textures[0].blocked); // plain floor
    /// ```
    pub fn standard() -> Self {
        Self::new(vec![
            TileTexture::new("concrete", false),
            TileTexture::new("concrete2", false),
            TileTexture::new("concrete3", false),
            TileTexture::new("door", true),
            TileTexture::new("steel", true),
            TileTexture::new("steel2", true),
            TileTexture::new("floor", false),
        ])
    }

    /// Number of textures in the catalog.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// One grid cell. Created during generation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terrain {
    pub texture: TileTexture,
}

impl Terrain {
    /// Creates a terrain cell with the given texture.
    pub fn new(texture: TileTexture) -> Self {
        Self { texture }
    }
}

/// The tile grid: rows of terrain cells, addressed as (row = y, column = x).
///
/// Every row is guaranteed to have the same length; `new` rejects ragged
/// input, so the stored column count is valid for all rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMap {
    tiles: Vec<Vec<Terrain>>,
    columns: u32,
}

impl TileMap {
    /// Creates a tile map from rows of terrain, enforcing the equal
    /// row-length invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{Terrain, TextureCatalog, TileMap};
    ///
    /// let floor = TextureCatalog::standard().textures[0].clone();
    /// let rows = vec![vec![Terrain::new(floor.clone()); 3]; 2];
    /// let map = TileMap::new(rows).unwrap();
    /// assert_eq!(map.columns(), 3);
    /// assert_eq!(map.rows(), 2);
    /// ```
    pub fn new(tiles: Vec<Vec<Terrain>>) -> WarrenResult<Self> {
        let columns = tiles
            .first()
            .map(|row| row.len())
            .filter(|&len| len > 0)
            .ok_or_else(|| {
                WarrenError::GenerationFailed("tile map has no cells".to_string())
            })?;

        if let Some(bad) = tiles.iter().position(|row| row.len() != columns) {
            return Err(WarrenError::GenerationFailed(format!(
                "row {} has {} cells, expected {}",
                bad,
                tiles[bad].len(),
                columns
            )));
        }

        Ok(Self {
            tiles,
            columns: columns as u32,
        })
    }

    /// Number of columns in the map.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the map.
    pub fn rows(&self) -> u32 {
        self.tiles.len() as u32
    }

    /// Whether the position is on the map.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.columns as i32 && pos.y < self.rows() as i32
    }

    /// Gets the terrain cell at the given position, if in bounds.
    pub fn terrain(&self, pos: Position) -> Option<&Terrain> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(&self.tiles[pos.y as usize][pos.x as usize])
    }

    /// Movement validator: whether a step from `from` in `movement` lands on
    /// a walkable tile.
    ///
    /// Pure function: out-of-bounds destinations are rejected, in-bounds
    /// destinations are allowed exactly when their texture is not blocked.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{Movement, Position, Terrain, TextureCatalog, TileMap};
    ///
    /// let floor = TextureCatalog::standard().textures[0].clone();
    /// let map = TileMap::new(vec![vec![Terrain::new(floor); 3]; 3]).unwrap();
    /// assert!(map.can_move(Position::new(1, 1), Movement::Right));
    /// assert!(!map.can_move(Position::new(0, 0), Movement::Left));
    /// ```
    pub fn can_move(&self, from: Position, movement: Movement) -> bool {
        let candidate = from + movement.to_delta();
        match self.terrain(candidate) {
            Some(terrain) => !terrain.texture.blocked,
            None => false,
        }
    }

    /// Finds the first unblocked cell, scanning rows top to bottom.
    ///
    /// Used to place the avatar at startup; a map with no walkable cell at
    /// all is unplayable and reported as an error.
    pub fn find_spawn(&self) -> WarrenResult<Position> {
        for (y, row) in self.tiles.iter().enumerate() {
            for (x, terrain) in row.iter().enumerate() {
                if !terrain.texture.blocked {
                    return Ok(Position::new(x as i32, y as i32));
                }
            }
        }
        Err(WarrenError::InvalidState(
            "map has no walkable tile to spawn on".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> TileTexture {
        TileTexture::new("concrete", false)
    }

    fn wall() -> TileTexture {
        TileTexture::new("steel", true)
    }

    fn open_map(columns: usize, rows: usize) -> TileMap {
        TileMap::new(vec![vec![Terrain::new(open()); columns]; rows]).unwrap()
    }

    #[test]
    fn test_standard_catalog() {
        let catalog = TextureCatalog::standard();
        assert_eq!(catalog.len(), 7);

        let blocked: Vec<&str> = catalog
            .textures
            .iter()
            .filter(|t| t.blocked)
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(blocked, vec!["door", "steel", "steel2"]);
    }

    #[test]
    fn test_map_rejects_ragged_rows() {
        let rows = vec![
            vec![Terrain::new(open()); 3],
            vec![Terrain::new(open()); 2],
        ];
        assert!(TileMap::new(rows).is_err());
    }

    #[test]
    fn test_map_rejects_empty() {
        assert!(TileMap::new(vec![]).is_err());
        assert!(TileMap::new(vec![vec![]]).is_err());
    }

    #[test]
    fn test_can_move_boundaries() {
        let map = open_map(4, 3);

        assert!(!map.can_move(Position::new(0, 0), Movement::Left));
        assert!(!map.can_move(Position::new(0, 0), Movement::Up));
        assert!(!map.can_move(Position::new(3, 2), Movement::Right));
        assert!(!map.can_move(Position::new(3, 2), Movement::Down));

        assert!(map.can_move(Position::new(0, 0), Movement::Right));
        assert!(map.can_move(Position::new(0, 0), Movement::Down));
    }

    #[test]
    fn test_can_move_blocked_tile() {
        let mut rows = vec![vec![Terrain::new(open()); 3]; 3];
        rows[1][2] = Terrain::new(wall());
        let map = TileMap::new(rows).unwrap();

        assert!(!map.can_move(Position::new(1, 1), Movement::Right));
        assert!(map.can_move(Position::new(1, 1), Movement::Left));
        assert!(map.can_move(Position::new(1, 1), Movement::Down));
    }

    #[test]
    fn test_can_move_is_pure() {
        let map = open_map(3, 3);
        let first = map.can_move(Position::new(1, 1), Movement::Up);
        let second = map.can_move(Position::new(1, 1), Movement::Up);
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_spawn_skips_blocked() {
        let mut rows = vec![vec![Terrain::new(wall()); 3]; 2];
        rows[1][1] = Terrain::new(open());
        let map = TileMap::new(rows).unwrap();
        assert_eq!(map.find_spawn().unwrap(), Position::new(1, 1));
    }

    #[test]
    fn test_find_spawn_fails_on_sealed_map() {
        let map = TileMap::new(vec![vec![Terrain::new(wall()); 2]; 2]).unwrap();
        assert!(map.find_spawn().is_err());
    }
}
