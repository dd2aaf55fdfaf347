//! Integration tests for the movement validator and the move loop.

use proptest::prelude::*;
use warren::{GameState, Movement, Position, Terrain, TileMap, TileTexture};

const TILE: f32 = 24.0;

/// Builds a map from rows of '.' (open) and '#' (blocked).
fn map_from_layout(rows: &[&str]) -> TileMap {
    let tiles = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| {
                    let blocked = c == '#';
                    let name = if blocked { "steel" } else { "concrete" };
                    Terrain::new(TileTexture::new(name, blocked))
                })
                .collect()
        })
        .collect();
    TileMap::new(tiles).unwrap()
}

#[test]
fn test_step_right_from_3_3() {
    let map = map_from_layout(&["......"; 6]);
    assert!(map.can_move(Position::new(3, 3), Movement::Right));

    let mut state = GameState::new(map, TILE, Position::new(3, 3)).unwrap();
    state.press(Movement::Right);
    state.release();
    state.tick(0.5);

    assert_eq!(state.avatar_position(), Position::new(4, 3));
}

#[test]
fn test_left_from_origin_is_refused() {
    // Refused regardless of tile content
    let open = map_from_layout(&["..", ".."]);
    assert!(!open.can_move(Position::origin(), Movement::Left));

    let walled = map_from_layout(&[".#", "##"]);
    assert!(!walled.can_move(Position::origin(), Movement::Left));
}

#[test]
fn test_blocked_neighbor_is_refused() {
    let map = map_from_layout(&[".#."]);
    assert!(!map.can_move(Position::origin(), Movement::Right));
}

#[test]
fn test_hold_walks_corridor_and_stops_at_wall() {
    let map = map_from_layout(&["....#"]);
    let mut state = GameState::new(map, TILE, Position::origin()).unwrap();

    state.press(Movement::Right);
    for _ in 0..10 {
        state.tick(0.5);
    }

    // Three open tiles ahead; the wall at x=4 halts the chain
    assert_eq!(state.avatar_position(), Position::new(3, 0));
    assert_eq!(state.statistics.steps_taken, 3);
    assert!(!state.is_stepping());
}

#[test]
fn test_release_mid_animation_completes_current_step() {
    let map = map_from_layout(&["......"; 6]);
    let mut state = GameState::new(map, TILE, Position::new(2, 2)).unwrap();

    state.press(Movement::Down);
    state.tick(0.1);
    state.release();
    for _ in 0..5 {
        state.tick(0.5);
    }

    // The in-flight step finished; nothing further started
    assert_eq!(state.avatar_position(), Position::new(2, 3));
    assert_eq!(state.statistics.steps_taken, 1);
}

fn movement_strategy() -> impl Strategy<Value = Movement> {
    prop_oneof![
        Just(Movement::Up),
        Just(Movement::Down),
        Just(Movement::Left),
        Just(Movement::Right),
    ]
}

proptest! {
    /// In-bounds destinations are allowed exactly when unblocked;
    /// out-of-bounds destinations are always refused.
    #[test]
    fn prop_validator_matches_blocked_flags(
        blocked in prop::collection::vec(prop::collection::vec(any::<bool>(), 6), 6),
        x in -2i32..8,
        y in -2i32..8,
        movement in movement_strategy(),
    ) {
        let tiles = blocked
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&b| {
                        let name = if b { "steel" } else { "concrete" };
                        Terrain::new(TileTexture::new(name, b))
                    })
                    .collect()
            })
            .collect();
        let map = TileMap::new(tiles).unwrap();

        let from = Position::new(x, y);
        let candidate = from + movement.to_delta();
        let in_bounds = candidate.x >= 0
            && candidate.y >= 0
            && candidate.x < 6
            && candidate.y < 6;
        let expected = in_bounds && !blocked[candidate.y as usize][candidate.x as usize];

        prop_assert_eq!(map.can_move(from, movement), expected);
    }

    /// The validator is a pure function of its inputs.
    #[test]
    fn prop_validator_is_idempotent(
        blocked in prop::collection::vec(prop::collection::vec(any::<bool>(), 4), 4),
        x in -1i32..5,
        y in -1i32..5,
        movement in movement_strategy(),
    ) {
        let tiles = blocked
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&b| Terrain::new(TileTexture::new("concrete", b)))
                    .collect()
            })
            .collect();
        let map = TileMap::new(tiles).unwrap();

        let from = Position::new(x, y);
        let first = map.can_move(from, movement);
        let second = map.can_move(from, movement);
        prop_assert_eq!(first, second);
    }
}
