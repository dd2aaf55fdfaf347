//! # Game State Module
//!
//! The owned game state and the move-loop state machine.
//!
//! Hold-to-move is modeled as an explicit Idle / Stepping machine driven by
//! per-frame ticks. A single active-direction slot carries the held input:
//! it is set by presses, cleared by releases, and polled at each
//! animation-completion boundary, so an in-flight step always finishes and
//! at most one step chain exists.

use crate::{
    config, Avatar, Movement, Position, StepAnimation, TileMap, WarrenError, WarrenResult,
};
use serde::{Deserialize, Serialize};

/// The move loop's current state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MoveState {
    /// No step in progress
    Idle,
    /// A one-tile step animation is in flight
    Stepping {
        direction: Movement,
        animation: StepAnimation,
    },
}

/// Events emitted by the move loop, consumed for logging and UI messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A step animation began
    StepStarted {
        from: Position,
        to: Position,
        direction: Movement,
    },
    /// A step animation finished and the avatar snapped onto its tile
    StepCompleted { position: Position },
    /// A step was refused by the movement validator
    MoveBlocked {
        position: Position,
        direction: Movement,
    },
}

/// Counters tracking avatar progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Completed one-tile steps
    pub steps_taken: u64,
    /// Steps refused by the validator
    pub moves_blocked: u64,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Central game state: the map, the avatar, and the move loop.
///
/// All state is owned here and passed explicitly; there are no process-wide
/// globals, so independent instances can coexist (and are tested to).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The immutable tile map, read-only collision source
    pub map: TileMap,
    /// The avatar in pixel space
    pub avatar: Avatar,
    /// Edge length of one tile in pixels
    pub tile_size: f32,
    /// Currently held direction, if any
    pub active_direction: Option<Movement>,
    /// The move loop's state
    pub move_state: MoveState,
    /// Progress counters
    pub statistics: GameStatistics,
    /// Duration of one step animation in seconds
    step_duration: f32,
}

impl GameState {
    /// Creates a game state with the avatar placed on `spawn`.
    ///
    /// Fails if the spawn tile is out of bounds or blocked.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{GameState, Position, Terrain, TextureCatalog, TileMap};
    ///
    /// let floor = TextureCatalog::standard().textures[0].clone();
    /// let map = TileMap::new(vec![vec![Terrain::new(floor); 4]; 4]).unwrap();
    /// let state = GameState::new(map, 24.0, Position::origin()).unwrap();
    /// assert_eq!(state.avatar_position(), Position::origin());
    /// ```
    pub fn new(map: TileMap, tile_size: f32, spawn: Position) -> WarrenResult<Self> {
        match map.terrain(spawn) {
            Some(terrain) if !terrain.texture.blocked => {}
            Some(_) => {
                return Err(WarrenError::InvalidState(format!(
                    "spawn tile ({}, {}) is blocked",
                    spawn.x, spawn.y
                )))
            }
            None => {
                return Err(WarrenError::InvalidState(format!(
                    "spawn tile ({}, {}) is outside the map",
                    spawn.x, spawn.y
                )))
            }
        }

        Ok(Self {
            avatar: Avatar::at_tile(spawn, tile_size),
            map,
            tile_size,
            active_direction: None,
            move_state: MoveState::Idle,
            statistics: GameStatistics::new(),
            step_duration: config::STEP_DURATION_SECS,
        })
    }

    /// Overrides the step animation duration.
    pub fn with_step_duration(mut self, seconds: f32) -> Self {
        self.step_duration = seconds.max(f32::EPSILON);
        self
    }

    /// The avatar's discrete grid position, derived from its pixel position.
    pub fn avatar_position(&self) -> Position {
        self.avatar.grid_position(self.tile_size)
    }

    /// Whether a step animation is in flight.
    pub fn is_stepping(&self) -> bool {
        matches!(self.move_state, MoveState::Stepping { .. })
    }

    /// Directional press: fills the active slot and, when idle, attempts to
    /// start a step.
    ///
    /// Pressing the direction already held is a no-op, so per-frame polling
    /// produces exactly one attempt per press edge. A press during an
    /// in-flight step replaces the slot; the new direction takes over at the
    /// next completion boundary.
    pub fn press(&mut self, direction: Movement) -> Vec<GameEvent> {
        if self.active_direction == Some(direction) {
            return Vec::new();
        }
        self.active_direction = Some(direction);

        match self.move_state {
            MoveState::Idle => vec![self.try_start_step(direction)],
            MoveState::Stepping { .. } => Vec::new(),
        }
    }

    /// Release: clears the active slot.
    ///
    /// Takes effect at the next completion boundary; an in-flight animation
    /// always finishes.
    pub fn release(&mut self) {
        self.active_direction = None;
    }

    /// Advances the move loop by one frame.
    ///
    /// While stepping, interpolates the avatar along the animation. On
    /// completion the avatar snaps exactly onto the target tile and, if a
    /// direction is still held, the next step is validated and started.
    pub fn tick(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if let MoveState::Stepping { animation, .. } = &mut self.move_state {
            animation.advance(dt);
            let (x, y) = animation.position();
            self.avatar.x = x;
            self.avatar.y = y;

            if animation.is_finished() {
                let (tx, ty) = animation.target();
                self.avatar.x = tx;
                self.avatar.y = ty;
                self.move_state = MoveState::Idle;
                self.statistics.steps_taken += 1;
                events.push(GameEvent::StepCompleted {
                    position: self.avatar_position(),
                });

                // Chain the next step while the slot is held. The slot may
                // have been replaced mid-flight; its current value wins.
                if let Some(next) = self.active_direction {
                    events.push(self.try_start_step(next));
                }
            }
        }

        events
    }

    /// Validates and starts a single step, or records the refusal.
    ///
    /// A refused step leaves the avatar and the slot untouched; no retry
    /// happens until a new press.
    fn try_start_step(&mut self, direction: Movement) -> GameEvent {
        let from = self.avatar_position();

        if !self.map.can_move(from, direction) {
            self.statistics.moves_blocked += 1;
            return GameEvent::MoveBlocked {
                position: from,
                direction,
            };
        }

        let to = from + direction.to_delta();
        let animation = StepAnimation::new(
            (self.avatar.x, self.avatar.y),
            (to.x as f32 * self.tile_size, to.y as f32 * self.tile_size),
            self.step_duration,
        );
        self.move_state = MoveState::Stepping {
            direction,
            animation,
        };

        GameEvent::StepStarted {
            from,
            to,
            direction,
        }
    }
}
