//! Game state and core simulation types
//!
//! Everything one session mutates lives here; the tick engine is the only writer.

use serde::Serialize;

use super::arena::Arena;
use super::geometry::{Location, collides_with_self};
use super::input::{Direction, InputDirector};
use crate::settings::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Ticks advance the snake
    Running,
    /// Border or self collision happened; terminal
    GameOver,
}

/// Snake body, head first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snake {
    segments: Vec<Location>,
}

impl Snake {
    /// A one-segment snake at `head`
    pub fn new(head: Location) -> Self {
        Self { segments: vec![head] }
    }

    /// Build from explicit segments. Returns `None` for an empty body.
    pub fn from_segments(segments: Vec<Location>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self { segments })
    }

    pub fn head(&self) -> Location {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Location] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true; a snake always has a head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Candidate body one segment longer, with `head` in front
    pub fn with_new_head(&self, head: Location) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(head);
        segments.extend_from_slice(&self.segments);
        Self { segments }
    }

    /// Drop the tail segment, keeping at least the head
    pub fn drop_tail(&mut self) {
        if self.segments.len() > 1 {
            self.segments.pop();
        }
    }

    pub fn collides_with_self(&self) -> bool {
        collides_with_self(&self.segments)
    }
}

/// Complete game state for one session
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Seed the arena RNG was created from
    pub seed: u64,
    pub snake: Snake,
    pub arena: Arena,
    pub input: InputDirector,
    pub phase: GamePhase,
    /// Number of transitions that ran (including the one that ended the game)
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh game: one segment at the arena center, no power-up yet
    pub fn new(config: &GameConfig, seed: u64, initial_direction: Direction) -> Self {
        let arena = Arena::new(config.arena_size, seed);
        let snake = Snake::new(arena.center());
        Self::with_snake(arena, snake, initial_direction, seed)
    }

    /// Start from an explicit arena and snake
    pub fn with_snake(arena: Arena, snake: Snake, initial_direction: Direction, seed: u64) -> Self {
        Self {
            seed,
            snake,
            arena,
            input: InputDirector::new(initial_direction),
            phase: GamePhase::Running,
            time_ticks: 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
