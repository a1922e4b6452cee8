//! Directional input
//!
//! Key events overwrite a single stored direction (last write wins, no
//! queue). The tick engine reads it once per tick without consuming it.

use serde::{Deserialize, Serialize};

use crate::consts::START_DIRECTION;

/// Movement direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// row + 1
    Up,
    /// row - 1
    Down,
    /// column - 1
    Left,
    /// column + 1
    Right,
}

impl Direction {
    /// Unit `(row, column)` offset for one step
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Map a `KeyboardEvent.key` name to a direction.
    ///
    /// Grid rows grow downward on screen, so the up arrow decreases the row
    /// (`Down`) and the down arrow increases it (`Up`).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowUp" => Some(Direction::Down),
            "ArrowRight" => Some(Direction::Right),
            "ArrowDown" => Some(Direction::Up),
            _ => None,
        }
    }

    /// Map a legacy `KeyboardEvent.keyCode` (37..=40) to a direction
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Direction::Left),
            38 => Some(Direction::Down),
            39 => Some(Direction::Right),
            40 => Some(Direction::Up),
            _ => None,
        }
    }
}

/// Holds the pending movement direction for one game session
#[derive(Debug, Clone, Serialize)]
pub struct InputDirector {
    direction: Direction,
}

impl Default for InputDirector {
    fn default() -> Self {
        Self::new(START_DIRECTION)
    }
}

impl InputDirector {
    pub fn new(initial: Direction) -> Self {
        Self { direction: initial }
    }

    /// Handle a key by name. Unrecognized keys are ignored.
    /// Returns the direction that was stored, if any.
    pub fn on_direction_key(&mut self, key: &str) -> Option<Direction> {
        let direction = Direction::from_key(key)?;
        self.set_direction(direction);
        Some(direction)
    }

    /// Handle a key by legacy key code. Unrecognized codes are ignored.
    pub fn on_key_code(&mut self, code: u32) -> Option<Direction> {
        let direction = Direction::from_key_code(code)?;
        self.set_direction(direction);
        Some(direction)
    }

    /// Overwrite the stored direction unconditionally.
    /// Reversing into the body is allowed.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn current_direction(&self) -> Direction {
        self.direction
    }
}
