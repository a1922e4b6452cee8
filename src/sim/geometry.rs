//! Grid locations and the membership tests built on them

use serde::{Deserialize, Serialize};

use super::input::Direction;

/// A grid cell, 1-indexed. Row 1 is the first CSS grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub row: i32,
    pub column: i32,
}

impl Location {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// The neighbouring cell one step in `direction`
    #[inline]
    pub fn moved(self, direction: Direction) -> Self {
        let (d_row, d_column) = direction.offset();
        Self::new(self.row + d_row, self.column + d_column)
    }
}

#[inline]
pub fn locations_equal(a: &Location, b: &Location) -> bool {
    a.row == b.row && a.column == b.column
}

/// True if any element of `sequence` equals `location`
pub fn contains_location(sequence: &[Location], location: &Location) -> bool {
    sequence.iter().any(|part| locations_equal(part, location))
}

/// True if the head (index 0) appears again further down the body.
/// A single-segment snake never collides with itself.
pub fn collides_with_self(snake: &[Location]) -> bool {
    match snake.split_first() {
        Some((head, tail)) => contains_location(tail, head),
        None => false,
    }
}
