//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod arena;
pub mod geometry;
pub mod input;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use geometry::{Location, collides_with_self, contains_location, locations_equal};
pub use input::{Direction, InputDirector};
pub use state::{GamePhase, GameState, Snake};
pub use tick::{TickOutcome, step, tick};
