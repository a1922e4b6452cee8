//! Grid Snake - A single-player snake game on a square grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, input, arena, tick)
//! - `session`: Tick engine driver wiring the simulation to a renderer and timer
//! - `settings`: Externally tunable configuration
//! - `platform`: Browser DOM rendering, keyboard input and interval timer

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Renderer, Session, TickTimer};
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    use crate::sim::Direction;

    /// Default grid dimension (N x N cells, 1-indexed)
    pub const DEFAULT_ARENA_SIZE: i32 = 20;
    /// Smallest grid that still has a non-empty power-up region
    pub const MIN_ARENA_SIZE: i32 = 5;
    pub const MAX_ARENA_SIZE: i32 = 200;

    /// Default tick interval in milliseconds
    pub const DEFAULT_TICK_INTERVAL_MS: u32 = 88;
    /// Fastest tick interval accepted from configuration
    pub const MIN_TICK_INTERVAL_MS: u32 = 16;
    pub const MAX_TICK_INTERVAL_MS: u32 = 2000;

    /// Direction the snake travels before any key is pressed
    pub const START_DIRECTION: Direction = Direction::Right;

    /// Random placement attempts before falling back to enumerating free cells
    pub const POWER_UP_PLACEMENT_ATTEMPTS: u32 = 64;

    /// Seed used when neither the config nor the platform provides one
    pub const DEFAULT_SEED: u64 = 0x5EED_5A4E;
}
