//! Fixed-interval simulation tick
//!
//! One call advances the snake by one cell. Rendering is not done here;
//! the caller decides what to draw from the returned outcome.

use super::input::Direction;
use super::state::{GamePhase, GameState};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Snake advanced; `grew` is true when a power-up was picked up
    Moved { grew: bool },
    /// This tick ended the game. Both checks always run.
    GameOver { hit_border: bool, hit_self: bool },
    /// Game was already over; nothing changed
    Halted,
}

/// Advance the game by one tick using the director's current direction
pub fn tick(state: &mut GameState) -> TickOutcome {
    let direction = state.input.current_direction();
    step(state, direction)
}

/// Advance the game by one tick in `direction`.
///
/// The candidate snake is committed only if it survives both collision
/// checks. Once the phase is `GameOver` this is a no-op.
pub fn step(state: &mut GameState, direction: Direction) -> TickOutcome {
    if state.phase == GamePhase::GameOver {
        return TickOutcome::Halted;
    }

    state.time_ticks += 1;

    let moved_head = state.snake.head().moved(direction);
    let mut candidate = state.snake.with_new_head(moved_head);

    let grew = state.arena.try_consume_power_up(candidate.segments());
    if !grew {
        candidate.drop_tail();
    }

    let hit_border = state.arena.is_out_of_bounds(&candidate.head());
    let hit_self = candidate.collides_with_self();

    if hit_border || hit_self {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks (length {}, border: {}, self: {})",
            state.time_ticks,
            state.snake.len(),
            hit_border,
            hit_self
        );
        return TickOutcome::GameOver { hit_border, hit_self };
    }

    state.snake = candidate;
    TickOutcome::Moved { grew }
}
