//! Tick engine driver
//!
//! Runs the simulation one tick at a time and hands results to the
//! rendering collaborator. The periodic timer itself belongs to the
//! platform; the session only holds a handle so it can stop it.

use crate::settings::GameConfig;
use crate::sim::{Arena, Direction, GameState, Snake, TickOutcome, tick};

/// Draws frames and the game-over overlay
pub trait Renderer {
    /// Replace the previous frame's snake and power-up visuals
    fn draw(&mut self, snake: &Snake, arena: &Arena);
    /// Show the terminal overlay
    fn show_game_over(&mut self);
}

/// Handle to the repeating tick timer
pub trait TickTimer {
    fn cancel(&mut self);
}

/// One game from start to game over
pub struct Session<R: Renderer> {
    state: GameState,
    renderer: R,
    timer: Option<Box<dyn TickTimer>>,
    game_over_signalled: bool,
}

impl<R: Renderer> Session<R> {
    pub fn new(config: &GameConfig, seed: u64, initial_direction: Direction, renderer: R) -> Self {
        Self::from_state(GameState::new(config, seed, initial_direction), renderer)
    }

    pub fn from_state(state: GameState, renderer: R) -> Self {
        Self {
            state,
            renderer,
            timer: None,
            game_over_signalled: false,
        }
    }

    /// Draw the starting frame
    pub fn start(&mut self) {
        log::info!(
            "Session started: arena {}x{}, seed {}",
            self.state.arena.size,
            self.state.arena.size,
            self.state.seed
        );
        self.renderer.draw(&self.state.snake, &self.state.arena);
    }

    /// Hand over the platform timer so game over can cancel it
    pub fn attach_timer(&mut self, timer: Box<dyn TickTimer>) {
        if self.game_over_signalled {
            let mut timer = timer;
            timer.cancel();
            return;
        }
        self.timer = Some(timer);
    }

    /// Forward a key name to the input director. Unrecognized keys are ignored.
    pub fn on_key(&mut self, key: &str) -> Option<Direction> {
        self.state.input.on_direction_key(key)
    }

    /// Forward a legacy key code (37..=40)
    pub fn on_key_code(&mut self, code: u32) -> Option<Direction> {
        self.state.input.on_key_code(code)
    }

    /// Run one tick and notify the renderer
    pub fn on_tick(&mut self) -> TickOutcome {
        let outcome = tick(&mut self.state);
        match outcome {
            TickOutcome::Moved { .. } => {
                self.renderer.draw(&self.state.snake, &self.state.arena);
            }
            TickOutcome::GameOver { .. } => self.finish(),
            TickOutcome::Halted => {}
        }
        outcome
    }

    /// Fire the game-over signal and stop the timer, once
    fn finish(&mut self) {
        if self.game_over_signalled {
            return;
        }
        self.game_over_signalled = true;
        self.renderer.show_game_over();
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        if let Ok(json) = serde_json::to_string(&self.state) {
            log::debug!("Final state: {}", json);
        }
    }

    pub fn is_running(&self) -> bool {
        !self.state.is_game_over()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Location;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Vec<Location>>,
        game_overs: u32,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, snake: &Snake, _arena: &Arena) {
            self.frames.push(snake.segments().to_vec());
        }

        fn show_game_over(&mut self) {
            self.game_overs += 1;
        }
    }

    struct CountingTimer(Rc<Cell<u32>>);

    impl TickTimer for CountingTimer {
        fn cancel(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn session() -> Session<RecordingRenderer> {
        Session::new(&GameConfig::default(), 12345, Direction::Right, RecordingRenderer::default())
    }

    #[test]
    fn test_start_draws_initial_frame() {
        let mut s = session();
        s.start();
        assert_eq!(s.renderer().frames, vec![vec![Location::new(10, 10)]]);
    }

    #[test]
    fn test_tick_renders_moved_snake() {
        let mut s = session();
        assert_eq!(s.on_tick(), TickOutcome::Moved { grew: false });
        assert_eq!(s.renderer().frames.last(), Some(&vec![Location::new(10, 11)]));
    }

    #[test]
    fn test_key_changes_direction() {
        let mut s = session();
        assert_eq!(s.on_key("ArrowUp"), Some(Direction::Down));
        assert_eq!(s.on_key("Shift"), None);
        s.on_tick();
        assert_eq!(s.state().snake.head(), Location::new(9, 10));
    }

    #[test]
    fn test_game_over_fires_once_and_cancels_timer_once() {
        let cancels = Rc::new(Cell::new(0));
        let mut s = session();
        s.attach_timer(Box::new(CountingTimer(cancels.clone())));

        // Head starts at column 10 and runs right into the border at 21.
        // The power-up is confined to columns 2..=19, but may still lie on
        // row 10; growing does not change how many ticks the head needs.
        let mut ticks = 0;
        while s.is_running() {
            s.on_tick();
            ticks += 1;
            assert!(ticks <= 11, "snake should hit the border");
        }
        assert_eq!(ticks, 11);

        let frames = s.renderer().frames.len();
        for _ in 0..5 {
            assert_eq!(s.on_tick(), TickOutcome::Halted);
        }

        assert_eq!(s.renderer().game_overs, 1);
        assert_eq!(cancels.get(), 1);
        assert_eq!(s.renderer().frames.len(), frames);
    }

    #[test]
    fn test_timer_attached_after_game_over_is_cancelled() {
        let cancels = Rc::new(Cell::new(0));
        let mut s = session();
        while s.is_running() {
            s.on_tick();
        }
        s.attach_timer(Box::new(CountingTimer(cancels.clone())));
        assert_eq!(cancels.get(), 1);
    }
}
