//! Native renderer: writes frames to the log as text grids

use crate::session::Renderer;
use crate::sim::{Arena, Location, Snake, contains_location};

const SNAKE_CHAR: char = '#';
const POWER_UP_CHAR: char = '*';
const EMPTY_CHAR: char = '.';

/// Logs each frame; keeps counts so callers can report on the run
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames_drawn: u64,
    pub game_over_shown: bool,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Text picture of the arena, row 1 first
pub fn render_grid(snake: &Snake, arena: &Arena) -> String {
    let mut out = String::with_capacity(((arena.size + 1) * arena.size) as usize);
    for row in 1..=arena.size {
        for column in 1..=arena.size {
            let cell = Location::new(row, column);
            let ch = if contains_location(snake.segments(), &cell) {
                SNAKE_CHAR
            } else if arena.power_up == Some(cell) {
                POWER_UP_CHAR
            } else {
                EMPTY_CHAR
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

impl Renderer for LogRenderer {
    fn draw(&mut self, snake: &Snake, arena: &Arena) {
        self.frames_drawn += 1;
        log::info!("Frame {}: head {:?}, length {}", self.frames_drawn, snake.head(), snake.len());
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("\n{}", render_grid(snake, arena));
        }
    }

    fn show_game_over(&mut self) {
        self.game_over_shown = true;
        log::info!("GAME OVER");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_grid() {
        let mut arena = Arena::new(5, 1);
        arena.power_up = Some(Location::new(2, 4));
        let snake = Snake::from_segments(vec![Location::new(3, 3), Location::new(3, 2)]).unwrap();

        let grid = render_grid(&snake, &arena);
        let rows: Vec<&str> = grid.lines().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1], "...*.");
        assert_eq!(rows[2], ".##..");
    }

    #[test]
    fn test_counts_frames_and_game_over() {
        let mut renderer = LogRenderer::new();
        let arena = Arena::new(5, 1);
        let snake = Snake::new(Location::new(3, 3));
        renderer.draw(&snake, &arena);
        renderer.draw(&snake, &arena);
        renderer.show_game_over();
        assert_eq!(renderer.frames_drawn, 2);
        assert!(renderer.game_over_shown);
    }
}
