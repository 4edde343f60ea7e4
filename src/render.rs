use std::io;

use crate::board::Cell;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Paint {
    Head,
    Body,
    Food,
}

/// Drawing surface the game loop paints on.
pub trait Renderer {
    fn clear_board(&mut self) -> io::Result<()>;

    fn draw_cell(&mut self, cell: Cell, paint: Paint) -> io::Result<()>;

    /// Centered message over the board, used for pause and game over.
    fn draw_overlay(&mut self, main: &str, sub: &str, extra: Option<&str>) -> io::Result<()>;

    fn draw_status(&mut self, score: u32, high_score: u32) -> io::Result<()>;
}
