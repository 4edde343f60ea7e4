use crate::board::{Board, Cell};
use crate::snake::Snake;

use rand::seq::SliceRandom;
use rand::Rng;

/// Picks the cell for the next food item.
pub trait FoodSource {
    /// Returns a cell not covered by `snake`, or `None` when the board is full.
    fn place(&mut self, board: &Board, snake: &Snake) -> Option<Cell>;
}

/// Uniform choice among the free cells.
pub struct RandomFood<R> {
    rng: R,
}

impl<R: Rng> RandomFood<R> {
    pub fn new(rng: R) -> Self {
        RandomFood { rng }
    }
}

impl<R: Rng> FoodSource for RandomFood<R> {
    fn place(&mut self, board: &Board, snake: &Snake) -> Option<Cell> {
        board.free_cells(snake).choose(&mut self.rng).copied()
    }
}
