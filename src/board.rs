use crate::snake::{Direction, Snake};

pub const BOARD_WIDTH: i32 = 500;
pub const BOARD_HEIGHT: i32 = 500;
pub const BLOCK: i32 = 25;

/// A grid-aligned position. Coordinates are in board units, so neighbouring
/// cells are one block size apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    pub fn step(self, direction: Direction, block: i32) -> Self {
        let (dx, dy) = direction.vector();
        Cell::new(self.x + dx * block, self.y + dy * block)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    block: i32,
}

impl Board {
    pub fn new(width: i32, height: i32, block: i32) -> Self {
        Board { width, height, block }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn block(&self) -> i32 {
        self.block
    }

    pub fn columns(&self) -> i32 {
        self.width / self.block
    }

    pub fn rows(&self) -> i32 {
        self.height / self.block
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Every cell of the board, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (width, height, block) = (self.width, self.height, self.block);
        (0..width)
            .step_by(block as usize)
            .flat_map(move |x| (0..height).step_by(block as usize).map(move |y| Cell::new(x, y)))
    }

    pub fn is_occupied(&self, snake: &Snake, cell: Cell) -> bool {
        snake.occupies(cell)
    }

    pub fn free_cells(&self, snake: &Snake) -> Vec<Cell> {
        self.cells().filter(|cell| !self.is_occupied(snake, *cell)).collect()
    }

    /// Terminal grid coordinates of a cell, in (column, row) block units.
    pub fn grid_position(&self, cell: Cell) -> (i32, i32) {
        (cell.x / self.block, cell.y / self.block)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BOARD_WIDTH, BOARD_HEIGHT, BLOCK)
    }
}
