use crate::board::Cell;
use Direction::*;

pub const INITIAL_SNAKE_LENGTH: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit vector of the heading, with y growing downwards.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Body segments, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// Lays out `size` segments trailing behind `head`, away from `direction`.
    pub fn new(head: Cell, size: usize, direction: Direction, block: i32) -> Self {
        let back = direction.opposite();
        let body = (0..size.max(1) as i32)
            .map(|i| {
                let (dx, dy) = back.vector();
                Cell::new(head.x + dx * block * i, head.y + dy * block * i)
            })
            .collect();
        Snake { body }
    }

    pub fn from_body(body: Vec<Cell>) -> Self {
        assert!(!body.is_empty(), "a snake needs at least a head");
        Snake { body }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// The snake one tick later: `new_head` in front and every other segment
    /// taking its predecessor's place. Built from `self` as an untouched
    /// snapshot, so no segment ever reads an already-moved neighbour.
    pub fn stepped(&self, new_head: Cell) -> Snake {
        let mut body = Vec::with_capacity(self.body.len() + 1);
        body.push(new_head);
        body.extend_from_slice(&self.body[..self.body.len() - 1]);
        Snake { body }
    }

    /// Appends a copy of `segment` at the tail end.
    pub fn grow(&mut self, segment: Cell) {
        self.body.push(segment);
    }
}
