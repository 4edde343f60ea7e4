//! One tick of movement: shift, eat and grow, then wall and body checks.

use crate::board::{Board, Cell};
use crate::food::FoodSource;
use crate::snake::{Direction, Snake};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Collided(Collision),
    /// Food was eaten and no free cell is left for the next one.
    BoardFull,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advance {
    pub snake: Snake,
    pub food: Option<Cell>,
    pub score_delta: u32,
    pub outcome: Outcome,
}

/// Moves `snake` one block along `heading`.
///
/// Eating is resolved before the wall and body checks, but the checks still
/// run against the same new head, so a fatal tick keeps its score increment.
pub fn advance<F: FoodSource + ?Sized>(
    board: &Board,
    snake: &Snake,
    heading: Direction,
    food: Cell,
    food_source: &mut F,
) -> Advance {
    let new_head = snake.head().step(heading, board.block());
    let mut next = snake.stepped(new_head);

    let mut next_food = Some(food);
    let mut score_delta = 0;
    if new_head == food {
        next.grow(snake.tail());
        score_delta = 1;
        next_food = food_source.place(board, &next);
    }

    // The growth duplicate sits at the end and is exempt from the body check.
    let shifted = &next.body()[1..snake.len()];

    let outcome = if !board.contains(new_head) {
        Outcome::Collided(Collision::Wall)
    } else if shifted.contains(&new_head) {
        Outcome::Collided(Collision::Body)
    } else if next_food.is_none() {
        Outcome::BoardFull
    } else {
        Outcome::Continue
    };

    Advance { snake: next, food: next_food, score_delta, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    /// Hands out cells in order, skipping any the snake covers.
    struct Scripted(Vec<Cell>);

    impl FoodSource for Scripted {
        fn place(&mut self, _board: &Board, snake: &Snake) -> Option<Cell> {
            while !self.0.is_empty() {
                let cell = self.0.remove(0);
                if !snake.occupies(cell) {
                    return Some(cell);
                }
            }
            None
        }
    }

    fn board() -> Board {
        Board::new(10, 10, 1)
    }

    fn line(head: Cell, len: usize) -> Snake {
        Snake::new(head, len, Right, 1)
    }

    #[test]
    fn plain_move_keeps_length_and_food() {
        let snake = line(Cell::new(3, 0), 4);
        let adv = advance(&board(), &snake, Right, Cell::new(9, 9), &mut Scripted(vec![]));

        assert_eq!(adv.outcome, Outcome::Continue);
        assert_eq!(adv.score_delta, 0);
        assert_eq!(adv.food, Some(Cell::new(9, 9)));
        assert_eq!(
            adv.snake.body(),
            &[Cell::new(4, 0), Cell::new(3, 0), Cell::new(2, 0), Cell::new(1, 0)]
        );
    }

    #[test]
    fn eating_grows_by_the_old_tail_and_replaces_food() {
        let snake = line(Cell::new(3, 0), 4);
        let mut source = Scripted(vec![Cell::new(5, 5)]);
        let adv = advance(&board(), &snake, Right, Cell::new(4, 0), &mut source);

        assert_eq!(adv.outcome, Outcome::Continue);
        assert_eq!(adv.score_delta, 1);
        assert_eq!(adv.food, Some(Cell::new(5, 5)));
        assert_eq!(adv.snake.len(), 5);
        assert_eq!(adv.snake.tail(), Cell::new(0, 0));
        assert_eq!(adv.snake.body()[3], Cell::new(1, 0));
    }

    #[test]
    fn growth_duplicate_moves_apart_on_the_next_tick() {
        let snake = line(Cell::new(3, 0), 4);
        let mut source = Scripted(vec![Cell::new(9, 9)]);
        let grown = advance(&board(), &snake, Right, Cell::new(4, 0), &mut source).snake;
        let adv = advance(&board(), &grown, Right, Cell::new(9, 9), &mut source);

        assert_eq!(adv.outcome, Outcome::Continue);
        assert_eq!(
            adv.snake.body(),
            &[Cell::new(5, 0), Cell::new(4, 0), Cell::new(3, 0), Cell::new(2, 0), Cell::new(1, 0)]
        );
    }

    #[test]
    fn leaving_the_board_is_a_wall_collision() {
        let snake = line(Cell::new(9, 9), 4);
        let adv = advance(&board(), &snake, Right, Cell::new(0, 0), &mut Scripted(vec![]));
        assert_eq!(adv.outcome, Outcome::Collided(Collision::Wall));

        let snake = Snake::new(Cell::new(0, 0), 2, Up, 1);
        let adv = advance(&board(), &snake, Up, Cell::new(5, 5), &mut Scripted(vec![]));
        assert_eq!(adv.outcome, Outcome::Collided(Collision::Wall));
    }

    #[test]
    fn reversing_into_the_neck_is_a_body_collision() {
        let snake = line(Cell::new(3, 0), 4);
        let adv = advance(&board(), &snake, Left, Cell::new(9, 9), &mut Scripted(vec![]));

        assert_eq!(adv.snake.body()[2], Cell::new(2, 0));
        assert_eq!(adv.outcome, Outcome::Collided(Collision::Body));
    }

    #[test]
    fn curling_into_the_body_collides() {
        // Head at (2,1) turning left into (1,1), which stays covered after the shift.
        let snake = Snake::from_body(vec![
            Cell::new(2, 1),
            Cell::new(2, 2),
            Cell::new(1, 2),
            Cell::new(1, 1),
            Cell::new(1, 0),
        ]);
        let adv = advance(&board(), &snake, Left, Cell::new(9, 9), &mut Scripted(vec![]));
        assert_eq!(adv.outcome, Outcome::Collided(Collision::Body));
    }

    #[test]
    fn following_the_tail_is_allowed() {
        let snake = Snake::from_body(vec![
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(0, 1),
            Cell::new(0, 0),
        ]);
        let adv = advance(&board(), &snake, Left, Cell::new(9, 9), &mut Scripted(vec![]));
        assert_eq!(adv.outcome, Outcome::Continue);
        assert_eq!(adv.snake.head(), Cell::new(0, 0));
    }

    #[test]
    fn eating_the_last_free_cell_fills_the_board() {
        let board = Board::new(3, 1, 1);
        let snake = line(Cell::new(1, 0), 2);
        let adv = advance(&board, &snake, Right, Cell::new(2, 0), &mut Scripted(vec![]));

        assert_eq!(adv.outcome, Outcome::BoardFull);
        assert_eq!(adv.food, None);
        assert_eq!(adv.score_delta, 1);
        assert_eq!(adv.snake.len(), 3);
    }

    #[test]
    fn collision_on_an_eating_tick_keeps_the_point() {
        // Food placed outside the board is never reachable normally; here it
        // forces eat and wall collision onto the same head.
        let snake = line(Cell::new(9, 0), 3);
        let mut source = Scripted(vec![Cell::new(4, 4)]);
        let adv = advance(&board(), &snake, Right, Cell::new(10, 0), &mut source);

        assert_eq!(adv.score_delta, 1);
        assert_eq!(adv.snake.len(), 4);
        assert_eq!(adv.outcome, Outcome::Collided(Collision::Wall));
    }
}
