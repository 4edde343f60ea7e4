use crate::game::Status;
use crate::snake::Direction;

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum TurnRejected {
    #[error("a turn was already taken this tick")]
    AlreadyTurned,
    #[error("cannot reverse onto the body")]
    Reversal,
    #[error("the game is not running")]
    NotRunning,
}

/// Committed heading plus the one-turn-per-tick latch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DirectionController {
    heading: Direction,
    turned: bool,
}

impl DirectionController {
    pub fn new(heading: Direction) -> Self {
        DirectionController { heading, turned: false }
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn has_turned(&self) -> bool {
        self.turned
    }

    /// Commits `direction` right away. Asking for the current heading also
    /// counts as this tick's turn.
    pub fn request_turn(&mut self, direction: Direction, status: Status) -> Result<(), TurnRejected> {
        if self.turned {
            return Err(TurnRejected::AlreadyTurned);
        }
        if status != Status::Running {
            return Err(TurnRejected::NotRunning);
        }
        if direction.is_opposite(self.heading) {
            return Err(TurnRejected::Reversal);
        }

        self.heading = direction;
        self.turned = true;
        Ok(())
    }

    pub fn clear_tick_flag(&mut self) {
        self.turned = false;
    }
}
