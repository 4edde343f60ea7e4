use std::io;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::board::Cell;
use crate::config::Settings;
use crate::direction::DirectionController;
use crate::engine::{self, Outcome};
use crate::food::FoodSource;
use crate::input::Input;
use crate::render::{Paint, Renderer};
use crate::scheduler::Scheduler;
use crate::snake::{Direction::{self, *}, Snake};
use crate::store::ScoreStore;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    Ended,
}

/// Everything that belongs to one game. Restarting replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Cell>,
    pub score: u32,
    pub controller: DirectionController,
    pub status: Status,
}

impl GameState {
    /// A running game, or an ended one if there is nowhere to put food.
    pub fn new(snake: Snake, heading: Direction, food: Option<Cell>) -> Self {
        let status = if food.is_some() { Status::Running } else { Status::Ended };
        GameState { snake, food, score: 0, controller: DirectionController::new(heading), status }
    }

    /// The opening position: the snake stretched along the top row, heading right.
    pub fn fresh<F: FoodSource + ?Sized>(settings: &Settings, food_source: &mut F) -> Self {
        let block = settings.board.block();
        let head = Cell::new(block * (settings.snake_len as i32 - 1), 0);
        let snake = Snake::new(head, settings.snake_len, Right, block);
        let food = food_source.place(&settings.board, &snake);
        GameState::new(snake, Right, food)
    }

    pub fn heading(&self) -> Direction {
        self.controller.heading()
    }
}

/// The game loop: owns the state, the tick timer and both collaborators'
/// handles, and sequences a tick through controller, engine and renderer.
pub struct Game<F, S> {
    settings: Settings,
    state: GameState,
    high_score: u32,
    food_source: F,
    store: S,
    scheduler: Scheduler,
}

impl<F: FoodSource, S: ScoreStore> Game<F, S> {
    /// Starts a fresh game with its first tick due at `now`.
    pub fn new(settings: Settings, mut food_source: F, store: S, now: Instant) -> Self {
        let state = GameState::fresh(&settings, &mut food_source);
        Self::with_state(settings, state, food_source, store, now)
    }

    /// Resumes from an arbitrary state; a running state gets a tick due at `now`.
    pub fn with_state(settings: Settings, state: GameState, food_source: F, store: S, now: Instant) -> Self {
        let high_score = store.high_score();
        let mut scheduler = Scheduler::new(settings.tick);
        if state.status == Status::Running {
            scheduler.schedule_now(now);
        }

        info!(
            columns = settings.board.columns(),
            rows = settings.board.rows(),
            tick_ms = settings.tick.as_millis() as u64,
            high_score,
            "game started"
        );
        Game { settings, state, high_score, food_source, store, scheduler }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_tick_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn next_tick(&self) -> Option<Instant> {
        self.scheduler.deadline()
    }

    pub fn handle_input<D: Renderer>(&mut self, input: Input, now: Instant, renderer: &mut D) -> io::Result<()> {
        match input {
            Input::Turn(direction) => {
                if let Err(reason) = self.state.controller.request_turn(direction, self.state.status) {
                    debug!(?direction, %reason, "turn ignored");
                }
                Ok(())
            }
            Input::TogglePause => self.toggle_pause(now, renderer),
            Input::Restart => self.restart(now, renderer),
            // Leaving is up to whoever drives the loop.
            Input::Quit => Ok(()),
        }
    }

    /// Runs the pending tick if it is due. Returns whether a tick ran.
    pub fn run_due<D: Renderer>(&mut self, now: Instant, renderer: &mut D) -> io::Result<bool> {
        if !self.scheduler.fire(now) {
            return Ok(false);
        }
        self.tick(now, renderer)?;
        Ok(true)
    }

    /// Throws the current game away and starts over, whatever the status.
    pub fn restart<D: Renderer>(&mut self, now: Instant, renderer: &mut D) -> io::Result<()> {
        self.scheduler.cancel();
        self.state = GameState::fresh(&self.settings, &mut self.food_source);
        self.high_score = self.store.high_score();
        info!(high_score = self.high_score, "game restarted");

        self.draw(renderer)?;
        if self.state.status == Status::Ended {
            return self.finish(renderer);
        }
        self.scheduler.schedule_now(now);
        Ok(())
    }

    /// Paints the board, snake, food and status line.
    pub fn draw<D: Renderer>(&self, renderer: &mut D) -> io::Result<()> {
        renderer.clear_board()?;
        for (i, cell) in self.state.snake.body().iter().enumerate() {
            let paint = if i == 0 { Paint::Head } else { Paint::Body };
            renderer.draw_cell(*cell, paint)?;
        }
        if let Some(food) = self.state.food {
            renderer.draw_cell(food, Paint::Food)?;
        }
        renderer.draw_status(self.state.score, self.high_score)
    }

    fn toggle_pause<D: Renderer>(&mut self, now: Instant, renderer: &mut D) -> io::Result<()> {
        match self.state.status {
            Status::Running => {
                self.state.status = Status::Paused;
                self.scheduler.cancel();
                info!(score = self.state.score, "paused");
                renderer.draw_overlay("Game Paused", "Press Space to Resume", None)
            }
            Status::Paused => {
                self.state.status = Status::Running;
                self.scheduler.schedule_now(now);
                info!("resumed");
                Ok(())
            }
            Status::Ended => Ok(()),
        }
    }

    fn tick<D: Renderer>(&mut self, now: Instant, renderer: &mut D) -> io::Result<()> {
        if self.state.status != Status::Running {
            return Ok(());
        }

        self.draw(renderer)?;
        self.state.controller.clear_tick_flag();

        let food = match self.state.food {
            Some(food) => food,
            None => return self.finish(renderer),
        };
        let heading = self.state.controller.heading();
        let adv = engine::advance(&self.settings.board, &self.state.snake, heading, food, &mut self.food_source);

        self.state.snake = adv.snake;
        self.state.food = adv.food;
        self.state.score += adv.score_delta;

        match adv.outcome {
            Outcome::Continue => {
                if adv.score_delta > 0 {
                    debug!(score = self.state.score, len = self.state.snake.len(), "food eaten");
                }
                self.scheduler.schedule_next(now);
                Ok(())
            }
            Outcome::Collided(collision) => {
                info!(?collision, score = self.state.score, "snake crashed");
                self.finish(renderer)
            }
            Outcome::BoardFull => {
                info!(score = self.state.score, "board filled");
                self.finish(renderer)
            }
        }
    }

    fn finish<D: Renderer>(&mut self, renderer: &mut D) -> io::Result<()> {
        self.state.status = Status::Ended;
        self.scheduler.cancel();

        let score = self.state.score;
        if score > self.high_score {
            self.high_score = score;
            match self.store.set_high_score(score) {
                Ok(()) => info!(score, "new high score"),
                Err(e) => error!("failed to save high score: {}", e),
            }
        }

        renderer.draw_status(score, self.high_score)?;
        renderer.draw_overlay("Game Over!", &format!("Score: {}", score), Some("Press 'R' to Restart"))
    }
}
