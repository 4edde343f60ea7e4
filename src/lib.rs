pub mod board;
pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod game;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod snake;
pub mod store;
pub mod term;

pub type TermInt = u16;

pub use board::{Board, Cell};
pub use game::{Game, GameState, Status};
pub use snake::{Direction, Snake};
