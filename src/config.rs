use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::board::{Board, BLOCK, BOARD_HEIGHT, BOARD_WIDTH};
use crate::snake::INITIAL_SNAKE_LENGTH;
use crate::store::DEFAULT_SCORE_FILE;

pub const TICK_INTERVAL_MS: u64 = 100;
pub const DEFAULT_LOG_FILE: &str = "blocksnake.log";

/// Largest grid, in cells, on either axis. Keeps the terminal layout well
/// inside `TermInt` and food placement cheap.
pub const MAX_GRID_SIDE: i32 = 500;

#[derive(Debug, Parser)]
#[command(name = "blocksnake", version, about = "Snake on a fixed grid, in the terminal")]
pub struct Args {
    /// Milliseconds between ticks
    #[arg(long, default_value_t = TICK_INTERVAL_MS)]
    pub tick_ms: u64,

    /// Board width in board units
    #[arg(long, default_value_t = BOARD_WIDTH)]
    pub width: i32,

    /// Board height in board units
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    pub height: i32,

    /// Size of one cell in board units
    #[arg(long, default_value_t = BLOCK)]
    pub block: i32,

    /// Where the high score is kept
    #[arg(long, default_value = DEFAULT_SCORE_FILE)]
    pub score_file: PathBuf,

    /// Keep the high score in memory only
    #[arg(long)]
    pub no_save: bool,

    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("block size must be positive, got {0}")]
    Block(i32),
    #[error("board must be a positive multiple of the block size, got {width}x{height} with block {block}")]
    Board { width: i32, height: i32, block: i32 },
    #[error("tick interval must be positive")]
    Tick,
    #[error("board of {columns}x{rows} cells is too small for a snake of {snake_len}")]
    TooSmall { columns: i32, rows: i32, snake_len: usize },
    #[error("board of {columns}x{rows} cells exceeds the {max}x{max} limit")]
    TooLarge { columns: i32, rows: i32, max: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub board: Board,
    pub tick: Duration,
    pub snake_len: usize,
}

impl Settings {
    pub fn new(board: Board, tick: Duration, snake_len: usize) -> Result<Self, ConfigError> {
        let (width, height, block) = (board.width(), board.height(), board.block());
        if block <= 0 {
            return Err(ConfigError::Block(block));
        }
        if width <= 0 || height <= 0 || width % block != 0 || height % block != 0 {
            return Err(ConfigError::Board { width, height, block });
        }
        if tick.is_zero() {
            return Err(ConfigError::Tick);
        }

        let (columns, rows) = (board.columns(), board.rows());
        if columns > MAX_GRID_SIDE || rows > MAX_GRID_SIDE {
            return Err(ConfigError::TooLarge { columns, rows, max: MAX_GRID_SIDE });
        }

        // The snake starts stretched along the top row and needs room for food.
        let cells = columns as usize * rows as usize;
        if snake_len == 0 || snake_len > columns as usize || snake_len >= cells {
            return Err(ConfigError::TooSmall { columns, rows, snake_len });
        }

        Ok(Settings { board, tick, snake_len })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            board: Board::default(),
            tick: Duration::from_millis(TICK_INTERVAL_MS),
            snake_len: INITIAL_SNAKE_LENGTH,
        }
    }
}

impl Args {
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        Settings::new(
            Board::new(self.width, self.height, self.block),
            Duration::from_millis(self.tick_ms),
            INITIAL_SNAKE_LENGTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("blocksnake").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_the_classic_board() {
        let args = parse(&[]);
        assert_eq!(args.settings().unwrap(), Settings::default());
        assert_eq!(args.score_file, PathBuf::from(DEFAULT_SCORE_FILE));
        assert!(!args.no_save);
    }

    #[test]
    fn custom_board() {
        let settings = parse(&["--width", "200", "--height", "100", "--block", "10", "--tick-ms", "50"])
            .settings()
            .unwrap();
        assert_eq!(settings.board.columns(), 20);
        assert_eq!(settings.board.rows(), 10);
        assert_eq!(settings.tick, Duration::from_millis(50));
    }

    #[test]
    fn rejects_bad_geometry() {
        assert_eq!(parse(&["--block", "0"]).settings(), Err(ConfigError::Block(0)));
        assert_eq!(
            parse(&["--width", "510"]).settings(),
            Err(ConfigError::Board { width: 510, height: 500, block: 25 })
        );
        assert_eq!(parse(&["--tick-ms", "0"]).settings(), Err(ConfigError::Tick));
        assert!(matches!(
            parse(&["--width", "75"]).settings(),
            Err(ConfigError::TooSmall { columns: 3, .. })
        ));
    }

    #[test]
    fn rejects_boards_too_big_for_a_terminal() {
        assert_eq!(
            parse(&["--width", "32767", "--height", "65533", "--block", "1"]).settings(),
            Err(ConfigError::TooLarge { columns: 32767, rows: 65533, max: MAX_GRID_SIDE })
        );
        assert_eq!(
            Settings::new(Board::new(501, 10, 1), Duration::from_millis(100), 4),
            Err(ConfigError::TooLarge { columns: 501, rows: 10, max: MAX_GRID_SIDE })
        );

        let widest = Settings::new(Board::new(500, 500, 1), Duration::from_millis(100), 4).unwrap();
        assert_eq!(widest.board.columns(), MAX_GRID_SIDE);
    }
}
