use std::fs::File;
use std::sync::Mutex;
use std::{thread::sleep, time::{Duration, Instant}};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blocksnake::config::Args;
use blocksnake::food::{FoodSource, RandomFood};
use blocksnake::game::Game;
use blocksnake::input::Input;
use blocksnake::store::{FileStore, MemoryStore, ScoreStore};
use blocksnake::term::TermManager;

const POLL_INTERVAL_MS: u64 = 5;

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args.settings().context("invalid board settings")?;

    // The terminal belongs to the game, so logs go to a file.
    let log_file = File::create(&args.log_file)
        .with_context(|| format!("cannot create log file {}", args.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "blocksnake=info".into()))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let mut term = TermManager::new(settings.board);
    if !term.fits()? {
        match TermManager::required_size(&settings.board) {
            Some((w, h)) => bail!("terminal too small: need at least {}x{}", w, h),
            None => bail!("board is too large for any terminal"),
        }
    }

    let food = RandomFood::new(rand::thread_rng());
    let res = if args.no_save {
        play(&mut term, Game::new(settings, food, MemoryStore::new(), Instant::now()))
    } else {
        let store = FileStore::new(&args.score_file);
        info!("high score file: {}", store.path().display());
        play(&mut term, Game::new(settings, food, store, Instant::now()))
    };

    term.restore()?;
    res
}

fn play<F: FoodSource, S: ScoreStore>(term: &mut TermManager, mut game: Game<F, S>) -> Result<()> {
    term.setup()?;
    game.draw(term)?;

    loop {
        sleep(Duration::from_millis(POLL_INTERVAL_MS));

        for key_ev in term.read_key_events_queue()? {
            match Input::from_key(&key_ev) {
                Some(Input::Quit) => {
                    info!(score = game.score(), "quit");
                    return Ok(());
                }
                Some(input) => game.handle_input(input, Instant::now(), term)?,
                None => {}
            }
        }

        game.run_due(Instant::now(), term)?;
    }
}
