use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_SCORE_FILE: &str = ".blocksnake_high_score.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed score file {}: {source}", .path.display())]
    Format { path: PathBuf, source: serde_json::Error },
}

/// Keeps the best score across games and sessions.
pub trait ScoreStore {
    /// Best score so far, 0 if none was ever recorded.
    fn high_score(&self) -> u32;

    fn set_high_score(&mut self, score: u32) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Record {
    high_score: u32,
}

/// JSON file holding `{"high_score": N}`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<Record>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path: self.path.clone(), source }),
        };

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StoreError::Format { path: self.path.clone(), source })
    }
}

impl ScoreStore for FileStore {
    fn high_score(&self) -> u32 {
        match self.read() {
            Ok(Some(record)) => record.high_score,
            Ok(None) => 0,
            Err(e) => {
                warn!("ignoring stored high score: {}", e);
                0
            }
        }
    }

    fn set_high_score(&mut self, score: u32) -> Result<(), StoreError> {
        let text = serde_json::to_string(&Record { high_score: score })
            .map_err(|source| StoreError::Format { path: self.path.clone(), source })?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| StoreError::Io { path: dir.to_path_buf(), source })?;
        }
        fs::write(&self.path, text).map_err(|source| StoreError::Io { path: self.path.clone(), source })?;

        debug!("wrote high score {} to {}", score, self.path.display());
        Ok(())
    }
}

/// High score that lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    high_score: u32,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn with_high_score(high_score: u32) -> Self {
        MemoryStore { high_score, writes: 0 }
    }

    /// How many times the high score was written.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn high_score(&self) -> u32 {
        self.high_score
    }

    fn set_high_score(&mut self, score: u32) -> Result<(), StoreError> {
        self.high_score = score;
        self.writes += 1;
        Ok(())
    }
}
