//! Leaderboard persistence
//!
//! Reads never fail: a missing, unreadable or malformed record degrades to
//! an all-zero board. Writes report failure so the caller can log it; the
//! in-memory board stays authoritative for the session either way.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::highscores::Leaderboard;

/// Default leaderboard location, relative to the working directory
pub const DEFAULT_SCORES_FILE: &str = "scores.json";

/// Errors raised while persisting the leaderboard
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize leaderboard: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable home for the leaderboard
pub trait LeaderboardStore {
    /// Load the board, falling back to zeros on any problem
    fn load(&self) -> Leaderboard;

    /// Persist the board, overwriting what was there
    fn save(&self, board: &Leaderboard) -> Result<(), StoreError>;

    /// Zero the board and persist it
    fn reset(&self) -> Leaderboard {
        let board = Leaderboard::new();
        if let Err(e) = self.save(&board) {
            log::error!("Failed to persist leaderboard reset: {e}");
        }
        board
    }
}

/// JSON file store (`{"scores": [...]}`)
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCORES_FILE)
    }
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStore for JsonFileStore {
    fn load(&self) -> Leaderboard {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No leaderboard at {}, starting fresh", self.path.display());
                return Leaderboard::new();
            }
            Err(e) => {
                log::warn!("Could not read {}: {e}", self.path.display());
                return Leaderboard::new();
            }
        };

        match serde_json::from_str::<Leaderboard>(&json) {
            Ok(board) => {
                log::info!("Loaded leaderboard from {}", self.path.display());
                board
            }
            Err(e) => {
                log::warn!("Ignoring malformed leaderboard {}: {e}", self.path.display());
                Leaderboard::new()
            }
        }
    }

    fn save(&self, board: &Leaderboard) -> Result<(), StoreError> {
        let json = serde_json::to_string(board)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Leaderboard saved to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store, for tests and read-only environments
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<Leaderboard>>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a board
    pub fn with_board(board: Leaderboard) -> Self {
        Self {
            saved: RefCell::new(Some(board)),
            saves: RefCell::new(0),
        }
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&self) -> Leaderboard {
        self.saved.borrow().clone().unwrap_or_default()
    }

    fn save(&self, board: &Leaderboard) -> Result<(), StoreError> {
        *self.saved.borrow_mut() = Some(board.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

impl<S: LeaderboardStore + ?Sized> LeaderboardStore for &S {
    fn load(&self) -> Leaderboard {
        (**self).load()
    }

    fn save(&self, board: &Leaderboard) -> Result<(), StoreError> {
        (**self).save(board)
    }
}
