//! Best-score persistence.
//!
//! The session only ever needs two operations, so persistence is an injected
//! [`BestScoreStore`]. [`FileStore`] keeps the score in a small TOML file;
//! [`MemoryStore`] backs tests and `--no-save` runs.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_2048::Score;
use tracing::{debug, info, instrument};

/// Read/write capability for the persisted best score.
pub trait BestScoreStore {
    /// Returns the stored best score, or 0 if nothing was stored yet.
    fn load_best_score(&self) -> Result<Score, StoreError>;

    /// Replaces the stored best score.
    fn save_best_score(&mut self, score: Score) -> Result<(), StoreError>;
}

impl<T: BestScoreStore + ?Sized> BestScoreStore for Box<T> {
    fn load_best_score(&self) -> Result<Score, StoreError> {
        (**self).load_best_score()
    }

    fn save_best_score(&mut self, score: Score) -> Result<(), StoreError> {
        (**self).save_best_score(score)
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_new::new)]
pub struct MemoryStore {
    best: Score,
    #[new(default)]
    saves: usize,
}

impl MemoryStore {
    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best_score(&self) -> Result<Score, StoreError> {
        Ok(self.best)
    }

    fn save_best_score(&mut self, score: Score) -> Result<(), StoreError> {
        self.best = score;
        self.saves += 1;
        Ok(())
    }
}

/// On-disk layout of the score file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    best_score: Score,
}

/// Store backed by a TOML file (`best_score = N`).
///
/// A missing file reads as 0; the file and its parent directories are
/// created on first save.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct FileStore {
    #[new(into)]
    path: PathBuf,
}

impl FileStore {
    /// Path of the score file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for FileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_best_score(&self) -> Result<Score, StoreError> {
        if !self.path.exists() {
            debug!("Score file not found, starting from 0");
            return Ok(0);
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::new(format!("Failed to read score file: {}", e)))?;
        let file: ScoreFile = toml::from_str(&content)
            .map_err(|e| StoreError::new(format!("Failed to parse score file: {}", e)))?;

        info!(best_score = file.best_score, "Best score loaded");
        Ok(file.best_score)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn save_best_score(&mut self, score: Score) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::new(format!("Failed to create score directory: {}", e)))?;
        }

        let content = toml::to_string(&ScoreFile { best_score: score })
            .map_err(|e| StoreError::new(format!("Failed to encode score: {}", e)))?;
        std::fs::write(&self.path, content)
            .map_err(|e| StoreError::new(format!("Failed to write score file: {}", e)))?;

        debug!(score, "Best score saved");
        Ok(())
    }
}

/// Best-score store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
