//! Best score stored as a JSON file

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{BestScoreRecord, BestScoreStore};
use crate::error::StorageError;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record; a missing file is not an error
    pub fn load(&self) -> Result<Option<u64>, StorageError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: BestScoreRecord = serde_json::from_str(&json)?;
        Ok(Some(record.best_score))
    }

    /// Write the record through a temp file so a crash never leaves it half-written
    pub fn save(&self, best_score: u64) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string(&BestScoreRecord { best_score })?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl BestScoreStore for JsonFileStore {
    fn get_best_score(&self) -> Option<u64> {
        match self.load() {
            Ok(best) => best,
            Err(e) => {
                log::warn!("Ignoring unreadable best score at {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set_best_score(&mut self, score: u64) {
        match self.save(score) {
            Ok(()) => log::debug!("Best score {} saved to {}", score, self.path.display()),
            Err(e) => log::warn!("Failed to save best score to {}: {}", self.path.display(), e),
        }
    }
}
