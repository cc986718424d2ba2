//! Best score stored in browser LocalStorage

use super::{BestScoreRecord, BestScoreStore};
use crate::error::StorageError;

#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "circle_shooter_best_score";

    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StorageError::Unavailable("LocalStorage is not accessible".to_string()))
    }

    pub fn load(&self) -> Result<Option<u64>, StorageError> {
        let storage = Self::storage()?;
        let json = storage
            .get_item(Self::STORAGE_KEY)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?;
        match json {
            Some(json) => {
                let record: BestScoreRecord = serde_json::from_str(&json)?;
                Ok(Some(record.best_score))
            }
            None => Ok(None),
        }
    }

    pub fn save(&self, best_score: u64) -> Result<(), StorageError> {
        let storage = Self::storage()?;
        let json = serde_json::to_string(&BestScoreRecord { best_score })?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}

impl BestScoreStore for LocalStorageStore {
    fn get_best_score(&self) -> Option<u64> {
        match self.load() {
            Ok(best) => best,
            Err(e) => {
                log::warn!("No best score loaded: {}", e);
                None
            }
        }
    }

    fn set_best_score(&mut self, score: u64) {
        match self.save(score) {
            Ok(()) => log::info!("Best score {} saved", score),
            Err(e) => log::warn!("Failed to save best score: {}", e),
        }
    }
}
