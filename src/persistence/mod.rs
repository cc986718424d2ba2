//! Best score persistence
//!
//! The engine only ever needs one number that outlives a session. Stores are
//! best-effort: a write that fails is logged and the game carries on.
//!
//! - [`MemoryStore`]: process-lifetime only (tests, headless runs)
//! - [`JsonFileStore`]: a small JSON record on disk (native)
//! - [`LocalStorageStore`]: browser LocalStorage (wasm32)

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use serde::{Deserialize, Serialize};

/// Where the best score lives between sessions
pub trait BestScoreStore {
    /// Previously recorded best, if any
    fn get_best_score(&self) -> Option<u64>;
    /// Record a new best
    fn set_best_score(&mut self, score: u64);
}

/// On-disk / in-storage shape of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub best_score: u64,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Option<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u64) -> Self {
        Self { best: Some(best) }
    }
}

impl BestScoreStore for MemoryStore {
    fn get_best_score(&self) -> Option<u64> {
        self.best
    }

    fn set_best_score(&mut self, score: u64) {
        self.best = Some(score);
    }
}
