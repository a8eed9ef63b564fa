//! High score persistence
//!
//! Features:
//! - Storage boundary trait consumed by the game
//! - JSON envelope carrying an expiry timestamp
//! - In-memory, file (native) and LocalStorage (wasm) backends
//!
//! Reads never fail: a missing, expired or corrupt value loads as 0.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform;

const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Storage failures (never fatal to a session)
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("storage is not available")]
    Unavailable,
    #[error("storage rejected the write")]
    Rejected,
}

/// Where the best score lives between visits
pub trait HighScoreStore {
    /// Stored best score, or 0 if there is none
    fn load_high_score(&self) -> u32;
    /// Overwrite the stored best score, valid for `ttl_days`
    fn save_high_score(&mut self, score: u32, ttl_days: u32) -> Result<(), StorageError>;
}

/// Value plus expiry, as written to every backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredValue {
    pub value: u32,
    /// Unix time in milliseconds
    pub expires_at_ms: f64,
}

impl StoredValue {
    pub fn new(value: u32, ttl_days: u32, now_ms: f64) -> Self {
        Self {
            value,
            expires_at_ms: now_ms + ttl_days as f64 * MS_PER_DAY,
        }
    }

    /// Value if still valid at `now_ms`
    pub fn value_at(&self, now_ms: f64) -> Option<u32> {
        (now_ms < self.expires_at_ms).then_some(self.value)
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Decode a stored envelope, treating anything unusable as "no score"
pub(crate) fn decode(json: &str, now_ms: f64) -> u32 {
    match StoredValue::from_json(json) {
        Ok(stored) => stored.value_at(now_ms).unwrap_or_else(|| {
            log::info!("Stored high score expired, starting fresh");
            0
        }),
        Err(e) => {
            log::warn!("Ignoring unreadable high score: {}", e);
            0
        }
    }
}

/// Process-local store (tests, and the fallback when nothing else works)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entry: Option<StoredValue>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(entry: StoredValue) -> Self {
        Self {
            entry: Some(entry),
            writes: 0,
        }
    }

    /// Store pre-seeded with a score that will not expire during the run
    pub fn with_score(score: u32) -> Self {
        Self::with_entry(StoredValue::new(score, 1, platform::now_ms()))
    }

    pub fn entry(&self) -> Option<StoredValue> {
        self.entry
    }

    /// Number of successful saves
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> u32 {
        self.entry
            .and_then(|e| e.value_at(platform::now_ms()))
            .unwrap_or(0)
    }

    fn save_high_score(&mut self, score: u32, ttl_days: u32) -> Result<(), StorageError> {
        self.entry = Some(StoredValue::new(score, ttl_days, platform::now_ms()));
        self.writes += 1;
        Ok(())
    }
}
