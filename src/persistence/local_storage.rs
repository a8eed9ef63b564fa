//! Browser LocalStorage backend

use super::{HighScoreStore, StorageError, StoredValue, decode};
use crate::platform;

/// Best score kept in `window.localStorage`
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "flappy_gates_highscore";

    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load_high_score(&self) -> u32 {
        let json = Self::storage().and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());

        match json {
            Some(json) => {
                let score = decode(&json, platform::now_ms());
                log::info!("Loaded high score {}", score);
                score
            }
            None => {
                log::info!("No high score found, starting fresh");
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32, ttl_days: u32) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        let json = StoredValue::new(score, ttl_days, platform::now_ms()).to_json()?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|_| StorageError::Rejected)?;
        log::info!("High score {} saved", score);
        Ok(())
    }
}
