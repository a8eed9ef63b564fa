//! JSON file backend for native builds

use std::fs;
use std::path::{Path, PathBuf};

use super::{HighScoreStore, StorageError, StoredValue, decode};
use crate::platform;

/// Best score kept in a small JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn load_high_score(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                let score = decode(&json, platform::now_ms());
                log::info!("Loaded high score {} from {}", score, self.path.display());
                score
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32, ttl_days: u32) -> Result<(), StorageError> {
        let json = StoredValue::new(score, ttl_days, platform::now_ms()).to_json()?;

        // Write next to the target, then swap in
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "flappy-gates-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_missing_file_is_zero() {
        let store = FileStore::new(temp_path("missing"));
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn test_file_roundtrip() {
        let path = temp_path("roundtrip");
        let mut store = FileStore::new(&path);
        store.save_high_score(27, 999).unwrap();
        assert_eq!(FileStore::new(&path).load_high_score(), 27);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_zero() {
        let path = temp_path("corrupt");
        fs::write(&path, "{{{").unwrap();
        assert_eq!(FileStore::new(&path).load_high_score(), 0);
        let _ = fs::remove_file(&path);
    }
}
