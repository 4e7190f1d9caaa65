//! High-score persistence
//!
//! The record is a JSON object with a single integer field:
//!
//! ```json
//! {"highscore": 1230}
//! ```
//!
//! Loading never fails from the player's point of view: a missing, unreadable
//! or malformed file counts as a high score of 0. Saving reports errors so the
//! caller can log them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreRecord {
    #[serde(default)]
    highscore: u32,
}

/// File-backed high-score store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored high score, or 0 if there is no usable record
    pub fn load(&self) -> u32 {
        self.try_load().unwrap_or(0)
    }

    /// Stored high score; a missing file is 0, other failures are errors
    pub fn try_load(&self) -> Result<u32> {
        if !self.path.exists() {
            return Ok(0);
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let record: HighScoreRecord = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(record.highscore)
    }

    /// Overwrite the record with `score`
    pub fn save(&self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string(&HighScoreRecord { highscore: score })?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Save `score` only if it beats `previous`; returns whether it was saved
    pub fn save_if_higher(&self, score: u32, previous: u32) -> Result<bool> {
        if score <= previous {
            return Ok(false);
        }
        self.save(score)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        std::env::temp_dir().join(format!("blockfall_store_{name}_{nanos}.json"))
    }

    #[test]
    fn missing_file_loads_zero() {
        let store = HighScoreStore::new(temp_path("missing"));
        assert_eq!(store.load(), 0);
        assert_eq!(store.try_load().unwrap(), 0);
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("roundtrip");
        let store = HighScoreStore::new(&path);

        store.save(1230).unwrap();
        assert_eq!(store.load(), 1230);
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"highscore":1230}"#);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn malformed_file_loads_zero() {
        let path = temp_path("malformed");
        fs::write(&path, "not json").unwrap();
        let store = HighScoreStore::new(&path);

        assert_eq!(store.load(), 0);
        assert!(store.try_load().is_err());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_field_loads_zero() {
        let path = temp_path("nofield");
        fs::write(&path, "{}").unwrap();
        assert_eq!(HighScoreStore::new(&path).load(), 0);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn save_if_higher_only_on_improvement() {
        let path = temp_path("higher");
        let store = HighScoreStore::new(&path);

        assert!(!store.save_if_higher(50, 50).unwrap());
        assert!(!path.exists());
        assert!(store.save_if_higher(60, 50).unwrap());
        assert_eq!(store.load(), 60);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = temp_path("dir");
        let path = dir.join("nested").join("highscore.json");
        let store = HighScoreStore::new(&path);

        store.save(7).unwrap();
        assert_eq!(store.load(), 7);

        let _ = fs::remove_dir_all(dir);
    }
}
