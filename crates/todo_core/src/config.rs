//! Store location configuration.
//!
//! # Invariants
//! - `db_path` is always absolute; hosts pass their app-data directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Database file name used when only a directory is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "tododb.sqlite3";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("db path cannot be empty")]
    EmptyPath,
    #[error("db path must be absolute, got `{0}`")]
    RelativePath(String),
}

/// Where the todo store keeps its SQLite file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl StoreConfig {
    /// Places the default database file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = normalize_absolute(dir.as_ref())?;
        Ok(Self {
            db_path: dir.join(DEFAULT_DB_FILE_NAME),
        })
    }

    /// Uses `path` as the database file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self {
            db_path: normalize_absolute(path.as_ref())?,
        })
    }
}

fn normalize_absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyPath);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(ConfigError::RelativePath(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, StoreConfig, DEFAULT_DB_FILE_NAME};

    #[test]
    fn in_dir_appends_default_file_name() {
        let dir = std::env::temp_dir();
        let config = StoreConfig::in_dir(&dir).unwrap();
        assert_eq!(config.db_path, dir.join(DEFAULT_DB_FILE_NAME));
    }

    #[test]
    fn rejects_empty_and_relative_paths() {
        assert_eq!(StoreConfig::in_dir(" "), Err(ConfigError::EmptyPath));
        assert_eq!(
            StoreConfig::from_path("data/todo.db"),
            Err(ConfigError::RelativePath("data/todo.db".to_string()))
        );
    }
}
