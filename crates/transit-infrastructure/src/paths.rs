//! Path management for transit-search files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/transit-search/     # Config directory
//! ├── config.toml               # Search screen configuration
//! └── logs/                     # Application logs
//!
//! ~/.local/share/transit-search/ # Data directory
//! ├── lines.toml                # Bundled line catalog
//! ├── favorites.toml            # Favorite lines
//! └── history.toml              # Past searches
//! ```
//!
//! Both roots can be overridden, which is how tests and the CLI's
//! `--data-dir` flag point the stores somewhere else.

use std::path::PathBuf;
use thiserror::Error;

pub const APP_DIR_NAME: &str = "transit-search";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("Cannot find the platform {0} directory")]
    BaseDirNotFound(&'static str),
}

/// Resolves where configuration, data and logs live.
#[derive(Debug, Clone, Default)]
pub struct TransitPaths {
    config_override: Option<PathBuf>,
    data_override: Option<PathBuf>,
}

impl TransitPaths {
    /// Creates a resolver; `None` means the platform default.
    pub fn new(config_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> Self {
        Self {
            config_override: config_dir,
            data_override: data_dir,
        }
    }

    /// Returns the configuration directory (e.g. `~/.config/transit-search/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.config_override {
            Some(dir) => Ok(dir.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::BaseDirNotFound("config")),
        }
    }

    /// Returns the data directory (e.g. `~/.local/share/transit-search/`).
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.data_override {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::BaseDirNotFound("data")),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }

    pub fn catalog_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("lines.toml"))
    }

    pub fn favorites_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("favorites.toml"))
    }

    pub fn history_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("history.toml"))
    }
}
