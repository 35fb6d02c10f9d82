//! Configuration service implementation.
//!
//! Loads the search screen's `SearchConfig` from
//! `~/.config/transit-search/config.toml`.

use crate::paths::TransitPaths;
use crate::storage::AtomicTomlFile;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};
use transit_core::error::{Result, TransitError};
use transit_core::SearchConfig;

/// Configuration service that loads and caches the search configuration.
///
/// A missing file is created with default values on first access. The
/// loaded configuration is validated and cached until `invalidate_cache`.
#[derive(Debug, Clone)]
pub struct ConfigService {
    file: AtomicTomlFile<SearchConfig>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<SearchConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the default config path.
    pub fn new(paths: &TransitPaths) -> Result<Self> {
        let path = paths
            .config_file()
            .map_err(|e| TransitError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service reading a custom config path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading it from disk if not cached.
    pub fn get_config(&self) -> Result<SearchConfig> {
        {
            let cached = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = self.load_config()?;
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn load_config(&self) -> Result<SearchConfig> {
        let config = match self.file.load()? {
            Some(config) => config,
            None => {
                let config = SearchConfig::default();
                tracing::info!(
                    "[Config] Writing default configuration to {:?}",
                    self.file.path()
                );
                self.file.save(&config)?;
                config
            }
        };
        config.validate()?;
        Ok(config)
    }
}
