//! TOML-based LineCatalog implementation

use crate::dto::{CatalogFile, StoreFile};
use crate::storage::{AtomicTomlFile, run_blocking};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::OnceCell;
use transit_core::error::{Result, TransitError};
use transit_core::{Line, LineCatalog};

/// Serves the line catalog from a `lines.toml` file.
///
/// ```toml
/// [[line]]
/// code = "10"
/// description = "Downtown"
/// ```
///
/// The file is read once, on the first request, and kept in memory.
pub struct TomlLineCatalog {
    file: AtomicTomlFile<CatalogFile>,
    lines: OnceCell<Vec<Line>>,
}

impl TomlLineCatalog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
            lines: OnceCell::new(),
        }
    }

    async fn lines(&self) -> Result<&Vec<Line>> {
        self.lines
            .get_or_try_init(|| async {
                let file = self.file.clone();
                let lines = run_blocking(move || {
                    let catalog = file.load()?.unwrap_or_default();
                    catalog.ensure_supported(file.path())?;
                    Ok(catalog.lines.into_iter().map(Line::from).collect::<Vec<_>>())
                })
                .await?;
                tracing::debug!(
                    "[Catalog] Loaded {} lines from {:?}",
                    lines.len(),
                    self.file.path()
                );
                Ok::<_, TransitError>(lines)
            })
            .await
    }
}

#[async_trait]
impl LineCatalog for TomlLineCatalog {
    async fn get_all(&self) -> Result<Vec<Line>> {
        Ok(self.lines().await?.clone())
    }

    async fn get_slice(&self, limit: usize, skip: usize) -> Result<Vec<Line>> {
        Ok(self
            .lines()
            .await?
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }
}
