//! TOML-based HistoryRepository implementation

use crate::dto::{HistoryFile, HistoryRecord, StoreFile};
use crate::storage::{AtomicTomlFile, run_blocking};
use async_trait::async_trait;
use std::path::PathBuf;
use transit_core::config::DEFAULT_HISTORY_MAX_ENTRIES;
use transit_core::error::{Result, TransitError};
use transit_core::history::sort_most_recent_first;
use transit_core::{History, HistoryRepository};

/// Stores past searches in `history.toml`.
///
/// Keeps at most `max_entries` records; the oldest are dropped first.
pub struct TomlHistoryRepository {
    file: AtomicTomlFile<HistoryFile>,
    max_entries: usize,
}

impl TomlHistoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self::with_max_entries(path, DEFAULT_HISTORY_MAX_ENTRIES)
    }

    pub fn with_max_entries(path: PathBuf, max_entries: usize) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
            max_entries,
        }
    }
}

#[async_trait]
impl HistoryRepository for TomlHistoryRepository {
    async fn save(&self, history: &History) -> Result<bool> {
        let file = self.file.clone();
        let record = HistoryRecord::from(history);
        let max_entries = self.max_entries;
        let dropped = run_blocking(move || {
            file.update(|stored: &mut HistoryFile| {
                stored.ensure_supported(file.path())?;
                stored.entries.push(record);
                stored.entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                let overflow = stored.entries.len().saturating_sub(max_entries);
                stored.entries.truncate(max_entries);
                Ok::<_, TransitError>(overflow)
            })
        })
        .await?;
        if dropped > 0 {
            tracing::debug!("[History] Dropped {} oldest searches", dropped);
        }
        Ok(true)
    }

    async fn get_limited(&self, limit: usize) -> Result<Vec<History>> {
        let file = self.file.clone();
        run_blocking(move || {
            let stored = file.load_or_default()?;
            stored.ensure_supported(file.path())?;
            let mut histories: Vec<History> =
                stored.entries.into_iter().map(History::from).collect();
            sort_most_recent_first(&mut histories);
            histories.truncate(limit);
            Ok(histories)
        })
        .await
    }
}
