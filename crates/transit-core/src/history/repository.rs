//! History repository trait.

use super::model::History;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for past searches.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Persists a search record.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: Record stored
    /// - `Ok(false)`: Store declined the record
    /// - `Err(TransitError)`: Store could not be reached
    async fn save(&self, history: &History) -> Result<bool>;

    /// Retrieves at most `limit` records, most recent first.
    async fn get_limited(&self, limit: usize) -> Result<Vec<History>>;
}
