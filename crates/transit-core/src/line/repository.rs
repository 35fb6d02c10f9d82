//! Line catalog trait.

use super::model::Line;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract source of transit lines.
///
/// Decouples the search session from where the catalog lives (bundled file,
/// remote API, ...). Paging is skip-based; callers track their own cursor.
#[async_trait]
pub trait LineCatalog: Send + Sync {
    /// Retrieves the whole catalog.
    ///
    /// Used by free-text filtering, which searches the full corpus rather
    /// than the pages loaded so far.
    async fn get_all(&self) -> Result<Vec<Line>>;

    /// Retrieves up to `limit` lines starting at offset `skip`.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Line>)`: The page (may be shorter than `limit`, or empty past the end)
    /// - `Err(TransitError)`: The source rejected the request
    async fn get_slice(&self, limit: usize, skip: usize) -> Result<Vec<Line>>;
}
