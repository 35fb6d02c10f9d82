//! Favorites repository trait.
//!
//! Defines the interface for favorite-line persistence operations.

use crate::error::Result;
use crate::line::Line;
use async_trait::async_trait;

/// An abstract repository for the user's favorite lines.
///
/// The boolean returned by `save` and `remove` reports whether the store
/// confirmed the change. Callers only update their local view of the
/// favorites after a `true` response.
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// Retrieves every persisted favorite.
    async fn get_all(&self) -> Result<Vec<Line>>;

    /// Marks `line` as a favorite.
    async fn save(&self, line: &Line) -> Result<bool>;

    /// Removes `line` from the favorites.
    async fn remove(&self, line: &Line) -> Result<bool>;
}
