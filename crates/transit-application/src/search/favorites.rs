//! Favorite lines tracking.

use super::generation::{Generation, read, write};
use std::sync::{Arc, RwLock};
use transit_core::error::Result;
use transit_core::{FavoritesRepository, Line};

/// Result of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    /// The store saved the line and it is now a favorite
    Starred,
    /// The store removed the line and it is no longer a favorite
    Unstarred,
    /// The store declined the change; membership is as before
    Unchanged,
}

/// Local mirror of the persisted favorites.
///
/// The local set only changes after the store confirms a write, so there is
/// never an optimistic update to roll back.
pub struct FavoritesTracker {
    store: Arc<dyn FavoritesRepository>,
    favorites: RwLock<Vec<Line>>,
    generation: Generation,
}

impl FavoritesTracker {
    pub fn new(store: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            store,
            favorites: RwLock::new(Vec::new()),
            generation: Generation::default(),
        }
    }

    /// Returns true if a favorite shares `line`'s code.
    pub fn is_favorite(&self, line: &Line) -> bool {
        read(&self.favorites).iter().any(|fav| fav.code == line.code)
    }

    pub fn favorites(&self) -> Vec<Line> {
        read(&self.favorites).clone()
    }

    /// Replaces the local set with everything the store holds.
    ///
    /// Returns the number of favorites loaded.
    pub async fn load_all(&self) -> Result<usize> {
        let ticket = self.generation.ticket();
        let loaded = self.store.get_all().await?;

        if !self.generation.is_current(ticket) {
            tracing::debug!("[Favorites] Ignoring favorites loaded before reset");
            return Ok(0);
        }

        let count = loaded.len();
        *write(&self.favorites) = loaded;
        tracing::debug!("[Favorites] Loaded {} favorites", count);
        Ok(count)
    }

    /// Flips `line`'s favorite membership through the store.
    ///
    /// # Returns
    ///
    /// - `Ok(FavoriteToggle::Starred | Unstarred)`: The store confirmed the change
    /// - `Ok(FavoriteToggle::Unchanged)`: The store answered `false`
    /// - `Err(TransitError)`: The store failed; local state is unchanged
    pub async fn toggle(&self, line: &Line) -> Result<FavoriteToggle> {
        let ticket = self.generation.ticket();

        if self.is_favorite(line) {
            if !self.store.remove(line).await? {
                return Ok(FavoriteToggle::Unchanged);
            }
            if self.generation.is_current(ticket) {
                let mut favorites = write(&self.favorites);
                if let Some(index) = favorites.iter().position(|fav| fav.code == line.code) {
                    favorites.remove(index);
                }
            }
            tracing::info!("[Favorites] Removed line {} from favorites", line.code);
            Ok(FavoriteToggle::Unstarred)
        } else {
            if !self.store.save(line).await? {
                return Ok(FavoriteToggle::Unchanged);
            }
            if self.generation.is_current(ticket) {
                write(&self.favorites).push(line.clone());
            }
            tracing::info!("[Favorites] Added line {} to favorites", line.code);
            Ok(FavoriteToggle::Starred)
        }
    }

    pub fn reset(&self) {
        self.generation.advance();
        write(&self.favorites).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_support::{MockFavorites, arc, line};

    #[tokio::test]
    async fn test_is_favorite_compares_codes_only() {
        let store = arc(MockFavorites::new(vec![line("10", "Downtown")]));
        let tracker = FavoritesTracker::new(store);
        tracker.load_all().await.unwrap();

        assert!(tracker.is_favorite(&line("10", "a different description")));
        assert!(!tracker.is_favorite(&line("20", "Downtown")));
    }

    #[tokio::test]
    async fn test_load_all_replaces_local_set() {
        let store = arc(MockFavorites::new(vec![line("10", "Downtown")]));
        let tracker = FavoritesTracker::new(store.clone());
        tracker.load_all().await.unwrap();

        *store.stored.lock().unwrap() = vec![line("20", "Uptown"), line("30", "Harbor")];
        let count = tracker.load_all().await.unwrap();

        assert_eq!(count, 2);
        assert!(!tracker.is_favorite(&line("10", "")));
        assert!(tracker.is_favorite(&line("30", "")));
    }

    #[tokio::test]
    async fn test_double_toggle_restores_membership() {
        let tracker = FavoritesTracker::new(arc(MockFavorites::new(Vec::new())));
        let target = line("10", "Downtown");

        assert_eq!(tracker.toggle(&target).await.unwrap(), FavoriteToggle::Starred);
        assert!(tracker.is_favorite(&target));

        assert_eq!(tracker.toggle(&target).await.unwrap(), FavoriteToggle::Unstarred);
        assert!(!tracker.is_favorite(&target));
    }

    #[tokio::test]
    async fn test_declined_write_leaves_set_unchanged() {
        let store = arc(MockFavorites::new(vec![line("10", "Downtown")]));
        let tracker = FavoritesTracker::new(store.clone());
        tracker.load_all().await.unwrap();
        store.set_accept(false);

        let unstar = tracker.toggle(&line("10", "Downtown")).await.unwrap();
        let star = tracker.toggle(&line("20", "Uptown")).await.unwrap();

        assert_eq!(unstar, FavoriteToggle::Unchanged);
        assert_eq!(star, FavoriteToggle::Unchanged);
        assert_eq!(tracker.favorites(), vec![line("10", "Downtown")]);
    }

    #[tokio::test]
    async fn test_store_failure_leaves_set_unchanged() {
        let store = arc(MockFavorites::new(Vec::new()));
        let tracker = FavoritesTracker::new(store.clone());
        store.set_fail(true);

        assert!(tracker.toggle(&line("10", "Downtown")).await.is_err());
        assert!(tracker.favorites().is_empty());
    }

    #[tokio::test]
    async fn test_unstar_removes_only_first_match() {
        // Duplicate entries can exist if the store returned them
        let store = arc(MockFavorites::new(vec![
            line("10", "Downtown"),
            line("20", "Uptown"),
            line("10", "Downtown"),
        ]));
        let tracker = FavoritesTracker::new(store);
        tracker.load_all().await.unwrap();

        tracker.toggle(&line("10", "Downtown")).await.unwrap();

        assert_eq!(
            tracker.favorites(),
            vec![line("20", "Uptown"), line("10", "Downtown")]
        );
        assert!(tracker.is_favorite(&line("10", "")));
    }
}
