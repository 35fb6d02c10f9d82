//! Application layer for transit search.
//!
//! This crate holds the search screen's presentation logic: it reconciles the
//! paginated line catalog, the favorites set, the search history and the live
//! text filter into the list the user sees, and turns selections into history
//! records and map navigation.

pub mod search;

pub use search::{
    ActivationReport, CatalogPaginator, FavoriteToggle, FavoritesTracker, FilterEpisode,
    PaginationCursor, SearchDependencies, SearchSessionController, Selection, TextFilter,
    normalize_query,
};
