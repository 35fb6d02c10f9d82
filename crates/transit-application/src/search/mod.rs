//! Search screen session: catalog paging, favorites, filtering and selection.

mod controller;
mod favorites;
mod filter;
mod generation;
mod normalize;
mod paginator;

#[cfg(test)]
mod test_support;

pub use controller::{ActivationReport, SearchDependencies, SearchSessionController, Selection};
pub use favorites::{FavoriteToggle, FavoritesTracker};
pub use filter::{FilterEpisode, TextFilter, filter_lines};
pub use normalize::normalize_query;
pub use paginator::{CatalogPaginator, PaginationCursor};
