//! Search history records and their store.

pub mod model;
pub mod repository;

pub use model::{History, sort_most_recent_first};
pub use repository::HistoryRepository;
