pub mod config;
pub mod error;
pub mod favorite;
pub mod history;
pub mod line;
pub mod navigation;

// Re-export common error type
pub use error::{Result, TransitError};

pub use config::SearchConfig;
pub use favorite::FavoritesRepository;
pub use history::{History, HistoryRepository};
pub use line::{Line, LineCatalog};
pub use navigation::{InputWidget, MapParams, Navigator};
