//! Favorite lines.

pub mod repository;

pub use repository::FavoritesRepository;
