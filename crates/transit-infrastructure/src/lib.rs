pub mod config_service;
pub mod dto;
pub mod paths;
pub mod storage;
pub mod toml_favorites_repository;
pub mod toml_history_repository;
pub mod toml_line_catalog;

pub use crate::config_service::ConfigService;
pub use crate::paths::TransitPaths;
pub use crate::toml_favorites_repository::TomlFavoritesRepository;
pub use crate::toml_history_repository::TomlHistoryRepository;
pub use crate::toml_line_catalog::TomlLineCatalog;
