//! Transit lines and the catalog they come from.

pub mod model;
pub mod repository;

pub use model::Line;
pub use repository::LineCatalog;
