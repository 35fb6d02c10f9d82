//! Navigation target and input widget seams.

pub mod model;
pub mod navigator;

pub use model::MapParams;
pub use navigator::{InputWidget, Navigator};
