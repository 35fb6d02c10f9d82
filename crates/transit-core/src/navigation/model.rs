//! Navigation parameters for the map screen.

use crate::line::Line;
use serde::{Deserialize, Serialize};

/// Parameter bag pushed to the map screen.
///
/// A structured selection carries the chosen line; a free-text search carries
/// the normalized query instead.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MapParams {
    Line { line: Line },
    Query { query: String },
}

impl MapParams {
    /// The text shown as the map's subject.
    pub fn label(&self) -> &str {
        match self {
            MapParams::Line { line } => &line.code,
            MapParams::Query { query } => query,
        }
    }
}
