//! Transit line domain model.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A transit route as served by the line catalog.
///
/// Identity is the route code alone: two `Line`s with the same code are the
/// same line even if their descriptions differ. The serialized field names
/// (`Line`, `Description`) follow the catalog's wire format.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Line {
    /// Route code, e.g. "10" or "600-A"
    #[serde(rename = "Line")]
    pub code: String,
    /// Human readable description of the route
    #[serde(rename = "Description", default)]
    pub description: String,
}

impl Line {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// A synthetic line carrying free-text search input (no description).
    pub fn from_query(query: impl Into<String>) -> Self {
        Self::new(query, String::new())
    }

    /// Case-insensitive substring match against the code or the description.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.code.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}
