//! Search history domain model.

use crate::line::Line;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record of one search: the line (or free-text query) and when it ran.
///
/// Created once per search action and never mutated afterwards.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct History {
    pub line: Line,
    pub timestamp: DateTime<Utc>,
}

impl History {
    pub fn new(line: Line, timestamp: DateTime<Utc>) -> Self {
        Self { line, timestamp }
    }

    /// Records `line` as searched right now.
    pub fn now(line: Line) -> Self {
        Self::new(line, Utc::now())
    }
}

/// Orders histories most recent first, the order recents are displayed in.
pub fn sort_most_recent_first(histories: &mut [History]) {
    histories.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
