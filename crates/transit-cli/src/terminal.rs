//! Terminal stand-ins for the map screen and the search box.

use std::sync::{Mutex, PoisonError};
use transit_core::{InputWidget, MapParams, Navigator};

/// Prints where the map would open instead of pushing a screen.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn push(&self, params: MapParams) {
        match &params {
            MapParams::Line { line } if !line.description.is_empty() => {
                println!("🗺  Opening map for line {} ({})", line.code, line.description)
            }
            MapParams::Line { line } => println!("🗺  Opening map for line {}", line.code),
            MapParams::Query { query } => println!("🗺  Opening map for search \"{}\"", query),
        }
    }
}

/// Search box backed by a string buffer.
///
/// Commands type into it the way a user would, which keeps the session's
/// input-driven paths identical to the interactive ones.
#[derive(Default)]
pub struct BufferedInput {
    value: Mutex<String>,
}

impl InputWidget for BufferedInput {
    fn value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value.to_string();
    }

    fn focus(&self) {
        tracing::debug!("[Terminal] Search box focused");
    }
}
