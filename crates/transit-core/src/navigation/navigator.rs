//! Outward-facing UI capabilities injected into the search session.

use super::model::MapParams;

/// The navigation stack owning the map screen.
///
/// Pushing is fire-and-forget: the search session never waits on the map.
pub trait Navigator: Send + Sync {
    fn push(&self, params: MapParams);
}

/// The search box the user types into.
///
/// Handed to the session explicitly so nothing reaches into a global view
/// tree to find it.
pub trait InputWidget: Send + Sync {
    /// Current text of the widget.
    fn value(&self) -> String;

    /// Replaces the widget's text.
    fn set_value(&self, value: &str);

    fn clear(&self) {
        self.set_value("");
    }

    /// Requests keyboard focus.
    fn focus(&self);
}
