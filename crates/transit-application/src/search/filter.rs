//! Free-text filtering over the full line catalog.

use super::generation::{Generation, read, write};
use std::sync::RwLock;
use transit_core::error::Result;
use transit_core::{Line, LineCatalog};

/// Whether a filtering episode is running.
///
/// An episode starts with the first non-empty query and ends when the filter
/// is cleared. `backup` is the live list captured when the episode started;
/// it is not touched again until the episode ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterEpisode {
    #[default]
    Unfiltered,
    Filtering {
        query: String,
        backup: Vec<Line>,
        results: Vec<Line>,
    },
}

/// Keeps the lines whose code or description contains `query`, ignoring case.
pub fn filter_lines(lines: Vec<Line>, query: &str) -> Vec<Line> {
    let needle = query.to_lowercase();
    lines
        .into_iter()
        .filter(|line| line.matches_lowercase(&needle))
        .collect()
}

/// Reversible text filter sitting in front of the browsed catalog.
///
/// [`TextFilter::clear`] hands back the list captured when the episode
/// started. The session controller only uses it for logging: it restores
/// from its paginator, which may have grown since.
#[derive(Default)]
pub struct TextFilter {
    episode: RwLock<FilterEpisode>,
    generation: Generation,
}

impl TextFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters the whole catalog by `query`.
    ///
    /// The first call of an episode snapshots `live` as the backup. Matching
    /// runs against `source.get_all()`, not just the pages browsed so far.
    /// An empty `query` ends the episode, exactly like [`TextFilter::clear`].
    ///
    /// # Arguments
    ///
    /// * `query` - Raw query text
    /// * `live` - The list currently shown, used only when an episode starts
    /// * `source` - Catalog providing the full corpus
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Line>)`: The matching lines. If the episode was cleared, or a
    ///   newer query was issued while this one was in flight, the matches are
    ///   returned but not published.
    /// - `Err(TransitError)`: The catalog failed; the previous results stay.
    ///   If this call started the episode, the filter is back to
    ///   [`FilterEpisode::Unfiltered`].
    pub async fn apply(
        &self,
        query: &str,
        live: &[Line],
        source: &dyn LineCatalog,
    ) -> Result<Vec<Line>> {
        if query.is_empty() {
            return Ok(self.clear().unwrap_or_else(|| live.to_vec()));
        }

        let (ticket, started) = {
            let mut episode = write(&self.episode);
            let started = match *episode {
                FilterEpisode::Unfiltered => {
                    tracing::debug!("[Filter] Starting filtering episode for '{}'", query);
                    *episode = FilterEpisode::Filtering {
                        query: query.to_string(),
                        backup: live.to_vec(),
                        results: live.to_vec(),
                    };
                    true
                }
                FilterEpisode::Filtering {
                    query: ref mut current,
                    ..
                } => {
                    *current = query.to_string();
                    false
                }
            };
            (self.generation.advance(), started)
        };

        let all = match source.get_all().await {
            Ok(all) => all,
            Err(e) => {
                // An episode that never produced results did not happen
                if started && self.generation.is_current(ticket) {
                    *write(&self.episode) = FilterEpisode::Unfiltered;
                }
                return Err(e);
            }
        };
        let matched = filter_lines(all, query);

        if !self.generation.is_current(ticket) {
            tracing::debug!("[Filter] Discarding stale results for '{}'", query);
            return Ok(matched);
        }

        if let FilterEpisode::Filtering { results, .. } = &mut *write(&self.episode) {
            *results = matched.clone();
        }
        tracing::debug!("[Filter] '{}' matched {} lines", query, matched.len());
        Ok(matched)
    }

    /// Ends the episode and hands back the backup.
    ///
    /// Returns `None` if no episode was running.
    pub fn clear(&self) -> Option<Vec<Line>> {
        self.generation.advance();
        match std::mem::take(&mut *write(&self.episode)) {
            FilterEpisode::Unfiltered => None,
            FilterEpisode::Filtering { backup, .. } => {
                tracing::debug!("[Filter] Filtering episode ended");
                Some(backup)
            }
        }
    }

    pub fn is_filtering(&self) -> bool {
        matches!(*read(&self.episode), FilterEpisode::Filtering { .. })
    }

    /// Current filtered list, or `None` outside an episode.
    pub fn results(&self) -> Option<Vec<Line>> {
        match &*read(&self.episode) {
            FilterEpisode::Unfiltered => None,
            FilterEpisode::Filtering { results, .. } => Some(results.clone()),
        }
    }

    pub fn episode(&self) -> FilterEpisode {
        read(&self.episode).clone()
    }

    pub fn reset(&self) {
        self.clear();
    }
}
