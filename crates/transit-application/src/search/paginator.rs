//! Catalog paging.

use super::generation::{Generation, read, write};
use std::sync::{Arc, RwLock};
use transit_core::error::Result;
use transit_core::{Line, LineCatalog};

/// Skip-based paging position against the line catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    pub limit: usize,
    pub skip: usize,
}

impl PaginationCursor {
    pub fn new(limit: usize) -> Self {
        Self { limit, skip: 0 }
    }
}

/// Accumulates catalog pages for "load more" style browsing.
///
/// Pages are appended in fetch order and never deduplicated. Concurrent
/// fetches each read the cursor when they start, so two overlapping calls can
/// bring in the same page twice; both still advance `skip`.
pub struct CatalogPaginator {
    source: Arc<dyn LineCatalog>,
    cursor: RwLock<PaginationCursor>,
    items: RwLock<Vec<Line>>,
    generation: Generation,
}

impl CatalogPaginator {
    pub fn new(source: Arc<dyn LineCatalog>, limit: usize) -> Self {
        Self {
            source,
            cursor: RwLock::new(PaginationCursor::new(limit)),
            items: RwLock::new(Vec::new()),
            generation: Generation::default(),
        }
    }

    /// Fetches the page at the current cursor and appends it.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Line>)`: The lines appended to the catalog. Empty when the
    ///   source ran out, or when the paginator was reset while the request
    ///   was in flight (the response is dropped).
    /// - `Err(TransitError)`: The source rejected the request; the cursor and
    ///   the accumulated lines are unchanged.
    pub async fn fetch_next_page(&self) -> Result<Vec<Line>> {
        let ticket = self.generation.ticket();
        let PaginationCursor { limit, skip } = self.cursor();

        tracing::debug!("[Paginator] Fetching {} lines at offset {}", limit, skip);
        let page = self.source.get_slice(limit, skip).await?;

        if !self.generation.is_current(ticket) {
            tracing::debug!(
                "[Paginator] Dropping page at offset {} fetched before reset",
                skip
            );
            return Ok(Vec::new());
        }

        write(&self.items).extend(page.iter().cloned());
        write(&self.cursor).skip += limit;

        tracing::debug!(
            "[Paginator] Appended {} lines ({} total)",
            page.len(),
            self.len()
        );
        Ok(page)
    }

    /// Snapshot of every accumulated line in fetch order.
    pub fn items(&self) -> Vec<Line> {
        read(&self.items).clone()
    }

    pub fn len(&self) -> usize {
        read(&self.items).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cursor(&self) -> PaginationCursor {
        *read(&self.cursor)
    }

    /// Forgets accumulated pages and rewinds the cursor.
    ///
    /// Fetches still in flight complete without touching the new state.
    pub fn reset(&self) {
        self.generation.advance();
        write(&self.items).clear();
        write(&self.cursor).skip = 0;
    }
}
