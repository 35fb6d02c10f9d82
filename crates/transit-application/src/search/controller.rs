//! Search screen session controller.

use super::favorites::{FavoriteToggle, FavoritesTracker};
use super::filter::TextFilter;
use super::generation::{Generation, read, write};
use super::normalize::normalize_query;
use super::paginator::{CatalogPaginator, PaginationCursor};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;
use transit_core::error::{Result, TransitError};
use transit_core::history::sort_most_recent_first;
use transit_core::{
    FavoritesRepository, History, HistoryRepository, InputWidget, Line, LineCatalog, MapParams,
    Navigator, SearchConfig,
};

/// Collaborators the search session talks to.
#[derive(Clone)]
pub struct SearchDependencies {
    pub catalog: Arc<dyn LineCatalog>,
    pub favorites: Arc<dyn FavoritesRepository>,
    pub history: Arc<dyn HistoryRepository>,
    pub navigator: Arc<dyn Navigator>,
    pub input: Arc<dyn InputWidget>,
}

/// What `on_activate` managed to load.
///
/// Failed steps leave their part of the session empty and show up in
/// `failures`; the screen stays usable either way.
#[derive(Debug, Default)]
pub struct ActivationReport {
    pub recents_loaded: usize,
    pub favorites_loaded: usize,
    pub lines_loaded: usize,
    pub failures: Vec<TransitError>,
}

impl ActivationReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of selecting a line or submitting a free-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Parameters pushed to the map screen
    pub params: MapParams,
    /// Whether the history store confirmed the search record
    pub history_saved: bool,
}

/// Presentation logic of the line search screen.
///
/// `SearchSessionController` is responsible for:
/// - Loading recents, favorites and the first catalog page on activation
/// - Exposing the visible line list (browsed pages, or filter results while
///   a filtering episode runs)
/// - Recording searches in history and navigating to the map
/// - Showing and hiding the search bar
///
/// All operations take `&self`, so independent chains such as a favorite
/// toggle and a page fetch can be in flight at the same time. Nothing is
/// locked across an await. After `on_deactivate` every response still in
/// flight is dropped instead of being written into the reset session.
pub struct SearchSessionController {
    config: SearchConfig,
    catalog: Arc<dyn LineCatalog>,
    history: Arc<dyn HistoryRepository>,
    navigator: Arc<dyn Navigator>,
    input: Arc<dyn InputWidget>,
    paginator: CatalogPaginator,
    favorites: FavoritesTracker,
    filter: TextFilter,
    recents: RwLock<Vec<History>>,
    recents_generation: Generation,
    search_box_visible: AtomicBool,
    view_visible: AtomicBool,
    active: AtomicBool,
}

impl SearchSessionController {
    pub fn new(dependencies: SearchDependencies, config: SearchConfig) -> Self {
        let SearchDependencies {
            catalog,
            favorites,
            history,
            navigator,
            input,
        } = dependencies;

        Self {
            paginator: CatalogPaginator::new(catalog.clone(), config.page_limit),
            favorites: FavoritesTracker::new(favorites),
            filter: TextFilter::new(),
            config,
            catalog,
            history,
            navigator,
            input,
            recents: RwLock::new(Vec::new()),
            recents_generation: Generation::default(),
            search_box_visible: AtomicBool::new(false),
            view_visible: AtomicBool::new(false),
            active: AtomicBool::new(false),
        }
    }

    // ============================================================================
    // Lifecycle
    // ============================================================================

    /// Loads everything the screen shows when it opens.
    ///
    /// Recents load concurrently with the favorites-then-catalog chain. The
    /// first catalog page is requested only after the favorites load has
    /// finished, so the first rendered page already knows its stars.
    pub async fn on_activate(&self) -> ActivationReport {
        self.active.store(true, Ordering::SeqCst);
        tracing::info!("[Search] Activating search session");

        let favorites_then_catalog = async {
            let favorites = self.favorites.load_all().await;
            let page = self.paginator.fetch_next_page().await;
            (favorites, page)
        };
        let (recents, (favorites, page)) =
            tokio::join!(self.load_recents(), favorites_then_catalog);

        let mut report = ActivationReport::default();
        match recents {
            Ok(count) => report.recents_loaded = count,
            Err(e) => {
                tracing::warn!("[Search] Failed to load recent searches: {}", e);
                report.failures.push(e);
            }
        }
        match favorites {
            Ok(count) => report.favorites_loaded = count,
            Err(e) => {
                tracing::warn!("[Search] Failed to load favorites: {}", e);
                report.failures.push(e);
            }
        }
        match page {
            Ok(lines) => report.lines_loaded = lines.len(),
            Err(e) => {
                tracing::warn!("[Search] Failed to load first catalog page: {}", e);
                report.failures.push(e);
            }
        }
        report
    }

    /// Tears the session down.
    ///
    /// Clears every piece of session state and invalidates responses that
    /// are still in flight.
    pub fn on_deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
        self.paginator.reset();
        self.favorites.reset();
        self.filter.reset();
        self.recents_generation.advance();
        write(&self.recents).clear();
        self.search_box_visible.store(false, Ordering::SeqCst);
        self.view_visible.store(false, Ordering::SeqCst);
        tracing::info!("[Search] Search session deactivated");
    }

    pub fn on_enter_view(&self) {
        self.view_visible.store(true, Ordering::SeqCst);
    }

    pub fn on_leave_view(&self) {
        self.view_visible.store(false, Ordering::SeqCst);
    }

    // ============================================================================
    // Browsing
    // ============================================================================

    /// Infinite-scroll trigger: fetches and appends the next catalog page.
    ///
    /// Returns the number of lines appended. On error nothing changed and the
    /// caller may retry.
    pub async fn load_more(&self) -> Result<usize> {
        match self.paginator.fetch_next_page().await {
            Ok(lines) => Ok(lines.len()),
            Err(e) => {
                tracing::warn!("[Search] Failed to load more lines: {}", e);
                Err(e)
            }
        }
    }

    pub async fn toggle_favorite(&self, line: &Line) -> Result<FavoriteToggle> {
        self.favorites.toggle(line).await.inspect_err(|e| {
            tracing::warn!("[Search] Failed to toggle favorite {}: {}", line.code, e);
        })
    }

    // ============================================================================
    // Filtering
    // ============================================================================

    /// Filters the visible list by `query`; an empty query clears the filter.
    ///
    /// Returns the number of visible lines afterwards.
    pub async fn filter(&self, query: &str) -> Result<usize> {
        if query.is_empty() {
            self.clear_filter();
            return Ok(self.visible_lines().len());
        }

        let live = self.visible_lines();
        match self.filter.apply(query, &live, self.catalog.as_ref()).await {
            Ok(_) => Ok(self.visible_lines().len()),
            Err(e) => {
                tracing::warn!("[Search] Failed to filter lines by '{}': {}", query, e);
                Err(e)
            }
        }
    }

    /// Filters by whatever the search box currently holds.
    pub async fn filter_from_input(&self) -> Result<usize> {
        let query = self.input.value();
        self.filter(&query).await
    }

    /// Ends the filtering episode, returning to the browsed catalog.
    ///
    /// The visible list is rebuilt from the paginator rather than from the
    /// filter's backup. Pages only ever append, so the backup is a prefix of
    /// it, and pages fetched while filtering show up once the filter is gone.
    pub fn clear_filter(&self) {
        if let Some(backup) = self.filter.clear() {
            let browsed = self.paginator.len();
            tracing::debug!(
                "[Search] Filter cleared, {} browsed lines ({} arrived while filtering)",
                browsed,
                browsed.saturating_sub(backup.len())
            );
        }
    }

    /// Shows the search bar and asks for focus shortly after.
    ///
    /// The focus request runs on the current tokio runtime and the returned
    /// handle can be dropped. Outside a runtime the widget is focused
    /// immediately and `None` is returned.
    pub fn show_search_bar(&self) -> Option<JoinHandle<()>> {
        self.search_box_visible.store(true, Ordering::SeqCst);

        let input = Arc::clone(&self.input);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let delay = Duration::from_millis(self.config.focus_delay_ms);
                Some(handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    input.focus();
                }))
            }
            Err(_) => {
                input.focus();
                None
            }
        }
    }

    /// Hides the search bar, dropping any typed query and its filter.
    pub fn hide_search_bar(&self) {
        if !self.input.value().is_empty() {
            self.input.clear();
            self.clear_filter();
        }
        self.search_box_visible.store(false, Ordering::SeqCst);
    }

    // ============================================================================
    // Selection
    // ============================================================================

    /// Records `line` as searched and opens it on the map.
    ///
    /// Navigation happens whether or not the history store accepted the
    /// record.
    pub async fn select_line(&self, line: Line) -> Selection {
        let history_saved = self.record_history(History::now(line.clone())).await;
        self.navigate(MapParams::Line { line }, history_saved)
    }

    /// Records a typed search and opens the map with the raw query.
    pub async fn select_free_text(&self, raw_query: &str) -> Selection {
        let query = normalize_query(raw_query);
        let history_saved = self
            .record_history(History::now(Line::from_query(query.clone())))
            .await;
        self.navigate(MapParams::Query { query }, history_saved)
    }

    /// Submits whatever the search box currently holds as a free-text search.
    pub async fn submit_search_box(&self) -> Selection {
        let raw_query = self.input.value();
        self.select_free_text(&raw_query).await
    }

    async fn record_history(&self, history: History) -> bool {
        match self.history.save(&history).await {
            Ok(true) => {
                tracing::info!("[Search] Saved {} to history", history.line.code);
                true
            }
            Ok(false) => {
                tracing::warn!("[Search] History store declined {}", history.line.code);
                false
            }
            Err(e) => {
                tracing::warn!(
                    "[Search] Failed to save {} to history: {}",
                    history.line.code,
                    e
                );
                false
            }
        }
    }

    fn navigate(&self, params: MapParams, history_saved: bool) -> Selection {
        tracing::info!("[Search] Opening map for '{}'", params.label());
        self.navigator.push(params.clone());
        Selection {
            params,
            history_saved,
        }
    }

    async fn load_recents(&self) -> Result<usize> {
        let ticket = self.recents_generation.ticket();
        let limit = self.config.recents_limit;
        let mut recents = self.history.get_limited(limit).await?;

        if !self.recents_generation.is_current(ticket) {
            return Ok(0);
        }

        sort_most_recent_first(&mut recents);
        recents.truncate(limit);
        let count = recents.len();
        *write(&self.recents) = recents;
        Ok(count)
    }

    // ============================================================================
    // Read-only projections for rendering
    // ============================================================================

    /// The list the user sees right now.
    pub fn visible_lines(&self) -> Vec<Line> {
        self.filter
            .results()
            .unwrap_or_else(|| self.paginator.items())
    }

    /// Recent searches, most recent first.
    pub fn recents(&self) -> Vec<History> {
        read(&self.recents).clone()
    }

    pub fn is_favorite(&self, line: &Line) -> bool {
        self.favorites.is_favorite(line)
    }

    pub fn favorites(&self) -> Vec<Line> {
        self.favorites.favorites()
    }

    pub fn search_box_visible(&self) -> bool {
        self.search_box_visible.load(Ordering::SeqCst)
    }

    pub fn view_visible(&self) -> bool {
        self.view_visible.load(Ordering::SeqCst)
    }

    pub fn is_filtering(&self) -> bool {
        self.filter.is_filtering()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn cursor(&self) -> PaginationCursor {
        self.paginator.cursor()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
