//! Mock collaborators shared by the search session tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use transit_core::error::{Result, TransitError};
use transit_core::{
    FavoritesRepository, History, HistoryRepository, InputWidget, Line, LineCatalog, MapParams,
    Navigator,
};

pub(crate) fn line(code: &str, description: &str) -> Line {
    Line::new(code, description)
}

pub(crate) fn numbered_lines(count: usize) -> Vec<Line> {
    (1..=count)
        .map(|i| line(&format!("{}", i * 10), &format!("Route {}", i * 10)))
        .collect()
}

// Mock LineCatalog backed by a fixed list
pub(crate) struct MockCatalog {
    lines: Vec<Line>,
    fail_slice: AtomicBool,
    fail_all: AtomicBool,
    pub(crate) slice_calls: Mutex<Vec<(usize, usize)>>,
    pub(crate) all_calls: AtomicUsize,
}

impl MockCatalog {
    pub(crate) fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            fail_slice: AtomicBool::new(false),
            fail_all: AtomicBool::new(false),
            slice_calls: Mutex::new(Vec::new()),
            all_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn set_fail_slice(&self, fail: bool) {
        self.fail_slice.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn set_fail_all(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl LineCatalog for MockCatalog {
    async fn get_all(&self) -> Result<Vec<Line>> {
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(TransitError::data_access("catalog offline"));
        }
        Ok(self.lines.clone())
    }

    async fn get_slice(&self, limit: usize, skip: usize) -> Result<Vec<Line>> {
        self.slice_calls.lock().unwrap().push((limit, skip));
        if self.fail_slice.load(Ordering::SeqCst) {
            return Err(TransitError::data_access("catalog offline"));
        }
        Ok(self.lines.iter().skip(skip).take(limit).cloned().collect())
    }
}

// LineCatalog that suspends once per call, so overlapping calls interleave
pub(crate) struct YieldingCatalog(pub(crate) MockCatalog);

#[async_trait]
impl LineCatalog for YieldingCatalog {
    async fn get_all(&self) -> Result<Vec<Line>> {
        tokio::task::yield_now().await;
        self.0.get_all().await
    }

    async fn get_slice(&self, limit: usize, skip: usize) -> Result<Vec<Line>> {
        tokio::task::yield_now().await;
        self.0.get_slice(limit, skip).await
    }
}

// LineCatalog whose calls block until released, for in-flight scenarios
pub(crate) struct GatedCatalog {
    inner: MockCatalog,
    pub(crate) entered: Notify,
    pub(crate) release: Notify,
}

impl GatedCatalog {
    pub(crate) fn new(lines: Vec<Line>) -> Self {
        Self {
            inner: MockCatalog::new(lines),
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl LineCatalog for GatedCatalog {
    async fn get_all(&self) -> Result<Vec<Line>> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.get_all().await
    }

    async fn get_slice(&self, limit: usize, skip: usize) -> Result<Vec<Line>> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.get_slice(limit, skip).await
    }
}

// Mock FavoritesRepository
pub(crate) struct MockFavorites {
    pub(crate) stored: Mutex<Vec<Line>>,
    accept: AtomicBool,
    fail: AtomicBool,
}

impl MockFavorites {
    pub(crate) fn new(stored: Vec<Line>) -> Self {
        Self {
            stored: Mutex::new(stored),
            accept: AtomicBool::new(true),
            fail: AtomicBool::new(false),
        }
    }

    pub(crate) fn set_accept(&self, accept: bool) {
        self.accept.store(accept, Ordering::SeqCst);
    }

    pub(crate) fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> Result<bool> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(TransitError::data_access("favorites store unavailable"));
        }
        Ok(self.accept.load(Ordering::SeqCst))
    }
}

#[async_trait]
impl FavoritesRepository for MockFavorites {
    async fn get_all(&self) -> Result<Vec<Line>> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(TransitError::data_access("favorites store unavailable"));
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, line: &Line) -> Result<bool> {
        let accepted = self.check()?;
        if accepted {
            self.stored.lock().unwrap().push(line.clone());
        }
        Ok(accepted)
    }

    async fn remove(&self, line: &Line) -> Result<bool> {
        let accepted = self.check()?;
        if accepted {
            self.stored.lock().unwrap().retain(|fav| fav != line);
        }
        Ok(accepted)
    }
}

// FavoritesRepository whose get_all blocks until released
pub(crate) struct GatedFavorites {
    inner: MockFavorites,
    pub(crate) entered: Notify,
    pub(crate) release: Notify,
}

impl GatedFavorites {
    pub(crate) fn new(stored: Vec<Line>) -> Self {
        Self {
            inner: MockFavorites::new(stored),
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl FavoritesRepository for GatedFavorites {
    async fn get_all(&self) -> Result<Vec<Line>> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.get_all().await
    }

    async fn save(&self, line: &Line) -> Result<bool> {
        self.inner.save(line).await
    }

    async fn remove(&self, line: &Line) -> Result<bool> {
        self.inner.remove(line).await
    }
}

// Mock HistoryRepository
pub(crate) struct MockHistory {
    pub(crate) saved: Mutex<Vec<History>>,
    fail: AtomicBool,
}

impl MockHistory {
    pub(crate) fn new(saved: Vec<History>) -> Self {
        Self {
            saved: Mutex::new(saved),
            fail: AtomicBool::new(false),
        }
    }

    pub(crate) fn failing() -> Self {
        let history = Self::new(Vec::new());
        history.fail.store(true, Ordering::SeqCst);
        history
    }
}

#[async_trait]
impl HistoryRepository for MockHistory {
    async fn save(&self, history: &History) -> Result<bool> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(TransitError::data_access("history store unavailable"));
        }
        self.saved.lock().unwrap().push(history.clone());
        Ok(true)
    }

    async fn get_limited(&self, limit: usize) -> Result<Vec<History>> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(TransitError::data_access("history store unavailable"));
        }
        let mut saved = self.saved.lock().unwrap().clone();
        transit_core::history::sort_most_recent_first(&mut saved);
        saved.truncate(limit);
        Ok(saved)
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pub(crate) pushed: Mutex<Vec<MapParams>>,
}

impl Navigator for RecordingNavigator {
    fn push(&self, params: MapParams) {
        self.pushed.lock().unwrap().push(params);
    }
}

#[derive(Default)]
pub(crate) struct MockInput {
    value: Mutex<String>,
    pub(crate) focus_count: AtomicUsize,
}

impl InputWidget for MockInput {
    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.lock().unwrap() = value.to_string();
    }

    fn focus(&self) {
        self.focus_count.fetch_add(1, Ordering::SeqCst);
    }
}

pub(crate) fn arc<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
