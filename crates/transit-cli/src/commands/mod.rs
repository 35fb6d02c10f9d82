pub mod browse;
pub mod favorites;
pub mod find;

use anyhow::{Context, Result};
use std::sync::Arc;
use transit_application::{SearchDependencies, SearchSessionController};
use transit_core::{Line, LineCatalog, TransitError};
use transit_infrastructure::{
    ConfigService, TomlFavoritesRepository, TomlHistoryRepository, TomlLineCatalog, TransitPaths,
};

use crate::terminal::{BufferedInput, TerminalNavigator};

/// A search session wired to the file stores under the data directory.
pub struct Session {
    pub controller: SearchSessionController,
    pub input: Arc<BufferedInput>,
    catalog: Arc<TomlLineCatalog>,
}

impl Session {
    pub fn open(paths: &TransitPaths) -> Result<Self> {
        let config = ConfigService::new(paths)?
            .get_config()
            .context("Failed to load configuration")?;

        let catalog = Arc::new(TomlLineCatalog::new(paths.catalog_file()?));
        let input = Arc::new(BufferedInput::default());
        let dependencies = SearchDependencies {
            catalog: catalog.clone(),
            favorites: Arc::new(TomlFavoritesRepository::new(paths.favorites_file()?)),
            history: Arc::new(TomlHistoryRepository::with_max_entries(
                paths.history_file()?,
                config.history_max_entries,
            )),
            navigator: Arc::new(TerminalNavigator),
            input: input.clone(),
        };

        Ok(Self {
            controller: SearchSessionController::new(dependencies, config),
            input,
            catalog,
        })
    }

    /// Runs the screen's opening loads, reporting partial failures.
    pub async fn activate(&self) {
        self.controller.on_enter_view();
        let report = self.controller.on_activate().await;
        for failure in &report.failures {
            eprintln!("⚠️  {}", failure);
        }
    }

    pub fn close(&self) {
        self.controller.on_leave_view();
        self.controller.on_deactivate();
    }

    /// Finds a catalog line by its code, ignoring case.
    pub async fn lookup(&self, code: &str) -> Result<Line> {
        let line = self
            .catalog
            .get_all()
            .await?
            .into_iter()
            .find(|line| line.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| TransitError::not_found("Line", code))?;
        Ok(line)
    }

    /// Renders one line with its favorite marker.
    pub fn render(&self, line: &Line) -> String {
        let star = if self.controller.is_favorite(line) {
            "★"
        } else {
            " "
        };
        if line.description.is_empty() {
            format!("{} {}", star, line.code)
        } else {
            format!("{} {:<8} {}", star, line.code, line.description)
        }
    }
}
