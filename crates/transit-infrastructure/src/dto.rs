//! On-disk record formats for the TOML stores.
//!
//! Domain models stay free of storage concerns; these DTOs describe the file
//! layout and convert to and from `transit_core` types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use transit_core::{History, Line, TransitError};

/// Format version written into every store file. Files carrying any other
/// version are refused rather than misread or overwritten.
pub const STORE_FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

/// A versioned top-level store file.
pub trait StoreFile {
    fn version(&self) -> u32;

    /// Fails unless the file uses [`STORE_FORMAT_VERSION`].
    fn ensure_supported(&self, path: &Path) -> Result<(), TransitError> {
        if self.version() == STORE_FORMAT_VERSION {
            return Ok(());
        }
        Err(TransitError::Serialization {
            format: "TOML".to_string(),
            message: format!(
                "{:?} uses store format version {}, expected {}",
                path,
                self.version(),
                STORE_FORMAT_VERSION
            ),
        })
    }
}

/// A line as written in `lines.toml` and `favorites.toml`.
///
/// Accepts the catalog's `Line` / `Description` spelling as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    #[serde(alias = "Line")]
    pub code: String,
    #[serde(default, alias = "Description")]
    pub description: String,
}

impl From<LineRecord> for Line {
    fn from(record: LineRecord) -> Self {
        Line::new(record.code, record.description)
    }
}

impl From<&Line> for LineRecord {
    fn from(line: &Line) -> Self {
        Self {
            code: line.code.clone(),
            description: line.description.clone(),
        }
    }
}

/// One past search, flattened so it serializes as a plain TOML table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub timestamp: DateTime<Utc>,
    pub code: String,
    #[serde(default)]
    pub description: String,
}

impl From<HistoryRecord> for History {
    fn from(record: HistoryRecord) -> Self {
        History::new(Line::new(record.code, record.description), record.timestamp)
    }
}

impl From<&History> for HistoryRecord {
    fn from(history: &History) -> Self {
        Self {
            timestamp: history.timestamp,
            code: history.line.code.clone(),
            description: history.line.description.clone(),
        }
    }
}

/// `lines.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(rename = "line", default)]
    pub lines: Vec<LineRecord>,
}

impl StoreFile for CatalogFile {
    fn version(&self) -> u32 {
        self.version
    }
}

impl Default for CatalogFile {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            lines: Vec::new(),
        }
    }
}

/// `favorites.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(rename = "favorite", default)]
    pub favorites: Vec<LineRecord>,
}

impl StoreFile for FavoritesFile {
    fn version(&self) -> u32 {
        self.version
    }
}

impl Default for FavoritesFile {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            favorites: Vec::new(),
        }
    }
}

/// `history.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(rename = "search", default)]
    pub entries: Vec<HistoryRecord>,
}

impl StoreFile for HistoryFile {
    fn version(&self) -> u32 {
        self.version
    }
}

impl Default for HistoryFile {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            entries: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_accepts_wire_spelling() {
        let toml_str = r#"
[[line]]
Line = "10"
Description = "Downtown"

[[line]]
code = "20"
description = "Uptown"
"#;
        let file: CatalogFile = toml::from_str(toml_str).unwrap();
        let lines: Vec<Line> = file.lines.into_iter().map(Line::from).collect();

        assert_eq!(file.version, STORE_FORMAT_VERSION);
        assert_eq!(lines, vec![Line::new("10", ""), Line::new("20", "")]);
        assert_eq!(lines[0].description, "Downtown");
    }

    #[test]
    fn test_unknown_version_is_refused() {
        let path = Path::new("favorites.toml");
        let current: FavoritesFile = toml::from_str("").unwrap();
        assert!(current.ensure_supported(path).is_ok());

        let newer: FavoritesFile = toml::from_str("version = 2\n").unwrap();
        let err = newer.ensure_supported(path).unwrap_err();
        assert!(err.is_serialization());
        assert!(err.to_string().contains("version 2"));
    }

    #[test]
    fn test_history_file_serializes_as_tables() {
        let history = History::now(Line::new("10", "Downtown"));
        let file = HistoryFile {
            version: STORE_FORMAT_VERSION,
            entries: vec![HistoryRecord::from(&history)],
        };

        let toml_str = toml::to_string_pretty(&file).unwrap();
        assert!(toml_str.contains("[[search]]"));

        let back: HistoryFile = toml::from_str(&toml_str).unwrap();
        assert_eq!(History::from(back.entries[0].clone()), history);
    }
}
