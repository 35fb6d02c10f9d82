//! Search screen configuration model.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_LIMIT: usize = 10;
pub const DEFAULT_RECENTS_LIMIT: usize = 2;
pub const DEFAULT_FOCUS_DELAY_MS: u64 = 1;
pub const DEFAULT_HISTORY_MAX_ENTRIES: usize = 100;

/// Tunables for the search session and its bundled stores.
///
/// Every field has a default so a partial `config.toml` is valid.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Lines requested per catalog page
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,
    /// Number of recent searches shown
    #[serde(default = "default_recents_limit")]
    pub recents_limit: usize,
    /// Delay before the search box receives focus after being shown
    #[serde(default = "default_focus_delay_ms")]
    pub focus_delay_ms: u64,
    /// Number of history records the file store keeps
    #[serde(default = "default_history_max_entries")]
    pub history_max_entries: usize,
}

fn default_page_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

fn default_recents_limit() -> usize {
    DEFAULT_RECENTS_LIMIT
}

fn default_focus_delay_ms() -> u64 {
    DEFAULT_FOCUS_DELAY_MS
}

fn default_history_max_entries() -> usize {
    DEFAULT_HISTORY_MAX_ENTRIES
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            recents_limit: DEFAULT_RECENTS_LIMIT,
            focus_delay_ms: DEFAULT_FOCUS_DELAY_MS,
            history_max_entries: DEFAULT_HISTORY_MAX_ENTRIES,
        }
    }
}

impl SearchConfig {
    /// Rejects values the session cannot work with.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.page_limit == 0 {
            return Err(crate::error::TransitError::config(
                "page_limit must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SearchConfig = toml::from_str("page_limit = 25").unwrap();
        assert_eq!(config.page_limit, 25);
        assert_eq!(config.recents_limit, DEFAULT_RECENTS_LIMIT);
        assert_eq!(config.focus_delay_ms, DEFAULT_FOCUS_DELAY_MS);
    }

    #[test]
    fn test_zero_page_limit_is_rejected() {
        let config = SearchConfig {
            page_limit: 0,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(SearchConfig::default().validate().is_ok());
    }
}
