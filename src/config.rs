//! Build-time Configuration
//!
//! Values are baked in by Trunk from the environment at compile time.

use log::LevelFilter;

pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Front-end configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash. Empty means same origin.
    pub api_base_url: String,
    /// Quiet window before a search-triggered refetch
    pub search_debounce_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Read `TODO_API_BASE_URL`, `TODO_SEARCH_DEBOUNCE_MS` and `TODO_LOG_LEVEL`
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("TODO_API_BASE_URL"),
            option_env!("TODO_SEARCH_DEBOUNCE_MS"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    /// Build from raw values; anything missing or unparsable keeps its default.
    pub fn from_values(base_url: Option<&str>, debounce_ms: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            search_debounce_ms: debounce_ms
                .and_then(|ms| ms.trim().parse().ok())
                .unwrap_or(defaults.search_debounce_ms),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
