//! Application configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A browser bundle has no process environment, so overrides are baked in
//! through `option_env!` when the WASM artifact is compiled:
//!
//! - `SHOPSCOPE_API_BASE_URL`: catalog API root (default `https://dummyjson.com`)
//! - `SHOPSCOPE_PAGE_LIMIT`: products per page (default 10)
//! - `SHOPSCOPE_DEBOUNCE_MS`: search quiescence interval (default 500)
//!
//! Invalid numeric overrides fall back to their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const FAVORITES_STORAGE_KEY: &str = "shopscope_favorites";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_limit: u32,
    pub debounce_ms: u64,
    pub favorites_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            page_limit: DEFAULT_PAGE_LIMIT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            favorites_key: FAVORITES_STORAGE_KEY.to_owned(),
        }
    }
}

impl AppConfig {
    /// Build config from the variables captured when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("SHOPSCOPE_API_BASE_URL"),
            option_env!("SHOPSCOPE_PAGE_LIMIT"),
            option_env!("SHOPSCOPE_DEBOUNCE_MS"),
        )
    }

    /// Build config from raw optional override strings.
    pub fn from_overrides(base_url: Option<&str>, page_limit: Option<&str>, debounce_ms: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();

        Self {
            api_base_url,
            page_limit: parse_positive(page_limit, DEFAULT_PAGE_LIMIT),
            debounce_ms: parse_or(debounce_ms, DEFAULT_DEBOUNCE_MS),
            favorites_key: FAVORITES_STORAGE_KEY.to_owned(),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn parse_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

// A zero page size would never advance the pagination cursor.
fn parse_positive(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}
