//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so the API address and
//! log level are baked in at compile time from `INKWELL_API_URL` and
//! `INKWELL_LOG`. Both fall back to local-development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::Level;

/// API address used when `INKWELL_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base address every API path is appended to, without a trailing slash.
    pub base_url: String,
    /// Minimum level forwarded to the browser console.
    pub log_level: Level,
}

impl ApiConfig {
    /// Resolve configuration from compile-time environment variables.
    pub fn from_env() -> Self {
        Self::resolve(option_env!("INKWELL_API_URL"), option_env!("INKWELL_LOG"))
    }

    fn resolve(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Self {
            base_url: normalize_base_url(base_url),
            log_level: parse_log_level(log_level),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// Strip trailing slashes so `base + "/path"` never doubles up.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

fn parse_log_level(raw: Option<&str>) -> Level {
    match raw.map(|value| value.trim().parse::<Level>()) {
        Some(Ok(level)) => level,
        _ => Level::Info,
    }
}
