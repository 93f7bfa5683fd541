use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CrawlError;

/// Configuration for a site crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// URL to start crawling from
    #[serde(default)]
    pub start_url: String,

    /// Maximum number of concurrent requests
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Maximum number of pages to extract before the crawl stops
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Whether to follow links to hosts other than the start URL's
    #[serde(default)]
    pub allow_external: bool,

    /// Regex patterns for URLs to exclude, on top of the built-in asset
    /// exclusions
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl CrawlConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            max_concurrency: default_max_concurrency(),
            max_pages: default_max_pages(),
            allow_external: false,
            exclude_patterns: Vec::new(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CrawlError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CrawlError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Default value for max_concurrency
fn default_max_concurrency() -> usize {
    4
}

/// Default value for max_pages
fn default_max_pages() -> usize {
    100
}

/// Default User-Agent
fn default_user_agent() -> String {
    concat!("page-glean/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Default per-request timeout
fn default_request_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_json_gets_defaults() {
        let config = CrawlConfig::from_json(r#"{"start_url": "https://blog.boot.dev"}"#).unwrap();

        assert_eq!(config.start_url, "https://blog.boot.dev");
        assert_eq!(config.max_concurrency, 4);
        assert_eq!(config.max_pages, 100);
        assert!(!config.allow_external);
        assert!(config.exclude_patterns.is_empty());
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_new_matches_serde_defaults() {
        let built = CrawlConfig::new("https://blog.boot.dev");
        let parsed = CrawlConfig::from_json(r#"{"start_url": "https://blog.boot.dev"}"#).unwrap();

        assert_eq!(built.max_concurrency, parsed.max_concurrency);
        assert_eq!(built.max_pages, parsed.max_pages);
        assert_eq!(built.user_agent, parsed.user_agent);
        assert_eq!(built.request_timeout_secs, parsed.request_timeout_secs);
    }

    #[test]
    fn test_json_overrides_defaults() {
        let config = CrawlConfig::from_json(
            r#"{"start_url": "https://blog.boot.dev", "max_concurrency": 12, "allow_external": true}"#,
        )
        .unwrap();

        assert_eq!(config.max_concurrency, 12);
        assert!(config.allow_external);
    }
}
