// Re-export modules
pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod filter;
pub mod report;
pub mod results;
pub mod urls;

// Re-export commonly used types for convenience
pub use error::{CrawlError, ExtractError, ResolveError};
pub use extract::extract_page_data;
pub use report::CrawlReport;
pub use results::PageData;
pub use urls::{normalize_url, resolve_url};

use tokio::sync::mpsc;

/// Main builder for crawling a site and streaming extracted pages
pub struct Crawl {
    config: config::CrawlConfig,
}

impl Crawl {
    /// Create a new Crawl builder rooted at the given URL
    pub fn new(start_url: &str) -> Self {
        Self {
            config: config::CrawlConfig::new(start_url),
        }
    }

    /// Set the maximum number of concurrent page fetches
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Set the maximum number of pages to extract before stopping
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    /// Set the per-request timeout in seconds
    pub fn with_request_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.request_timeout_secs = timeout_seconds;
        self
    }

    /// Allow the crawl to follow links onto other hosts
    pub fn with_allow_external(mut self, allow_external: bool) -> Self {
        self.config.allow_external = allow_external;
        self
    }

    /// Apply a configuration's tuning options, keeping the builder's start URL
    pub fn with_config(mut self, mut config: config::CrawlConfig) -> Self {
        config.start_url = self.config.start_url.clone();
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self, CrawlError> {
        let config = config::CrawlConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, CrawlError> {
        let config = config::CrawlConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Start the crawl and get a receiver for extracted pages
    pub async fn run(self) -> Result<mpsc::Receiver<PageData>, CrawlError> {
        crawl::start(&self.config).await
    }
}
