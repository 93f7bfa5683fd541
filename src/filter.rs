use regex::Regex;
use url::Url;

use crate::config::CrawlConfig;

/// Asset extensions there is no point fetching for HTML extraction
const DEFAULT_EXCLUDE: &str = r"\.(jpg|jpeg|png|gif|css|js|ico|woff|woff2|ttf|eot|svg|pdf)$";

/// Crawl-eligibility policy for discovered URLs
///
/// Extraction reports every link a page contains; this filter is the
/// crawler-side decision about which of those are worth fetching.
#[derive(Debug)]
pub struct ScopeFilter {
    allow_external: bool,
    required_host: Option<String>,
    exclude_regexes: Vec<Regex>,
}

impl ScopeFilter {
    /// Build a filter rooted at the start URL's host
    pub fn new(root: &Url, config: &CrawlConfig) -> Result<Self, regex::Error> {
        let mut patterns = vec![DEFAULT_EXCLUDE.to_string()];
        patterns.extend(config.exclude_patterns.iter().cloned());

        let mut exclude_regexes = Vec::with_capacity(patterns.len());
        for pattern in &patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            allow_external: config.allow_external,
            required_host: root.host_str().map(|host| host.to_string()),
            exclude_regexes,
        })
    }

    /// Whether the crawler may fetch this URL
    pub fn should_crawl(&self, candidate: &Url) -> bool {
        if !matches!(candidate.scheme(), "http" | "https") {
            return false;
        }

        if !self.allow_external && !self.is_same_host(candidate) {
            return false;
        }

        let candidate_str = candidate.as_str();
        for regex in &self.exclude_regexes {
            if regex.is_match(candidate_str) {
                ::log::debug!("excluded by pattern: {}", candidate_str);
                return false;
            }
        }

        true
    }

    fn is_same_host(&self, candidate: &Url) -> bool {
        match (&self.required_host, candidate.host_str()) {
            (Some(required), Some(host)) => required == host,
            // A start URL without a host cannot scope anything; stay closed
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_for(start_url: &str, config: CrawlConfig) -> ScopeFilter {
        let root = Url::parse(start_url).unwrap();
        ScopeFilter::new(&root, &config).unwrap()
    }

    #[test]
    fn test_same_host_only_by_default() {
        let config = CrawlConfig::new("https://blog.boot.dev");
        let filter = filter_for("https://blog.boot.dev", config);

        let same_host = Url::parse("https://blog.boot.dev/posts/one").unwrap();
        assert!(filter.should_crawl(&same_host));

        let other_host = Url::parse("https://example.com/posts/one").unwrap();
        assert!(!filter.should_crawl(&other_host));
    }

    #[test]
    fn test_allow_external() {
        let mut config = CrawlConfig::new("https://blog.boot.dev");
        config.allow_external = true;
        let filter = filter_for("https://blog.boot.dev", config);

        let other_host = Url::parse("https://example.com/page").unwrap();
        assert!(filter.should_crawl(&other_host));
    }

    #[test]
    fn test_asset_extensions_excluded() {
        let config = CrawlConfig::new("https://blog.boot.dev");
        let filter = filter_for("https://blog.boot.dev", config);

        for asset in [
            "https://blog.boot.dev/image.png",
            "https://blog.boot.dev/style.css",
            "https://blog.boot.dev/app.js",
            "https://blog.boot.dev/paper.pdf",
        ] {
            let url = Url::parse(asset).unwrap();
            assert!(!filter.should_crawl(&url), "{asset} should be excluded");
        }

        let page = Url::parse("https://blog.boot.dev/posts/one").unwrap();
        assert!(filter.should_crawl(&page));
    }

    #[test]
    fn test_non_http_schemes_rejected() {
        let mut config = CrawlConfig::new("https://blog.boot.dev");
        config.allow_external = true;
        let filter = filter_for("https://blog.boot.dev", config);

        let mail = Url::parse("mailto:team@boot.dev").unwrap();
        assert!(!filter.should_crawl(&mail));

        let ftp = Url::parse("ftp://blog.boot.dev/file").unwrap();
        assert!(!filter.should_crawl(&ftp));
    }

    #[test]
    fn test_custom_exclude_patterns() {
        let mut config = CrawlConfig::new("https://blog.boot.dev");
        config.exclude_patterns = vec![r"/drafts/".to_string()];
        let filter = filter_for("https://blog.boot.dev", config);

        let draft = Url::parse("https://blog.boot.dev/drafts/wip").unwrap();
        assert!(!filter.should_crawl(&draft));

        let published = Url::parse("https://blog.boot.dev/posts/done").unwrap();
        assert!(filter.should_crawl(&published));
    }
}
