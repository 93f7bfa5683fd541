use serde::{Deserialize, Serialize};

/// The extraction result for a single fetched page
///
/// Built once per `(html, url)` pair and never mutated afterward. The `url`
/// field holds the exact URL the caller passed in; canonicalization for
/// dedup purposes is a separate concern (`urls::normalize_url`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    /// URL the page was fetched from, exactly as given (never normalized)
    pub url: String,

    /// Text of the first level-1 heading, empty if the page has none
    pub h1: String,

    /// Text of the first priority paragraph, empty if the page has none
    pub first_paragraph: String,

    /// Absolute link targets in document order, one per anchor with a
    /// usable href
    pub outgoing_links: Vec<String>,

    /// Absolute image sources in document order, one per image with a
    /// usable src
    pub image_urls: Vec<String>,
}

impl PageData {
    /// Create a new page data instance
    pub fn new(
        url: String,
        h1: String,
        first_paragraph: String,
        outgoing_links: Vec<String>,
        image_urls: Vec<String>,
    ) -> Self {
        Self {
            url,
            h1,
            first_paragraph,
            outgoing_links,
            image_urls,
        }
    }
}
