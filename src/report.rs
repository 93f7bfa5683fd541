use std::collections::HashMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::results::PageData;
use crate::urls::normalize_url;

/// Aggregated outcome of a crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlReport {
    /// URL the crawl started from
    pub root_url: String,

    /// Extracted pages, sorted by URL for stable output
    pub pages: Vec<PageData>,

    /// Incoming link counts per dedup key, most linked first
    pub link_tallies: Vec<LinkTally>,
}

/// How often a link target was referenced across the crawl, with different
/// spellings of one page collapsed onto a single key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTally {
    pub key: String,
    pub count: usize,
}

impl CrawlReport {
    /// Build a report from collected pages
    pub fn new(root_url: &str, mut pages: Vec<PageData>) -> Self {
        pages.sort_by(|a, b| a.url.cmp(&b.url));

        let mut counts: HashMap<String, usize> = HashMap::new();
        for page in &pages {
            for link in &page.outgoing_links {
                *counts.entry(normalize_url(link)).or_insert(0) += 1;
            }
        }

        let mut link_tallies: Vec<LinkTally> = counts
            .into_iter()
            .map(|(key, count)| LinkTally { key, count })
            .collect();
        link_tallies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));

        Self {
            root_url: root_url.to_string(),
            pages,
            link_tallies,
        }
    }

    /// Render the human-readable summary
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=============================");
        let _ = writeln!(out, "  REPORT for {}", self.root_url);
        let _ = writeln!(out, "=============================");
        let _ = writeln!(out, "Extracted {} pages", self.pages.len());
        out.push('\n');

        for page in &self.pages {
            let heading = if page.h1.is_empty() {
                "(no heading)"
            } else {
                page.h1.as_str()
            };
            let _ = writeln!(
                out,
                "{} - {} ({} links, {} images)",
                page.url,
                heading,
                page.outgoing_links.len(),
                page.image_urls.len()
            );
        }

        if !self.link_tallies.is_empty() {
            out.push('\n');
            let _ = writeln!(out, "Most linked:");
            for tally in &self.link_tallies {
                let _ = writeln!(out, "{:>5}  {}", tally.count, tally.key);
            }
        }

        out
    }

    /// Serialize the whole report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
