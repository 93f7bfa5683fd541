mod html;

#[cfg(test)]
mod tests;

pub use html::{first_h1, first_paragraph, image_urls, outgoing_links};

use scraper::Html;

use crate::error::ExtractError;
use crate::results::PageData;

/// Extract the structured record for one fetched page.
///
/// The page URL is validated as an absolute base up front, then the
/// document is parsed once and all four rules (heading, priority
/// paragraph, links, images) run against the shared tree. The returned
/// record carries `url` exactly as passed in; normalization is the
/// caller's business.
///
/// Absences are not errors: a page with no heading, no paragraph and no
/// references extracts to empty fields. A document the parser could not
/// turn into a tree at all would surface as [`ExtractError::Parse`], but
/// the html5ever-based parser recovers from malformed markup, so
/// arbitrary text extracts successfully.
pub fn extract_page_data(html: &str, url: &str) -> Result<PageData, ExtractError> {
    let base = html::parse_base(url)?;
    let doc = Html::parse_document(html);

    Ok(PageData {
        url: url.to_string(),
        h1: html::heading_text(&doc),
        first_paragraph: html::paragraph_text(&doc),
        outgoing_links: html::link_targets(&doc, &base),
        image_urls: html::image_sources(&doc, &base),
    })
}
