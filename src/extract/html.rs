use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::ExtractError;
use crate::urls::resolve_against;

/// Text of the first `h1` anywhere in the document, empty if there is none
pub fn first_h1(html: &str) -> String {
    let doc = Html::parse_document(html);
    heading_text(&doc)
}

/// Text of the first priority paragraph, empty if the document has none
///
/// A `main` region takes priority: when one exists, the first `p` inside
/// it wins. With no `main`, or a `main` that contains no paragraph, the
/// first `p` anywhere in the document is used instead.
pub fn first_paragraph(html: &str) -> String {
    let doc = Html::parse_document(html);
    paragraph_text(&doc)
}

/// Absolute link targets for every anchor with a usable href, in document
/// order, resolved against `base_url`
pub fn outgoing_links(html: &str, base_url: &str) -> Result<Vec<String>, ExtractError> {
    let base = parse_base(base_url)?;
    let doc = Html::parse_document(html);
    Ok(link_targets(&doc, &base))
}

/// Absolute image sources for every image with a usable src, in document
/// order, resolved against `base_url`
pub fn image_urls(html: &str, base_url: &str) -> Result<Vec<String>, ExtractError> {
    let base = parse_base(base_url)?;
    let doc = Html::parse_document(html);
    Ok(image_sources(&doc, &base))
}

pub fn parse_base(url: &str) -> Result<Url, ExtractError> {
    Url::parse(url).map_err(|source| ExtractError::InvalidBase {
        base: url.to_string(),
        source,
    })
}

pub fn heading_text(doc: &Html) -> String {
    let heading = Selector::parse("h1").unwrap();
    scoped_first(doc, None, &heading)
        .map(element_text)
        .unwrap_or_default()
}

pub fn paragraph_text(doc: &Html) -> String {
    let region = Selector::parse("main").unwrap();
    let paragraph = Selector::parse("p").unwrap();
    scoped_first(doc, Some(&region), &paragraph)
        .map(element_text)
        .unwrap_or_default()
}

pub fn link_targets(doc: &Html, base: &Url) -> Vec<String> {
    let anchor = Selector::parse("a").unwrap();
    let links = resolved_attrs(doc, base, &anchor, "href");
    ::log::debug!("extracted {} link targets", links.len());
    links
}

pub fn image_sources(doc: &Html, base: &Url) -> Vec<String> {
    let image = Selector::parse("img").unwrap();
    let sources = resolved_attrs(doc, base, &image, "src");
    ::log::debug!("extracted {} image sources", sources.len());
    sources
}

/// First element matching `target`, preferring matches inside the first
/// `scope` element when a scope selector is given and matches anywhere in
/// the document. Falls back to the document-wide first match when the
/// scope is absent or empty.
fn scoped_first<'a>(
    doc: &'a Html,
    scope: Option<&Selector>,
    target: &Selector,
) -> Option<ElementRef<'a>> {
    if let Some(scope_selector) = scope {
        if let Some(region) = doc.select(scope_selector).next() {
            if let Some(found) = region.select(target).next() {
                return Some(found);
            }
        }
    }

    doc.select(target).next()
}

/// Concatenated visible text of an element, trimmed
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Resolved values of `attr` across every element matching `selector`, in
/// document order. Missing attributes and attributes that are empty after
/// trimming produce no entry; a value that cannot be resolved against the
/// (already validated) base is skipped rather than failing the page.
fn resolved_attrs(doc: &Html, base: &Url, selector: &Selector, attr: &str) -> Vec<String> {
    let mut resolved = Vec::new();

    for element in doc.select(selector) {
        let Some(value) = element.value().attr(attr) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match resolve_against(value, base) {
            Ok(absolute) => resolved.push(absolute),
            Err(err) => {
                ::log::debug!("skipping unresolvable {} {:?}: {}", attr, value, err);
            }
        }
    }

    resolved
}
