use crate::error::ExtractError;
use crate::extract::{first_h1, first_paragraph, image_urls, outgoing_links};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_h1_basic() {
        let html = "<html><body><h1>Welcome to Boot.dev</h1></body></html>";
        assert_eq!(first_h1(html), "Welcome to Boot.dev");
    }

    #[test]
    fn test_first_h1_missing() {
        let html = "<html><body><p>No heading here.</p></body></html>";
        assert_eq!(first_h1(html), "");
    }

    #[test]
    fn test_first_h1_nested() {
        // Depth does not matter, only document order
        let html = "<html><body><div><section><h1>Nested Heading</h1></section></div></body></html>";
        assert_eq!(first_h1(html), "Nested Heading");
    }

    #[test]
    fn test_first_h1_takes_first_of_several() {
        let html = "<html><body><h1>First</h1><h1>Second</h1></body></html>";
        assert_eq!(first_h1(html), "First");
    }

    #[test]
    fn test_first_h1_concatenates_and_trims() {
        let html = "<html><body><h1>  Boot<span>.dev</span> Blog  </h1></body></html>";
        assert_eq!(first_h1(html), "Boot.dev Blog");
    }

    #[test]
    fn test_first_paragraph_basic() {
        let html = "<html><body><p>This is the first paragraph.</p></body></html>";
        assert_eq!(first_paragraph(html), "This is the first paragraph.");
    }

    #[test]
    fn test_first_paragraph_prefers_main() {
        let html = "<html><body>\
             <p>Outside paragraph.</p>\
             <main><p>Main paragraph.</p></main>\
             </body></html>";
        assert_eq!(first_paragraph(html), "Main paragraph.");
    }

    #[test]
    fn test_first_paragraph_without_main() {
        let html = "<html><body><p>First paragraph.</p><p>Second paragraph.</p></body></html>";
        assert_eq!(first_paragraph(html), "First paragraph.");
    }

    #[test]
    fn test_first_paragraph_empty_main_falls_back() {
        // A main region with no paragraph falls back to the document-wide
        // first paragraph
        let html = "<html><body>\
             <main><div>No paragraphs in here.</div></main>\
             <p>Fallback paragraph.</p>\
             </body></html>";
        assert_eq!(first_paragraph(html), "Fallback paragraph.");
    }

    #[test]
    fn test_first_paragraph_missing() {
        let html = "<html><body><h1>Only a heading</h1></body></html>";
        assert_eq!(first_paragraph(html), "");
    }

    #[test]
    fn test_outgoing_links_absolute_pass_through() {
        let html = r#"<html><body><a href="https://blog.boot.dev"><span>Boot.dev</span></a></body></html>"#;
        let links = outgoing_links(html, "https://blog.boot.dev").unwrap();
        assert_eq!(links, vec!["https://blog.boot.dev"]);
    }

    #[test]
    fn test_outgoing_links_relative() {
        let html = r#"<html><body><a href="/about">About</a></body></html>"#;
        let links = outgoing_links(html, "https://blog.boot.dev").unwrap();
        assert_eq!(links, vec!["https://blog.boot.dev/about"]);
    }

    #[test]
    fn test_outgoing_links_document_order() {
        let html = r#"<html><body>
             <a href="/first">First</a>
             <div><a href="/second">Second</a></div>
             <a href="https://other.test/third">Third</a>
             </body></html>"#;
        let links = outgoing_links(html, "https://blog.boot.dev").unwrap();
        assert_eq!(
            links,
            vec![
                "https://blog.boot.dev/first",
                "https://blog.boot.dev/second",
                "https://other.test/third",
            ]
        );
    }

    #[test]
    fn test_outgoing_links_missing_href() {
        let html = "<html><body><a><span>Boot.dev</span></a></body></html>";
        let links = outgoing_links(html, "https://blog.boot.dev").unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_outgoing_links_blank_href_skipped() {
        // Empty and whitespace-only hrefs count as missing
        let html = r#"<html><body><a href="">Empty</a><a href="   ">Blank</a></body></html>"#;
        let links = outgoing_links(html, "https://blog.boot.dev").unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_outgoing_links_keep_non_http_schemes() {
        // Extraction reports what the page says; crawl policy lives in the
        // scope filter
        let html = r#"<html><body><a href="mailto:team@boot.dev">Mail us</a></body></html>"#;
        let links = outgoing_links(html, "https://blog.boot.dev").unwrap();
        assert_eq!(links, vec!["mailto:team@boot.dev"]);
    }

    #[test]
    fn test_outgoing_links_invalid_base() {
        let html = r#"<html><body><a href="/about">About</a></body></html>"#;
        let err = outgoing_links(html, "not a url").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidBase { .. }));
    }

    #[test]
    fn test_image_urls_relative() {
        let html = r#"<html><body><img src="/logo.png" alt="Logo"></body></html>"#;
        let images = image_urls(html, "https://blog.boot.dev").unwrap();
        assert_eq!(images, vec!["https://blog.boot.dev/logo.png"]);
    }

    #[test]
    fn test_image_urls_absolute_pass_through() {
        let html = r#"<html><body><img src="https://cdn.boot.dev/logo.png"></body></html>"#;
        let images = image_urls(html, "https://blog.boot.dev").unwrap();
        assert_eq!(images, vec!["https://cdn.boot.dev/logo.png"]);
    }

    #[test]
    fn test_image_urls_missing_src() {
        let html = r#"<html><body><img alt="No source"></body></html>"#;
        let images = image_urls(html, "https://blog.boot.dev").unwrap();
        assert!(images.is_empty());
    }
}
