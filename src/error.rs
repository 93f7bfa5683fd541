use thiserror::Error;

/// Errors from resolving a reference against a base URL
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The base URL itself is not a valid absolute URL. Bases come from the
    /// URL a page was fetched from, so this is a caller bug and is
    /// propagated rather than worked around.
    #[error("invalid base url {base:?}: {source}")]
    InvalidBase {
        base: String,
        source: url::ParseError,
    },

    /// The reference could not be joined against a valid base.
    #[error("cannot resolve reference {reference:?}: {source}")]
    Reference {
        reference: String,
        source: url::ParseError,
    },
}

/// Errors from extracting structured data out of one HTML document
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input could not be parsed into a traversable document at all.
    /// html5ever recovers leniently from malformed markup, so callers of
    /// this stack will rarely if ever see this variant.
    #[error("unparseable document: {0}")]
    Parse(String),

    /// The page URL used as the resolution base is invalid.
    #[error("invalid base url {base:?}: {source}")]
    InvalidBase {
        base: String,
        source: url::ParseError,
    },
}

/// Errors from the crawl harness around the extraction core
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Start URL did not parse as an absolute URL.
    #[error("invalid start url {url:?}: {source}")]
    InvalidStartUrl {
        url: String,
        source: url::ParseError,
    },

    /// A configured exclude pattern failed to compile.
    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// HTTP client construction or transport failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body is not HTML, so there is nothing to extract.
    #[error("{url} is not an html page (content-type {content_type:?})")]
    NotHtml { url: String, content_type: String },

    /// Reading a config file failed.
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file contents were not valid JSON for the expected shape.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Extraction of a fetched page failed.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}
