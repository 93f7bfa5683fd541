use url::Url;

use crate::error::ResolveError;

/// Canonicalize a URL into a dedup key.
///
/// Two spellings of the same logical page collapse to one key: the scheme
/// is discarded, the key is host (plus any explicit port) concatenated with
/// the path, exactly one trailing slash is stripped, and query strings and
/// fragments are dropped. Scheme-less input (`blog.boot.dev/path`) yields
/// the same key as the https spelling.
///
/// No case folding is applied beyond what URL parsing itself performs:
/// paths keep their case, while host names are ASCII-lowercased by the
/// parser because hosts are case-insensitive.
///
/// Total function: input the parser rejects outright still yields a
/// best-effort key (the input minus one trailing slash), since keys are
/// only ever compared against other keys.
pub fn normalize_url(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(parsed) => Some(parsed),
        // Bare "host/path" spellings parse once a scheme is prepended
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{url}")).ok(),
        Err(_) => None,
    };

    let Some(parsed) = parsed else {
        ::log::debug!("normalize_url: best-effort key for unparseable {:?}", url);
        return url.strip_suffix('/').unwrap_or(url).to_string();
    };

    let host = parsed.host_str().unwrap_or_default();
    let key = match parsed.port() {
        Some(port) => format!("{host}:{port}{path}", path = parsed.path()),
        None => format!("{host}{path}", path = parsed.path()),
    };

    key.strip_suffix('/').unwrap_or(&key).to_string()
}

/// Resolve a possibly-relative reference against a base URL.
///
/// An already-absolute reference passes through byte-for-byte, whatever the
/// base looks like. Anything else is joined against `base` per RFC 3986,
/// which covers root-relative (`/about`), document-relative
/// (`section/page`), parent (`../up`), protocol-relative and fragment-only
/// references. A base that is not itself a valid absolute URL is a caller
/// bug and comes back as [`ResolveError::InvalidBase`].
pub fn resolve_url(reference: &str, base: &str) -> Result<String, ResolveError> {
    if Url::parse(reference).is_ok() {
        return Ok(reference.to_string());
    }

    let base_url = Url::parse(base).map_err(|source| ResolveError::InvalidBase {
        base: base.to_string(),
        source,
    })?;
    resolve_against(reference, &base_url)
}

/// Resolve against an already-parsed base; used per-reference during
/// extraction where the base has been validated once up front.
pub(crate) fn resolve_against(reference: &str, base: &Url) -> Result<String, ResolveError> {
    if Url::parse(reference).is_ok() {
        return Ok(reference.to_string());
    }

    base.join(reference)
        .map(|resolved| resolved.to_string())
        .map_err(|source| ResolveError::Reference {
            reference: reference.to_string(),
            source,
        })
}
