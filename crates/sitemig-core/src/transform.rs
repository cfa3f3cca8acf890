//! URL filtering and rewriting.
//!
//! `SkipPatterns` is plain substring containment over the original URL, not
//! path-segment matching: the pattern `/articles/` also matches
//! `/my-articles/x`. `convert_to_new_url` keeps path and query verbatim and
//! drops scheme, host, and fragment.

use url::Url;

/// Substring patterns that exclude original URLs from checking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipPatterns(Vec<String>);

impl SkipPatterns {
    pub fn new(patterns: Vec<String>) -> Self {
        Self(patterns)
    }

    /// True iff any configured pattern is a substring of `url`.
    pub fn matches(&self, url: &str) -> bool {
        self.0.iter().any(|p| url.contains(p.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Error rewriting an original URL. Fatal: a sitemap listing unparseable
/// URLs is corrupt input.
#[derive(Debug, thiserror::Error)]
#[error("malformed URL {url}: {source}")]
pub struct TransformError {
    pub url: String,
    source: url::ParseError,
}

/// Rewrites `original` onto `new_base`, keeping path and query verbatim.
///
/// `new_base` is concatenated as given; a trailing slash on it is the
/// caller's to avoid.
///
/// # Examples
///
/// - `convert_to_new_url("https://old.example/p/page.html?x=1", "https://new.example")`
///   → `"https://new.example/p/page.html?x=1"`
pub fn convert_to_new_url(original: &str, new_base: &str) -> Result<String, TransformError> {
    let parsed = Url::parse(original).map_err(|e| TransformError {
        url: original.to_string(),
        source: e,
    })?;

    let mut out = String::from(new_base);
    out.push_str(parsed.path());
    if let Some(query) = parsed.query() {
        out.push('?');
        out.push_str(query);
    }
    Ok(out)
}
