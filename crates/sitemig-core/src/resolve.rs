//! Sitemap resolution: root URL to the flat ordered list of page URLs.
//!
//! Two variants behind one trait. The direct variant reads a single
//! `<urlset>`; the indexed variant walks a `<sitemapindex>` and concatenates
//! the URLs of every child sitemap in order. A wrong-shaped root is fatal;
//! a failing child in the index walk is skipped and the run continues.

use std::fmt;

use crate::fetch::{FetchError, SitemapFetch};
use crate::sitemap::{parse_sitemap, ParseError, SitemapDoc};

/// Fatal resolution failure: the root document could not be fetched, could
/// not be parsed, or has the wrong top-level shape.
#[derive(Debug, thiserror::Error)]
#[error("invalid sitemap format at {url}: {reason}")]
pub struct ResolveError {
    pub url: String,
    pub reason: String,
}

impl ResolveError {
    fn invalid(url: &str, reason: impl fmt::Display) -> Self {
        Self {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Resolves a root sitemap URL into the ordered list of page URLs.
pub trait ResolveSitemap {
    fn resolve(&self, root_url: &str) -> Result<Vec<String>, ResolveError>;
}

/// Fetch-then-parse error, kept apart so the index walk can report which
/// stage lost a child.
#[derive(Debug)]
enum DocError {
    Fetch(FetchError),
    Parse(ParseError),
}

impl fmt::Display for DocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocError::Fetch(e) => write!(f, "fetch failed: {}", e),
            DocError::Parse(e) => write!(f, "parse failed: {}", e),
        }
    }
}

fn fetch_and_parse(fetcher: &dyn SitemapFetch, url: &str) -> Result<SitemapDoc, DocError> {
    let xml = fetcher.fetch_xml(url).map_err(DocError::Fetch)?;
    parse_sitemap(&xml).map_err(DocError::Parse)
}

/// Resolver for a single `<urlset>` sitemap.
pub struct DirectResolver<'a> {
    fetcher: &'a dyn SitemapFetch,
}

impl<'a> DirectResolver<'a> {
    pub fn new(fetcher: &'a dyn SitemapFetch) -> Self {
        Self { fetcher }
    }
}

impl ResolveSitemap for DirectResolver<'_> {
    fn resolve(&self, root_url: &str) -> Result<Vec<String>, ResolveError> {
        match fetch_and_parse(self.fetcher, root_url) {
            Ok(SitemapDoc::UrlSet(entries)) => {
                Ok(entries.into_iter().map(|e| e.loc).collect())
            }
            Ok(SitemapDoc::Index(_)) => Err(ResolveError::invalid(
                root_url,
                "expected <urlset> root, found <sitemapindex>",
            )),
            Err(e) => Err(ResolveError::invalid(root_url, e)),
        }
    }
}

/// Resolver for a `<sitemapindex>` and all of its child sitemaps.
pub struct IndexResolver<'a> {
    fetcher: &'a dyn SitemapFetch,
}

impl<'a> IndexResolver<'a> {
    pub fn new(fetcher: &'a dyn SitemapFetch) -> Self {
        Self { fetcher }
    }
}

impl ResolveSitemap for IndexResolver<'_> {
    fn resolve(&self, root_url: &str) -> Result<Vec<String>, ResolveError> {
        let refs = match fetch_and_parse(self.fetcher, root_url) {
            Ok(SitemapDoc::Index(refs)) => refs,
            Ok(SitemapDoc::UrlSet(_)) => {
                return Err(ResolveError::invalid(
                    root_url,
                    "expected <sitemapindex> root, found <urlset>",
                ))
            }
            Err(e) => return Err(ResolveError::invalid(root_url, e)),
        };

        let mut all = Vec::new();
        for child in refs {
            match fetch_and_parse(self.fetcher, &child.loc) {
                Ok(SitemapDoc::UrlSet(entries)) => {
                    all.extend(entries.into_iter().map(|e| e.loc));
                }
                Ok(SitemapDoc::Index(_)) => {
                    tracing::warn!("skipping nested sitemap index at {}", child.loc);
                }
                Err(e) => {
                    tracing::warn!("skipping child sitemap {}: {}", child.loc, e);
                }
            }
        }
        Ok(all)
    }
}
