//! Sitemap XML retrieval.
//!
//! Blocking GET via the curl crate (libcurl). No overall timeout is applied
//! here: only the availability probe carries a deadline, sitemap downloads
//! do not. Runs in the current thread.

use std::fmt;
use std::str;
use std::time::Duration;

/// Error retrieving a sitemap document. Callers decide the recovery policy:
/// the index resolver skips a failing child, the direct resolver aborts.
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (connection, DNS, TLS, ...).
    Curl(curl::Error),
    /// HTTP response had a non-2xx status.
    Http(u32),
    /// Response body was not valid UTF-8.
    Encoding(str::Utf8Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Encoding(e) => write!(f, "body not UTF-8: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Encoding(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

/// Fetches a sitemap document over HTTP.
///
/// Seam for resolution: tests substitute an in-memory implementation, the
/// CLI uses [`HttpFetcher`].
pub trait SitemapFetch {
    fn fetch_xml(&self, url: &str) -> Result<String, FetchError>;
}

/// curl-backed fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    connect_timeout: Duration,
}

impl HttpFetcher {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

impl SitemapFetch for HttpFetcher {
    fn fetch_xml(&self, url: &str) -> Result<String, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(FetchError::Curl)?;
        easy.follow_location(true).map_err(FetchError::Curl)?;
        easy.max_redirections(10).map_err(FetchError::Curl)?;
        easy.connect_timeout(self.connect_timeout)
            .map_err(FetchError::Curl)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(FetchError::Curl)?;
            transfer.perform().map_err(FetchError::Curl)?;
        }

        let code = easy.response_code().map_err(FetchError::Curl)?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        String::from_utf8(body).map_err(|e| FetchError::Encoding(e.utf8_error()))
    }
}
