//! Availability probing of rewritten URLs.
//!
//! One blocking GET per URL with a fixed overall deadline (unlike the
//! sitemap fetch, which has none). Every failure mode collapses to `false`:
//! timeout, DNS, refused connection, TLS, or any status other than 200. A
//! probe never aborts the run.

use std::time::Duration;

/// Existence probe over a candidate URL.
///
/// Seam for the runner: tests substitute a counting fake, the CLI uses
/// [`HttpProbe`].
pub trait UrlProbe {
    /// Returns true iff the URL answered HTTP 200 within the deadline.
    fn check(&self, url: &str) -> bool;
}

/// curl-backed probe.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    timeout: Duration,
    connect_timeout: Duration,
}

impl HttpProbe {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Self {
        Self {
            timeout,
            connect_timeout,
        }
    }

    fn status(&self, url: &str) -> Result<u32, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            // Body is discarded; only the status matters.
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }

        easy.response_code()
    }
}

impl UrlProbe for HttpProbe {
    fn check(&self, url: &str) -> bool {
        match self.status(url) {
            Ok(200) => true,
            Ok(code) => {
                tracing::debug!("probe {} returned HTTP {}", url, code);
                false
            }
            Err(e) => {
                tracing::debug!("probe {} failed: {}", url, e);
                false
            }
        }
    }
}
