// src/core/net.rs
//! Fetch boundary. Extraction never fetches; the runner hands it text.
//! Fetches are plain GETs: no cache, no retry.

use crate::error::ScrapeError;

/// Supplies the raw bytes of the page at `url`.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;
}

#[cfg(feature = "net")]
pub use http::HttpFetcher;

#[cfg(feature = "net")]
mod http {
    use std::time::Duration;

    use super::Fetch;
    use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
    use crate::error::ScrapeError;

    /// Blocking HTTPS GET client; one instance is shared by all workers.
    pub struct HttpFetcher {
        client: reqwest::blocking::Client,
    }

    impl HttpFetcher {
        pub fn new() -> Result<Self, ScrapeError> {
            let client = reqwest::blocking::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
                .build()
                .map_err(|e| ScrapeError::fetch("<client>", e))?;
            Ok(Self { client })
        }
    }

    impl Fetch for HttpFetcher {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
            logd!("GET {url}");
            let resp = self.client.get(url).send().map_err(|e| ScrapeError::fetch(url, e))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(ScrapeError::fetch(url, format!("HTTP error: {status}")));
            }
            let body = resp.bytes().map_err(|e| ScrapeError::fetch(url, e))?;
            logd!("GET {url}: {} bytes", body.len());
            Ok(body.to_vec())
        }
    }
}
