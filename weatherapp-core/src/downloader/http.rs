use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, error, warn};

use super::Downloader;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fetches payloads over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    http: Client,
    timeout: Duration,
}

impl HttpDownloader {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { http: Client::new(), timeout }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, uri: &Url) -> Option<Vec<u8>> {
        debug!(url = %redacted(uri), "Downloading");

        let res = match self.http.get(uri.clone()).timeout(self.timeout).send().await {
            Ok(res) => res,
            Err(e) => {
                error!(url = %redacted(uri), error = %e, "Failed to send request");
                return None;
            }
        };

        let status = res.status();
        if !status.is_success() {
            warn!(url = %redacted(uri), %status, "Request failed");
            return None;
        }

        match res.bytes().await {
            Ok(body) => Some(body.to_vec()),
            Err(e) => {
                error!(url = %redacted(uri), error = %e, "Failed to read response body");
                None
            }
        }
    }
}

/// URL with the `appid` query value hidden, for logging.
fn redacted(uri: &Url) -> Url {
    let mut shown = uri.clone();
    if uri.query_pairs().any(|(k, _)| k == "appid") {
        let pairs: Vec<(String, String)> = uri
            .query_pairs()
            .map(|(k, v)| {
                let v = if k == "appid" { "***".to_string() } else { v.into_owned() };
                (k.into_owned(), v)
            })
            .collect();
        shown.query_pairs_mut().clear().extend_pairs(pairs);
    }
    shown
}
