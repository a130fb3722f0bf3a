use async_trait::async_trait;
use reqwest::Url;
use tracing::{error, warn};

use super::Downloader;

/// Reads payloads from `file://` URLs, for offline use.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDownloader;

#[async_trait]
impl Downloader for FileDownloader {
    async fn download(&self, uri: &Url) -> Option<Vec<u8>> {
        let Ok(path) = uri.to_file_path() else {
            warn!(url = %uri, "Not a local file URL");
            return None;
        };

        match tokio::fs::read(&path).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to read file");
                None
            }
        }
    }
}
