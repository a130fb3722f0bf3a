use async_trait::async_trait;
use reqwest::Url;
use std::fmt::Debug;

pub mod file;
pub mod http;

pub use file::FileDownloader;
pub use http::HttpDownloader;

/// Source of raw response bytes for a request URL.
///
/// `None` means nothing could be fetched. Implementations log their own
/// failures; callers treat a missing payload as "no data".
#[async_trait]
pub trait Downloader: Send + Sync + Debug {
    async fn download(&self, uri: &Url) -> Option<Vec<u8>>;
}
