//! HTTP implementation of the feed source.

use async_trait::async_trait;
use tracing::{debug, error, info, instrument};
use url::Url;

use super::FeedSource;
use crate::errors::IngestError;
use posts_search_shared::FeedPost;

/// Default feed endpoint.
pub const DEFAULT_FEED_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Fetches posts with a single GET request.
pub struct HttpFeedClient {
    client: reqwest::Client,
    url: Url,
}

impl HttpFeedClient {
    /// Create a feed client for the given endpoint.
    pub fn new(url: &str) -> Result<Self, IngestError> {
        let url = Url::parse(url)
            .map_err(|e| IngestError::validation(format!("Invalid feed URL {}: {}", url, e)))?;

        Ok(Self {
            client: reqwest::Client::new(),
            url,
        })
    }
}

#[async_trait]
impl FeedSource for HttpFeedClient {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_posts(&self) -> Result<Vec<FeedPost>, IngestError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| IngestError::feed(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| IngestError::feed(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            error!(status = %status, body = %text, "Feed request failed");
            return Err(IngestError::feed(format!(
                "Feed request failed with status {}: {}",
                status, text
            )));
        }

        debug!(bytes = body.len(), "Feed response received");

        let posts: Vec<FeedPost> = serde_json::from_slice(&body)
            .map_err(|e| IngestError::parse(format!("Invalid feed response: {}", e)))?;

        info!(count = posts.len(), "Fetched posts from feed");
        Ok(posts)
    }
}
