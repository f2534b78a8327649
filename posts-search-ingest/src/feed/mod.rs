//! Feed module for the posts search ingest.
//!
//! Fetches the list of posts the index is populated from.

mod http_client;

use async_trait::async_trait;

use crate::errors::IngestError;
use posts_search_shared::FeedPost;

pub use http_client::{HttpFeedClient, DEFAULT_FEED_URL};

/// Source of the posts to index.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch every post, in feed order.
    ///
    /// The whole response is decoded before this returns.
    async fn fetch_posts(&self) -> Result<Vec<FeedPost>, IngestError>;
}
