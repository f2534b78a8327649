//! Crawler module for the posts search ingest.
//!
//! Populates the index from the feed, once.

use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::errors::IngestError;
use crate::feed::FeedSource;
use crate::samples::sample_for;
use posts_search_repository::SearchEngineClient;
use posts_search_shared::PostDocument;

/// Identifier of the document whose presence marks the index as populated.
pub const MARKER_DOCUMENT_ID: &str = "1";

/// Result of a crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// The marker document was found; nothing was fetched or written.
    AlreadyPopulated,
    /// Every feed post was indexed.
    Indexed {
        /// Number of documents written.
        documents: usize,
    },
}

/// Fetches the feed and indexes each post with its localized sample.
///
/// Posts are written one at a time, each with refresh requested, in feed
/// order. The first failed write aborts the crawl; documents already written
/// stay in the index.
pub struct Crawler {
    client: Arc<dyn SearchEngineClient>,
    feed: Arc<dyn FeedSource>,
    index: String,
    samples: Vec<String>,
}

impl Crawler {
    /// Create a crawler writing into `index`, rotating through `samples`.
    pub fn new(
        client: Arc<dyn SearchEngineClient>,
        feed: Arc<dyn FeedSource>,
        index: impl Into<String>,
        samples: Vec<String>,
    ) -> Self {
        Self {
            client,
            feed,
            index: index.into(),
            samples,
        }
    }

    /// Run the crawl.
    ///
    /// Skips everything if the marker document already exists. A crawl that
    /// failed after writing the marker is therefore not resumed by a rerun.
    #[instrument(skip(self), fields(index = %self.index))]
    pub async fn run(&self) -> Result<CrawlOutcome, IngestError> {
        if self.samples.is_empty() {
            return Err(IngestError::validation("Sample table must not be empty"));
        }

        if self
            .client
            .document_exists(&self.index, MARKER_DOCUMENT_ID)
            .await?
        {
            info!(marker = MARKER_DOCUMENT_ID, "Documents already exist");
            return Ok(CrawlOutcome::AlreadyPopulated);
        }

        let posts = self.feed.fetch_posts().await?;
        let total = posts.len();

        for (position, post) in posts.into_iter().enumerate() {
            let sample = sample_for(&self.samples, position)
                .ok_or_else(|| IngestError::validation("Sample table must not be empty"))?;
            let document = PostDocument::from_feed(post, sample);

            self.client
                .index_document(&self.index, &document, true)
                .await?;

            debug!(doc_id = document.id, position, "Indexed post");
        }

        info!(documents = total, "Crawl complete");
        Ok(CrawlOutcome::Indexed { documents: total })
    }
}
