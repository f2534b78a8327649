//! Error types for the posts search ingest.

use posts_search_repository::SearchError;
use thiserror::Error;

/// Errors that can occur while provisioning or crawling.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The feed could not be reached or answered with a failure status.
    #[error("Feed error: {0}")]
    FeedError(String),

    /// The feed response could not be decoded.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid input given to an ingest component.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from the search engine.
    #[error("Search error: {0}")]
    SearchError(#[from] SearchError),
}

impl IngestError {
    /// Create a feed error.
    pub fn feed(msg: impl Into<String>) -> Self {
        Self::FeedError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
