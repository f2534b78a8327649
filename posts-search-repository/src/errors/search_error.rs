//! Search error types.
//!
//! This module defines the error types that can occur while talking to the
//! search engine.

use thiserror::Error;

/// Errors that can occur during search engine operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Failed to reach the search engine or read its response.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to create the search index.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// Failed to index a single document.
    #[error("Index error: {0}")]
    IndexError(String),

    /// Search query execution failed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Failed to parse response from search engine.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provided query is invalid.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}

impl From<posts_search_shared::QueryParseError> for SearchError {
    fn from(err: posts_search_shared::QueryParseError) -> Self {
        Self::InvalidQuery(err.to_string())
    }
}
