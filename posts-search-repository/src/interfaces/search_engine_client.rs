//! Search engine client trait definition.
//!
//! This module defines the abstract interface for the handful of search engine
//! operations the tool needs. Any engine speaking the OpenSearch/Elasticsearch
//! REST contract can sit behind it.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use posts_search_shared::{FieldMatchQuery, PostDocument};

/// Abstract interface for search engine operations.
///
/// Each method maps to exactly one request against the engine. Nothing is
/// retried; failures are returned to the caller as they happened.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so a single client can be shared
/// behind an `Arc`.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Check whether an index exists.
    ///
    /// # Returns
    ///
    /// * `Ok(false)` - If the engine answered "not found"
    /// * `Ok(true)` - For any other answer
    /// * `Err(SearchError)` - If the request could not be completed
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError>;

    /// Create an index with the given settings and mappings body.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the engine accepted the index
    /// * `Err(SearchError::IndexCreationError)` - With the engine's response text
    ///   if creation was rejected
    async fn create_index(&self, index: &str, body: &Value) -> Result<(), SearchError>;

    /// Check whether a document with the given identifier exists.
    ///
    /// # Returns
    ///
    /// * `Ok(false)` - If the engine answered "not found"
    /// * `Ok(true)` - For any other answer
    async fn document_exists(&self, index: &str, id: &str) -> Result<bool, SearchError>;

    /// Index a single document under its own identifier.
    ///
    /// If a document with the same ID already exists, it will be replaced.
    /// When `refresh` is set the document is searchable by the time this returns.
    async fn index_document(
        &self,
        index: &str,
        document: &PostDocument,
        refresh: bool,
    ) -> Result<(), SearchError>;

    /// Run a single-field match query.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<PostDocument>)` - Matches in engine ranking order, limited to the
    ///   engine's default result window
    /// * `Err(SearchError)` - If the query fails or the response cannot be decoded
    async fn search(
        &self,
        index: &str,
        query: &FieldMatchQuery,
    ) -> Result<Vec<PostDocument>, SearchError>;
}
