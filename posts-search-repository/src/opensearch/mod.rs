//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using OpenSearch as the backend.

mod client;
pub mod index_config;
pub mod queries;

pub use client::OpenSearchClient;
pub use index_config::{index_body, DEFAULT_INDEX_NAME, LOCALIZED_ANALYZER};
