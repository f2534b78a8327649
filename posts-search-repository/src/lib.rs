//! # Posts Search Repository
//!
//! This crate provides the trait for talking to the search engine and a
//! concrete implementation for OpenSearch. It also owns the fixed index
//! mapping and the match query builder.

pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use errors::SearchError;
pub use interfaces::SearchEngineClient;
pub use opensearch::OpenSearchClient;
