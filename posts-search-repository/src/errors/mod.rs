//! Error types for the posts search repository.

mod search_error;

pub use search_error::SearchError;
