//! # Posts Search Shared
//!
//! Types shared between the repository, ingest, and binary crates: the feed
//! record, the indexed post document, and the parsed field match query.

mod document;
mod query;

pub use document::{FeedPost, PostDocument};
pub use query::{FieldMatchQuery, QueryParseError};
