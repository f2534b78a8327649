//! # Posts Search Ingest
//!
//! This crate prepares the posts index and fills it from the remote feed.
//!
//! ## Flow
//!
//! 1. **Provisioner**: Creates the index with its fixed mapping if it is missing
//! 2. **Feed**: Fetches the full list of posts from the remote endpoint
//! 3. **Crawler**: Attaches a rotating localized sample to each post and indexes
//!    it, one write at a time, with immediate visibility

pub mod crawler;
pub mod errors;
pub mod feed;
pub mod provisioner;
pub mod samples;

#[cfg(test)]
pub(crate) mod testing;

pub use crawler::{CrawlOutcome, Crawler, MARKER_DOCUMENT_ID};
pub use errors::IngestError;
pub use feed::{FeedSource, HttpFeedClient, DEFAULT_FEED_URL};
pub use provisioner::{IndexProvisioner, ProvisionOutcome};
