//! Configuration and dependency wiring for the posts search tool.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;

use crate::telemetry::LogFormat;
use posts_search_ingest::DEFAULT_FEED_URL;
use posts_search_repository::opensearch::DEFAULT_INDEX_NAME;

/// Default OpenSearch URL.
pub const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Search engine base URL.
    pub opensearch_url: String,
    /// Name of the posts index.
    pub index_name: String,
    /// Endpoint the crawl fetches posts from.
    pub feed_url: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            opensearch_url: DEFAULT_OPENSEARCH_URL.to_string(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
            feed_url: DEFAULT_FEED_URL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `POSTS_INDEX`: Index name (default: posts)
    /// - `FEED_URL`: Feed endpoint (default: https://jsonplaceholder.typicode.com/posts)
    /// - `LOG_FORMAT`: `json` for JSON logs
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            opensearch_url: non_empty("OPENSEARCH_URL").unwrap_or(defaults.opensearch_url),
            index_name: non_empty("POSTS_INDEX").unwrap_or(defaults.index_name),
            feed_url: non_empty("FEED_URL").unwrap_or(defaults.feed_url),
            log_format: LogFormat::from_env_value(lookup("LOG_FORMAT").as_deref()),
        }
    }

    /// Override the OpenSearch URL when one was given on the command line.
    pub fn with_opensearch_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.opensearch_url = url;
        }
        self
    }
}
