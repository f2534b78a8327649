//! Dependency initialization and wiring for the posts search tool.

use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::search::QueryExecutor;
use crate::AppError;
use posts_search_ingest::{samples::default_samples, Crawler, HttpFeedClient, IndexProvisioner};
use posts_search_repository::{OpenSearchClient, SearchEngineClient};

/// Container for the search client and settings shared by every component.
///
/// The client is built once and handed to each component it creates.
pub struct Dependencies {
    /// Settings the components were built from.
    pub config: AppConfig,
    search_client: Arc<dyn SearchEngineClient>,
}

impl Dependencies {
    /// Initialize dependencies from the given configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If the OpenSearch client cannot be created
    pub async fn new(config: AppConfig) -> Result<Self, AppError> {
        info!(
            opensearch_url = %config.opensearch_url,
            index = %config.index_name,
            feed_url = %config.feed_url,
            "Initializing dependencies"
        );

        let search_client = OpenSearchClient::new(&config.opensearch_url)
            .await
            .map_err(|e| AppError::config(format!("Failed to create OpenSearch client: {}", e)))?;

        Ok(Self::with_client(config, Arc::new(search_client)))
    }

    /// Build dependencies around an existing search client.
    pub fn with_client(config: AppConfig, search_client: Arc<dyn SearchEngineClient>) -> Self {
        Self {
            config,
            search_client,
        }
    }

    /// The index provisioner.
    pub fn provisioner(&self) -> IndexProvisioner {
        IndexProvisioner::new(self.search_client.clone())
    }

    /// The crawler, reading from the configured feed with the built-in samples.
    pub fn crawler(&self) -> Result<Crawler, AppError> {
        let feed = HttpFeedClient::new(&self.config.feed_url)?;

        Ok(Crawler::new(
            self.search_client.clone(),
            Arc::new(feed),
            self.config.index_name.clone(),
            default_samples(),
        ))
    }

    /// The query executor for the configured index.
    pub fn query_executor(&self) -> QueryExecutor {
        QueryExecutor::new(self.search_client.clone(), self.config.index_name.clone())
    }
}
