//! Provisioner module for the posts search ingest.
//!
//! Makes sure the posts index exists before anything reads or writes it.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::errors::IngestError;
use posts_search_repository::SearchEngineClient;
use serde_json::Value;

/// What `ensure_index` had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// The index was already there and was left untouched.
    AlreadyExists,
    /// The index was created with the given mapping.
    Created,
}

/// Creates the index with its fixed mapping when it is missing.
pub struct IndexProvisioner {
    client: Arc<dyn SearchEngineClient>,
}

impl IndexProvisioner {
    /// Create a new provisioner with the given client.
    pub fn new(client: Arc<dyn SearchEngineClient>) -> Self {
        Self { client }
    }

    /// Ensure `name` exists, creating it from `mapping` if the engine reports it missing.
    ///
    /// An existing index is never modified, even if its mapping differs.
    #[instrument(skip(self, mapping))]
    pub async fn ensure_index(
        &self,
        name: &str,
        mapping: &Value,
    ) -> Result<ProvisionOutcome, IngestError> {
        if self.client.index_exists(name).await? {
            info!(index = %name, "Index already exists");
            return Ok(ProvisionOutcome::AlreadyExists);
        }

        self.client.create_index(name, mapping).await?;

        info!(index = %name, "Index created");
        Ok(ProvisionOutcome::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockSearchClient;
    use posts_search_repository::opensearch::index_body;
    use posts_search_repository::SearchError;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_creates_missing_index_once() {
        let client = Arc::new(MockSearchClient::new());
        let provisioner = IndexProvisioner::new(client.clone());

        let first = provisioner.ensure_index("posts", &index_body()).await.unwrap();
        let second = provisioner.ensure_index("posts", &index_body()).await.unwrap();

        assert_eq!(first, ProvisionOutcome::Created);
        assert_eq!(second, ProvisionOutcome::AlreadyExists);
        assert_eq!(client.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.mapping_of("posts"), Some(index_body()));
    }

    #[tokio::test]
    async fn test_existing_index_untouched() {
        let client = Arc::new(MockSearchClient::with_index("posts"));
        let provisioner = IndexProvisioner::new(client.clone());

        let outcome = provisioner.ensure_index("posts", &index_body()).await.unwrap();

        assert_eq!(outcome, ProvisionOutcome::AlreadyExists);
        assert_eq!(client.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_rejected_creation_propagates() {
        let client =
            Arc::new(MockSearchClient::new().rejecting_index_creation("mapper_parsing_exception"));
        let provisioner = IndexProvisioner::new(client.clone());

        let err = provisioner
            .ensure_index("posts", &index_body())
            .await
            .unwrap_err();

        match err {
            IngestError::SearchError(SearchError::IndexCreationError(msg)) => {
                assert!(msg.contains("mapper_parsing_exception"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
