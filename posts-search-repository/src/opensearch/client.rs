//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    http::{
        response::Response,
        transport::{SingleNodeConnectionPool, TransportBuilder},
    },
    indices::{IndicesCreateParts, IndicesExistsParts},
    params::Refresh,
    GetParts, IndexParts, OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::queries::{build_match_query, parse_search_hits};
use posts_search_shared::{FieldMatchQuery, PostDocument};

/// A response whose body has been read to the end.
///
/// Every request goes through [`OpenSearchClient::drain`], which takes the
/// `Response` by value, so the connection is released on every path.
#[derive(Debug)]
struct DrainedResponse {
    status: u16,
    body: String,
}

impl DrainedResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn is_not_found(&self) -> bool {
        self.status == 404
    }

    fn describe(&self) -> String {
        format!("status {}: {}", self.status, self.body)
    }
}

/// OpenSearch client implementation.
///
/// # Example
///
/// ```ignore
/// let client = OpenSearchClient::new("http://localhost:9200").await?;
/// if !client.index_exists("posts").await? {
///     client.create_index("posts", &index_body()).await?;
/// }
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError)` - If the URL is invalid or transport setup fails
    pub async fn new(url: &str) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url)
            .map_err(|e| SearchError::connection(format!("Invalid URL {}: {}", url, e)))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, "Created OpenSearch client");

        Ok(Self { client })
    }

    /// Read a response body to completion.
    async fn drain(response: Response) -> Result<DrainedResponse, SearchError> {
        let status = response.status_code().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::connection(format!("Failed to read response: {}", e)))?;

        Ok(DrainedResponse { status, body })
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    #[instrument(skip(self))]
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let response = Self::drain(response).await?;
        debug!(status = response.status, "Index existence checked");

        Ok(!response.is_not_found())
    }

    #[instrument(skip(self, body))]
    async fn create_index(&self, index: &str, body: &Value) -> Result<(), SearchError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let response = Self::drain(response).await?;
        if !response.is_success() {
            error!(status = response.status, body = %response.body, "Create index request failed");
            return Err(SearchError::index_creation(response.describe()));
        }

        info!(index = %index, "Created index");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn document_exists(&self, index: &str, id: &str) -> Result<bool, SearchError> {
        let response = self
            .client
            .get(GetParts::IndexId(index, id))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let response = Self::drain(response).await?;
        debug!(status = response.status, "Document lookup finished");

        Ok(!response.is_not_found())
    }

    #[instrument(skip(self, document), fields(doc_id = document.id))]
    async fn index_document(
        &self,
        index: &str,
        document: &PostDocument,
        refresh: bool,
    ) -> Result<(), SearchError> {
        let doc_id = document.document_id();

        let mut request = self
            .client
            .index(IndexParts::IndexId(index, &doc_id))
            .body(document);
        if refresh {
            request = request.refresh(Refresh::True);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let response = Self::drain(response).await?;
        if !response.is_success() {
            error!(status = response.status, body = %response.body, "Index request failed");
            return Err(SearchError::index(format!(
                "Indexing document {} failed with {}",
                doc_id,
                response.describe()
            )));
        }

        debug!(doc_id = %doc_id, "Document indexed");
        Ok(())
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn search(
        &self,
        index: &str,
        query: &FieldMatchQuery,
    ) -> Result<Vec<PostDocument>, SearchError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(build_match_query(query))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let response = Self::drain(response).await?;
        if !response.is_success() {
            error!(status = response.status, body = %response.body, "Search request failed");
            return Err(SearchError::query(response.describe()));
        }

        let documents = parse_search_hits(&response.body)?;
        debug!(hits = documents.len(), "Search completed");
        Ok(documents)
    }
}
