//! Query executor for the posts index.

use std::io::{self, Write};
use std::sync::Arc;
use tracing::{info, instrument};

use posts_search_repository::{SearchEngineClient, SearchError};
use posts_search_shared::FieldMatchQuery;

/// Runs single-field match queries against one index.
pub struct QueryExecutor {
    client: Arc<dyn SearchEngineClient>,
    index: String,
}

impl QueryExecutor {
    /// Create a new executor for `index`.
    pub fn new(client: Arc<dyn SearchEngineClient>, index: impl Into<String>) -> Self {
        Self {
            client,
            index: index.into(),
        }
    }

    /// Run the query and return matching post ids in ranking order.
    ///
    /// Only the engine's default result window is returned.
    #[instrument(skip(self), fields(index = %self.index, query = %query))]
    pub async fn search(&self, query: &FieldMatchQuery) -> Result<Vec<i64>, SearchError> {
        let documents = self.client.search(&self.index, query).await?;
        let ids: Vec<i64> = documents.into_iter().map(|doc| doc.id).collect();

        info!(matches = ids.len(), "Search finished");
        Ok(ids)
    }
}

/// Write the match count followed by one id per line.
pub fn print_matches<W: Write>(out: &mut W, ids: &[i64]) -> io::Result<()> {
    writeln!(out, "matched {} posts", ids.len())?;
    for id in ids {
        writeln!(out, "{}", id)?;
    }
    Ok(())
}
