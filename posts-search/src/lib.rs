//! # Posts Search
//!
//! Library side of the `posts-search` binary: CLI definition, configuration,
//! dependency wiring, and the query executor.
//!
//! The index is always provisioned first. Then exactly one of the crawl or the
//! search runs, chosen on the command line.

pub mod cli;
pub mod config;
pub mod search;
pub mod telemetry;

pub use cli::{Cli, Mode};
pub use config::{AppConfig, Dependencies};
pub use search::QueryExecutor;

use std::io::Write;

use posts_search_ingest::IngestError;
use posts_search_repository::opensearch::index_body;
use posts_search_repository::SearchError;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while running the tool.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] SearchError),

    /// Ingest error.
    #[error("Ingest error: {0}")]
    IngestError(#[from] IngestError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// Validate the command line, then provision the index and run the selected mode.
///
/// A malformed `--q` is rejected before any request reaches the engine.
pub async fn execute<W: Write>(
    cli: &Cli,
    dependencies: &Dependencies,
    out: &mut W,
) -> Result<(), AppError> {
    let mode = cli.mode()?;
    run(mode, dependencies, out).await
}

/// Provision the index, then run the selected mode.
///
/// Search results are written to `out`.
pub async fn run<W: Write>(
    mode: Mode,
    dependencies: &Dependencies,
    out: &mut W,
) -> Result<(), AppError> {
    let index = &dependencies.config.index_name;

    dependencies
        .provisioner()
        .ensure_index(index, &index_body())
        .await?;

    match mode {
        Mode::Crawl => {
            let outcome = dependencies.crawler()?.run().await?;
            info!(?outcome, "Crawl finished");
        }
        Mode::Search(query) => {
            let ids = dependencies.query_executor().search(&query).await?;
            search::print_matches(out, &ids)?;
        }
    }

    Ok(())
}
