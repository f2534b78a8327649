//! Command-line interface.

use clap::{ArgGroup, Parser};

use crate::AppError;
use posts_search_repository::SearchError;
use posts_search_shared::FieldMatchQuery;

/// Index a posts feed into OpenSearch and query it.
#[derive(Parser, Debug)]
#[command(name = "posts-search")]
#[command(about = "Index a posts feed into OpenSearch and query it", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["crawl", "search"])))]
pub struct Cli {
    /// Crawl mode: populate the index from the feed
    #[arg(long)]
    pub crawl: bool,

    /// Search mode: run a match query
    #[arg(long)]
    pub search: bool,

    /// Query for search mode in 'key:value' format
    #[arg(long, value_name = "KEY:VALUE")]
    pub q: Option<String>,

    /// OpenSearch URL (overrides OPENSEARCH_URL)
    #[arg(long)]
    pub opensearch_url: Option<String>,
}

/// The operation selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Populate the index from the feed.
    Crawl,
    /// Run a single match query.
    Search(FieldMatchQuery),
}

impl Cli {
    /// Resolve the selected mode, validating the query in search mode.
    pub fn mode(&self) -> Result<Mode, AppError> {
        if self.crawl == self.search {
            return Err(AppError::config("please specify either --search or --crawl"));
        }
        if self.crawl {
            return Ok(Mode::Crawl);
        }

        let raw = self.q.as_deref().unwrap_or_default();
        let query = FieldMatchQuery::parse(raw).map_err(SearchError::from)?;
        Ok(Mode::Search(query))
    }
}
