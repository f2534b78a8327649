//! Post documents as fetched from the feed and as stored in the index.

use serde::{Deserialize, Serialize};

/// A record as served by the remote feed.
///
/// Fields the index does not care about (e.g. `userId`) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPost {
    /// Identifier assigned by the feed. Indexed as a `long`.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
}

/// A post as written to and read back from the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDocument {
    /// Identifier copied from the feed record.
    pub id: i64,
    /// Post title, analyzed with the default analyzer.
    pub title: String,
    /// Post body, analyzed with the default analyzer.
    pub body: String,
    /// Sample text analyzed with the language-specific analyzer.
    #[serde(default)]
    pub localized_body: String,
}

impl PostDocument {
    /// Build an index document from a feed record and its localized sample.
    pub fn from_feed(post: FeedPost, localized_body: impl Into<String>) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            localized_body: localized_body.into(),
        }
    }

    /// The identifier the document is stored under in the index.
    pub fn document_id(&self) -> String {
        self.id.to_string()
    }
}
