//! OpenSearch index configuration and mappings.
//!
//! This module defines the fixed mapping for the posts index.

use serde_json::{json, Value};

/// The default name of the posts index.
pub const DEFAULT_INDEX_NAME: &str = "posts";

/// Analyzer applied to `localized_body`. Requires the kuromoji analysis plugin.
pub const LOCALIZED_ANALYZER: &str = "kuromoji";

/// Get the create-index body for the posts index.
///
/// - `id`: 64-bit integer copy of the feed identifier
/// - `title`, `body`: text with the default analyzer
/// - `localized_body`: text with the language-specific analyzer
pub fn index_body() -> Value {
    json!({
        "mappings": {
            "properties": {
                "id": {
                    "type": "long"
                },
                "title": {
                    "type": "text"
                },
                "body": {
                    "type": "text"
                },
                "localized_body": {
                    "type": "text",
                    "analyzer": LOCALIZED_ANALYZER
                }
            }
        }
    })
}
