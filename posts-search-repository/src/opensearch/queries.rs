//! OpenSearch query builders and response decoding.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::errors::SearchError;
use posts_search_shared::{FieldMatchQuery, PostDocument};

/// Build the request body for a single-field match query.
///
/// The field name is inserted as a JSON key, so any characters in it or in the
/// value are escaped by the serializer rather than spliced into raw JSON.
pub fn build_match_query(query: &FieldMatchQuery) -> Value {
    let mut clause = Map::new();
    clause.insert(query.field.clone(), Value::String(query.value.clone()));

    json!({
        "query": {
            "match": clause
        }
    })
}

#[derive(Debug, Deserialize)]
struct SearchResponseBody {
    hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
struct HitsEnvelope {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: PostDocument,
}

/// Decode the documents in a search response, preserving hit order.
pub fn parse_search_hits(body: &str) -> Result<Vec<PostDocument>, SearchError> {
    let response: SearchResponseBody = serde_json::from_str(body)
        .map_err(|e| SearchError::parse(format!("Invalid search response: {}", e)))?;

    Ok(response.hits.hits.into_iter().map(|hit| hit.source).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_match_query() {
        let query = FieldMatchQuery::new("title", "qui est esse");

        let body = build_match_query(&query);

        assert_eq!(
            body,
            json!({ "query": { "match": { "title": "qui est esse" } } })
        );
    }

    #[test]
    fn test_build_match_query_escapes_quotes() {
        let query = FieldMatchQuery::new("title", r#"say "hi""#);

        let body = build_match_query(&query);

        assert_eq!(body["query"]["match"]["title"], r#"say "hi""#);
        assert!(serde_json::to_string(&body).is_ok());
    }

    #[test]
    fn test_parse_search_hits_in_order() {
        let body = json!({
            "took": 3,
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "hits": [
                    {
                        "_index": "posts",
                        "_id": "9",
                        "_score": 2.1,
                        "_source": { "id": 9, "title": "a", "body": "b", "localized_body": "c" }
                    },
                    {
                        "_index": "posts",
                        "_id": "4",
                        "_score": 0.7,
                        "_source": { "id": 4, "title": "a a", "body": "d", "localized_body": "e" }
                    }
                ]
            }
        })
        .to_string();

        let docs = parse_search_hits(&body).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, 9);
        assert_eq!(docs[1].id, 4);
        assert_eq!(docs[1].localized_body, "e");
    }

    #[test]
    fn test_parse_search_hits_empty() {
        let body = r#"{"hits": {"total": {"value": 0}, "hits": []}}"#;
        assert!(parse_search_hits(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_search_hits_invalid() {
        let result = parse_search_hits("not json");
        assert!(matches!(result, Err(SearchError::ParseError(_))));

        let result = parse_search_hits(r#"{"hits": {"hits": [{"_source": {"title": "no id"}}]}}"#);
        assert!(matches!(result, Err(SearchError::ParseError(_))));
    }
}
