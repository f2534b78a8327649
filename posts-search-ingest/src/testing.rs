//! In-memory doubles for the search engine and the feed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::IngestError;
use crate::feed::FeedSource;
use posts_search_repository::{SearchEngineClient, SearchError};
use posts_search_shared::{FeedPost, FieldMatchQuery, PostDocument};

/// A recorded `index_document` call.
#[derive(Debug, Clone)]
pub(crate) struct RecordedWrite {
    pub index: String,
    pub document: PostDocument,
    pub refresh: bool,
}

/// Mock search client keeping indices and documents in memory.
#[derive(Default)]
pub(crate) struct MockSearchClient {
    indices: Mutex<HashMap<String, Value>>,
    documents: Mutex<HashMap<String, Vec<PostDocument>>>,
    writes: Mutex<Vec<RecordedWrite>>,
    create_error: Option<String>,
    fail_write_for: Option<i64>,
    pub create_calls: AtomicUsize,
    pub lookup_calls: AtomicUsize,
    pub write_calls: AtomicUsize,
}

impl MockSearchClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(name: &str) -> Self {
        let client = Self::new();
        client
            .indices
            .lock()
            .unwrap()
            .insert(name.to_string(), Value::Null);
        client
    }

    pub fn rejecting_index_creation(mut self, body: &str) -> Self {
        self.create_error = Some(body.to_string());
        self
    }

    pub fn failing_write_for(mut self, id: i64) -> Self {
        self.fail_write_for = Some(id);
        self
    }

    pub fn mapping_of(&self, name: &str) -> Option<Value> {
        self.indices.lock().unwrap().get(name).cloned()
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchEngineClient for MockSearchClient {
    async fn index_exists(&self, index: &str) -> Result<bool, SearchError> {
        Ok(self.indices.lock().unwrap().contains_key(index))
    }

    async fn create_index(&self, index: &str, body: &Value) -> Result<(), SearchError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref err) = self.create_error {
            return Err(SearchError::index_creation(format!("status 400: {}", err)));
        }
        self.indices
            .lock()
            .unwrap()
            .insert(index.to_string(), body.clone());
        Ok(())
    }

    async fn document_exists(&self, index: &str, id: &str) -> Result<bool, SearchError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .get(index)
            .map(|docs| docs.iter().any(|d| d.document_id() == id))
            .unwrap_or(false))
    }

    async fn index_document(
        &self,
        index: &str,
        document: &PostDocument,
        refresh: bool,
    ) -> Result<(), SearchError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_write_for == Some(document.id) {
            return Err(SearchError::index(format!(
                "Indexing document {} failed with status 503: unavailable",
                document.id
            )));
        }

        self.writes.lock().unwrap().push(RecordedWrite {
            index: index.to_string(),
            document: document.clone(),
            refresh,
        });

        let mut documents = self.documents.lock().unwrap();
        let docs = documents.entry(index.to_string()).or_default();
        docs.retain(|d| d.id != document.id);
        docs.push(document.clone());
        Ok(())
    }

    async fn search(
        &self,
        index: &str,
        query: &FieldMatchQuery,
    ) -> Result<Vec<PostDocument>, SearchError> {
        let documents = self.documents.lock().unwrap();
        let docs = documents.get(index).cloned().unwrap_or_default();

        let terms: Vec<String> = query
            .value
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();

        let mut matches = Vec::new();
        for doc in docs {
            let text = match query.field.as_str() {
                "title" => &doc.title,
                "body" => &doc.body,
                "localized_body" => &doc.localized_body,
                other => return Err(SearchError::query(format!("unknown field [{}]", other))),
            };
            let tokens: Vec<String> = text.split_whitespace().map(|t| t.to_lowercase()).collect();
            if terms.iter().any(|t| tokens.contains(t)) {
                matches.push(doc);
            }
        }
        Ok(matches)
    }
}

/// Feed double returning a fixed list of posts.
pub(crate) struct StaticFeed {
    posts: Vec<FeedPost>,
    error: Option<String>,
    pub fetch_calls: AtomicUsize,
}

impl StaticFeed {
    pub fn new(posts: Vec<FeedPost>) -> Self {
        Self {
            posts,
            error: None,
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            posts: Vec::new(),
            error: Some(msg.to_string()),
            fetch_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    async fn fetch_posts(&self) -> Result<Vec<FeedPost>, IngestError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        match self.error {
            Some(ref msg) => Err(IngestError::feed(msg.clone())),
            None => Ok(self.posts.clone()),
        }
    }
}

pub(crate) fn feed_post(id: i64, title: &str, body: &str) -> FeedPost {
    FeedPost {
        id,
        title: title.to_string(),
        body: body.to_string(),
    }
}
