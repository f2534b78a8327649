//! Interface definitions for the search engine client.
//!
//! This module defines the abstract `SearchEngineClient` trait so components
//! receive the client by injection and tests can swap in a mock backend.

mod search_engine_client;

pub use search_engine_client::SearchEngineClient;
