//! Fakes shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use fpeople::PeopleSearcher;
use serde_json::json;
use serpstack_client::{SearchOverrides, SearchResponse};

/// Hands out canned responses in order and records every call.
pub struct FakeSearcher {
    responses: Mutex<VecDeque<SearchResponse>>,
    calls: Mutex<Vec<(String, SearchOverrides)>>,
}

impl FakeSearcher {
    pub fn new(responses: Vec<serde_json::Value>) -> Self {
        Self {
            responses: Mutex::new(
                responses
                    .into_iter()
                    .map(|v| serde_json::from_value(v).unwrap())
                    .collect(),
            ),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, SearchOverrides)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PeopleSearcher for FakeSearcher {
    async fn lookup(&self, full_name: &str, overrides: &SearchOverrides) -> SearchResponse {
        self.calls
            .lock()
            .unwrap()
            .push((full_name.to_string(), overrides.clone()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no canned response left")
    }
}

/// A provider that never answers.
pub struct StalledSearcher;

#[async_trait]
impl PeopleSearcher for StalledSearcher {
    async fn lookup(&self, _full_name: &str, _overrides: &SearchOverrides) -> SearchResponse {
        std::future::pending().await
    }
}

pub fn two_results() -> serde_json::Value {
    json!({
        "organic_results": [
            {"title": "Jane Doe - LinkedIn", "url": "https://linkedin.com/in/jane", "domain": "linkedin.com", "snippet": "Engineer at Acme"},
            {"title": "Jane Doe (@jane)", "url": "https://twitter.com/jane", "domain": "twitter.com", "snippet": "Tweets about Rust"}
        ]
    })
}
