use async_trait::async_trait;
use serpstack_client::{SearchOverrides, SearchResponse, SerpstackClient};

// --- PeopleSearcher trait ---

/// One name lookup against the search provider. Failures come back in-band as
/// a response carrying an `error` entry.
#[async_trait]
pub trait PeopleSearcher: Send + Sync {
    async fn lookup(&self, full_name: &str, overrides: &SearchOverrides) -> SearchResponse;
}

#[async_trait]
impl PeopleSearcher for SerpstackClient {
    async fn lookup(&self, full_name: &str, overrides: &SearchOverrides) -> SearchResponse {
        self.search_person(full_name, overrides).await
    }
}
