pub mod error;
pub mod types;

pub use error::{Result, SerpstackError};
pub use types::{SearchOverrides, SearchParams, SearchResponse, ERROR_KEY, ORGANIC_RESULTS_KEY};

pub const BASE_URL: &str = "http://api.serpstack.com/search";

pub struct SerpstackClient {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
    defaults: SearchParams,
}

impl SerpstackClient {
    pub fn new(access_key: String) -> Self {
        Self::with_base_url(access_key, BASE_URL)
    }

    /// Point the client at a different endpoint (self-hosted proxy, tests).
    pub fn with_base_url(access_key: String, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key,
            defaults: SearchParams::default(),
        }
    }

    /// Run a single web search. Non-2xx statuses and undecodable bodies are errors;
    /// in-band provider errors (`{"success": false, "error": ...}`) are returned as-is.
    pub async fn search(&self, query: &str, overrides: &SearchOverrides) -> Result<SearchResponse> {
        if query.trim().is_empty() {
            return Err(SerpstackError::MissingQuery);
        }

        let params = self.defaults.merged(overrides);
        tracing::debug!(query, gl = %params.gl, hl = %params.hl, num = params.num, "serpstack search");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("access_key", self.access_key.as_str()), ("query", query)])
            .query(&params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SerpstackError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let data: SearchResponse = serde_json::from_str(&body)?;
        Ok(data)
    }

    /// Search for a person by full name. Never fails: any error is converted
    /// into a response carrying an `error` entry and no results.
    pub async fn search_person(
        &self,
        full_name: &str,
        overrides: &SearchOverrides,
    ) -> SearchResponse {
        match self.search(full_name, overrides).await {
            Ok(data) => {
                tracing::info!(
                    full_name,
                    results = data.organic_results().map_or(0, |r| r.len()),
                    "Search complete"
                );
                data
            }
            Err(e) => {
                tracing::error!(full_name, error = %e, "Search failed");
                SearchResponse::from_error(&e)
            }
        }
    }
}
