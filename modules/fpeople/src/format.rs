use serde::{Deserialize, Serialize};
use serde_json::Value;
use serpstack_client::SearchResponse;

pub const NO_TITLE: &str = "No Title";
pub const NO_URL: &str = "No URL";
pub const NO_DESCRIPTION: &str = "No Description";
pub const NO_DOMAIN: &str = "No Domain";

/// The subset of an organic result shown to the user and written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub domain: String,
}

impl FormattedResult {
    fn from_record(record: &Value) -> Self {
        let field = |key: &str, placeholder: &str| {
            record
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or(placeholder)
                .to_string()
        };

        Self {
            title: field("title", NO_TITLE),
            url: field("url", NO_URL),
            snippet: field("snippet", NO_DESCRIPTION),
            domain: field("domain", NO_DOMAIN),
        }
    }
}

/// Case-sensitive substring filters. A record must match every filter that is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub domain: Option<String>,
    pub keyword: Option<String>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.domain.is_none() && self.keyword.is_none()
    }

    pub fn matches(&self, result: &FormattedResult) -> bool {
        if let Some(domain) = &self.domain {
            if !result.domain.contains(domain.as_str()) {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            if !result.snippet.contains(keyword.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Extract and filter the organic results of a response. A response without a
/// usable `organic_results` list yields nothing.
pub fn format_results(response: &SearchResponse, filter: &Filter) -> Vec<FormattedResult> {
    let Some(records) = response.organic_results() else {
        return Vec::new();
    };

    records
        .iter()
        .map(FormattedResult::from_record)
        .filter(|r| filter.matches(r))
        .collect()
}

/// Console rendering of one result, numbered from 1.
pub fn render_result(index: usize, result: &FormattedResult) -> String {
    let mut out = format!(
        "{index}. {}\n   URL: {}\n   Domain: {}",
        result.title, result.url, result.domain
    );
    if !result.snippet.is_empty() {
        out.push_str(&format!("\n   Description: {}", result.snippet));
    }
    out
}
