use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SerpstackError;

/// Key under which serpstack returns the organic (non-ad) results.
pub const ORGANIC_RESULTS_KEY: &str = "organic_results";

/// Key carrying a provider or transport failure.
pub const ERROR_KEY: &str = "error";

// --- Request parameters ---

/// Fixed query parameters sent with every search (besides `access_key` and `query`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub engine: String,
    #[serde(rename = "type")]
    pub search_type: String,
    pub device: String,
    pub google_domain: String,
    /// Region code.
    pub gl: String,
    /// Interface language code.
    pub hl: String,
    /// Number of results to request.
    pub num: u32,
    pub output: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            engine: "google".to_string(),
            search_type: "web".to_string(),
            device: "desktop".to_string(),
            google_domain: "google.com".to_string(),
            gl: "us".to_string(),
            hl: "en".to_string(),
            num: 10,
            output: "json".to_string(),
        }
    }
}

impl SearchParams {
    /// Returns a new parameter set where every override that is set replaces
    /// the corresponding default. `self` is left untouched.
    pub fn merged(&self, overrides: &SearchOverrides) -> Self {
        Self {
            gl: overrides.region.clone().unwrap_or_else(|| self.gl.clone()),
            hl: overrides.language.clone().unwrap_or_else(|| self.hl.clone()),
            num: overrides.num.unwrap_or(self.num),
            ..self.clone()
        }
    }
}

/// Per-query knobs a caller may set on top of [`SearchParams`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOverrides {
    pub region: Option<String>,
    pub language: Option<String>,
    pub num: Option<u32>,
}

// --- Response ---

/// Raw serpstack response body, kept as an untyped JSON object.
///
/// A response is either a successful search (with `organic_results`) or a
/// failure carrying an `error` entry. Transport failures are folded into the
/// same shape by [`SearchResponse::from_error`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResponse(Map<String, Value>);

impl SearchResponse {
    pub fn from_error(err: &SerpstackError) -> Self {
        let mut map = Map::new();
        map.insert(ERROR_KEY.to_string(), Value::String(err.to_string()));
        Self(map)
    }

    pub fn is_error(&self) -> bool {
        self.0.contains_key(ERROR_KEY)
    }

    /// Human-readable failure description, if this response is a failure.
    ///
    /// serpstack reports in-band errors as `{"code", "type", "info"}` objects;
    /// `info` is preferred, then `type`.
    pub fn error_message(&self) -> Option<String> {
        let err = self.0.get(ERROR_KEY)?;
        Some(match err {
            Value::String(s) => s.clone(),
            Value::Object(obj) => obj
                .get("info")
                .or_else(|| obj.get("type"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string()),
            other => other.to_string(),
        })
    }

    /// The organic result records, or `None` when the key is absent or not a list.
    pub fn organic_results(&self) -> Option<&[Value]> {
        self.0
            .get(ORGANIC_RESULTS_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}
