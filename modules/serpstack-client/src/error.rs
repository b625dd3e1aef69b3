use thiserror::Error;

pub type Result<T> = std::result::Result<T, SerpstackError>;

#[derive(Debug, Error)]
pub enum SerpstackError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    /// Rejected before sending; serpstack would answer with error 310
    /// (`missing_search_query`) and still count the request.
    #[error("Missing search query")]
    MissingQuery,
}

impl From<reqwest::Error> for SerpstackError {
    fn from(err: reqwest::Error) -> Self {
        SerpstackError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SerpstackError {
    fn from(err: serde_json::Error) -> Self {
        SerpstackError::Parse(err.to_string())
    }
}
