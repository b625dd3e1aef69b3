use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_LOG_FILE: &str = "fpeople.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
}

/// Application configuration loaded from environment variables (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    // serpstack
    pub access_key: String,
    pub base_url: String,

    // Files
    pub log_file: PathBuf,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            access_key: get("SERPSTACK_ACCESS_KEY")
                .ok_or(ConfigError::Missing("SERPSTACK_ACCESS_KEY"))?,
            base_url: get("SERPSTACK_BASE_URL")
                .unwrap_or_else(|| serpstack_client::BASE_URL.to_string()),
            log_file: get("FPEOPLE_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            output_dir: get("FPEOPLE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        })
    }

    pub fn log_keys(&self) {
        fn preview(val: &str) -> String {
            let n = val.chars().count().min(4);
            let head: String = val.chars().take(n).collect();
            format!("{}...({} chars)", head, val.chars().count())
        }

        tracing::info!("Config loaded:");
        tracing::info!("  SERPSTACK_ACCESS_KEY: {}", preview(&self.access_key));
        tracing::info!("  SERPSTACK_BASE_URL: {}", self.base_url);
        tracing::info!("  FPEOPLE_OUTPUT_DIR: {}", self.output_dir.display());
    }
}
