//! One-shot, non-interactive lookup behind `fpeople lookup`.

use std::io::{self, Write};
use std::path::PathBuf;

use serpstack_client::SearchOverrides;
use thiserror::Error;
use tracing::{info, warn};

use crate::format::{format_results, render_result, Filter, FormattedResult};
use crate::persist::{PersistError, ResultWriter};
use crate::search::PeopleSearcher;
use crate::validate::validate_name;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid name: minimum 2 characters")]
    InvalidName,

    #[error("search failed: {0}")]
    Search(String),

    #[error("failed to save results: {0}")]
    Persist(#[from] PersistError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct LookupRequest {
    pub name: String,
    pub overrides: SearchOverrides,
    pub filter: Filter,
    /// File name stem to save under, if any.
    pub save: Option<String>,
    /// Print the results as a JSON array instead of numbered blocks.
    pub json: bool,
}

#[derive(Debug)]
pub struct LookupOutcome {
    pub results: Vec<FormattedResult>,
    pub saved: Option<PathBuf>,
}

/// Search once, print the results to `out` and optionally save them.
///
/// Nothing is written to `out` when the name is rejected or the provider
/// reports an error.
pub async fn run_lookup<S, W>(
    searcher: &S,
    writer: &ResultWriter,
    request: &LookupRequest,
    out: &mut W,
) -> Result<LookupOutcome, LookupError>
where
    S: PeopleSearcher + ?Sized,
    W: Write,
{
    let name = request.name.trim();
    if !validate_name(name) {
        return Err(LookupError::InvalidName);
    }

    let response = searcher.lookup(name, &request.overrides).await;
    if let Some(message) = response.error_message() {
        warn!(full_name = %name, error = %message, "Lookup failed");
        return Err(LookupError::Search(message));
    }

    let results = format_results(&response, &request.filter);
    info!(full_name = %name, count = results.len(), "Lookup complete");

    if request.json {
        serde_json::to_writer_pretty(&mut *out, &results)?;
        writeln!(out)?;
    } else if results.is_empty() {
        writeln!(out, "No results found.")?;
    } else {
        for (idx, result) in results.iter().enumerate() {
            writeln!(out, "{}\n", render_result(idx + 1, result))?;
        }
    }
    out.flush()?;

    let saved = match request.save.as_deref() {
        Some(stem) => Some(writer.save(stem, &results)?),
        None => None,
    };

    Ok(LookupOutcome { results, saved })
}
