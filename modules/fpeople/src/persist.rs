use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::format::FormattedResult;

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Upper bound on `_N` suffixes tried when a timestamped name is taken.
const MAX_COLLISION_SUFFIX: u32 = 999;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("file name must not be empty")]
    EmptyStem,

    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes result sets to new `<stem>_<YYYYMMDD_HHMMSS>.json` files in one directory.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    dir: PathBuf,
}

impl ResultWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn save(&self, stem: &str, results: &[FormattedResult]) -> Result<PathBuf, PersistError> {
        self.save_at(stem, results, Local::now().naive_local())
    }

    /// Save with an explicit timestamp. Existing files are never touched: if the
    /// timestamped name is taken (two saves within one second), `_1`, `_2`, ...
    /// is appended instead.
    pub fn save_at(
        &self,
        stem: &str,
        results: &[FormattedResult],
        at: NaiveDateTime,
    ) -> Result<PathBuf, PersistError> {
        let stem = stem.trim();
        if stem.is_empty() {
            return Err(PersistError::EmptyStem);
        }

        let body = to_indented_json(results)?;
        let base = format!("{stem}_{}", at.format(TIMESTAMP_FORMAT));

        let mut last_err = None;
        for attempt in 0..=MAX_COLLISION_SUFFIX {
            let name = if attempt == 0 {
                format!("{base}.json")
            } else {
                format!("{base}_{attempt}.json")
            };
            let path = self.dir.join(name);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(&body)
                        .and_then(|_| file.flush())
                        .map_err(|source| {
                            error!(path = %path.display(), error = %source, "Failed to write results");
                            PersistError::Io {
                                path: path.clone(),
                                source,
                            }
                        })?;
                    info!(path = %path.display(), count = results.len(), "Results saved");
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    last_err = Some((path, e));
                }
                Err(source) => {
                    error!(path = %path.display(), error = %source, "Failed to create results file");
                    return Err(PersistError::Io { path, source });
                }
            }
        }

        let (path, source) = last_err.unwrap_or_else(|| {
            (
                self.dir.join(format!("{base}.json")),
                io::Error::from(io::ErrorKind::AlreadyExists),
            )
        });
        error!(path = %path.display(), "No free file name for results");
        Err(PersistError::Io { path, source })
    }
}

/// Four-space indented JSON; non-ASCII characters are written as-is.
fn to_indented_json(results: &[FormattedResult]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    results.serialize(&mut ser)?;
    Ok(buf)
}
