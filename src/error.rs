//! Error types for the ESPN Fantasy Football exporter

use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FflError>;

#[derive(Error, Debug)]
pub enum FflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Configuration error: {env_var} environment variable not set")]
    MissingConfig { env_var: String },

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("ESPN API response is missing {what}")]
    MissingData { what: String },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Record {index} of report '{report}' does not match its schema: expected {expected:?}, found {found:?}"
    )]
    SchemaMismatch {
        report: String,
        index: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid report: {message}")]
    InvalidReport { message: String },
}

impl FflError {
    /// Wrap an I/O failure for `path` as a [`FflError::WriteFailure`].
    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FflError::WriteFailure {
            path: path.into(),
            source,
        }
    }
}
