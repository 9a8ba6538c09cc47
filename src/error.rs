use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The runner's JSON result document is not where we expected it
    #[error("result document not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading the input or writing the report failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The result document is not valid JSON (or not shaped like one)
    #[error("JSON parse error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Unknown output format or otherwise unusable settings
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ReportError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReportError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
