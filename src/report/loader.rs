use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, Result};
use crate::report::report_model::ResultDocument;

/// Default location the host runner's JSON reporter writes to.
pub const DEFAULT_INPUT: &str = "reports/playwright.json";

/// Read and deserialize the runner's JSON result document.
///
/// A missing file is reported as [`ReportError::NotFound`] so the caller can
/// skip report generation; malformed JSON fails with [`ReportError::Json`].
pub fn load_result_document(path: &Path) -> Result<ResultDocument> {
    if !path.exists() {
        return Err(ReportError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = parse_result_document(&content).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        suites = doc.suites.len(),
        "loaded result document"
    );
    Ok(doc)
}

pub fn parse_result_document(content: &str) -> serde_json::Result<ResultDocument> {
    serde_json::from_str(content)
}
