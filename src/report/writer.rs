use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::{ReportError, Result};
use crate::report::console::format_console_report;
use crate::report::html::{DEFAULT_TITLE, generated_on_now, render_html};
use crate::report::junit::generate_junit_xml;
use crate::report::loader::load_result_document;
use crate::report::report_model::ResultDocument;

pub const DEFAULT_OUTPUT_FILE: &str = "reports/bdd-audit-report.html";

/// Output formats the reporter can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Html,
    Console,
    Junit,
}

impl std::str::FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(ReportFormat::Html),
            "console" | "text" => Ok(ReportFormat::Console),
            "junit" | "xml" => Ok(ReportFormat::Junit),
            other => Err(ReportError::Config(format!(
                "unknown report format '{}' (expected html, console or junit)",
                other
            ))),
        }
    }
}

/// Write `content` to `path`, creating missing parent directories and
/// replacing any existing file.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ReportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// End-of-run entry point
// ============================================================================

/// Turns a finished run's JSON results into a report file.
///
/// Runs once after the host runner has written its JSON results.
#[derive(Debug, Clone)]
pub struct BddReporter {
    pub output_file: PathBuf,
    pub format: ReportFormat,
    pub title: String,
}

impl Default for BddReporter {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: ReportFormat::Html,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl BddReporter {
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render `doc` in the configured format.
    pub fn render(&self, doc: &ResultDocument, generated_on: &str) -> String {
        match self.format {
            ReportFormat::Html => render_html(doc, &self.title, generated_on),
            ReportFormat::Console => format_console_report(doc),
            ReportFormat::Junit => generate_junit_xml(doc),
        }
    }

    /// Render and write the report for an already loaded document.
    pub fn on_end(&self, doc: &ResultDocument) -> Result<PathBuf> {
        let content = self.render(doc, &generated_on_now());
        write_report(&self.output_file, &content)?;
        info!(
            "BDD audit report generated at: {}",
            self.output_file.display()
        );
        Ok(self.output_file.clone())
    }

    /// Load the result document at `input` and write the report.
    ///
    /// A missing input is logged and yields `Ok(None)` without touching the
    /// output path. Parse and write failures are returned.
    pub fn run(&self, input: &Path) -> Result<Option<PathBuf>> {
        let doc = match load_result_document(input) {
            Ok(doc) => doc,
            Err(e) if e.is_not_found() => {
                error!("{} not found, no report generated", input.display());
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        self.on_end(&doc).map(Some)
    }
}
