//! BDD audit reports for browser test runs.
//!
//! Reads the JSON result document a browser test runner writes at the end
//! of a run and renders it as a self-contained HTML page (or a console
//! summary, or JUnit XML).

pub mod cli;
pub mod error;
pub mod report;

pub use error::ReportError;
pub use report::report_model::ResultDocument;
pub use report::writer::BddReporter;
