use std::path::Path;

use tracing::debug;

use crate::cli::config::RenderSettings;
use crate::error::ReportError;
use crate::report::console::format_console_report;
use crate::report::loader::load_result_document;
use crate::report::writer::{BddReporter, ReportFormat};

// ============================================================================
// render subcommand
// ============================================================================

/// Render the report described by `settings`.
///
/// Returns `Ok(false)` when the input document was missing and nothing
/// was written.
pub fn cmd_render(settings: &RenderSettings) -> Result<bool, ReportError> {
    let format: ReportFormat = settings.format.parse()?;
    debug!(
        input = %settings.input,
        output = %settings.output_file,
        ?format,
        "rendering report"
    );

    let reporter = BddReporter::new(&settings.output_file)
        .with_format(format)
        .with_title(settings.title.as_str());

    Ok(reporter.run(Path::new(&settings.input))?.is_some())
}

// ============================================================================
// summary subcommand
// ============================================================================

/// Print the console summary and return whether every test passed.
pub fn cmd_summary(input: &str) -> Result<bool, ReportError> {
    let doc = load_result_document(Path::new(input))?;
    print!("{}", format_console_report(&doc));
    Ok(doc.summary().all_passed())
}
