use crate::report::describe::{describe_step, failure_detail};
use crate::report::header::normalize_header;
use crate::report::report_model::{ResultDocument, Spec, Step, Suite};

// ============================================================================
// Console reporter — formatted terminal summary
// ============================================================================

/// Format a result document for terminal output.
///
/// Produces output like:
/// ```text
/// === Suite: login.steps.ts ===
/// ✓ PASS  Login with valid user [smoke]
/// ✗ FAIL  Login with locked user
///     Verify element is visible - expected visible but received hidden
///
/// === Results: 1 passed, 1 failed, 0 skipped (2 total) in 3.2s ===
/// ```
pub fn format_console_report(doc: &ResultDocument) -> String {
    let mut out = String::new();

    for suite in &doc.suites {
        format_suite(suite, &mut out);
    }

    let summary = doc.summary();
    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed, {} skipped ({} total)",
        summary.passed, summary.failed, summary.skipped, summary.total
    ));
    if summary.flaky > 0 {
        out.push_str(&format!(", {} flaky", summary.flaky));
    }
    out.push_str(&format!(" in {:.1}s ===\n", summary.duration_secs()));

    out
}

fn format_suite(suite: &Suite, out: &mut String) {
    let specs = suite.all_specs();
    if specs.is_empty() {
        return;
    }

    let name = if suite.title.is_empty() {
        &suite.file
    } else {
        &suite.title
    };
    out.push_str(&format!("=== Suite: {} ===\n", name));

    for spec in specs {
        format_spec(spec, out);
    }
    out.push('\n');
}

fn format_spec(spec: &Spec, out: &mut String) {
    let header = normalize_header(spec);
    let marker = if spec.is_skipped() {
        "- SKIP"
    } else if spec.ok {
        "\u{2713} PASS"
    } else {
        "\u{2717} FAIL"
    };

    out.push_str(&format!("{}  {}", marker, header.title));
    if !header.tags.is_empty() {
        out.push_str(&format!(" [{}]", header.tags.join(", ")));
    }
    out.push('\n');

    if spec.ok {
        return;
    }
    let Some(result) = spec.first_result() else {
        return;
    };

    let failed = failed_step_lines(&result.steps);
    if failed.is_empty() {
        if let Some(detail) = result.error_message().and_then(failure_detail) {
            out.push_str(&format!("    [ERROR] {}\n", detail));
        }
    }
    for line in failed {
        out.push_str(&format!("    {}\n", line));
    }
}

/// Descriptions of the innermost failing steps.
///
/// A failing parent step only repeats its failing child's error, so only
/// leaves (or failing steps without failing children) are listed.
pub fn failed_step_lines(steps: &[Step]) -> Vec<String> {
    let mut lines = Vec::new();
    for step in steps.iter().filter(|s| s.failed()) {
        let nested = failed_step_lines(&step.steps);
        if nested.is_empty() {
            lines.push(describe_step(step));
        } else {
            lines.extend(nested);
        }
    }
    lines
}
