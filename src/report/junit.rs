use crate::report::console::failed_step_lines;
use crate::report::describe::strip_ansi;
use crate::report::header::normalize_header;
use crate::report::report_model::{ResultDocument, Spec, Suite};

// ============================================================================
// JUnit XML reporter — standard CI integration format
// ============================================================================

/// Generate a JUnit XML report for CI systems (Jenkins, GitHub Actions, GitLab CI).
///
/// Each top-level suite (usually one per step file) becomes a `<testsuite>`;
/// nested `describe` suites are flattened into it.
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <testsuites tests="2" failures="1" skipped="0" time="3.200">
///   <testsuite name="login.steps.ts" tests="2" failures="1" skipped="0">
///     <testcase name="Login" classname="login.steps.ts" time="1.100" />
///     <testcase name="Locked user" classname="login.steps.ts" time="2.100">
///       <failure message="1 step(s) failed" type="AssertionFailure">Verify element is visible</failure>
///     </testcase>
///   </testsuite>
/// </testsuites>
/// ```
pub fn generate_junit_xml(doc: &ResultDocument) -> String {
    let summary = doc.summary();

    let mut suites = String::new();
    for suite in &doc.suites {
        render_suite(suite, &mut suites);
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuites tests=\"{tests}\" failures=\"{failures}\" skipped=\"{skipped}\" time=\"{time:.3}\">\n{suites}</testsuites>\n",
        tests = summary.total,
        failures = summary.failed,
        skipped = summary.skipped,
        time = summary.duration_secs(),
        suites = suites,
    )
}

fn render_suite(suite: &Suite, out: &mut String) {
    let specs = suite.all_specs();
    let classname = if suite.file.is_empty() {
        &suite.title
    } else {
        &suite.file
    };
    let failures = specs
        .iter()
        .filter(|s| !s.ok && !s.is_skipped())
        .count();
    let skipped = specs.iter().filter(|s| s.is_skipped()).count();

    out.push_str(&format!(
        "  <testsuite name=\"{name}\" tests=\"{tests}\" failures=\"{failures}\" skipped=\"{skipped}\">\n",
        name = escape_xml(&suite.title),
        tests = specs.len(),
        failures = failures,
        skipped = skipped,
    ));

    for spec in specs {
        render_case(spec, classname, out);
    }

    out.push_str("  </testsuite>\n");
}

fn render_case(spec: &Spec, classname: &str, out: &mut String) {
    let header = normalize_header(spec);
    let secs = spec.first_result().map_or(0.0, |r| r.duration / 1000.0);
    let open = format!(
        "    <testcase name=\"{}\" classname=\"{}\" time=\"{:.3}\"",
        escape_xml(&header.title),
        escape_xml(classname),
        secs
    );

    if spec.is_skipped() {
        out.push_str(&format!("{}>\n      <skipped />\n    </testcase>\n", open));
        return;
    }
    if spec.ok {
        out.push_str(&format!("{} />\n", open));
        return;
    }

    let failed_steps = spec
        .first_result()
        .map(|r| failed_step_lines(&r.steps))
        .unwrap_or_default();

    let message = if failed_steps.is_empty() {
        "execution error".to_string()
    } else {
        format!("{} step(s) failed", failed_steps.len())
    };

    let mut body_parts = failed_steps;
    if let Some(error) = spec.first_result().and_then(|r| r.error_message()) {
        body_parts.push(format!("Error: {}", strip_ansi(error)));
    }

    out.push_str(&format!(
        "{open}>\n      <failure message=\"{message}\" type=\"AssertionFailure\">{body}</failure>\n    </testcase>\n",
        open = open,
        message = escape_xml(&message),
        body = escape_xml(&body_parts.join("\n")),
    ));
}

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
