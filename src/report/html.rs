use crate::report::describe::{describe_step, split_keyword};
use crate::report::header::normalize_header;
use crate::report::report_model::{ResultDocument, Spec, Step, Suite};

// ============================================================================
// HTML reporter — self-contained BDD audit report
// ============================================================================

pub const DEFAULT_TITLE: &str = "BDD Audit Report";

/// Generate the audit report stamped with the current local time.
pub fn generate_html_report(doc: &ResultDocument) -> String {
    render_html(doc, DEFAULT_TITLE, &generated_on_now())
}

/// Local time in the format shown in the report header.
pub fn generated_on_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Render the complete HTML document.
///
/// Features:
/// - Summary cards (total, passed, failed, duration)
/// - Pass-rate progress bar (0% when nothing ran)
/// - One collapsible block per spec with tag chips and a status badge
/// - Nested steps indented under their parent
/// - Print stylesheet that expands every block and hides the controls
///
/// Output depends only on the arguments.
pub fn render_html(doc: &ResultDocument, title: &str, generated_on: &str) -> String {
    let summary = doc.summary();
    let pass_rate = summary.pass_rate();

    let mut features = String::new();
    for suite in &doc.suites {
        render_suite(suite, &mut features);
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif; margin: 0; background-color: #f7f7f7; }}
.container {{ max-width: 1200px; margin: auto; padding: 20px; }}
.header {{ background-color: #fff; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); margin-bottom: 20px; }}
.header > p {{ margin-bottom: 0; }}
.stats-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; }}
.stat-card {{ background-color: #fff; padding: 20px; border-radius: 8px; text-align: center; }}
.stat-card h3 {{ margin: 0; font-size: 1.5em; }}
.stat-card p {{ color: #666; }}
.progress-bar {{ background-color: #e9ecef; border-radius: .25rem; height: 1.5rem; margin-top: 20px; }}
.progress-bar-fill {{ background-color: #28a745; height: 100%; border-radius: .25rem; text-align: center; color: white; line-height: 1.5rem; white-space: nowrap; }}
.features {{ margin-top: 20px; }}
.feature {{ background-color: #fff; border-radius: 8px; margin-bottom: 20px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
.feature-header {{ padding: 15px; cursor: pointer; border-bottom: 1px solid #eee; }}
.step {{ margin-left: 4px; padding-left: 15px; border-left: 1px solid #ddd; }}
.tag {{ display: inline-block; background-color: #e7f1ff; color: #0b5ed7; border-radius: 10px; padding: 0 8px; margin-left: 6px; font-size: 0.75em; font-weight: normal; }}
.keyword {{ font-weight: bold; }}
.duration {{ color: #888; }}
.passed {{ color: #28a745; }}
.failed {{ color: #dc3545; }}
.skipped {{ color: #6c757d; }}
.collapsible-content {{ display: none; padding: 0 15px 1px; }}
h4 {{ margin: 0; }}
h1 {{ margin-top: 0; }}

@media print {{
  body {{ font-size: 10pt; }}
  .collapsible-content {{ display: block !important; }}
  .feature-header {{ cursor: default; }}
  .feature {{ page-break-inside: avoid; }}
  .stats-grid, .progress-bar {{ display: none; }}
}}
</style>
</head>
<body>
<div class="container">
<div class="header">
<h1>{title}</h1>
<p>Generated on: {generated_on}</p>
</div>
<div class="stats-grid">
<div class="stat-card"><h3>{total}</h3><p>Total Tests</p></div>
<div class="stat-card"><h3 class="passed">{passed}</h3><p>Passed</p></div>
<div class="stat-card"><h3 class="failed">{failed}</h3><p>Failed</p></div>
<div class="stat-card"><h3>{duration:.2}s</h3><p>Total Duration</p></div>
</div>
<div class="progress-bar">
<div class="progress-bar-fill" style="width: {width}%;">{rounded}% Passed</div>
</div>
<div class="features">
{features}</div>
</div>
<script>
document.querySelectorAll('.feature-header').forEach(header => {{
  header.addEventListener('click', () => {{
    const content = header.nextElementSibling;
    content.style.display = content.style.display === 'block' ? 'none' : 'block';
  }});
}});
</script>
</body>
</html>
"##,
        title = escape_html(title),
        generated_on = escape_html(generated_on),
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        duration = summary.duration_secs(),
        width = pass_rate,
        rounded = pass_rate.round(),
        features = features,
    )
}

fn render_suite(suite: &Suite, out: &mut String) {
    for spec in &suite.specs {
        render_spec(spec, out);
    }
    for child in &suite.suites {
        render_suite(child, out);
    }
}

fn render_spec(spec: &Spec, out: &mut String) {
    let header = normalize_header(spec);
    let (class, label) = if spec.is_skipped() {
        ("skipped", "SKIPPED")
    } else if spec.ok {
        ("passed", "PASSED")
    } else {
        ("failed", "FAILED")
    };

    let tags: String = header
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
        .collect();

    out.push_str(&format!(
        "<div class=\"feature\">\n<div class=\"feature-header\">\n<h4>{title}{tags} <span class=\"{class}\">{label}</span></h4>\n</div>\n<div class=\"collapsible-content\">\n",
        title = escape_html(&header.title),
        tags = tags,
        class = class,
        label = label,
    ));

    if let Some(result) = spec.first_result() {
        for step in &result.steps {
            render_step(step, out);
        }
    }

    out.push_str("</div>\n</div>\n");
}

fn render_step(step: &Step, out: &mut String) {
    let (class, label) = if step.failed() {
        ("failed", "FAILED")
    } else {
        ("passed", "PASSED")
    };

    out.push_str(&format!(
        "<p>{line} <span class=\"{class}\">{label}</span> <span class=\"duration\">({duration}ms)</span></p>\n",
        line = render_step_line(&describe_step(step)),
        class = class,
        label = label,
        duration = step.duration,
    ));

    if !step.steps.is_empty() {
        out.push_str("<div class=\"step\">\n");
        for child in &step.steps {
            render_step(child, out);
        }
        out.push_str("</div>\n");
    }
}

/// Escape a described step, emphasising its BDD keyword.
fn render_step_line(line: &str) -> String {
    match split_keyword(line) {
        Some((keyword, rest)) => format!(
            r#"<span class="keyword">{}</span>{}"#,
            escape_html(keyword),
            escape_html(rest)
        ),
        None => escape_html(line),
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
