use serde::Deserialize;

// ============================================================================
// Result document — the runner's JSON reporter output
// ============================================================================

/// Root of the JSON document written by the host runner's JSON reporter.
///
/// Only the fields the reporters read are modelled; everything else in the
/// document is ignored. Missing collections and counters deserialize as
/// empty / zero so partially written documents still load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDocument {
    #[serde(default)]
    pub suites: Vec<Suite>,

    #[serde(default)]
    pub stats: Stats,
}

/// Run-level counters. `expected` are passes, `unexpected` are failures.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub start_time: Option<String>,

    /// Wall-clock duration of the whole run in milliseconds
    #[serde(default)]
    pub duration: f64,

    #[serde(default)]
    pub expected: u64,

    #[serde(default)]
    pub unexpected: u64,

    #[serde(default)]
    pub skipped: u64,

    #[serde(default)]
    pub flaky: u64,
}

/// A file or `describe` block. Suites nest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suite {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub file: String,

    #[serde(default)]
    pub specs: Vec<Spec>,

    #[serde(default)]
    pub suites: Vec<Suite>,
}

/// One authored test case.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spec {
    /// Raw title, may carry `@tag` tokens
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub ok: bool,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub tests: Vec<Test>,
}

/// One project's execution of a spec.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub expected_status: Option<String>,

    #[serde(default)]
    pub project_name: Option<String>,

    #[serde(default)]
    pub timeout: Option<u64>,

    #[serde(default)]
    pub annotations: Vec<Annotation>,

    #[serde(default)]
    pub results: Vec<TestResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Annotation {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// One attempt (the first result is the initial run, later ones are retries).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    #[serde(default)]
    pub status: String,

    /// Milliseconds
    #[serde(default)]
    pub duration: f64,

    #[serde(default)]
    pub retry: u32,

    #[serde(default)]
    pub worker_index: Option<i64>,

    #[serde(default)]
    pub start_time: Option<String>,

    #[serde(default)]
    pub error: Option<serde_json::Value>,

    #[serde(default)]
    pub steps: Vec<Step>,

    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub content_type: String,

    #[serde(default)]
    pub path: Option<String>,
}

/// A named unit of work inside a result; steps nest without limit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub title: String,

    /// Milliseconds
    #[serde(default)]
    pub duration: f64,

    #[serde(default)]
    pub error: Option<serde_json::Value>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Spec {
    /// The first execution of the first project. Retries and additional
    /// projects are not reported.
    pub fn first_result(&self) -> Option<&TestResult> {
        self.tests.first()?.results.first()
    }

    pub fn is_skipped(&self) -> bool {
        self.tests
            .first()
            .is_some_and(|t| t.status == "skipped")
    }
}

impl Step {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    /// The error's `message` when it is a string. A bare string payload is
    /// accepted as the message itself.
    pub fn error_message(&self) -> Option<&str> {
        error_message(self.error.as_ref())
    }
}

impl TestResult {
    pub fn error_message(&self) -> Option<&str> {
        error_message(self.error.as_ref())
    }
}

fn error_message(error: Option<&serde_json::Value>) -> Option<&str> {
    match error? {
        serde_json::Value::String(s) => Some(s.as_str()),
        other => other.get("message")?.as_str(),
    }
}

impl Suite {
    /// Every spec in this suite and its descendants, depth first.
    pub fn all_specs(&self) -> Vec<&Spec> {
        let mut out: Vec<&Spec> = self.specs.iter().collect();
        for child in &self.suites {
            out.extend(child.all_specs());
        }
        out
    }
}

// ============================================================================
// Run summary — derived counters consumed by every renderer
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub flaky: u64,
    pub duration_ms: f64,
}

impl RunSummary {
    pub fn from_stats(stats: &Stats) -> Self {
        Self {
            total: stats.expected + stats.unexpected + stats.skipped,
            passed: stats.expected,
            failed: stats.unexpected,
            skipped: stats.skipped,
            flaky: stats.flaky,
            duration_ms: stats.duration,
        }
    }

    /// Passed / total as a percentage; zero when nothing ran.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64 * 100.0
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_ms / 1000.0
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl ResultDocument {
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_stats(&self.stats)
    }
}
