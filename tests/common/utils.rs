#![allow(dead_code)]

use bdd_audit_report::report::report_model::{
    Annotation, ResultDocument, Spec, Stats, Step, Suite, Test, TestResult,
};

pub fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn step(title: &str, duration: f64) -> Step {
    Step {
        title: title.to_string(),
        duration,
        error: None,
        steps: vec![],
    }
}

pub fn failed_step(title: &str, message: &str) -> Step {
    Step {
        title: title.to_string(),
        duration: 10.0,
        error: Some(serde_json::json!({ "message": message })),
        steps: vec![],
    }
}

pub fn spec(title: &str, ok: bool, steps: Vec<Step>) -> Spec {
    Spec {
        title: title.to_string(),
        ok,
        tags: vec![],
        tests: vec![Test {
            status: if ok { "expected" } else { "unexpected" }.to_string(),
            results: vec![TestResult {
                status: if ok { "passed" } else { "failed" }.to_string(),
                duration: 100.0,
                steps,
                ..TestResult::default()
            }],
            ..Test::default()
        }],
    }
}

pub fn tag_annotation(tag: &str) -> Annotation {
    Annotation {
        kind: "tag".to_string(),
        description: Some(tag.to_string()),
    }
}

pub fn suite(title: &str, specs: Vec<Spec>) -> Suite {
    Suite {
        title: title.to_string(),
        file: title.to_string(),
        specs,
        suites: vec![],
    }
}

pub fn document(suites: Vec<Suite>, expected: u64, unexpected: u64, skipped: u64) -> ResultDocument {
    ResultDocument {
        suites,
        stats: Stats {
            start_time: Some("2026-10-17T09:00:00.000Z".to_string()),
            duration: 3210.0,
            expected,
            unexpected,
            skipped,
            flaky: 0,
        },
    }
}

/// One passing and one failing spec in a single suite.
pub fn mixed_document() -> ResultDocument {
    let passing = spec(
        "Login with valid user @smoke",
        true,
        vec![Step {
            steps: vec![
                step("Given the login page is open", 40.0),
                step("Expect \"toBeVisible\"", 5.0),
            ],
            ..step("Feature: Login", 120.0)
        }],
    );
    let failing = spec(
        "Login with locked user @regression",
        false,
        vec![Step {
            error: Some(serde_json::json!({ "message": "Expected: 5\nReceived: 6" })),
            steps: vec![failed_step("Expect \"toEqual\"", "Expected: 5\nReceived: 6")],
            ..step("Then an error is shown", 80.0)
        }],
    );
    document(vec![suite("login.steps.ts", vec![passing, failing])], 1, 1, 0)
}

// ============================================================================
// Log capture
// ============================================================================

/// In-memory sink for `tracing` output produced while a closure runs.
#[derive(Clone, Default)]
pub struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that writes plain text into the returned buffer.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buffer.contents())
}
