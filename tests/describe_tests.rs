use bdd_audit_report::report::describe::{
    describe_expectation, describe_step, failure_detail, humanize, DEFAULT_STEP_TITLE,
};
use bdd_audit_report::report::report_model::Step;

mod common;
use crate::common::utils::{failed_step, step};

// ============================================================================
// 1. Assertion steps
// ============================================================================

#[test]
fn visible_assertion_without_error_has_no_suffix() {
    let s = step("Expect \"toBeVisible\"", 5.0);
    assert_eq!(describe_step(&s), "Verify element is visible");
}

#[test]
fn equality_failure_renders_expected_and_received() {
    let s = failed_step("Expect \"toEqual\"", "Expected: 5\nReceived: 6");
    assert_eq!(
        describe_step(&s),
        "Verify values are equal - expected 5 but received 6"
    );
}

#[test]
fn unknown_expectation_is_humanized() {
    let s = step("Expect \"fooBarBaz\"", 1.0);
    assert_eq!(describe_step(&s), "Verify expectation (foo bar baz)");
}

#[test]
fn bare_and_dotted_titles_are_assertions() {
    assert_eq!(
        describe_step(&step("Expect toBeEnabled", 1.0)),
        "Verify element is enabled"
    );
    assert_eq!(
        describe_step(&step("expect.toHaveCount", 1.0)),
        "Verify element count matches"
    );
    assert_eq!(
        describe_step(&step("expect.soft.toHaveText", 1.0)),
        "Verify element text matches"
    );
}

// ============================================================================
// 2. Table order
// ============================================================================

#[test]
fn negated_forms_read_as_negations() {
    assert_eq!(describe_expectation("not.toBeVisible"), "Verify element is not visible");
    assert_eq!(describe_expectation("not.toBeEnabled"), "Verify element is not enabled");
    assert_eq!(describe_expectation("not.toEqual"), "Verify values are not equal");
    assert_eq!(describe_expectation("not.toBeNull"), "Verify value is not null");
    assert_eq!(describe_expectation("not.toBeHidden"), "Verify element is not hidden");
    assert_eq!(describe_expectation("not.toBeChecked"), "Verify element is not checked");
    assert_eq!(
        describe_expectation("not.toContain"),
        "Verify collection does not contain item"
    );
    assert_eq!(
        describe_expectation("not.toHaveText"),
        "Verify element text does not match"
    );
}

#[test]
fn space_separated_negation_in_runner_titles() {
    assert_eq!(
        describe_step(&step("Expect \"not toBeVisible\"", 1.0)),
        "Verify element is not visible"
    );
    assert_eq!(
        describe_step(&step("Expect \"soft not toBeEnabled\"", 1.0)),
        "Verify element is not enabled"
    );
    assert_eq!(
        describe_step(&step("Expect \"not toEqual\"", 1.0)),
        "Verify values are not equal"
    );
    assert_eq!(
        describe_step(&step("expect.not.toBeVisible", 1.0)),
        "Verify element is not visible"
    );
    assert_eq!(
        describe_step(&step("expect.soft.not.toContainText", 1.0)),
        "Verify element does not contain text"
    );
}

#[test]
fn soft_prefix_alone_keeps_positive_phrase() {
    assert_eq!(
        describe_step(&step("Expect \"soft toBeVisible\"", 1.0)),
        "Verify element is visible"
    );
}

#[test]
fn method_names_match_whole_tokens_only() {
    assert_eq!(describe_expectation("toBe"), "Verify values are equal");
    assert_eq!(describe_expectation("toContainText"), "Verify element contains text");
    assert_eq!(describe_expectation("toContain"), "Verify collection contains item");
    assert_eq!(describe_expectation("toHaveValues"), "Verify selected options match");
    assert_eq!(describe_expectation("toHaveValue"), "Verify element value matches");
    assert_eq!(describe_expectation("toBeUndefined"), "Verify value is undefined");
    assert_eq!(describe_expectation("toBeDefined"), "Verify value is defined");
}

#[test]
fn polling_takes_precedence() {
    assert_eq!(
        describe_step(&step("expect.poll.toBe", 1.0)),
        "Verify polled value eventually matches"
    );
}

#[test]
fn case_and_whitespace_are_normalized() {
    assert_eq!(describe_expectation("  TOBETRUTHY  "), "Verify value is truthy");
    assert_eq!(describe_expectation("'toBeFalsy'"), "Verify value is falsy");
}

// ============================================================================
// 3. Plain steps
// ============================================================================

#[test]
fn plain_title_is_kept_verbatim() {
    let s = step("When the user clicks \"Save\"", 30.0);
    assert_eq!(describe_step(&s), "When the user clicks \"Save\"");
}

#[test]
fn empty_title_uses_placeholder() {
    let s = step("   ", 0.0);
    assert_eq!(describe_step(&s), DEFAULT_STEP_TITLE);
}

#[test]
fn plain_step_failure_uses_first_non_blank_line() {
    let s = failed_step(
        "When the user submits the form",
        "\n  Timeout 5000ms exceeded.\n  waiting for locator('#submit')",
    );
    assert_eq!(
        describe_step(&s),
        "When the user submits the form - Timeout 5000ms exceeded."
    );
}

#[test]
fn error_without_string_message_adds_nothing() {
    let s = Step {
        error: Some(serde_json::json!({ "value": 42 })),
        ..step("Then it fails", 1.0)
    };
    assert_eq!(describe_step(&s), "Then it fails");
}

#[test]
fn bare_string_error_is_used_as_message() {
    let s = Step {
        error: Some(serde_json::json!("Page crashed")),
        ..step("Then it fails", 1.0)
    };
    assert_eq!(describe_step(&s), "Then it fails - Page crashed");
}

// ============================================================================
// 4. Failure detail
// ============================================================================

#[test]
fn detail_strips_color_codes_before_matching() {
    let msg = "\u{1b}[2mexpect(\u{1b}[22m\u{1b}[31mreceived\u{1b}[39m\u{1b}[2m).\u{1b}[22mtoEqual\n\nExpected: \u{1b}[32m\"Spain\"\u{1b}[39m\nReceived: \u{1b}[31m\"France\"\u{1b}[39m";
    assert_eq!(
        failure_detail(msg).as_deref(),
        Some("expected \"Spain\" but received \"France\"")
    );
}

#[test]
fn detail_accepts_actual_and_typed_labels() {
    let msg = "Expected string: \"Welcome\"\nActual string: \"Hello\"";
    assert_eq!(
        failure_detail(msg).as_deref(),
        Some("expected \"Welcome\" but received \"Hello\"")
    );
}

#[test]
fn detail_without_received_falls_back_to_first_line() {
    let msg = "Error: element not found\nExpected: visible";
    assert_eq!(failure_detail(msg).as_deref(), Some("Error: element not found"));
}

#[test]
fn blank_message_has_no_detail() {
    assert_eq!(failure_detail(" \n\t\n"), None);
}

#[test]
fn detail_ignores_carriage_returns() {
    let msg = "Expected: 5\r\nReceived: 6\r\n";
    assert_eq!(
        failure_detail(msg).as_deref(),
        Some("expected 5 but received 6")
    );
}

#[test]
fn detail_pairs_expected_with_a_later_received_only() {
    let msg = "Expected:\nReceived: 6\nExpected: later";
    let detail = failure_detail(msg);
    assert_ne!(detail.as_deref(), Some("expected later but received 6"));
    assert_eq!(detail.as_deref(), Some("Expected:"));
}

#[test]
fn detail_skips_lines_between_expected_and_received() {
    let msg = "Expected: \"Spain\"\nCall log:\n  - waiting\nReceived: \"France\"";
    assert_eq!(
        failure_detail(msg).as_deref(),
        Some("expected \"Spain\" but received \"France\"")
    );
}

#[test]
fn humanize_splits_case_transitions() {
    assert_eq!(humanize("\"toHaveScreenshotMatch\""), "to have screenshot match");
}
