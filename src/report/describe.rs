use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::report::report_model::Step;

// ============================================================================
// Step describer — one human-readable line per step
// ============================================================================

/// Shown for steps the runner recorded without a title.
pub const DEFAULT_STEP_TITLE: &str = "Step";

/// `Expect "toBeVisible"`, `Expect toBeVisible`, `expect.toBeVisible`,
/// `expect.soft.toBeVisible`
static EXPECT_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^expect(?:\.soft)?(?:\s+|\.)(.+)$").expect("expect title pattern")
});

static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("ansi escape pattern")
});

/// An `Expected...:` line followed, possibly after other lines, by a
/// `Received...:` or `Actual...:` line. Trailing `\r` is left out of both
/// captures.
static EXPECTED_RECEIVED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?mi)^[ \t]*expected[^:\n]*:[ \t]*(\S[^\r\n]*?)[ \t\r]*\n(?:.*\n)*?[ \t]*(?:received|actual)[^:\n]*:[ \t]*(\S[^\r\n]*?)[ \t\r]*$",
    )
    .expect("expected/received pattern")
});

static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("case boundary pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

static TOKEN_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s.]+").expect("token separator pattern"));

const QUOTES: &[char] = &['"', '\'', '`'];

/// A known assertion kind: the method names that identify it and the
/// sentence for its plain and `not` forms.
struct Expectation {
    methods: &'static [&'static str],
    phrase: &'static str,
    negated: &'static str,
}

const fn kind(
    methods: &'static [&'static str],
    phrase: &'static str,
    negated: &'static str,
) -> Expectation {
    Expectation { methods, phrase, negated }
}

/// Checked in order against the expression with `not`/`soft` removed. An
/// entry matches when any of its method names appears as a whole token.
/// More specific forms sit above the forms they overlap with.
const EXPECTATIONS: &[Expectation] = &[
    kind(
        &["poll"],
        "Verify polled value eventually matches",
        "Verify polled value eventually does not match",
    ),
    kind(&["tobehidden"], "Verify element is hidden", "Verify element is not hidden"),
    kind(&["tobevisible"], "Verify element is visible", "Verify element is not visible"),
    kind(&["tobedisabled"], "Verify element is disabled", "Verify element is not disabled"),
    kind(&["tobeenabled"], "Verify element is enabled", "Verify element is not enabled"),
    kind(&["tobeeditable"], "Verify element is editable", "Verify element is not editable"),
    kind(&["tobechecked"], "Verify element is checked", "Verify element is not checked"),
    kind(
        &["toequal", "tostrictequal", "tobe"],
        "Verify values are equal",
        "Verify values are not equal",
    ),
    kind(&["tobetruthy"], "Verify value is truthy", "Verify value is not truthy"),
    kind(&["tobefalsy"], "Verify value is falsy", "Verify value is not falsy"),
    kind(&["tobeundefined"], "Verify value is undefined", "Verify value is not undefined"),
    kind(&["tobedefined"], "Verify value is defined", "Verify value is not defined"),
    kind(&["tobenull"], "Verify value is null", "Verify value is not null"),
    kind(
        &["tocontaintext"],
        "Verify element contains text",
        "Verify element does not contain text",
    ),
    kind(
        &["tohavetext"],
        "Verify element text matches",
        "Verify element text does not match",
    ),
    kind(
        &["tohavevalues"],
        "Verify selected options match",
        "Verify selected options do not match",
    ),
    kind(
        &["tohavevalue"],
        "Verify element value matches",
        "Verify element value does not match",
    ),
    kind(
        &["tohavecount", "tohavelength"],
        "Verify element count matches",
        "Verify element count does not match",
    ),
    kind(
        &["tocontain", "tocontainequal"],
        "Verify collection contains item",
        "Verify collection does not contain item",
    ),
    kind(&["tohaveurl"], "Verify page URL matches", "Verify page URL does not match"),
    kind(&["tohavetitle"], "Verify page title matches", "Verify page title does not match"),
    kind(
        &["tohaveattribute"],
        "Verify element attribute matches",
        "Verify element attribute does not match",
    ),
    kind(
        &["tohaveclass"],
        "Verify element class matches",
        "Verify element class does not match",
    ),
    kind(
        &["tomatch", "tomatchobject"],
        "Verify value matches pattern",
        "Verify value does not match pattern",
    ),
    kind(&["topass"], "Verify block eventually passes", "Verify block does not pass"),
];

/// Keywords the BDD wrapper prefixes onto step titles. Longer prefixes
/// come first so `Step Action #` is not read as `Step #`.
pub const BDD_KEYWORDS: &[&str] = &[
    "Feature:",
    "Scenario:",
    "Step Action #",
    "Step Expect #",
    "Step #",
    "Given",
    "When",
    "Then",
    "And",
];

/// Describe a step as a single display line.
///
/// Assertion steps are translated into a sentence; everything else keeps its
/// title. A failure detail taken from the step's error message is appended
/// as `" - <detail>"`. Status and duration are left to the renderer.
pub fn describe_step(step: &Step) -> String {
    let title = step.title.trim();
    let base = if title.is_empty() {
        DEFAULT_STEP_TITLE.to_string()
    } else {
        match expectation_body(title) {
            Some(body) => describe_expectation(body),
            None => step.title.clone(),
        }
    };

    match step.error_message().and_then(failure_detail) {
        Some(detail) => format!("{} - {}", base, detail),
        None => base,
    }
}

/// The expression part of an `Expect ...` title, if the title is one.
pub fn expectation_body(title: &str) -> Option<&str> {
    let body = EXPECT_TITLE.captures(title)?.get(1)?.as_str().trim();
    (!body.is_empty()).then_some(body)
}

/// Translate an assertion expression such as `"toBeVisible"`,
/// `not toHaveText` or `soft.not.toBeEnabled` into a sentence.
pub fn describe_expectation(expression: &str) -> String {
    let unquoted = expression.replace(QUOTES, "");
    let lowered = unquoted.to_lowercase();
    let tokens: Vec<&str> = TOKEN_SEPARATOR
        .split(lowered.trim())
        .filter(|t| !t.is_empty())
        .collect();

    let negated = tokens.contains(&"not");
    let normalized = tokens
        .iter()
        .copied()
        .filter(|t| !matches!(*t, "not" | "soft"))
        .collect::<Vec<_>>()
        .join(".");

    EXPECTATIONS
        .iter()
        .find(|e| e.methods.iter().any(|m| has_method(&normalized, m)))
        .map(|e| if negated { e.negated } else { e.phrase }.to_string())
        .unwrap_or_else(|| match humanize(&unquoted).as_str() {
            "" => "Verify expectation".to_string(),
            h => format!("Verify expectation ({})", h),
        })
}

/// `method` occurs in `expr` and is not part of a longer identifier.
fn has_method(expr: &str, method: &str) -> bool {
    expr.match_indices(method).any(|(start, m)| {
        let before = expr[..start].chars().next_back();
        let after = expr[start + m.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// `"fooBarBaz"` -> `foo bar baz`
pub fn humanize(expression: &str) -> String {
    let unquoted = expression.replace(QUOTES, "");
    let spaced = CASE_BOUNDARY.replace_all(&unquoted, "$1 $2");
    WHITESPACE_RUN
        .replace_all(spaced.trim(), " ")
        .to_lowercase()
}

pub fn strip_ansi(message: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(message, "")
}

/// Short failure detail for a raw error message.
///
/// Prefers an `Expected: ... / Received: ...` pair; otherwise the first
/// non-blank line. `None` when the message has no visible text.
pub fn failure_detail(message: &str) -> Option<String> {
    let clean = strip_ansi(message);

    if let Some(pair) = EXPECTED_RECEIVED.captures(&clean) {
        return Some(format!(
            "expected {} but received {}",
            &pair[1], &pair[2]
        ));
    }

    clean
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

/// Split a BDD keyword off the front of a line: `"Given a user"` ->
/// `("Given", " a user")`.
pub fn split_keyword(line: &str) -> Option<(&str, &str)> {
    BDD_KEYWORDS.iter().find_map(|kw| {
        let rest = line.strip_prefix(kw)?;
        (rest.is_empty() || rest.starts_with(' ')).then(|| line.split_at(kw.len()))
    })
}
