use std::sync::LazyLock;

use regex::Regex;

use crate::report::report_model::Spec;

// ============================================================================
// Spec header normalization — display title + tag chips
// ============================================================================

const TAG_MARKER: char = '@';

static TAG_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\S+").expect("tag token pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// A spec title with its tags pulled out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecHeader {
    pub title: String,
    pub tags: Vec<String>,
}

/// Build the display header for a spec.
///
/// Tags come from the declared `tags` field, from `@token`s embedded in the
/// title and from `tag` annotations on the first test, in that order. Each
/// tag appears once. The tokens are removed from the title; if nothing is
/// left the raw title is kept.
pub fn normalize_header(spec: &Spec) -> SpecHeader {
    let trimmed = spec.title.trim();

    let declared = spec.tags.iter().map(String::as_str);
    let embedded = TAG_TOKEN.find_iter(trimmed).map(|m| m.as_str());
    let annotated = spec
        .tests
        .first()
        .into_iter()
        .flat_map(|t| &t.annotations)
        .filter(|a| a.kind == "tag")
        .filter_map(|a| a.description.as_deref());

    let mut tags: Vec<String> = Vec::new();
    for raw in declared.chain(embedded).chain(annotated) {
        let tag = normalize_tag(raw);
        if !tag.is_empty() && !tags.iter().any(|t| *t == tag) {
            tags.push(tag);
        }
    }

    let stripped = TAG_TOKEN.replace_all(trimmed, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    let title = match collapsed.trim() {
        "" => spec.title.clone(),
        t => t.to_string(),
    };

    SpecHeader { title, tags }
}

/// `" @smoke "` -> `"smoke"`
pub fn normalize_tag(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(TAG_MARKER)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}
