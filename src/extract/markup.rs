//! Best-effort plain-text extraction from a markup blob.
//!
//! This is a lossy conversion with a fixed, documented policy, not a markup
//! parser: every `<[^>]*>` match is removed verbatim. Entities are left
//! untouched, comments and self-closing tags get no special treatment, and
//! well-formedness is never validated — a dangling `<` with no closing `>`
//! passes through unchanged. Downstream consumers (length rules, the
//! readability model, the link finder) all share this one policy.

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>").expect("invalid tag pattern")
});

/// Strip everything that looks like a markup tag, then trim.
///
/// Total: empty or non-markup input returns the trimmed input unchanged.
pub fn extract_plain_text(markup: &str) -> String {
    TAG.replace_all(markup, "").trim().to_string()
}

/// Whitespace-delimited word tokens, empties filtered.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Sentence tokens: split on runs of `.`, `!`, `?`; trimmed, empties
/// filtered.
pub fn tokenize_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
