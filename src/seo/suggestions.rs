//! Remediation advice derived from the issue set.
//!
//! A declarative table maps predicates over the whole issue set (plus the
//! final score) to fixed advice strings. The table is walked once per
//! analysis, in order; each predicate contributes at most one entry no
//! matter how many issues satisfy it, and the distinct table texts make
//! the output deduplicated by construction.

use crate::types::analysis::{IssueField, SeoIssue};

/// Score below which the general improvement advice fires.
const LOW_SCORE_THRESHOLD: u32 = 60;

pub struct SuggestionContext<'a> {
    pub issues: &'a [SeoIssue],
    pub score: u32,
}

type Predicate = fn(&SuggestionContext) -> bool;

const ADVICE: &[(Predicate, &str)] = &[
    (
        low_score,
        "Improve overall content length and structure to strengthen search visibility",
    ),
    (
        has_title_issue,
        "Optimize the title: keep it descriptive and between 10 and 60 characters",
    ),
    (
        has_meta_description_issue,
        "Write a meta description between 50 and 160 characters summarizing the page",
    ),
    (
        mentions_heading_hierarchy,
        "Maintain a sequential heading hierarchy: one H1, then H2, then H3",
    ),
    (
        mentions_alt_text,
        "Add descriptive alt text to every image",
    ),
    (
        mentions_internal_links,
        "Add more internal links to related content",
    ),
];

pub fn synthesize(issues: &[SeoIssue], score: u32) -> Vec<String> {
    let ctx = SuggestionContext { issues, score };
    ADVICE
        .iter()
        .filter(|(predicate, _)| predicate(&ctx))
        .map(|(_, text)| text.to_string())
        .collect()
}

fn low_score(ctx: &SuggestionContext) -> bool {
    ctx.score < LOW_SCORE_THRESHOLD
}

fn has_title_issue(ctx: &SuggestionContext) -> bool {
    ctx.issues.iter().any(|i| i.field == IssueField::Title)
}

fn has_meta_description_issue(ctx: &SuggestionContext) -> bool {
    ctx.issues
        .iter()
        .any(|i| i.field == IssueField::MetaDescription)
}

fn mentions_heading_hierarchy(ctx: &SuggestionContext) -> bool {
    ctx.issues.iter().any(|i| {
        i.field == IssueField::Content && i.message.to_lowercase().contains("heading hierarchy")
    })
}

fn mentions_alt_text(ctx: &SuggestionContext) -> bool {
    ctx.issues
        .iter()
        .any(|i| i.message.to_lowercase().contains("alt text"))
}

fn mentions_internal_links(ctx: &SuggestionContext) -> bool {
    ctx.issues
        .iter()
        .any(|i| i.message.to_lowercase().contains("internal link"))
}
