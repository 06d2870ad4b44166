//! The scoring rules, each a pure function from the evaluation context to
//! at most one finding. Rules never see each other's output; the analyzer
//! folds every hit, so evaluation order is exactly the table order below
//! and ties inside one severity keep it.

use crate::extract::structure::MarkupStructure;
use crate::types::analysis::{IssueField, SeoIssue, Severity};

use super::config::AnalysisConfig;

const PENALTY_TITLE_MISSING: u32 = 20;
const PENALTY_TITLE_LONG: u32 = 10;
const PENALTY_META_MISSING: u32 = 15;
const PENALTY_META_LONG: u32 = 5;
const PENALTY_CONTENT_SHORT: u32 = 10;
const PENALTY_NO_H1: u32 = 25;
const PENALTY_MULTIPLE_H1: u32 = 10;
const PENALTY_HIERARCHY_SKIP: u32 = 5;
const PENALTY_PER_IMAGE_MISSING_ALT: u32 = 2;
const PENALTY_SPARSE_INTERNAL_LINKS: u32 = 5;

/// Everything a rule may inspect.
pub struct RuleContext<'a> {
    pub title: &'a str,
    pub meta_description: &'a str,
    pub word_count: usize,
    pub structure: &'a MarkupStructure,
    pub config: &'a AnalysisConfig,
}

/// One triggered rule: the issue to report and the score delta it costs.
#[derive(Debug, Clone)]
pub struct RuleHit {
    pub penalty: u32,
    pub issue: SeoIssue,
}

impl RuleHit {
    fn new(
        penalty: u32,
        severity: Severity,
        field: IssueField,
        message: String,
        recommendation: &str,
    ) -> Self {
        RuleHit {
            penalty,
            issue: SeoIssue {
                severity,
                message,
                field,
                recommendation: recommendation.to_string(),
            },
        }
    }
}

pub type Rule = fn(&RuleContext) -> Option<RuleHit>;

/// The rules in evaluation order.
pub fn rules() -> &'static [Rule] {
    &[
        title_missing_or_short,
        title_too_long,
        meta_description_missing_or_short,
        meta_description_too_long,
        content_too_short,
        no_h1_heading,
        multiple_h1_headings,
        heading_hierarchy_skip,
        images_missing_alt,
        sparse_internal_links,
    ]
}

pub fn title_missing_or_short(ctx: &RuleContext) -> Option<RuleHit> {
    let title = ctx.title.trim();
    if title.chars().count() >= ctx.config.title_min_chars {
        return None;
    }
    Some(RuleHit::new(
        PENALTY_TITLE_MISSING,
        Severity::Error,
        IssueField::Title,
        format!(
            "Title is missing or too short (under {} characters)",
            ctx.config.title_min_chars
        ),
        "Write a descriptive title of at least 10 characters with the main keyword",
    ))
}

pub fn title_too_long(ctx: &RuleContext) -> Option<RuleHit> {
    let chars = ctx.title.trim().chars().count();
    if chars <= ctx.config.title_max_chars {
        return None;
    }
    Some(RuleHit::new(
        PENALTY_TITLE_LONG,
        Severity::Warning,
        IssueField::Title,
        format!(
            "Title is too long ({} characters, recommended at most {})",
            chars, ctx.config.title_max_chars
        ),
        "Shorten the title so it displays fully in search results",
    ))
}

pub fn meta_description_missing_or_short(ctx: &RuleContext) -> Option<RuleHit> {
    let meta = ctx.meta_description.trim();
    if meta.chars().count() >= ctx.config.meta_min_chars {
        return None;
    }
    Some(RuleHit::new(
        PENALTY_META_MISSING,
        Severity::Error,
        IssueField::MetaDescription,
        format!(
            "Meta description is missing or too short (under {} characters)",
            ctx.config.meta_min_chars
        ),
        "Write a compelling meta description between 50 and 160 characters",
    ))
}

pub fn meta_description_too_long(ctx: &RuleContext) -> Option<RuleHit> {
    let chars = ctx.meta_description.trim().chars().count();
    if chars <= ctx.config.meta_max_chars {
        return None;
    }
    Some(RuleHit::new(
        PENALTY_META_LONG,
        Severity::Warning,
        IssueField::MetaDescription,
        format!(
            "Meta description is too long ({} characters, recommended at most {})",
            chars, ctx.config.meta_max_chars
        ),
        "Shorten the meta description to prevent truncation in search results",
    ))
}

pub fn content_too_short(ctx: &RuleContext) -> Option<RuleHit> {
    if ctx.word_count >= ctx.config.min_content_words {
        return None;
    }
    Some(RuleHit::new(
        PENALTY_CONTENT_SHORT,
        Severity::Warning,
        IssueField::Content,
        format!(
            "Content is too short ({} words, recommended at least {})",
            ctx.word_count, ctx.config.min_content_words
        ),
        "Expand the content to cover the topic in more depth",
    ))
}

pub fn no_h1_heading(ctx: &RuleContext) -> Option<RuleHit> {
    if ctx.structure.h1_count != 0 {
        return None;
    }
    Some(RuleHit::new(
        PENALTY_NO_H1,
        Severity::Error,
        IssueField::Content,
        "Content has no H1 heading".to_string(),
        "Add exactly one H1 heading carrying the main keyword",
    ))
}

pub fn multiple_h1_headings(ctx: &RuleContext) -> Option<RuleHit> {
    if ctx.structure.h1_count <= 1 {
        return None;
    }
    Some(RuleHit::new(
        PENALTY_MULTIPLE_H1,
        Severity::Warning,
        IssueField::Content,
        format!("Content has {} H1 headings", ctx.structure.h1_count),
        "Keep a single H1 heading and demote the others",
    ))
}

pub fn heading_hierarchy_skip(ctx: &RuleContext) -> Option<RuleHit> {
    if ctx.structure.h3_count == 0 || ctx.structure.h2_count > 0 {
        return None;
    }
    Some(RuleHit::new(
        PENALTY_HIERARCHY_SKIP,
        Severity::Warning,
        IssueField::Content,
        "Heading hierarchy skips a level: H3 used without any H2".to_string(),
        "Introduce H2 headings before using H3",
    ))
}

pub fn images_missing_alt(ctx: &RuleContext) -> Option<RuleHit> {
    let missing = ctx.structure.images_missing_alt;
    if missing == 0 {
        return None;
    }
    // Penalty scales per image and is deliberately unbounded; the final
    // score clamp absorbs the excess.
    Some(RuleHit::new(
        PENALTY_PER_IMAGE_MISSING_ALT * missing as u32,
        Severity::Warning,
        IssueField::Content,
        format!("{missing} image(s) missing alt text"),
        "Add descriptive alt text to every image",
    ))
}

pub fn sparse_internal_links(ctx: &RuleContext) -> Option<RuleHit> {
    let links = ctx.structure.internal_link_count;
    if links >= ctx.config.min_internal_links {
        return None;
    }
    Some(RuleHit::new(
        PENALTY_SPARSE_INTERNAL_LINKS,
        Severity::Info,
        IssueField::Content,
        format!(
            "Only {} internal link(s) found, recommended at least {}",
            links, ctx.config.min_internal_links
        ),
        "Link to related content on the same site",
    ))
}
