//! Structural counters computed directly from the markup string.
//!
//! Headings, images, and links only exist in markup form, so these
//! detectors scan the raw blob — never the extracted plain text. Each
//! counter is an independent, named pass; `MarkupStructure::scan` bundles
//! them for the rule engine.

use regex::Regex;
use std::sync::LazyLock;

static H1: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h1[^>]*>").expect("invalid h1 pattern")
});

static H2: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h2[^>]*>").expect("invalid h2 pattern")
});

static H3: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h3[^>]*>").expect("invalid h3 pattern")
});

static IMG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<img[^>]*>").expect("invalid img pattern")
});

static ALT_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\balt\s*="#).expect("invalid alt pattern")
});

static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s[^>]*href\s*=\s*["']([^"']*)["']"#).expect("invalid anchor pattern")
});

pub fn count_h1(markup: &str) -> usize {
    H1.find_iter(markup).count()
}

pub fn count_h2(markup: &str) -> usize {
    H2.find_iter(markup).count()
}

pub fn count_h3(markup: &str) -> usize {
    H3.find_iter(markup).count()
}

pub fn count_images(markup: &str) -> usize {
    IMG.find_iter(markup).count()
}

/// `<img>` tags carrying no `alt=` attribute at all. An empty `alt=""`
/// counts as present.
pub fn count_images_missing_alt(markup: &str) -> usize {
    IMG.find_iter(markup)
        .filter(|tag| !ALT_ATTR.is_match(tag.as_str()))
        .count()
}

/// Anchors whose `href` value starts with `/` — links within the same site.
pub fn count_internal_links(markup: &str) -> usize {
    ANCHOR_HREF
        .captures_iter(markup)
        .filter(|caps| caps[1].starts_with('/'))
        .count()
}

/// The structural facts of one markup blob, computed in a single pass over
/// the named detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkupStructure {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub image_count: usize,
    pub images_missing_alt: usize,
    pub internal_link_count: usize,
}

impl MarkupStructure {
    pub fn scan(markup: &str) -> Self {
        MarkupStructure {
            h1_count: count_h1(markup),
            h2_count: count_h2(markup),
            h3_count: count_h3(markup),
            image_count: count_images(markup),
            images_missing_alt: count_images_missing_alt(markup),
            internal_link_count: count_internal_links(markup),
        }
    }
}
