//! Internal-link opportunity discovery.
//!
//! Scans the analyzed content against a corpus of candidate documents and
//! proposes anchor-text/target pairs. Two matchers run per candidate, in
//! priority order: an exact (case-insensitive) title match, then a fallback
//! keyword match over the candidate's title tokens. A candidate yields at
//! most one suggestion, and a target id is never suggested twice.

pub mod snippet;

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::CandidateDocument;
use crate::extract::extract_plain_text;
use crate::types::analysis::LinkSuggestion;
use crate::types::identifiers::{DocumentId, SuggestionId};

/// Title tokens must be longer than this many chars to be collected.
const KEYWORD_TOKEN_MIN_CHARS: usize = 3;
/// Collected tokens must be longer than this many chars to anchor a link.
const KEYWORD_MATCH_MIN_CHARS: usize = 4;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Result-set cap after ranking.
    pub max_suggestions: usize,
    /// Relevance assigned to an exact title match.
    pub title_match_score: u32,
    /// Keyword relevance floor; each occurrence adds `keyword_per_occurrence`.
    pub keyword_base_score: u32,
    pub keyword_per_occurrence: u32,
    /// Keyword relevance never exceeds this.
    pub keyword_score_cap: u32,
    /// Snippet radius (chars) around a title match.
    pub title_snippet_radius: usize,
    /// Snippet radius (chars) around a keyword match.
    pub keyword_snippet_radius: usize,
}

impl LinkConfig {
    pub fn v0() -> Self {
        Self {
            max_suggestions: 10,
            title_match_score: 90,
            keyword_base_score: 40,
            keyword_per_occurrence: 10,
            keyword_score_cap: 70,
            title_snippet_radius: 50,
            keyword_snippet_radius: 40,
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Debug, Default)]
pub struct LinkFinder {
    config: LinkConfig,
}

impl LinkFinder {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Propose links from `content` into the corpus, ranked by relevance.
    ///
    /// Total: an empty corpus, empty content, or content that strips down
    /// to nothing all produce an empty list. The source document never
    /// appears as a target, and no target id appears twice.
    #[tracing::instrument(skip_all, fields(candidates = corpus.len()))]
    pub fn find_opportunities(
        &self,
        content: &str,
        source_id: &DocumentId,
        corpus: &[CandidateDocument],
    ) -> Vec<LinkSuggestion> {
        let text = extract_plain_text(content);
        if text.is_empty() {
            return Vec::new();
        }

        // 1. Scan Phase
        // One pass over the corpus; the seen-set enforces the
        // one-suggestion-per-target cap before insertion.
        let mut suggestions: Vec<LinkSuggestion> = Vec::new();
        let mut seen_targets: HashSet<&DocumentId> = HashSet::new();

        for candidate in corpus {
            if candidate.id == *source_id {
                continue;
            }
            if seen_targets.contains(&candidate.id) {
                continue;
            }

            let matched = self
                .match_title(&text, source_id, candidate)
                .or_else(|| self.match_keyword(&text, source_id, candidate));

            if let Some(suggestion) = matched {
                seen_targets.insert(&candidate.id);
                suggestions.push(suggestion);
            }
        }

        // 2. Ordering Phase
        // Stable sort by relevance descending; ties keep corpus order.
        suggestions.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));

        // 3. Truncation Phase
        suggestions.truncate(self.config.max_suggestions);

        debug_assert!(
            suggestions
                .windows(2)
                .all(|w| w[0].relevance_score >= w[1].relevance_score),
            "suggestions must be ordered by relevance descending"
        );
        debug_assert!(
            suggestions
                .iter()
                .all(|s| s.target_document_id != *source_id),
            "a suggestion must never target its own source"
        );

        tracing::debug!(emitted = suggestions.len(), "link scan complete");

        suggestions
    }

    /// The candidate's whole title appears in the content.
    fn match_title(
        &self,
        text: &str,
        source_id: &DocumentId,
        candidate: &CandidateDocument,
    ) -> Option<LinkSuggestion> {
        let title = candidate.title.trim();
        // An empty needle would match at offset zero on every document.
        if title.is_empty() {
            return None;
        }

        let pattern = case_insensitive(title)?;
        let found = pattern.find(text)?;
        let context = snippet::around(
            text,
            found.start(),
            found.end(),
            self.config.title_snippet_radius,
        );

        Some(self.suggestion(
            source_id,
            candidate,
            candidate.title.clone(),
            self.config.title_match_score,
            context,
        ))
    }

    /// Fallback: the first qualifying title token found in the content,
    /// scored by occurrence count.
    fn match_keyword(
        &self,
        text: &str,
        source_id: &DocumentId,
        candidate: &CandidateDocument,
    ) -> Option<LinkSuggestion> {
        let lowered = candidate.title.to_lowercase();
        let tokens = lowered
            .split_whitespace()
            .filter(|w| w.chars().count() > KEYWORD_TOKEN_MIN_CHARS);

        for word in tokens {
            if word.chars().count() <= KEYWORD_MATCH_MIN_CHARS {
                continue;
            }
            let Some(pattern) = case_insensitive(word) else {
                continue;
            };

            // Non-overlapping, case-insensitive occurrence count.
            let mut matches = pattern.find_iter(text);
            let Some(first) = matches.next() else {
                continue;
            };
            let occurrences = 1 + matches.count();

            let score = (self.config.keyword_base_score
                + self.config.keyword_per_occurrence * occurrences as u32)
                .min(self.config.keyword_score_cap);
            let context = snippet::around(
                text,
                first.start(),
                first.end(),
                self.config.keyword_snippet_radius,
            );

            return Some(self.suggestion(
                source_id,
                candidate,
                word.to_string(),
                score,
                context,
            ));
        }

        None
    }

    fn suggestion(
        &self,
        source_id: &DocumentId,
        candidate: &CandidateDocument,
        anchor_text: String,
        relevance_score: u32,
        context_snippet: String,
    ) -> LinkSuggestion {
        LinkSuggestion {
            id: SuggestionId::from_parts(source_id, &candidate.id, &anchor_text),
            source_document_id: source_id.clone(),
            target_document_id: candidate.id.clone(),
            anchor_text,
            relevance_score,
            context_snippet,
            applied: false,
        }
    }
}

/// Compile a literal needle into a case-insensitive pattern. Escaping
/// guarantees valid syntax; compilation only fails on pathological needle
/// sizes, in which case the candidate is skipped rather than erroring.
fn case_insensitive(needle: &str) -> Option<Regex> {
    Regex::new(&format!("(?i){}", regex::escape(needle))).ok()
}
