use serde::{Deserialize, Serialize};

use crate::types::identifiers::{DocumentId, SuggestionId};

/// Issue severity. Declaration order doubles as sort order: the issue list
/// in a result is always Error, then Warning, then Info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// Which part of the document an issue points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueField {
    Title,
    MetaDescription,
    Content,
}

/// A single finding from the rule engine. Immutable value, produced fresh
/// per analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoIssue {
    pub severity: Severity,
    pub message: String,
    pub field: IssueField,
    pub recommendation: String,
}

/// The full outcome of one SEO analysis.
///
/// `score` and `readability_score` are always clamped into `[0, 100]`, no
/// matter how far the accumulated penalties go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoAnalysisResult {
    pub score: u32,
    pub issues: Vec<SeoIssue>,
    pub suggestions: Vec<String>,
    pub readability_score: f32,
    pub word_count: usize,
    pub reading_time_minutes: u32,
}

/// One proposed internal link from the analyzed content to a corpus item.
///
/// The engine only ever returns `applied: false`; promoting a suggestion to
/// applied is the caller's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSuggestion {
    pub id: SuggestionId,
    pub source_document_id: DocumentId,
    pub target_document_id: DocumentId,
    pub anchor_text: String,
    pub relevance_score: u32,
    pub context_snippet: String,
    pub applied: bool,
}
