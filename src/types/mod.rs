pub mod analysis;
pub mod identifiers;

pub use analysis::{
    IssueField, LinkSuggestion, SeoAnalysisResult, SeoIssue, Severity,
};
pub use identifiers::{DocumentId, SuggestionId};
