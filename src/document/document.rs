use serde::{Deserialize, Serialize};

use crate::types::identifiers::DocumentId;

/// The content under analysis. Ephemeral — constructed by the caller per
/// call; the engine never retains a reference beyond the call.
///
/// `content` is raw markup; `title` and `meta_description` are plain
/// strings. Empty or whitespace-only fields are legal inputs and are
/// reported as missing by the rule engine rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub title: String,
    pub meta_description: String,
    pub content: String,
}

impl ContentDocument {
    pub fn new(
        title: impl Into<String>,
        meta_description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        ContentDocument {
            title: title.into(),
            meta_description: meta_description.into(),
            content: content.into(),
        }
    }
}

/// One corpus item the link finder may propose a link to.
///
/// `slug` and `excerpt` travel with the candidate for the caller's benefit
/// (rendering the eventual link); the matching algorithm reads only `id`
/// and `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDocument {
    pub id: DocumentId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
}

impl CandidateDocument {
    pub fn new(
        id: impl Into<DocumentId>,
        title: impl Into<String>,
        slug: impl Into<String>,
        excerpt: impl Into<String>,
    ) -> Self {
        CandidateDocument {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            excerpt: excerpt.into(),
        }
    }
}
