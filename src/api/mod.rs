//! Typed request payloads for the two engine entry points.
//!
//! Transport (routes, envelopes, debouncing) lives with the caller; the
//! payload shapes themselves are part of this crate's contract. Parsing a
//! payload is the only fallible operation in the crate — the engine proper
//! is total.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::{CandidateDocument, ContentDocument};
use crate::linking::LinkFinder;
use crate::readability::ReadabilityModel;
use crate::seo::SeoAnalyzer;
use crate::types::analysis::{LinkSuggestion, SeoAnalysisResult};
use crate::types::identifiers::DocumentId;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid request payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Payload of the SEO analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoAnalysisRequest {
    pub content: String,
    pub title: String,
    pub meta_description: String,
}

impl SeoAnalysisRequest {
    pub fn from_json(payload: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn run<R: ReadabilityModel>(&self, analyzer: &SeoAnalyzer<R>) -> SeoAnalysisResult {
        let document = ContentDocument::new(
            self.title.clone(),
            self.meta_description.clone(),
            self.content.clone(),
        );
        analyzer.analyze(&document)
    }
}

/// Payload of the link suggestion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSuggestionRequest {
    pub content: String,
    pub source_document_id: DocumentId,
    pub corpus: Vec<CandidateDocument>,
}

impl LinkSuggestionRequest {
    pub fn from_json(payload: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn run(&self, finder: &LinkFinder) -> Vec<LinkSuggestion> {
        finder.find_opportunities(&self.content, &self.source_document_id, &self.corpus)
    }
}
