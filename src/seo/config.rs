use serde::{Deserialize, Serialize};

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Titles shorter than this (in chars, trimmed) are missing/too short.
    pub title_min_chars: usize,
    /// Titles longer than this are too long.
    pub title_max_chars: usize,
    /// Meta descriptions shorter than this are missing/too short.
    pub meta_min_chars: usize,
    /// Meta descriptions longer than this are too long.
    pub meta_max_chars: usize,
    /// Plain-text word counts below this are thin content.
    pub min_content_words: usize,
    /// Fewer internal links than this is sparse.
    pub min_internal_links: usize,
}

impl AnalysisConfig {
    pub fn v0() -> Self {
        Self {
            title_min_chars: 10,
            title_max_chars: 60,
            meta_min_chars: 50,
            meta_max_chars: 160,
            min_content_words: 300,
            min_internal_links: 2,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::v0()
    }
}
