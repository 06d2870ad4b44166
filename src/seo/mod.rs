pub mod config;
pub mod rules;
pub mod suggestions;

use crate::document::ContentDocument;
use crate::extract::structure::MarkupStructure;
use crate::extract::{extract_plain_text, tokenize_sentences, tokenize_words};
use crate::readability::{HeuristicReadability, ReadabilityModel};
use crate::types::analysis::SeoAnalysisResult;

pub use config::AnalysisConfig;
pub use rules::{Rule, RuleContext, RuleHit};
pub use suggestions::synthesize;

/// The starting score before penalties.
const BASE_SCORE: u32 = 100;

pub struct SeoAnalyzer<R> {
    config: AnalysisConfig,
    readability: R,
}

impl Default for SeoAnalyzer<HeuristicReadability> {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::v0(),
            readability: HeuristicReadability,
        }
    }
}

impl<R> SeoAnalyzer<R>
where
    R: ReadabilityModel,
{
    pub fn new(config: AnalysisConfig, readability: R) -> Self {
        Self { config, readability }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run every rule over the document and aggregate the outcome.
    ///
    /// Total and reentrant: any combination of empty, whitespace-only, or
    /// malformed inputs produces a result, and no state survives the call.
    #[tracing::instrument(skip_all, fields(content_len = document.content.len()))]
    pub fn analyze(&self, document: &ContentDocument) -> SeoAnalysisResult {
        // 1. Extraction Phase
        let text = extract_plain_text(&document.content);
        let words = tokenize_words(&text);
        let sentences = tokenize_sentences(&text);
        let structure = MarkupStructure::scan(&document.content);

        // 2. Rule Phase
        // Rules are independent: each sees only the context, never another
        // rule's outcome, and none short-circuits the rest.
        let ctx = RuleContext {
            title: &document.title,
            meta_description: &document.meta_description,
            word_count: words.len(),
            structure: &structure,
            config: &self.config,
        };

        let hits: Vec<RuleHit> = rules::rules().iter().filter_map(|rule| rule(&ctx)).collect();

        let penalty_total: u32 = hits.iter().map(|hit| hit.penalty).sum();
        let score = BASE_SCORE.saturating_sub(penalty_total);

        // 3. Ordering Phase
        // Stable sort by severity; ties keep rule-evaluation order.
        let mut issues: Vec<_> = hits.into_iter().map(|hit| hit.issue).collect();
        issues.sort_by_key(|issue| issue.severity);

        debug_assert!(
            issues.windows(2).all(|w| w[0].severity <= w[1].severity),
            "issues must be ordered error < warning < info"
        );
        debug_assert!(score <= BASE_SCORE, "score {score} out of range [0, 100]");

        // 4. Synthesis Phase
        let suggestions = synthesize(&issues, score);
        let metrics = self.readability.assess(&words, &sentences);

        tracing::debug!(
            score,
            issues = issues.len(),
            suggestions = suggestions.len(),
            "analysis complete"
        );

        SeoAnalysisResult {
            score,
            issues,
            suggestions,
            readability_score: metrics.score,
            word_count: words.len(),
            reading_time_minutes: metrics.reading_time_minutes,
        }
    }
}
