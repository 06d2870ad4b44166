//! Approximate reading-ease scoring and reading-time estimation.

use serde::{Deserialize, Serialize};

/// Words-per-minute assumed for the reading-time estimate.
const READING_WORDS_PER_MINUTE: usize = 200;
/// A word longer than this many characters is "long".
const LONG_WORD_CHARS: usize = 12;
/// Documents with more words than this trip the long-sentence penalty.
const LONG_DOCUMENT_WORDS: usize = 20;
/// Maximum penalty contributed by long sentences.
const LONG_SENTENCE_PENALTY: f32 = 30.0;
/// Maximum penalty contributed by long words.
const LONG_WORD_PENALTY: f32 = 20.0;

/// Output of a readability assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    /// Reading-ease score in `[0, 100]`; higher reads easier.
    pub score: f32,
    /// `ceil(words / 200)`, never below 1.
    pub reading_time_minutes: u32,
}

pub trait ReadabilityModel {
    fn assess(&self, words: &[&str], sentences: &[&str]) -> ReadabilityMetrics;
}

/// v0: coarse long-sentence / long-word heuristic.
///
/// Starts at 100 and subtracts two proportional penalties. A sentence is
/// classified long iff the document's total word count exceeds 20 — the
/// classification keys off the document, not the sentence, so the sentence
/// penalty is all-or-nothing. Kept exactly so for score compatibility with
/// the v0 contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicReadability;

impl ReadabilityModel for HeuristicReadability {
    fn assess(&self, words: &[&str], sentences: &[&str]) -> ReadabilityMetrics {
        let reading_time_minutes =
            (words.len().div_ceil(READING_WORDS_PER_MINUTE)).max(1) as u32;

        // Nothing to penalize; also keeps the ratios below division-safe.
        if words.is_empty() || sentences.is_empty() {
            return ReadabilityMetrics {
                score: 100.0,
                reading_time_minutes,
            };
        }

        let long_sentences = sentences
            .iter()
            .filter(|_| words.len() > LONG_DOCUMENT_WORDS)
            .count();
        let long_words = words
            .iter()
            .filter(|w| w.chars().count() > LONG_WORD_CHARS)
            .count();

        let sentence_penalty =
            (long_sentences as f32 / sentences.len() as f32) * LONG_SENTENCE_PENALTY;
        let word_penalty = (long_words as f32 / words.len() as f32) * LONG_WORD_PENALTY;

        let score = (100.0 - sentence_penalty - word_penalty).clamp(0.0, 100.0);
        debug_assert!((0.0..=100.0).contains(&score), "score {score} out of range [0, 100]");

        ReadabilityMetrics {
            score,
            reading_time_minutes,
        }
    }
}
