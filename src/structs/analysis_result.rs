use crate::enums::analysis_source::AnalysisSource;
use crate::enums::sentiment_label::SentimentLabel;
use serde::{Deserialize, Serialize};

/// The single data contract crossing the analysis boundary.
///
/// Produced by the local analyzer or returned by the advanced backend; the
/// camelCase serialization doubles as the backend wire schema. A result is
/// built fresh on every analysis call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub source: AnalysisSource,

    /// Count of whitespace-delimited non-empty tokens.
    pub word_count: usize,

    /// Count of non-empty segments split on `.`, `!`, `?` runs.
    pub sentence_count: usize,

    /// `round(word_count / sentence_count)`, 0 when there are no sentences.
    pub avg_words_per_sentence: u32,

    pub sentiment_label: SentimentLabel,

    /// Signed sum of lexicon hits; 0 means neutral.
    pub sentiment_score: i32,

    /// `ceil(word_count / 200)`, 0 for empty input.
    pub reading_time_minutes: u32,

    /// Main topics, present only on advanced results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,

    /// User-facing caveat, e.g. the basic-mode advisory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
