use crate::enums::analysis_source::AnalysisSource;
use crate::enums::sentiment_label::SentimentLabel;
use crate::services::lexicon;
use crate::structs::analysis_result::AnalysisResult;

/// Average adult reading speed used for the time estimate.
const WORDS_PER_MINUTE: usize = 200;

pub const BASIC_MODE_ADVISORY: &str =
    "Basic analysis - enable the advanced backend for topic modeling and deeper results";

/// Single-pass local analysis: word/sentence statistics, lexicon sentiment,
/// reading time. Total over any input; empty or whitespace-only text yields a
/// zeroed, neutral result.
pub fn analyze(text: &str) -> AnalysisResult {
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    let sentence_count = text
        .split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count();

    let sentiment_score: i32 = words.iter().map(|word| lexicon::polarity(word)).sum();

    let avg_words_per_sentence = if sentence_count == 0 {
        0
    } else {
        (word_count as f64 / sentence_count as f64).round() as u32
    };

    let reading_time_minutes = word_count.div_ceil(WORDS_PER_MINUTE) as u32;

    AnalysisResult {
        source: AnalysisSource::Basic,
        word_count,
        sentence_count,
        avg_words_per_sentence,
        sentiment_label: SentimentLabel::from_score(sentiment_score),
        sentiment_score,
        reading_time_minutes,
        topics: None,
        message: Some(BASIC_MODE_ADVISORY.to_string()),
    }
}
