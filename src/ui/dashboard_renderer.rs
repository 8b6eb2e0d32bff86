use crate::structs::analysis_result::AnalysisResult;
use terminal_size::{terminal_size, Width};

const FALLBACK_WIDTH: usize = 80;
const MAX_WIDTH: usize = 100;

/// Renders an `AnalysisResult` as a plain-text dashboard.
///
/// Any renderer must be able to build its output from the result fields
/// alone; this one never looks at the analyzed text.
pub struct DashboardRenderer;

impl DashboardRenderer {
    pub fn render(result: &AnalysisResult) -> String {
        let width = terminal_size()
            .map(|(Width(w), _)| w as usize)
            .unwrap_or(FALLBACK_WIDTH)
            .min(MAX_WIDTH);
        Self::render_with_width(result, width)
    }

    pub fn render_with_width(result: &AnalysisResult, width: usize) -> String {
        let rule = "─".repeat(width.max(20));
        let mut out = String::new();

        out.push_str(&format!("📊 Note Analysis ({})\n", result.source));
        out.push_str(&rule);
        out.push('\n');

        if let Some(message) = &result.message {
            out.push_str(&format!("⚠️  {message}\n"));
            out.push_str(&rule);
            out.push('\n');
        }

        out.push_str(&format!(
            "  Words: {}    Sentences: {}    Avg words/sentence: {}\n",
            result.word_count, result.sentence_count, result.avg_words_per_sentence
        ));
        out.push_str(&format!(
            "  Sentiment: {} {} (score {:+})\n",
            result.sentiment_label,
            result.sentiment_label.emoji(),
            result.sentiment_score
        ));
        out.push_str(&format!(
            "  Reading time: {} min\n",
            result.reading_time_minutes
        ));

        if let Some(topics) = &result.topics {
            out.push_str(&rule);
            out.push('\n');
            out.push_str("🎯 Main topics:\n");
            if topics.is_empty() {
                out.push_str("  (none reported)\n");
            }
            for topic in topics {
                out.push_str(&format!("  • {topic}\n"));
            }
        }

        out
    }
}
