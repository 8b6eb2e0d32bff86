use async_trait::async_trait;
use notelyzer::adapters::backend_adapter::BackendAdapter;
use notelyzer::analyze;
use notelyzer::enums::analysis_source::AnalysisSource;
use notelyzer::enums::sentiment_label::SentimentLabel;
use notelyzer::errors::{NotelyzerError, NotelyzerResult};
use notelyzer::services::coordinator::AnalysisCoordinator;
use notelyzer::structs::analysis_result::AnalysisResult;
use notelyzer::traits::analysis_backend::AnalysisBackend;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

// ---------------------------------------------------------------------------
// Test backends
// ---------------------------------------------------------------------------

struct FailingBackend;

#[async_trait]
impl AnalysisBackend for FailingBackend {
    async fn analyze_text(&self, _text: &str) -> NotelyzerResult<AnalysisResult> {
        Err(NotelyzerError::network_error(
            "analyze request",
            Some(503),
            "service unavailable",
        ))
    }

    async fn health_check(&self) -> NotelyzerResult<()> {
        Err(NotelyzerError::network_error(
            "health check",
            None,
            "connection refused",
        ))
    }
}

struct CountingBackend {
    calls: AtomicUsize,
}

impl CountingBackend {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AnalysisBackend for CountingBackend {
    async fn analyze_text(&self, text: &str) -> NotelyzerResult<AnalysisResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(advanced_result(text))
    }

    async fn health_check(&self) -> NotelyzerResult<()> {
        Ok(())
    }
}

fn advanced_result(text: &str) -> AnalysisResult {
    let mut result = analyze(text);
    result.source = AnalysisSource::Advanced;
    result.message = None;
    result.topics = Some(vec!["cursos".to_string(), "avaliação".to_string()]);
    result
}

// ---------------------------------------------------------------------------
// Analyzer scenarios
// ---------------------------------------------------------------------------

#[test]
fn portuguese_review_scenario() {
    let result = analyze("Eu adorei o curso. Foi incrível! Mas o final foi péssimo.");
    // 11 maximal non-whitespace runs, three terminated sentences.
    assert_eq!(result.word_count, 11);
    assert_eq!(result.sentence_count, 3);
    assert_eq!(result.avg_words_per_sentence, 4);
    // adorei (+1), incrível (+1), péssimo (-1)
    assert_eq!(result.sentiment_score, 1);
    assert_eq!(result.sentiment_label, SentimentLabel::Positive);
    assert_eq!(result.reading_time_minutes, 1);
    assert_eq!(result.source, AnalysisSource::Basic);
    assert!(result.topics.is_none());
    assert!(result.message.is_some());
}

#[test]
fn empty_input_scenario() {
    let result = analyze("");
    assert_eq!(result.word_count, 0);
    assert_eq!(result.sentence_count, 0);
    assert_eq!(result.avg_words_per_sentence, 0);
    assert_eq!(result.sentiment_label, SentimentLabel::Neutral);
    assert_eq!(result.sentiment_score, 0);
    assert_eq!(result.reading_time_minutes, 0);
}

#[test]
fn negative_note_scores_negative() {
    let result = analyze("O filme foi ruim. Final horrível e triste.");
    assert_eq!(result.sentiment_score, -3);
    assert_eq!(result.sentiment_label, SentimentLabel::Negative);
}

#[test]
fn reading_time_boundaries() {
    let words = |n: usize| vec!["palavra"; n].join(" ");
    assert_eq!(analyze(&words(0)).reading_time_minutes, 0);
    assert_eq!(analyze(&words(1)).reading_time_minutes, 1);
    assert_eq!(analyze(&words(200)).reading_time_minutes, 1);
    assert_eq!(analyze(&words(201)).reading_time_minutes, 2);
    assert_eq!(analyze(&words(400)).reading_time_minutes, 2);
    assert_eq!(analyze(&words(401)).reading_time_minutes, 3);
}

#[test]
fn analysis_is_idempotent() {
    let text = "Um ótimo dia. Mas a noite foi terrível!";
    assert_eq!(analyze(text), analyze(text));
}

// ---------------------------------------------------------------------------
// Coordinator fallback policy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fallback_on_backend_failure_matches_basic_analysis() {
    let text = "Eu adorei o curso. Foi incrível! Mas o final foi péssimo.";
    let result = AnalysisCoordinator::get_analysis(text, true, &FailingBackend).await;
    assert_eq!(result.source, AnalysisSource::Basic);
    assert_eq!(result, analyze(text));
}

#[tokio::test]
async fn unavailable_backend_is_never_invoked() {
    let backend = CountingBackend::new();
    let text = "Nota qualquer.";
    let result = AnalysisCoordinator::get_analysis(text, false, &backend).await;
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    assert_eq!(result, analyze(text));
}

#[tokio::test]
async fn successful_advanced_result_is_returned_unchanged() {
    let backend = CountingBackend::new();
    let text = "Nota sobre cursos.";
    let result = AnalysisCoordinator::get_analysis(text, true, &backend).await;
    assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    assert_eq!(result.source, AnalysisSource::Advanced);
    assert_eq!(
        result.topics,
        Some(vec!["cursos".to_string(), "avaliação".to_string()])
    );
    assert!(result.message.is_none());
}

// ---------------------------------------------------------------------------
// Wire schema
// ---------------------------------------------------------------------------

#[test]
fn advanced_payload_deserializes_from_camel_case() {
    let payload = r#"{
        "source": "advanced",
        "wordCount": 120,
        "sentenceCount": 8,
        "avgWordsPerSentence": 15,
        "sentimentLabel": "positive",
        "sentimentScore": 4,
        "readingTimeMinutes": 1,
        "topics": ["cursos", "feedback"]
    }"#;
    let result: AnalysisResult = serde_json::from_str(payload).unwrap();
    assert_eq!(result.source, AnalysisSource::Advanced);
    assert_eq!(result.word_count, 120);
    assert_eq!(result.topics.as_deref(), Some(["cursos".to_string(), "feedback".to_string()].as_slice()));
    assert!(result.message.is_none());
}

#[test]
fn basic_result_serializes_without_topics_key() {
    let json = serde_json::to_string(&analyze("Uma nota.")).unwrap();
    assert!(json.contains("\"wordCount\":2"));
    assert!(json.contains("\"source\":\"basic\""));
    assert!(!json.contains("topics"));
}

#[test]
fn unknown_source_value_is_rejected() {
    let payload = r#"{
        "source": "premium",
        "wordCount": 1,
        "sentenceCount": 1,
        "avgWordsPerSentence": 1,
        "sentimentLabel": "neutral",
        "sentimentScore": 0,
        "readingTimeMinutes": 1
    }"#;
    assert!(serde_json::from_str::<AnalysisResult>(payload).is_err());
}

#[test]
fn result_survives_a_json_round_trip() {
    let original = advanced_result("Adorei o projeto. Foi excelente!");
    let json = serde_json::to_string(&original).unwrap();
    let back: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(original, back);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_loads_from_file_and_builds_an_adapter() {
    use notelyzer::config::config_manager::ConfigManager;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[backend]\nenabled = true\nbase_url = \"http://127.0.0.1:5000\"\ntimeout_secs = 3\n",
    )
    .unwrap();

    let config = ConfigManager::load_from(&path).unwrap();
    assert!(config.backend.enabled);
    assert_eq!(config.backend.timeout_secs, 3);
    // cooldown falls back to the five-minute default
    assert_eq!(config.backend.cooldown_secs, 300);
    ConfigManager::validate_config(&config).unwrap();
    BackendAdapter::from_config(&config.backend).unwrap();
}

#[test]
fn missing_config_file_is_a_config_file_error() {
    use notelyzer::config::config_manager::ConfigManager;

    let dir = tempfile::tempdir().unwrap();
    let err = ConfigManager::load_from(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, NotelyzerError::ConfigurationFile { .. }));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const LEXICON_SWAP: [(&str, &str); 6] = [
    ("bom", "ruim"),
    ("ótimo", "péssimo"),
    ("excelente", "horrível"),
    ("feliz", "triste"),
    ("adorei", "odeio"),
    ("incrível", "terrível"),
];

fn swap_word(word: &str) -> &str {
    for (pos, neg) in LEXICON_SWAP {
        if word == pos {
            return neg;
        }
        if word == neg {
            return pos;
        }
    }
    word
}

fn count_whitespace_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_run = false;
        } else if !in_run {
            in_run = true;
            runs += 1;
        }
    }
    runs
}

fn count_segments(text: &str) -> usize {
    let mut segments = 0;
    let mut current = String::new();
    for c in text.chars() {
        if c == '.' || c == '!' || c == '?' {
            if !current.trim().is_empty() {
                segments += 1;
            }
            current.clear();
        } else {
            current.push(c);
        }
    }
    if !current.trim().is_empty() {
        segments += 1;
    }
    segments
}

fn sentiment_vocabulary() -> Vec<&'static str> {
    let mut words: Vec<&str> = LEXICON_SWAP
        .iter()
        .flat_map(|(pos, neg)| [*pos, *neg])
        .collect();
    words.extend(["curso", "final", "nota", "dia"]);
    words
}

proptest! {
    #[test]
    fn word_count_equals_maximal_nonwhitespace_runs(text in "\\PC{0,200}") {
        prop_assert_eq!(analyze(&text).word_count, count_whitespace_runs(&text));
    }

    #[test]
    fn sentence_count_equals_nonempty_segments(text in "[a-z .!?\\n]{0,200}") {
        prop_assert_eq!(analyze(&text).sentence_count, count_segments(&text));
    }

    #[test]
    fn swapping_lexicon_polarity_negates_the_score(
        words in prop::collection::vec(prop::sample::select(sentiment_vocabulary()), 0..40)
    ) {
        let text = words.join(" ");
        let swapped = words.iter().map(|w| swap_word(w)).collect::<Vec<_>>().join(" ");
        prop_assert_eq!(analyze(&swapped).sentiment_score, -analyze(&text).sentiment_score);
    }

    #[test]
    fn analyzer_never_panics(text in "\\PC{0,500}") {
        let result = analyze(&text);
        prop_assert_eq!(result.reading_time_minutes, result.word_count.div_ceil(200) as u32);
    }
}
