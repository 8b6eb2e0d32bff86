use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Fixed sentiment lexicons. The two sets must stay disjoint: a word carries
/// exactly one polarity.
pub static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["bom", "ótimo", "excelente", "feliz", "adorei", "incrível"]
        .into_iter()
        .collect()
});

pub static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["ruim", "péssimo", "horrível", "triste", "odeio", "terrível"]
        .into_iter()
        .collect()
});

/// Polarity of a raw token: +1 positive, -1 negative, 0 otherwise.
///
/// Tokens come straight from whitespace splitting, so edge punctuation is
/// trimmed before the case-insensitive lookup ("incrível!" still counts).
pub fn polarity(token: &str) -> i32 {
    let normalized = normalize(token);
    if POSITIVE_WORDS.contains(normalized.as_str()) {
        1
    } else if NEGATIVE_WORDS.contains(normalized.as_str()) {
        -1
    } else {
        0
    }
}

fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}
