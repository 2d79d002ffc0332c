//! Text processing utilities for tokenization

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::config::TextConfig;

/// Common English stop words, filtered when `stop_words` is enabled
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Porter stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

/// Unicode word runs: letters, digits, marks and connector punctuation
static WORD: OnceLock<Regex> = OnceLock::new();

fn get_word_regex() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\w+").expect("Invalid word regex pattern"))
}

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into",
            "is", "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then",
            "there", "these", "they", "this", "to", "was", "will", "with",
        ]
        .iter()
        .copied()
        .collect()
    })
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Word tokenizer over Unicode `\w` runs.
///
/// Underscores and combining marks stay inside a token. Tokens are
/// lowercased and must be at least `min_token_len` characters. Stop word
/// removal and Porter stemming apply only when enabled in `config`.
pub fn tokenize(text: &str, config: &TextConfig) -> Vec<String> {
    let stop_words = get_stop_words();
    let lowered = text.to_lowercase();
    let tokens = get_word_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|s| s.chars().count() >= config.min_token_len.max(1))
        .filter(|s| !config.stop_words || !stop_words.contains(s))
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    if !config.stemming {
        return tokens;
    }

    let stemmer = get_stemmer();
    tokens.iter().map(|t| stemmer.stem(t).to_string()).collect()
}
