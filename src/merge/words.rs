//! Token-to-word assembly and filler removal.
//!
//! ASR backends emit subword tokens; a token whose text starts with
//! whitespace opens a new word (SentencePiece convention). Whitespace
//! detection is opportunistic: a stream that begins mid-word still yields a
//! word starting at its first token.

use crate::defaults::FILLER_WORDS;
use crate::types::{TokenTiming, WordTiming};

/// Merge subword tokens into whole words with aggregated spans.
///
/// Each word's `start` is its first token's start, `end` its last token's
/// end, and `confidence` the arithmetic mean of the contributing token
/// confidences. A trailing partial word is emitted at end of stream.
pub fn merge_tokens(tokens: &[TokenTiming]) -> Vec<WordTiming> {
    let mut words = Vec::new();
    let mut current: Vec<&TokenTiming> = Vec::new();

    for token in tokens {
        let opens_word = token
            .token
            .chars()
            .next()
            .is_some_and(|c| c.is_whitespace());
        if opens_word && !current.is_empty() {
            words.push(build_word(&current));
            current.clear();
        }
        current.push(token);
    }

    if !current.is_empty() {
        words.push(build_word(&current));
    }

    words
}

/// Collapse a group of tokens into one word.
fn build_word(tokens: &[&TokenTiming]) -> WordTiming {
    let text: String = tokens.iter().map(|t| t.token.as_str()).collect();
    let confidence = if tokens.is_empty() {
        0.0
    } else {
        tokens.iter().map(|t| t.confidence).sum::<f32>() / tokens.len() as f32
    };

    WordTiming {
        word: text.trim_start().to_string(),
        start: tokens.first().map_or(0.0, |t| t.start),
        end: tokens.last().map_or(0.0, |t| t.end),
        confidence,
    }
}

/// Drop words whose normalized form is an unambiguous filler ("um", "uh",
/// …).
///
/// Normalization lowercases the word and strips leading/trailing
/// punctuation and symbol characters, so "Um," and "uh…" match. The
/// transform is idempotent.
pub fn remove_fillers(words: Vec<WordTiming>) -> Vec<WordTiming> {
    words.into_iter().filter(|w| !is_filler(&w.word)).collect()
}

fn is_filler(word: &str) -> bool {
    let normalized = word
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    FILLER_WORDS.contains(&normalized.as_str())
}
