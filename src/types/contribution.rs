//! Per-call intermediate structures: tokens and scored contributions

use serde::{Deserialize, Serialize};

use crate::types::{PhraseHit, WordScore};

/// A normalized word and its 0-based position in the token sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// A scored word or phrase.
///
/// `position` is the index of the first token the term covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub term: String,
    pub score: f64,
    pub position: usize,
}

impl Contribution {
    pub fn new(term: impl Into<String>, score: f64, position: usize) -> Self {
        Self {
            term: term.into(),
            score,
            position,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.score > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.score < 0.0
    }

    pub fn to_word_score(&self) -> WordScore {
        WordScore {
            word: self.term.clone(),
            score: self.score,
        }
    }

    pub fn to_phrase_hit(&self) -> PhraseHit {
        PhraseHit {
            phrase: self.term.clone(),
            score: self.score,
        }
    }
}
