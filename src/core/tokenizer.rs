//! Tokenizer: lowercase words, keeping hyphens and apostrophes

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Token;

lazy_static! {
    /// Anything that is not a lowercase letter, apostrophe, hyphen or whitespace
    static ref RE_NON_WORD: Regex = Regex::new(r"[^a-z'\s-]").unwrap();
}

/// Split text into positioned tokens.
///
/// "Strong-hire, can't wait!" → ["strong-hire", "can't", "wait"]
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_words(text)
        .into_iter()
        .enumerate()
        .map(|(position, word)| Token::new(word, position))
        .collect()
}

/// Split text into bare lowercase words
pub fn tokenize_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = RE_NON_WORD.replace_all(&lowered, " ");
    cleaned.split_whitespace().map(str::to_string).collect()
}
