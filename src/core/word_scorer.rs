//! Word scorer: single-word lexicon lookup over positions no phrase claimed

use crate::core::lexicon::{is_modifier, word_weight};
use crate::core::modifier::{resolve, round_to};
use crate::types::{Contribution, Token};

/// Output of a word scan
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WordScan {
    /// Scored words in token order, zero scores included
    pub contributions: Vec<Contribution>,
    pub analyzed_tokens: usize,
}

/// Score every unclaimed token found in the lexicon.
///
/// Negators and intensifiers are skipped entirely; they only modify the
/// following term.
pub fn score_words(tokens: &[Token], consumed: &[bool]) -> WordScan {
    let mut scan = WordScan::default();

    for (i, token) in tokens.iter().enumerate() {
        if consumed.get(i).copied().unwrap_or(false) {
            continue;
        }
        let Some(base) = word_weight(&token.text) else {
            continue;
        };
        if is_modifier(&token.text) {
            continue;
        }

        scan.analyzed_tokens += 1;
        let score = round_to(resolve(f64::from(base), i, tokens), 2);
        scan.contributions
            .push(Contribution::new(token.text.clone(), score, token.position));
    }

    scan
}
