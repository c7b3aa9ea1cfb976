//! Phrase matcher: longest-first bigram/trigram scoring with token exclusivity

use crate::core::lexicon::{phrase_weight, MAX_PHRASE_TOKENS, MIN_PHRASE_TOKENS};
use crate::core::modifier::{resolve, round_to};
use crate::types::{Contribution, Token};

/// Output of a phrase scan
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseScan {
    /// Matched phrases in scan order (trigrams first, then left to right)
    pub hits: Vec<Contribution>,
    /// One flag per token; true once a phrase has claimed the position
    pub consumed: Vec<bool>,
    /// Tokens covered by matched phrases
    pub analyzed_tokens: usize,
}

/// Scan for known phrases, trigrams before bigrams.
///
/// A window matches only if none of its positions were already claimed,
/// so longer phrases pre-empt overlapping shorter ones and, within one
/// length, the earliest start wins.
pub fn match_phrases(tokens: &[Token]) -> PhraseScan {
    let mut consumed = vec![false; tokens.len()];
    let mut hits = Vec::new();
    let mut analyzed_tokens = 0;

    for len in (MIN_PHRASE_TOKENS..=MAX_PHRASE_TOKENS).rev() {
        if tokens.len() < len {
            continue;
        }
        for start in 0..=tokens.len() - len {
            let window = &tokens[start..start + len];
            let phrase = window
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            let Some(base) = phrase_weight(&phrase) else {
                continue;
            };
            if consumed[start..start + len].iter().any(|&c| c) {
                continue;
            }

            let score = round_to(resolve(f64::from(base), start, tokens), 2);
            hits.push(Contribution::new(phrase, score, start));
            analyzed_tokens += len;
            consumed[start..start + len].fill(true);
        }
    }

    PhraseScan {
        hits,
        consumed,
        analyzed_tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::tokenize;

    fn scan(text: &str) -> PhraseScan {
        match_phrases(&tokenize(text))
    }

    #[test]
    fn test_no_tokens() {
        let result = scan("");
        assert!(result.hits.is_empty());
        assert!(result.consumed.is_empty());
    }

    #[test]
    fn test_bigram_match() {
        let result = scan("a strong hire overall");
        assert_eq!(result.hits.len(), 1);
        assert_eq!(result.hits[0].term, "strong hire");
        assert_eq!(result.hits[0].score, 5.0);
        assert_eq!(result.hits[0].position, 1);
        assert_eq!(result.consumed, vec![false, true, true, false]);
        assert_eq!(result.analyzed_tokens, 2);
    }

    #[test]
    fn test_trigram_preempts_bigram() {
        // "ready for next" claims "ready" before the bigram "not ready" is tried
        let result = scan("not ready for next");
        assert_eq!(result.hits.len(), 1);
        assert_eq!(result.hits[0].term, "ready for next");
        assert_eq!(result.hits[0].score, -2.25);
        assert_eq!(result.analyzed_tokens, 3);
    }

    #[test]
    fn test_not_a_fit_is_one_phrase() {
        let result = scan("not a fit");
        assert_eq!(result.hits.len(), 1);
        assert_eq!(result.hits[0].term, "not a fit");
        assert_eq!(result.hits[0].score, -4.0);
        assert!(result.consumed.iter().all(|&c| c));
    }

    #[test]
    fn test_multiple_matches_in_scan_order() {
        let result = scan("great fit good fit");
        let terms: Vec<&str> = result.hits.iter().map(|h| h.term.as_str()).collect();
        assert_eq!(terms, vec!["great fit", "good fit"]);
    }

    #[test]
    fn test_overlapping_bigrams_claim_left_first() {
        // "strong hire" claims "hire", so "hire now" cannot match
        let result = scan("strong hire now");
        let terms: Vec<&str> = result.hits.iter().map(|h| h.term.as_str()).collect();
        assert_eq!(terms, vec!["strong hire"]);
    }

    #[test]
    fn test_phrase_with_negation() {
        let result = scan("no red flag");
        assert_eq!(result.hits[0].term, "red flag");
        assert_eq!(result.hits[0].score, 3.0);
    }

    #[test]
    fn test_phrase_with_intensifier() {
        let result = scan("really great fit");
        assert_eq!(result.hits[0].score, 6.0);
    }
}
