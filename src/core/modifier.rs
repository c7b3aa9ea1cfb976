//! Modifier resolution: negation and intensification from the preceding tokens

use crate::core::lexicon::{intensifier_factor, is_negator};
use crate::types::Token;
use crate::{DOUBLE_INTENSIFIER_FACTOR, NEGATION_FACTOR};

/// Apply the modifiers preceding `start` to a base weight.
///
/// Only the token immediately before `start` changes the score, except that
/// a second intensifier in front of an intensifier adds a further 1.25x.
pub fn resolve(base: f64, start: usize, tokens: &[Token]) -> f64 {
    let prev = start.checked_sub(1).and_then(|i| tokens.get(i));
    let prev_prev = start.checked_sub(2).and_then(|i| tokens.get(i));

    let prev_factor = prev.and_then(|t| intensifier_factor(&t.text));

    let mut score = match prev {
        Some(t) if is_negator(&t.text) => -base * NEGATION_FACTOR,
        _ => match prev_factor {
            Some(factor) => base * factor,
            None => base,
        },
    };

    let prev_prev_intensifies = prev_prev
        .map(|t| intensifier_factor(&t.text).is_some())
        .unwrap_or(false);
    if prev_factor.is_some() && prev_prev_intensifies {
        score *= DOUBLE_INTENSIFIER_FACTOR;
    }

    score
}

/// Round half-up to `places` decimals.
///
/// Ties go toward positive infinity, so -1.125 becomes -1.12.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor + 0.5).floor() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::tokenize;

    #[test]
    fn test_no_modifier() {
        let tokens = tokenize("a good answer");
        assert_eq!(resolve(2.0, 1, &tokens), 2.0);
    }

    #[test]
    fn test_first_token_has_no_lookback() {
        let tokens = tokenize("good");
        assert_eq!(resolve(2.0, 0, &tokens), 2.0);
    }

    #[test]
    fn test_negation_flips_and_dampens() {
        let tokens = tokenize("not good");
        assert_eq!(resolve(2.0, 1, &tokens), -1.5);

        let tokens = tokenize("without concerns");
        assert_eq!(resolve(-2.0, 1, &tokens), 1.5);
    }

    #[test]
    fn test_single_intensifier() {
        let tokens = tokenize("extremely good");
        assert_eq!(resolve(2.0, 1, &tokens), 4.0);
    }

    #[test]
    fn test_double_intensifier() {
        let tokens = tokenize("really very strong");
        let score = resolve(3.0, 2, &tokens);
        assert!((score - 5.625).abs() < 1e-9);
        assert_eq!(round_to(score, 2), 5.63);
    }

    #[test]
    fn test_intensifier_before_negator_is_ignored() {
        // prev is the negator; the intensifier two back has no effect
        let tokens = tokenize("very not good");
        assert_eq!(resolve(2.0, 2, &tokens), -1.5);
    }

    #[test]
    fn test_negator_before_intensifier_does_not_chain() {
        let tokens = tokenize("not very good");
        assert_eq!(resolve(2.0, 2, &tokens), 3.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_to(5.625, 2), 5.63);
        assert_eq!(round_to(-1.125, 2), -1.12);
        assert_eq!(round_to(0.3333, 3), 0.333);
        assert_eq!(round_to(-2.0, 2), -2.0);
    }
}
