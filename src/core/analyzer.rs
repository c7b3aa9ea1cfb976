//! Analyzer: runs the pipeline and aggregates contributions into a result
//!
//! tokenize → phrases (trigrams, bigrams) → words → sum, normalize, label

use tracing::debug;

use crate::core::modifier::round_to;
use crate::core::phrase_matcher::match_phrases;
use crate::core::tokenizer::tokenize;
use crate::core::word_scorer::score_words;
use crate::types::{AnalysisResult, Contribution, PhraseHit, SentimentLabel, WordScore};
use crate::{MAX_TERM_WEIGHT, NORMALIZED_BOUND};

/// Local lexical sentiment analyzer
#[derive(Debug, Default, Clone, Copy)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    /// Create new analyzer
    pub fn new() -> Self {
        Self
    }

    /// Analyze text and return the full breakdown
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let tokens = tokenize(text);

        // Handle empty input
        if tokens.is_empty() {
            return AnalysisResult::zero();
        }

        let phrases = match_phrases(&tokens);
        let words = score_words(&tokens, &phrases.consumed);

        let analyzed = phrases.analyzed_tokens + words.analyzed_tokens;
        let result = aggregate(tokens.len(), analyzed, phrases.hits, words.contributions);

        debug!(
            tokens = result.token_count,
            analyzed = result.analyzed_token_count,
            phrases = result.phrase_hits.len(),
            normalized = result.normalized_score,
            label = %result.label,
            "Analyzed text"
        );

        result
    }

    /// Quick analyze - just return the normalized score
    pub fn quick_score(&self, text: &str) -> f64 {
        self.analyze(text).normalized_score
    }
}

/// Analyze text with the local lexical scorer
pub fn analyze(text: &str) -> AnalysisResult {
    SentimentAnalyzer::new().analyze(text)
}

/// Sum contributions (phrases first, then words, in scan order) and normalize
fn aggregate(
    token_count: usize,
    analyzed: usize,
    phrase_hits: Vec<Contribution>,
    word_hits: Vec<Contribution>,
) -> AnalysisResult {
    let mut raw = 0.0;
    let mut positive_sum = 0.0;
    let mut negative_sum = 0.0;

    for hit in &phrase_hits {
        raw += hit.score;
        if hit.is_positive() {
            positive_sum += hit.score;
        } else {
            negative_sum += hit.score.abs();
        }
    }

    let mut positive_words: Vec<WordScore> = Vec::new();
    let mut negative_words: Vec<WordScore> = Vec::new();
    for hit in &word_hits {
        raw += hit.score;
        if hit.is_positive() {
            positive_sum += hit.score;
            positive_words.push(hit.to_word_score());
        } else if hit.is_negative() {
            negative_sum += hit.score.abs();
            negative_words.push(hit.to_word_score());
        }
    }

    let comparative = raw / token_count as f64;
    let max_possible = (analyzed as f64 * f64::from(MAX_TERM_WEIGHT)).max(1.0);
    let normalized = (raw / max_possible * 100.0).clamp(-NORMALIZED_BOUND, NORMALIZED_BOUND);
    let label = SentimentLabel::from_normalized(normalized);

    // Stable sorts keep scan order among equal scores
    positive_words.sort_by(|a, b| b.score.total_cmp(&a.score));
    negative_words.sort_by(|a, b| a.score.total_cmp(&b.score));
    let mut phrase_hits: Vec<PhraseHit> = phrase_hits.iter().map(Contribution::to_phrase_hit).collect();
    phrase_hits.sort_by(|a, b| b.score.abs().total_cmp(&a.score.abs()));

    AnalysisResult {
        raw_score: round_to(raw, 2),
        normalized_score: round_to(normalized, 2),
        comparative: round_to(comparative, 3),
        label,
        positive_words,
        negative_words,
        positive_score_sum: round_to(positive_sum, 2),
        negative_score_sum: round_to(negative_sum, 2),
        token_count,
        analyzed_token_count: analyzed,
        phrase_hits,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        assert_eq!(analyze(""), AnalysisResult::zero());
        assert_eq!(analyze("  \n\t "), AnalysisResult::zero());
        // Only punctuation tokenizes to nothing as well
        assert_eq!(analyze("?!... 123"), AnalysisResult::zero());
    }

    #[test]
    fn test_no_sentiment_words() {
        let result = analyze("The candidate joined the call");
        assert_eq!(result.raw_score, 0.0);
        assert_eq!(result.token_count, 5);
        assert_eq!(result.analyzed_token_count, 0);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_single_positive_word() {
        let result = analyze("excellent");
        assert_eq!(result.raw_score, 4.0);
        assert_eq!(result.normalized_score, 80.0);
        assert_eq!(result.comparative, 4.0);
        assert_eq!(result.label, SentimentLabel::VeryPositive);
        assert_eq!(result.positive_score_sum, 4.0);
    }

    #[test]
    fn test_not_good() {
        let result = analyze("not good");
        assert_eq!(result.raw_score, -1.5);
        assert_eq!(result.negative_words, vec![WordScore { word: "good".into(), score: -1.5 }]);
        assert_eq!(result.negative_score_sum, 1.5);
        assert_eq!(result.comparative, -0.75);
        // -1.5 / 5 * 100
        assert_eq!(result.normalized_score, -30.0);
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_not_a_fit_does_not_score_fit() {
        let result = analyze("not a fit");
        assert_eq!(result.raw_score, -4.0);
        assert!(result.positive_words.is_empty());
        assert!(result.negative_words.is_empty());
        assert_eq!(result.phrase_hits, vec![PhraseHit { phrase: "not a fit".into(), score: -4.0 }]);
        assert_eq!(result.analyzed_token_count, 3);
    }

    #[test]
    fn test_double_intensifier() {
        let result = analyze("really very strong");
        assert_eq!(result.raw_score, 5.63);
        assert_eq!(result.positive_words[0].score, 5.63);
        assert_eq!(result.analyzed_token_count, 1);
        assert_eq!(result.normalized_score, 100.0);
    }

    #[test]
    fn test_lists_are_sorted() {
        let result = analyze(
            "good communication but sloppy code, terrible tests, excellent design, \
             a red flag and a strong hire",
        );
        let positives: Vec<f64> = result.positive_words.iter().map(|w| w.score).collect();
        assert_eq!(positives, vec![4.0, 2.0]);
        let negatives: Vec<f64> = result.negative_words.iter().map(|w| w.score).collect();
        assert_eq!(negatives, vec![-3.0, -2.0]);
        let phrases: Vec<&str> = result.phrase_hits.iter().map(|p| p.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["strong hire", "red flag"]);
    }

    #[test]
    fn test_zero_score_word_excluded_from_lists() {
        let result = analyze("somewhat");
        assert_eq!(result.analyzed_token_count, 1);
        assert!(result.positive_words.is_empty());
        assert!(result.negative_words.is_empty());
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_normalized_is_bounded() {
        let text = "extremely outstanding ".repeat(200);
        let result = analyze(&text);
        assert_eq!(result.normalized_score, 100.0);

        let text = "incredibly catastrophic ".repeat(200);
        let result = analyze(&text);
        assert_eq!(result.normalized_score, -100.0);
        assert_eq!(result.label, SentimentLabel::VeryNegative);
    }

    #[test]
    fn test_lack_words_negate() {
        let result = analyze("lacking detailed answers");
        assert_eq!(result.raw_score, -1.5);
        // "lacked confidence" is a phrase and wins over negation
        let result = analyze("lacked confidence");
        assert_eq!(result.phrase_hits[0].score, -3.0);
        assert!(result.negative_words.is_empty());
    }

    #[test]
    fn test_determinism() {
        let text = "Really very strong communicator, but not a fit for the team. No hire.";
        let a = analyze(text);
        let b = analyze(text);
        assert_eq!(a, b);
        assert_eq!(a.raw_score.to_bits(), b.raw_score.to_bits());
        assert_eq!(a.normalized_score.to_bits(), b.normalized_score.to_bits());
    }

    #[test]
    fn test_quick_score() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.quick_score("excellent"), 80.0);
    }
}
