//! Analysis result structures shared by the local and remote analyzers

use serde::{Deserialize, Serialize};

use crate::types::SentimentLabel;
use crate::NORMALIZED_BOUND;

/// A scored single word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    pub score: f64,
}

/// A scored multi-word phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseHit {
    pub phrase: String,
    pub score: f64,
}

/// Full result of one analysis.
///
/// The JSON field names are the contract the remote analyzer must honor,
/// so a rendering layer can treat local and remote results the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Sum of all contribution scores (2 decimals)
    #[serde(rename = "score")]
    pub raw_score: f64,
    /// Raw score rescaled to -100..100 (2 decimals)
    pub normalized_score: f64,
    /// Raw score divided by token count (3 decimals)
    pub comparative: f64,
    pub label: SentimentLabel,
    /// Sorted by score, highest first
    #[serde(default)]
    pub positive_words: Vec<WordScore>,
    /// Sorted by score, most negative first
    #[serde(default)]
    pub negative_words: Vec<WordScore>,
    #[serde(rename = "positiveScore")]
    pub positive_score_sum: f64,
    /// Absolute value of the negative contributions
    #[serde(rename = "negativeScore")]
    pub negative_score_sum: f64,
    #[serde(rename = "wordCount")]
    pub token_count: usize,
    #[serde(rename = "analyzedWords")]
    pub analyzed_token_count: usize,
    /// Sorted by absolute score, largest first
    #[serde(default)]
    pub phrase_hits: Vec<PhraseHit>,
}

impl AnalysisResult {
    /// The canonical result for empty input
    pub fn zero() -> Self {
        Self {
            raw_score: 0.0,
            normalized_score: 0.0,
            comparative: 0.0,
            label: SentimentLabel::Neutral,
            positive_words: Vec::new(),
            negative_words: Vec::new(),
            positive_score_sum: 0.0,
            negative_score_sum: 0.0,
            token_count: 0,
            analyzed_token_count: 0,
            phrase_hits: Vec::new(),
        }
    }

    /// Bring an externally produced result back inside the output contract.
    ///
    /// Clamps the normalized score and restores list ordering.
    pub fn sanitized(mut self) -> Self {
        if !self.normalized_score.is_finite() {
            self.normalized_score = 0.0;
        }
        self.normalized_score = self
            .normalized_score
            .clamp(-NORMALIZED_BOUND, NORMALIZED_BOUND);
        self.positive_words
            .sort_by(|a, b| b.score.total_cmp(&a.score));
        self.negative_words
            .sort_by(|a, b| a.score.total_cmp(&b.score));
        self.phrase_hits
            .sort_by(|a, b| b.score.abs().total_cmp(&a.score.abs()));
        self
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        format!(
            "{}{} {} | score={:.2} | normalized={:.2} | comparative={:.3}{}",
            self.label.color_code(),
            self.label.emoji(),
            self.label,
            self.raw_score,
            self.normalized_score,
            self.comparative,
            SentimentLabel::color_reset()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "label={} | score={:.2} | normalized={:.2} | comparative={:.3} | words={} | analyzed={}",
            self.label,
            self.raw_score,
            self.normalized_score,
            self.comparative,
            self.token_count,
            self.analyzed_token_count
        )
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::zero()
    }
}

/// Which analyzer produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Local,
    Remote,
}

impl std::fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisSource::Local => write!(f, "local"),
            AnalysisSource::Remote => write!(f, "remote"),
        }
    }
}

/// A result plus where it came from and any non-fatal warning
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub source: AnalysisSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub result: AnalysisResult,
}

impl AnalysisOutcome {
    pub fn local(result: AnalysisResult) -> Self {
        Self {
            source: AnalysisSource::Local,
            warning: None,
            result,
        }
    }

    pub fn remote(result: AnalysisResult) -> Self {
        Self {
            source: AnalysisSource::Remote,
            warning: None,
            result,
        }
    }

    /// Local result produced because the remote analyzer failed
    pub fn fallback(result: AnalysisResult, warning: impl Into<String>) -> Self {
        Self {
            source: AnalysisSource::Local,
            warning: Some(warning.into()),
            result,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.warning.is_some()
    }
}
