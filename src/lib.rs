//! Sentiscore: lexical sentiment scoring for interview feedback
//!
//! Pipeline: tokenizer → phrase matcher → word scorer → aggregator,
//! with an optional remote LLM analyzer that falls back to the local scorer.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod types;

pub use crate::core::analyze;

// =============================================================================
// MODIFIERS
// =============================================================================

/// Negation flips the sign and keeps 75% of the magnitude
pub const NEGATION_FACTOR: f64 = 0.75;

/// Extra multiplier when two intensifiers precede a term ("really very good")
pub const DOUBLE_INTENSIFIER_FACTOR: f64 = 1.25;

/// Largest absolute weight of any lexicon or phrase entry
pub const MAX_TERM_WEIGHT: i8 = 5;

// =============================================================================
// LABEL THRESHOLDS - applied to the normalized score (-100..100)
// =============================================================================

pub const LABEL_VERY_POSITIVE: f64 = 60.0;
pub const LABEL_POSITIVE: f64 = 25.0;
pub const LABEL_SLIGHTLY_POSITIVE: f64 = 5.0;
/// Lower bound of Neutral, inclusive: exactly -5 is Neutral
pub const LABEL_NEUTRAL_FLOOR: f64 = -5.0;
pub const LABEL_SLIGHTLY_NEGATIVE_FLOOR: f64 = -25.0;
pub const LABEL_NEGATIVE_FLOOR: f64 = -60.0;

/// Bound of the normalized score on either side
pub const NORMALIZED_BOUND: f64 = 100.0;

// =============================================================================
// API
// =============================================================================

/// Largest text body accepted by the HTTP API
pub const MAX_TEXT_BYTES: usize = 64 * 1024;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
