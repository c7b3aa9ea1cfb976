//! Core types for Sentiscore

mod contribution;
mod label;
mod result;

pub use contribution::{Contribution, Token};
pub use label::SentimentLabel;
pub use result::{AnalysisOutcome, AnalysisResult, AnalysisSource, PhraseHit, WordScore};
