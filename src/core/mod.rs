//! Core modules for Sentiscore

pub mod analyzer;
pub mod api;
pub mod lexicon;
pub mod modifier;
pub mod phrase_matcher;
pub mod remote;
pub mod tokenizer;
pub mod word_scorer;

pub use analyzer::{analyze, SentimentAnalyzer};
pub use api::{create_router, run_server};
pub use remote::{parse_llm_content, LlmAnalyzer};
pub use tokenizer::tokenize;
