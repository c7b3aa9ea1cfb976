//! HTTP API for Sentiscore
//!
//! Endpoints:
//! - POST /analyze - Analyze text (local or remote with fallback)
//! - GET /lexicon - Lexicon table sizes
//! - GET /health - Health check

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::core::lexicon::{self, LexiconStats};
use crate::core::{LlmAnalyzer, SentimentAnalyzer};
use crate::error::ApiError;
use crate::types::{AnalysisOutcome, AnalysisResult, AnalysisSource};
use crate::MAX_TEXT_BYTES;

/// App state; immutable, shared across handlers
pub struct AppState {
    pub analyzer: SentimentAnalyzer,
    pub remote: Option<LlmAnalyzer>,
}

/// Which analyzer a request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzeMode {
    #[default]
    Local,
    Remote,
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub mode: AnalyzeMode,
}

/// Analyze response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub source: AnalysisSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub analyzed_at: DateTime<Utc>,
    pub result: AnalysisResult,
}

impl From<AnalysisOutcome> for AnalyzeResponse {
    fn from(outcome: AnalysisOutcome) -> Self {
        Self {
            source: outcome.source,
            warning: outcome.warning,
            analyzed_at: Utc::now(),
            result: outcome.result,
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub remote_enabled: bool,
}

/// Create the API router
pub fn create_router(remote: Option<LlmAnalyzer>) -> Router {
    let state = Arc::new(AppState {
        analyzer: SentimentAnalyzer::new(),
        remote,
    });

    Router::new()
        .route("/health", get(health))
        .route("/lexicon", get(lexicon_stats))
        .route("/analyze", post(analyze))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        remote_enabled: state.remote.is_some(),
    })
}

/// Lexicon table sizes
async fn lexicon_stats() -> Json<LexiconStats> {
    Json(lexicon::stats())
}

/// Analyze text
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if req.text.len() > MAX_TEXT_BYTES {
        return Err(ApiError::TextTooLarge {
            size: req.text.len(),
            max: MAX_TEXT_BYTES,
        });
    }

    let outcome = match (req.mode, &state.remote) {
        (AnalyzeMode::Local, _) => AnalysisOutcome::local(state.analyzer.analyze(&req.text)),
        (AnalyzeMode::Remote, Some(remote)) => remote.analyze_with_fallback(&req.text).await,
        (AnalyzeMode::Remote, None) => AnalysisOutcome::fallback(
            state.analyzer.analyze(&req.text),
            "remote analyzer not configured; used local analyzer",
        ),
    };

    Ok(Json(outcome.into()))
}

/// Run the API server
pub async fn run_server(addr: &str, remote: Option<LlmAnalyzer>) -> anyhow::Result<()> {
    let router = create_router(remote);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Sentiscore API running");
    info!("  POST /analyze  - Analyze text");
    info!("  GET  /lexicon  - Lexicon sizes");
    info!("  GET  /health   - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
