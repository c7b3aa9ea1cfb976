//! Error types for Sentiscore.
//!
//! The lexical scorer itself never fails; errors only come from the remote
//! analyzer and the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Remote LLM analyzer failures. Every variant triggers the local fallback.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("LLM API key not configured")]
    MissingApiKey,

    #[error("LLM request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM API error: HTTP {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Empty response from LLM")]
    EmptyContent,

    #[error("Malformed LLM payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl RemoteError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RemoteError::Http(e) if e.is_timeout())
    }
}

/// HTTP API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Text too large: {size} bytes (max {max})")]
    TextTooLarge { size: usize, max: usize },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// API error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::TextTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "TEXT_TOO_LARGE"),
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
        };

        let body = serde_json::json!({
            "error": ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_messages() {
        assert_eq!(RemoteError::MissingApiKey.to_string(), "LLM API key not configured");
        let err = RemoteError::Status {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "LLM API error: HTTP 429 - rate limited");
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_payload_error_from_serde() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: RemoteError = parse.unwrap_err().into();
        assert!(err.to_string().starts_with("Malformed LLM payload"));
    }

    #[test]
    fn test_api_error_status_codes() {
        let response = ApiError::TextTooLarge { size: 10, max: 5 }.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let response = ApiError::InvalidRequest("bad mode".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
