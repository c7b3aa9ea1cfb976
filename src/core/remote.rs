//! Remote LLM analyzer with local fallback
//!
//! Sends the text to an OpenAI-compatible chat completions endpoint and expects
//! a JSON object in the same shape as [`AnalysisResult`]. Any failure falls
//! back to the local lexical scorer.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::RemoteConfig;
use crate::core::analyzer::SentimentAnalyzer;
use crate::error::RemoteError;
use crate::types::{AnalysisOutcome, AnalysisResult};

const SYSTEM_PROMPT: &str = r#"You are a sentiment analysis expert specializing in interview and recruitment feedback.

Analyze the provided feedback text and return a JSON object with EXACTLY these fields:

{
  "label": "<one of: Very Positive | Positive | Slightly Positive | Neutral | Slightly Negative | Negative | Very Negative>",
  "normalizedScore": <integer -100 to 100>,
  "score": <float, raw sentiment score>,
  "comparative": <float, score per word, 3 decimal places>,
  "positiveScore": <float, sum of positive contribution scores>,
  "negativeScore": <float, sum of absolute negative contribution scores>,
  "wordCount": <integer, total words in text>,
  "analyzedWords": <integer, number of sentiment-bearing terms detected>,
  "positiveWords": [{ "word": "<term>", "score": <positive number> }, ...],
  "negativeWords": [{ "word": "<term>", "score": <negative number> }, ...],
  "phraseHits": [{ "phrase": "<multi-word phrase>", "score": <number> }, ...]
}

Scoring rules:
- Focus on the OVERALL tone, not just individual words
- Negations like "lacked confidence", "not fluent", "seemed like reading" are strongly negative (-3 or worse)
- Reading from notes/script during an interview is a red flag (-2 to -3)
- Network/technical issues that impacted the session are mildly negative (-1 to -2)
- Even if individual answers were "clear", if the candidate lacked confidence or fluency the overall sentiment should be negative
- positiveWords and negativeWords: list the top 5-8 individual terms driving the score
- phraseHits: list the key multi-word phrases that influenced the score
- Return ONLY valid JSON. No explanation, no markdown."#;

/// Chat completions request body
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

/// The subset of the chat completions response we read
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

/// Sentiment analyzer backed by a remote LLM
#[derive(Debug, Clone)]
pub struct LlmAnalyzer {
    config: RemoteConfig,
    client: reqwest::Client,
    local: SentimentAnalyzer,
}

impl LlmAnalyzer {
    /// Create a new analyzer; the client timeout bounds every request
    pub fn new(config: RemoteConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            config,
            client,
            local: SentimentAnalyzer::new(),
        }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Analyze via the remote endpoint only
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, RemoteError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(RemoteError::MissingApiKey)?;

        let request = self.build_request(text);
        debug!(endpoint = %self.config.endpoint, model = %self.config.model, "Sending LLM request");

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status { status, body });
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(RemoteError::EmptyContent)?;

        let result = parse_llm_content(&content)?;
        info!(label = %result.label, normalized = result.normalized_score, "LLM analysis complete");
        Ok(result)
    }

    /// Analyze remotely, falling back to the local scorer on any failure.
    ///
    /// Never fails; a fallback carries the failure as a warning.
    pub async fn analyze_with_fallback(&self, text: &str) -> AnalysisOutcome {
        match self.analyze(text).await {
            Ok(result) => AnalysisOutcome::remote(result),
            Err(e) => {
                warn!(error = %e, timeout = e.is_timeout(), "LLM analysis failed, falling back to local analyzer");
                AnalysisOutcome::fallback(
                    self.local.analyze(text),
                    format!("{}; used local analyzer", e),
                )
            }
        }
    }

    fn build_request(&self, text: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("Analyze this interview feedback:\n\n{}", text),
                },
            ],
            temperature: self.config.temperature,
            response_format: ResponseFormat {
                kind: "json_object".to_string(),
            },
        }
    }
}

/// Parse the model's message content into a result.
///
/// Tolerates a surrounding markdown code fence; missing lists become empty.
pub fn parse_llm_content(content: &str) -> Result<AnalysisResult, RemoteError> {
    let body = strip_code_fence(content.trim());
    let result: AnalysisResult = serde_json::from_str(body)?;
    Ok(result.sanitized())
}

fn strip_code_fence(content: &str) -> &str {
    let Some(inner) = content.strip_prefix("```") else {
        return content;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
