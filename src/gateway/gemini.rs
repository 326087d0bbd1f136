//! reqwest-backed implementation of the hosted completion REST API.
//!
//! One POST to `models/{model}:generateContent` per call. No retry, no
//! client-imposed deadline; failures are classified and logged by status
//! only, never with prompt content.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::GatewayConfig;
use crate::constants;

use super::{CompletionBackend, CompletionRequest, GatewayError, ModelVariant};

/// Production backend for the hosted completion service.
pub struct GeminiBackend {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    reasoning_model: String,
    fast_model: String,
}

impl GeminiBackend {
    /// Build a backend from configuration.
    ///
    /// The credential is validated here, once, so every later call can
    /// assume it is present; an absent credential never reaches the
    /// network.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            GatewayError::MissingCredential(format!(
                "set {} (or {})",
                constants::ENV_API_KEY,
                constants::ENV_API_KEY_FALLBACK
            ))
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            reasoning_model: config.reasoning_model.clone(),
            fast_model: config.fast_model.clone(),
        })
    }

    /// Resolve a variant to the configured model identifier.
    pub fn model_id(&self, variant: ModelVariant) -> &str {
        match variant {
            ModelVariant::Reasoning => &self.reasoning_model,
            ModelVariant::Fast => &self.fast_model,
        }
    }
}

/// Build the JSON request body for a completion request.
fn build_request_body(request: &CompletionRequest) -> Value {
    let mut body = json!({
        "contents": [{ "parts": [{ "text": request.prompt }] }]
    });

    if let Some(system) = &request.system {
        body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
    }

    if let Some(schema) = &request.response_schema {
        body["generationConfig"] = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        });
    }

    if request.grounded {
        body["tools"] = json!([{ "googleSearch": {} }]);
    }

    body
}

/// Successful response envelope.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Service error envelope.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ServiceError,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    code: Option<u16>,
    message: String,
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: &GenerateResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect::<String>()
        })
        .unwrap_or_default()
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let model = self.model_id(request.variant);
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        let body = build_request_body(request);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|error| tracing::warn!(%error, model, "completion request failed"))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), model, "completion service error");
            let (code, message) = match serde_json::from_str::<ErrorResponse>(&error_text) {
                Ok(parsed) => (
                    parsed.error.code.unwrap_or(status.as_u16()),
                    parsed.error.message,
                ),
                Err(_) => (status.as_u16(), error_text),
            };
            return Err(GatewayError::Api {
                status: code,
                message,
            });
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .inspect_err(|error| tracing::warn!(%error, model, "malformed response envelope"))?;

        let text = extract_text(&payload);
        if text.trim().is_empty() {
            tracing::warn!(model, "completion service returned an empty payload");
            return Err(GatewayError::EmptyResponse);
        }

        Ok(text)
    }
}
