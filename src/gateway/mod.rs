//! Completion gateway: the single boundary crossing to the hosted
//! completion service.
//!
//! The [`CompletionBackend`] trait decouples the capability layer from the
//! concrete HTTP client so tests can substitute a mock backend.

pub mod gemini;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use gemini::GeminiBackend;

/// Which service-side model a request runs on.
///
/// `Reasoning` is the higher-capability variant for calls requiring
/// multi-entity reasoning; `Fast` trades reasoning depth for latency and
/// cost on single-artifact generation. The split is part of each
/// capability's contract and must be preserved per capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelVariant {
    Reasoning,
    Fast,
}

/// One outbound completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub variant: ModelVariant,
    pub prompt: String,
    /// Optional system instruction, set only by the analysis call.
    pub system: Option<String>,
    /// Response schema constraint, present only for structured extraction.
    pub response_schema: Option<Value>,
    /// Allow the service to ground output in search results. Enabled only
    /// for the analysis call.
    pub grounded: bool,
}

/// Errors from the completion gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The access credential was absent at construction. Detected before
    /// any network request.
    #[error("no API credential configured: {0}")]
    MissingCredential(String),

    /// The service answered but the payload carried no text.
    #[error("completion service returned an empty response")]
    EmptyResponse,

    /// The underlying transport failed; the original fault is preserved.
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("completion service error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
}

/// A transport capable of resolving completion requests.
///
/// Implementations issue at most one outbound request per call and must
/// not retry internally; the caller reports failure immediately.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Resolve a completion request to raw response text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
