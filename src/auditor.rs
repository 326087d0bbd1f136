//! Capability functions: one entry point per user-triggered action.
//!
//! Each capability is a total function from typed input to a success
//! value or a classified [`AuditError`]. Capabilities are independent and
//! reentrant: the auditor holds no mutable state, so the presentation
//! layer may run any number of them concurrently. Every invocation
//! issues at most one request to the completion service and reports
//! failure immediately; there is no retry loop and no background work.

use std::sync::Arc;

use thiserror::Error;

use crate::config::GatewayConfig;
use crate::gateway::{
    CompletionBackend, CompletionRequest, GatewayError, GeminiBackend, ModelVariant,
};
use crate::models::{AnalysisResult, PortfolioSummary, RepositoryRecord};
use crate::normalize::{self, DecodeError};
use crate::prompts::{self, ArtifactKind, ArtifactSubject, PromptContext, PromptError};
use crate::schema::registry;

/// Classification of a capability failure, for the presentation layer's
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditErrorKind {
    /// Credential missing; detected before any request.
    Configuration,
    /// Required user input missing or empty.
    Input,
    /// Network failure, service error, or empty upstream payload.
    Gateway,
    /// Structured response violated the schema contract.
    Decode,
}

/// The single classified error type every capability returns.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("input error: {0}")]
    Input(String),

    #[error(transparent)]
    Gateway(GatewayError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<GatewayError> for AuditError {
    fn from(err: GatewayError) -> Self {
        match err {
            // A missing credential is a configuration problem, surfaced
            // identically regardless of which capability tripped it.
            GatewayError::MissingCredential(msg) => AuditError::Configuration(msg),
            other => AuditError::Gateway(other),
        }
    }
}

impl From<PromptError> for AuditError {
    fn from(err: PromptError) -> Self {
        AuditError::Input(err.to_string())
    }
}

impl AuditError {
    pub fn kind(&self) -> AuditErrorKind {
        match self {
            AuditError::Configuration(_) => AuditErrorKind::Configuration,
            AuditError::Input(_) => AuditErrorKind::Input,
            AuditError::Gateway(_) => AuditErrorKind::Gateway,
            AuditError::Decode(_) => AuditErrorKind::Decode,
        }
    }
}

/// The portfolio auditor.
///
/// Cheap to clone; clones share the underlying backend.
#[derive(Clone)]
pub struct Auditor {
    backend: Arc<dyn CompletionBackend>,
}

impl std::fmt::Debug for Auditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auditor").finish_non_exhaustive()
    }
}

impl Auditor {
    /// Build an auditor over the production backend.
    ///
    /// Fails with a configuration error when the credential is absent;
    /// the check happens here, at construction, so no capability ever
    /// reaches the network without one.
    pub fn new(config: &GatewayConfig) -> Result<Self, AuditError> {
        let backend = GeminiBackend::new(config)?;
        Ok(Self::with_backend(Arc::new(backend)))
    }

    /// Build an auditor over an arbitrary backend.
    pub fn with_backend(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Analyze a portfolio of repositories.
    ///
    /// `urls` is the raw user-entered repository list; `context` is
    /// free-text owner context, interpolated verbatim. The structured
    /// response is decoded into an [`AnalysisResult`]; a response that
    /// violates the schema contract yields a decode error, distinct from
    /// transport failures.
    pub async fn analyze_portfolio(
        &self,
        urls: &str,
        context: &str,
    ) -> Result<AnalysisResult, AuditError> {
        if urls.trim().is_empty() {
            return Err(AuditError::Input(
                "at least one repository URL is required".to_string(),
            ));
        }

        tracing::debug!("requesting portfolio analysis");
        let request = CompletionRequest {
            variant: ModelVariant::Reasoning,
            prompt: prompts::analysis_prompt(urls, context),
            system: Some(prompts::ANALYSIS_SYSTEM_INSTRUCTION.to_string()),
            response_schema: Some(registry::analysis_schema().to_value()),
            grounded: true,
        };
        let raw = self.backend.complete(&request).await?;
        Ok(normalize::decode_analysis(&raw)?)
    }

    pub async fn generate_readme(&self, repo: &RepositoryRecord) -> Result<String, AuditError> {
        self.generate_artifact(ArtifactKind::Readme, ArtifactSubject::Repository(repo))
            .await
    }

    pub async fn generate_license(&self, repo: &RepositoryRecord) -> Result<String, AuditError> {
        self.generate_artifact(ArtifactKind::License, ArtifactSubject::Repository(repo))
            .await
    }

    pub async fn generate_ci_workflow(
        &self,
        repo: &RepositoryRecord,
    ) -> Result<String, AuditError> {
        self.generate_artifact(ArtifactKind::CiWorkflow, ArtifactSubject::Repository(repo))
            .await
    }

    pub async fn generate_commit_config(
        &self,
        repo: &RepositoryRecord,
    ) -> Result<String, AuditError> {
        self.generate_artifact(ArtifactKind::CommitConfig, ArtifactSubject::Repository(repo))
            .await
    }

    pub async fn generate_issue_templates(
        &self,
        repo: &RepositoryRecord,
    ) -> Result<String, AuditError> {
        self.generate_artifact(
            ArtifactKind::IssueTemplates,
            ArtifactSubject::Repository(repo),
        )
        .await
    }

    pub async fn generate_security_policy(
        &self,
        repo: &RepositoryRecord,
    ) -> Result<String, AuditError> {
        self.generate_artifact(
            ArtifactKind::SecurityPolicy,
            ArtifactSubject::Repository(repo),
        )
        .await
    }

    pub async fn generate_code_of_conduct(
        &self,
        repo: &RepositoryRecord,
    ) -> Result<String, AuditError> {
        self.generate_artifact(
            ArtifactKind::CodeOfConduct,
            ArtifactSubject::Repository(repo),
        )
        .await
    }

    pub async fn generate_directory_structure(
        &self,
        repo: &RepositoryRecord,
    ) -> Result<String, AuditError> {
        self.generate_artifact(
            ArtifactKind::DirectoryStructure,
            ArtifactSubject::Repository(repo),
        )
        .await
    }

    pub async fn generate_docs_strategy(
        &self,
        summary: &PortfolioSummary,
    ) -> Result<String, AuditError> {
        self.generate_artifact(
            ArtifactKind::DocsStrategy,
            ArtifactSubject::Portfolio(summary),
        )
        .await
    }

    /// Shared plumbing for every artifact generator: template, one
    /// gateway call, normalize. Artifact generation never yields a decode
    /// error; a blank response degrades to the kind's fallback string.
    async fn generate_artifact(
        &self,
        kind: ArtifactKind,
        subject: ArtifactSubject<'_>,
    ) -> Result<String, AuditError> {
        let prompt = prompts::artifact_prompt(kind, subject, &PromptContext::current())?;

        tracing::debug!(%kind, "requesting artifact generation");
        let request = CompletionRequest {
            variant: kind.variant(),
            prompt,
            system: None,
            response_schema: None,
            grounded: false,
        };
        let raw = self.backend.complete(&request).await?;
        Ok(normalize::artifact_text(kind, &raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_credential_maps_to_configuration() {
        let err: AuditError =
            GatewayError::MissingCredential("set STOCKTAKE_API_KEY".to_string()).into();
        assert_eq!(err.kind(), AuditErrorKind::Configuration);
    }

    #[test]
    fn other_gateway_failures_map_to_gateway() {
        let err: AuditError = GatewayError::EmptyResponse.into();
        assert_eq!(err.kind(), AuditErrorKind::Gateway);
    }

    #[test]
    fn decode_failures_are_their_own_kind() {
        let decode_err = normalize::decode_analysis("not json").unwrap_err();
        let err: AuditError = decode_err.into();
        assert_eq!(err.kind(), AuditErrorKind::Decode);
    }

    #[test]
    fn auditor_new_without_credential_is_a_configuration_error() {
        let err = Auditor::new(&GatewayConfig::default()).unwrap_err();
        assert_eq!(err.kind(), AuditErrorKind::Configuration);
    }

    #[test]
    fn errors_carry_their_source_for_diagnostics() {
        use std::error::Error;
        let decode_err = normalize::decode_analysis("{").unwrap_err();
        let err: AuditError = decode_err.into();
        assert!(err.source().is_some());
    }
}
