//! Prompt construction.
//!
//! Pure text assembly from typed inputs. Nothing in this module performs
//! IO; ambient values a template needs (the calendar year for license
//! text) are passed in as data so the builders stay deterministic.
//!
//! All artifact generators share one template-driven entry point keyed by
//! [`ArtifactKind`]; the kind also carries the capability's display name,
//! its fallback string, the model variant it runs on, and the subject type
//! it consumes.

pub mod analysis;
pub mod artifacts;

use chrono::Datelike;
use strum::{Display, EnumIter};
use thiserror::Error;

use crate::gateway::ModelVariant;
use crate::models::{PortfolioSummary, RepositoryRecord};

pub use analysis::{ANALYSIS_SYSTEM_INSTRUCTION, analysis_prompt};

/// Closing instruction appended to every artifact template.
///
/// A prompt-level hint, not a guarantee; the response normalizer still
/// strips fences defensively.
pub const RAW_OUTPUT_INSTRUCTION: &str =
    "Output only the raw file content as plain text. Do not wrap it in markdown code fences.";

/// Errors from prompt construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("{kind} generation takes a {expected} as input")]
    SubjectMismatch {
        kind: ArtifactKind,
        expected: SubjectKind,
    },
}

/// What an artifact template interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SubjectKind {
    #[strum(serialize = "repository record")]
    Repository,
    #[strum(serialize = "portfolio summary")]
    Portfolio,
}

/// The input handed to an artifact template.
#[derive(Debug, Clone, Copy)]
pub enum ArtifactSubject<'a> {
    Repository(&'a RepositoryRecord),
    Portfolio(&'a PortfolioSummary),
}

impl ArtifactSubject<'_> {
    pub fn kind(&self) -> SubjectKind {
        match self {
            ArtifactSubject::Repository(_) => SubjectKind::Repository,
            ArtifactSubject::Portfolio(_) => SubjectKind::Portfolio,
        }
    }
}

/// Identifier for every single-shot artifact generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ArtifactKind {
    #[strum(serialize = "README")]
    Readme,
    #[strum(serialize = "license")]
    License,
    #[strum(serialize = "CI workflow")]
    CiWorkflow,
    #[strum(serialize = "commit configuration")]
    CommitConfig,
    #[strum(serialize = "issue templates")]
    IssueTemplates,
    #[strum(serialize = "security policy")]
    SecurityPolicy,
    #[strum(serialize = "code of conduct")]
    CodeOfConduct,
    #[strum(serialize = "directory structure")]
    DirectoryStructure,
    #[strum(serialize = "documentation strategy")]
    DocsStrategy,
}

impl ArtifactKind {
    /// Returned in place of an empty or whitespace-only response.
    pub fn fallback(&self) -> &'static str {
        match self {
            ArtifactKind::Readme => "Failed to generate README.",
            ArtifactKind::License => "Failed to generate license text.",
            ArtifactKind::CiWorkflow => "Failed to generate CI workflow.",
            ArtifactKind::CommitConfig => "Failed to generate commit configuration.",
            ArtifactKind::IssueTemplates => "Failed to generate issue templates.",
            ArtifactKind::SecurityPolicy => "Failed to generate security policy.",
            ArtifactKind::CodeOfConduct => "Failed to generate code of conduct.",
            ArtifactKind::DirectoryStructure => "Failed to generate directory structure.",
            ArtifactKind::DocsStrategy => "Failed to generate documentation strategy.",
        }
    }

    /// Model variant the artifact runs on. CI workflows and the
    /// documentation strategy need multi-entity reasoning; everything else
    /// is single-artifact work on the lighter variant.
    pub fn variant(&self) -> ModelVariant {
        match self {
            ArtifactKind::CiWorkflow | ArtifactKind::DocsStrategy => ModelVariant::Reasoning,
            _ => ModelVariant::Fast,
        }
    }

    /// The subject type the template interpolates.
    pub fn subject_kind(&self) -> SubjectKind {
        match self {
            ArtifactKind::DocsStrategy => SubjectKind::Portfolio,
            _ => SubjectKind::Repository,
        }
    }
}

/// Ambient values templates interpolate as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptContext {
    /// Calendar year used by the license template.
    pub year: i32,
}

impl PromptContext {
    /// Context for the current wall-clock date.
    pub fn current() -> Self {
        Self {
            year: chrono::Utc::now().year(),
        }
    }
}

/// Build the prompt for an artifact generation call.
///
/// Total over its inputs: a subject of the wrong type yields a
/// [`PromptError`], never a panic.
pub fn artifact_prompt(
    kind: ArtifactKind,
    subject: ArtifactSubject<'_>,
    ctx: &PromptContext,
) -> Result<String, PromptError> {
    match (kind, subject) {
        (ArtifactKind::Readme, ArtifactSubject::Repository(repo)) => Ok(artifacts::readme(repo)),
        (ArtifactKind::License, ArtifactSubject::Repository(repo)) => {
            Ok(artifacts::license(repo, ctx.year))
        }
        (ArtifactKind::CiWorkflow, ArtifactSubject::Repository(repo)) => {
            Ok(artifacts::ci_workflow(repo))
        }
        (ArtifactKind::CommitConfig, ArtifactSubject::Repository(repo)) => {
            Ok(artifacts::commit_config(repo))
        }
        (ArtifactKind::IssueTemplates, ArtifactSubject::Repository(repo)) => {
            Ok(artifacts::issue_templates(repo))
        }
        (ArtifactKind::SecurityPolicy, ArtifactSubject::Repository(repo)) => {
            Ok(artifacts::security_policy(repo))
        }
        (ArtifactKind::CodeOfConduct, ArtifactSubject::Repository(repo)) => {
            Ok(artifacts::code_of_conduct(repo))
        }
        (ArtifactKind::DirectoryStructure, ArtifactSubject::Repository(repo)) => {
            Ok(artifacts::directory_structure(repo))
        }
        (ArtifactKind::DocsStrategy, ArtifactSubject::Portfolio(summary)) => {
            Ok(artifacts::docs_strategy(summary))
        }
        (kind, _) => Err(PromptError::SubjectMismatch {
            kind,
            expected: kind.subject_kind(),
        }),
    }
}
