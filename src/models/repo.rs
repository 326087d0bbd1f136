//! Repository record types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::audit::AuditScoreSet;

/// Lifecycle status of an audited repository.
///
/// Deliberately strict: the response schema pins the allowed values, so an
/// unknown status means the service violated its contract and the whole
/// response is rejected as a decode failure. `Unknown` is itself a valid
/// member, used when the service could not read the source and degraded
/// to an inferred analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepoStatus {
    Active,
    Dormant,
    Archived,
    Template,
    Fork,
    Unknown,
}

impl RepoStatus {
    /// Wire values, in the order the response schema declares them.
    pub const VALUES: [&'static str; 6] =
        ["Active", "Dormant", "Archived", "Template", "Fork", "Unknown"];
}

impl fmt::Display for RepoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoStatus::Active => write!(f, "Active"),
            RepoStatus::Dormant => write!(f, "Dormant"),
            RepoStatus::Archived => write!(f, "Archived"),
            RepoStatus::Template => write!(f, "Template"),
            RepoStatus::Fork => write!(f, "Fork"),
            RepoStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One audited repository as described by the analysis response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    pub name: String,
    pub url: String,
    pub status: RepoStatus,
    pub primary_language: String,
    /// Detected frameworks; ordered as emitted, may be empty.
    #[serde(default)]
    pub frameworks: Vec<String>,
    pub audit: AuditScoreSet,
    pub description: String,
}

/// Schema-conformant repository JSON shared by tests across modules.
#[cfg(test)]
pub(crate) fn sample_repo_json() -> &'static str {
    r#"{
        "name": "demo",
        "url": "https://github.com/example/demo",
        "status": "Active",
        "primaryLanguage": "Rust",
        "frameworks": ["tokio", "axum"],
        "audit": {
            "documentation": 3, "devExperience": 4, "testing": 2,
            "cicd": 1, "security": 3, "observability": 2,
            "maintainability": 4, "productionReadiness": 2,
            "rationale": "Well structured, no CI.",
            "topFixes": ["Add a CI workflow"]
        },
        "description": "A demo service."
    }"#
}
