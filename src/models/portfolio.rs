//! Portfolio-level summary and the root analysis result.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::action::ActionItem;
use crate::models::repo::RepositoryRecord;

/// Aggregate portfolio statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub total_repos: u32,
    pub active_repos: u32,
    pub archived_repos: u32,
    /// Language name to occurrence count. Keys are unique; the service's
    /// emission order is preserved for display.
    #[serde(default)]
    pub languages: IndexMap<String, u32>,
}

/// A project the service chose to highlight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightProject {
    pub name: String,
    pub description: String,
    /// What makes the project stand out.
    pub impressive_factor: String,
}

/// Executive summary of the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub narrative: String,
    pub stats: PortfolioStats,
    /// Capability tags, free strings.
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub spotlights: Vec<SpotlightProject>,
}

/// Root aggregate decoded from one structured-extraction response.
///
/// An empty `claims_check` means "no contradictions found"; it is a
/// meaningful value, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: PortfolioSummary,
    pub repos: Vec<RepositoryRecord>,
    pub actions: Vec<ActionItem>,
    #[serde(default)]
    pub claims_check: Vec<String>,
}

/// A schema-conformant analysis document shared by tests across modules.
#[cfg(test)]
pub(crate) fn sample_analysis_json() -> String {
    format!(
        r#"{{
            "summary": {{
                "narrative": "A small but healthy portfolio.",
                "stats": {{
                    "totalRepos": 2,
                    "activeRepos": 1,
                    "archivedRepos": 1,
                    "languages": {{"Rust": 1, "Python": 1}}
                }},
                "capabilities": ["systems programming", "automation"],
                "spotlights": [{{
                    "name": "demo",
                    "description": "A demo service.",
                    "impressiveFactor": "Clean async architecture."
                }}]
            }},
            "repos": [{repo}],
            "actions": [{{
                "title": "Add a CI workflow",
                "repo": "demo",
                "priority": "High",
                "effort": "Small",
                "impact": "Every push gets validated.",
                "rationale": "No automated checks run today."
            }}],
            "claimsCheck": ["README claims 99% coverage; no test suite found"]
        }}"#,
        repo = crate::models::repo::sample_repo_json()
    )
}
