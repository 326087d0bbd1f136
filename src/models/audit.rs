//! Audit score types representing per-repository assessment results.

use serde::{Deserialize, Serialize};

/// Number of scored dimensions in an audit.
pub const DIMENSION_COUNT: usize = 8;

/// The eight-dimension score card the service emits for each repository.
///
/// Every dimension is constrained to the closed range [0, 5] by the
/// response schema; the client trusts the schema and performs no range
/// check of its own. The average is derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditScoreSet {
    pub documentation: f64,
    pub dev_experience: f64,
    pub testing: f64,
    pub cicd: f64,
    pub security: f64,
    pub observability: f64,
    pub maintainability: f64,
    pub production_readiness: f64,
    /// Free-text justification for the scores.
    pub rationale: String,
    /// Highest-priority fixes, in the order the service ranked them.
    pub top_fixes: Vec<String>,
}

impl AuditScoreSet {
    /// Mean of the eight dimensions.
    pub fn average(&self) -> f64 {
        let sum: f64 = self.dimensions().iter().map(|(_, value)| value).sum();
        sum / DIMENSION_COUNT as f64
    }

    /// Labelled dimension values, in display order.
    pub fn dimensions(&self) -> [(&'static str, f64); DIMENSION_COUNT] {
        [
            ("Documentation", self.documentation),
            ("Dev Experience", self.dev_experience),
            ("Testing", self.testing),
            ("CI/CD", self.cicd),
            ("Security", self.security),
            ("Observability", self.observability),
            ("Maintainability", self.maintainability),
            ("Production Readiness", self.production_readiness),
        ]
    }
}
