//! Prioritized action items proposed by the analysis.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Priority of an action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Custom deserializer that accepts common LLM variations.
///
/// The schema pins "High"/"Medium"/"Low", but models occasionally emit
/// synonyms ("Critical", "Urgent", "Minor"). Normalize instead of failing
/// the whole response over a label.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "high" | "critical" | "urgent" | "blocker" => Ok(Priority::High),
            "low" | "minor" | "trivial" => Ok(Priority::Low),
            _ => Ok(Priority::Medium),
        }
    }
}

impl Priority {
    pub const VALUES: [&'static str; 3] = ["High", "Medium", "Low"];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// Estimated effort of an action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Effort {
    Small,
    Medium,
    Large,
}

impl<'de> Deserialize<'de> for Effort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "small" | "s" | "trivial" | "quick" => Ok(Effort::Small),
            "large" | "l" | "big" | "significant" => Ok(Effort::Large),
            _ => Ok(Effort::Medium),
        }
    }
}

impl Effort {
    pub const VALUES: [&'static str; 3] = ["Small", "Medium", "Large"];
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effort::Small => write!(f, "Small"),
            Effort::Medium => write!(f, "Medium"),
            Effort::Large => write!(f, "Large"),
        }
    }
}

/// A single recommended action across the portfolio.
///
/// `repo` is a free string naming the target repository. It is expected to
/// match a `RepositoryRecord.name` but the core does not enforce that
/// reference; a mismatch is tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub title: String,
    pub repo: String,
    pub priority: Priority,
    pub effort: Effort,
    /// What improves if the action is taken.
    pub impact: String,
    /// Why the action is worth taking.
    pub rationale: String,
}
