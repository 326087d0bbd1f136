//! The response schemas for the structured-extraction call.
//!
//! Composition order mirrors the nesting: audit score set, repository
//! record (embeds the score set), action item, portfolio summary, root.
//! Field names here must match the serde wire names of the model types in
//! [`crate::models`]; the decode tests keep the two in sync.

use std::sync::LazyLock;

use crate::models::{Effort, Priority, RepoStatus};

use super::{Schema, SchemaError};

static ANALYSIS_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| build_analysis_schema().expect("analysis schema invariants hold"));

/// The root schema attached to every portfolio analysis request.
pub fn analysis_schema() -> &'static Schema {
    &ANALYSIS_SCHEMA
}

fn score() -> Schema {
    Schema::number_range(0.0, 5.0)
}

pub(crate) fn audit_score_schema() -> Result<Schema, SchemaError> {
    Schema::object(
        [
            ("documentation", score()),
            ("devExperience", score()),
            ("testing", score()),
            ("cicd", score()),
            ("security", score()),
            ("observability", score()),
            ("maintainability", score()),
            ("productionReadiness", score()),
            (
                "rationale",
                Schema::string().describe("Short justification for the scores"),
            ),
            (
                "topFixes",
                Schema::array(Schema::string())
                    .describe("Highest-priority fixes, most important first"),
            ),
        ],
        &[
            "documentation",
            "devExperience",
            "testing",
            "cicd",
            "security",
            "observability",
            "maintainability",
            "productionReadiness",
            "rationale",
            "topFixes",
        ],
    )
}

pub(crate) fn repository_schema() -> Result<Schema, SchemaError> {
    Schema::object(
        [
            ("name", Schema::string()),
            ("url", Schema::string()),
            (
                "status",
                Schema::enumeration(RepoStatus::VALUES)
                    .describe("Use Unknown when the source could not be read"),
            ),
            ("primaryLanguage", Schema::string()),
            ("frameworks", Schema::array(Schema::string())),
            ("audit", audit_score_schema()?),
            ("description", Schema::string()),
        ],
        &[
            "name",
            "url",
            "status",
            "primaryLanguage",
            "frameworks",
            "audit",
            "description",
        ],
    )
}

pub(crate) fn action_item_schema() -> Result<Schema, SchemaError> {
    Schema::object(
        [
            ("title", Schema::string()),
            (
                "repo",
                Schema::string().describe("Name of the repository the action targets"),
            ),
            ("priority", Schema::enumeration(Priority::VALUES)),
            ("effort", Schema::enumeration(Effort::VALUES)),
            ("impact", Schema::string()),
            ("rationale", Schema::string()),
        ],
        &["title", "repo", "priority", "effort", "impact", "rationale"],
    )
}

pub(crate) fn portfolio_summary_schema() -> Result<Schema, SchemaError> {
    let stats = Schema::object(
        [
            ("totalRepos", Schema::number()),
            ("activeRepos", Schema::number()),
            ("archivedRepos", Schema::number()),
            (
                "languages",
                Schema::open_object().describe("Map from language name to repository count"),
            ),
        ],
        &["totalRepos", "activeRepos", "archivedRepos", "languages"],
    )?;

    let spotlight = Schema::object(
        [
            ("name", Schema::string()),
            ("description", Schema::string()),
            (
                "impressiveFactor",
                Schema::string().describe("What makes the project stand out"),
            ),
        ],
        &["name", "description", "impressiveFactor"],
    )?;

    Schema::object(
        [
            (
                "narrative",
                Schema::string().describe("Executive summary of the portfolio"),
            ),
            ("stats", stats),
            ("capabilities", Schema::array(Schema::string())),
            ("spotlights", Schema::array(spotlight)),
        ],
        &["narrative", "stats", "capabilities", "spotlights"],
    )
}

pub(crate) fn build_analysis_schema() -> Result<Schema, SchemaError> {
    Schema::object(
        [
            ("summary", portfolio_summary_schema()?),
            ("repos", Schema::array(repository_schema()?)),
            ("actions", Schema::array(action_item_schema()?)),
            (
                "claimsCheck",
                Schema::array(Schema::string()).describe(
                    "Claims made by the repositories that observation contradicts; \
                     empty when none were found",
                ),
            ),
        ],
        &["summary", "repos", "actions", "claimsCheck"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn every_registry_schema_constructs() {
        assert!(audit_score_schema().is_ok());
        assert!(repository_schema().is_ok());
        assert!(action_item_schema().is_ok());
        assert!(portfolio_summary_schema().is_ok());
        assert!(build_analysis_schema().is_ok());
    }

    #[test]
    fn root_schema_requires_all_top_level_fields() {
        let value = analysis_schema().to_value();
        assert_eq!(
            value["required"],
            json!(["summary", "repos", "actions", "claimsCheck"])
        );
    }

    #[test]
    fn repository_schema_matches_wire_field_names() {
        let value = repository_schema().unwrap().to_value();
        let props = value["properties"].as_object().unwrap();
        for field in [
            "name",
            "url",
            "status",
            "primaryLanguage",
            "frameworks",
            "audit",
            "description",
        ] {
            assert!(props.contains_key(field), "missing property {field}");
        }
    }

    #[test]
    fn status_enum_matches_model_values() {
        let value = repository_schema().unwrap().to_value();
        assert_eq!(
            value["properties"]["status"]["enum"],
            json!(["Active", "Dormant", "Archived", "Template", "Fork", "Unknown"])
        );
    }

    #[test]
    fn scores_are_range_bounded() {
        let value = audit_score_schema().unwrap().to_value();
        let doc = &value["properties"]["documentation"];
        assert_eq!(doc["type"], "NUMBER");
        assert_eq!(doc["minimum"], json!(0.0));
        assert_eq!(doc["maximum"], json!(5.0));
        // All eight dimensions plus rationale and topFixes are required
        assert_eq!(value["required"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn action_enums_match_model_values() {
        let value = action_item_schema().unwrap().to_value();
        assert_eq!(
            value["properties"]["priority"]["enum"],
            json!(["High", "Medium", "Low"])
        );
        assert_eq!(
            value["properties"]["effort"]["enum"],
            json!(["Small", "Medium", "Large"])
        );
    }

    #[test]
    fn schema_conformant_sample_decodes_into_models() {
        // The registry and the serde models describe the same wire shape.
        let sample = crate::models::portfolio::sample_analysis_json();
        let decoded: crate::models::AnalysisResult =
            serde_json::from_str(&sample).unwrap();
        assert!(!decoded.repos.is_empty());
    }

    #[test]
    fn static_schema_is_the_built_schema() {
        assert_eq!(*analysis_schema(), build_analysis_schema().unwrap());
    }
}
