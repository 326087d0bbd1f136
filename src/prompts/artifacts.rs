//! Per-artifact prompt templates.
//!
//! Each template interpolates fields from a repository record or the
//! portfolio summary into a fixed request describing the sections the
//! output must contain, and ends with the shared raw-output instruction.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{PortfolioSummary, RepositoryRecord};

use super::RAW_OUTPUT_INSTRUCTION;

/// Languages and front-end frameworks that take a commitlint config.
/// Substring match, case-insensitive, so "TypeScript (Node)" still counts.
static JS_ECOSYSTEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)javascript|typescript|node|react|vue|angular").unwrap()
});

/// Conventional-commit config filename for the repository's language.
pub fn commit_config_filename(primary_language: &str) -> &'static str {
    if JS_ECOSYSTEM_RE.is_match(primary_language) {
        "commitlint.config.js"
    } else {
        ".pre-commit-config.yaml"
    }
}

/// Shared header describing the repository being worked on.
fn repo_context(repo: &RepositoryRecord) -> String {
    let frameworks = if repo.frameworks.is_empty() {
        "none detected".to_string()
    } else {
        repo.frameworks.join(", ")
    };
    format!(
        "Repository: {name}\nURL: {url}\nPrimary language: {language}\n\
         Frameworks: {frameworks}\nDescription: {description}",
        name = repo.name,
        url = repo.url,
        language = repo.primary_language,
        description = repo.description,
    )
}

pub fn readme(repo: &RepositoryRecord) -> String {
    format!(
        "Write a complete README.md for this repository.\n\n{context}\n\n\
         Include, in order: a title with relevant status badges, a short \
         description, a feature list, installation instructions, usage \
         examples for the primary language, a Contribution Guidelines \
         section, and a license note.\n\n{raw}",
        context = repo_context(repo),
        raw = RAW_OUTPUT_INSTRUCTION,
    )
}

pub fn license(repo: &RepositoryRecord, year: i32) -> String {
    format!(
        "Write the full MIT license text for this repository.\n\n{context}\n\n\
         Use the copyright line \"Copyright (c) {year} The {name} \
         Contributors\" exactly. Do not alter the license wording \
         otherwise.\n\n{raw}",
        context = repo_context(repo),
        name = repo.name,
        raw = RAW_OUTPUT_INSTRUCTION,
    )
}

pub fn ci_workflow(repo: &RepositoryRecord) -> String {
    format!(
        "Write a GitHub Actions workflow (.github/workflows/ci.yml) for \
         this repository.\n\n{context}\n\n\
         The workflow must run on push and pull_request, declare \
         `permissions: contents: read` at the top level, and define exactly \
         four jobs named `lint`, `test`, `build`, and `commitlint`, using \
         the toolchain appropriate for the primary language. The \
         `commitlint` job validates commit messages against the \
         conventional-commit rules.\n\n{raw}",
        context = repo_context(repo),
        raw = RAW_OUTPUT_INSTRUCTION,
    )
}

pub fn commit_config(repo: &RepositoryRecord) -> String {
    let filename = commit_config_filename(&repo.primary_language);
    format!(
        "Write a {filename} for this repository enforcing \
         conventional-commit messages and pre-merge hygiene checks suited \
         to the primary language.\n\n{context}\n\n{raw}",
        context = repo_context(repo),
        raw = RAW_OUTPUT_INSTRUCTION,
    )
}

pub fn issue_templates(repo: &RepositoryRecord) -> String {
    format!(
        "Write GitHub issue templates for this repository: a bug report \
         template (steps to reproduce, expected and actual behaviour, \
         environment) and a feature request template (problem statement, \
         proposed solution, alternatives considered). Emit both files \
         separated by a line containing only `---`.\n\n{context}\n\n{raw}",
        context = repo_context(repo),
        raw = RAW_OUTPUT_INSTRUCTION,
    )
}

pub fn security_policy(repo: &RepositoryRecord) -> String {
    format!(
        "Write a SECURITY.md for this repository.\n\n{context}\n\n\
         Include: how to report a vulnerability privately, the expected \
         acknowledgement window (48 hours) and fix window (90 days), and a \
         supported-versions table.\n\n{raw}",
        context = repo_context(repo),
        raw = RAW_OUTPUT_INSTRUCTION,
    )
}

pub fn code_of_conduct(repo: &RepositoryRecord) -> String {
    format!(
        "Write a CODE_OF_CONDUCT.md for this repository based on the \
         Contributor Covenant, with enforcement contact left as a \
         placeholder for the maintainers to fill in.\n\n{context}\n\n{raw}",
        context = repo_context(repo),
        raw = RAW_OUTPUT_INSTRUCTION,
    )
}

pub fn directory_structure(repo: &RepositoryRecord) -> String {
    format!(
        "Propose an improved directory layout for this repository as an \
         annotated tree, following the conventions of the primary language \
         and frameworks. Note which directories are new and which existing \
         content moves where.\n\n{context}\n\n{raw}",
        context = repo_context(repo),
        raw = RAW_OUTPUT_INSTRUCTION,
    )
}

pub fn docs_strategy(summary: &PortfolioSummary) -> String {
    let capabilities = if summary.capabilities.is_empty() {
        "(none listed)".to_string()
    } else {
        summary.capabilities.join(", ")
    };
    let spotlights = if summary.spotlights.is_empty() {
        "(none)".to_string()
    } else {
        summary
            .spotlights
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "Write a documentation strategy for this portfolio of \
         repositories.\n\nPortfolio narrative:\n{narrative}\n\n\
         Capabilities: {capabilities}\nSpotlight projects: {spotlights}\n\n\
         Cover: which repositories need documentation first and why, a \
         common README structure, where cross-repository documentation \
         should live, and a maintenance cadence.\n\n{raw}",
        narrative = summary.narrative,
        raw = RAW_OUTPUT_INSTRUCTION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::tests::test_repo;

    #[test]
    fn commitlint_for_js_ecosystem_languages() {
        for language in ["TypeScript", "javascript", "Node.js", "React", "vue", "Angular"] {
            assert_eq!(
                commit_config_filename(language),
                "commitlint.config.js",
                "language {language}"
            );
        }
    }

    #[test]
    fn pre_commit_for_everything_else() {
        for language in ["Rust", "Python", "Go", "C++", ""] {
            assert_eq!(
                commit_config_filename(language),
                ".pre-commit-config.yaml",
                "language {language}"
            );
        }
    }

    #[test]
    fn commit_config_prompt_requests_the_branch_specific_file() {
        let ts = commit_config(&test_repo("web", "TypeScript"));
        assert!(ts.contains("commitlint.config.js"));
        assert!(!ts.contains(".pre-commit-config.yaml"));

        let rust = commit_config(&test_repo("svc", "Rust"));
        assert!(rust.contains(".pre-commit-config.yaml"));
        assert!(!rust.contains("commitlint.config.js"));
    }

    #[test]
    fn license_fixes_holder_and_year() {
        let prompt = license(&test_repo("demo", "Rust"), 2026);
        assert!(prompt.contains("Copyright (c) 2026 The demo Contributors"));
        assert!(prompt.contains("MIT"));
    }

    #[test]
    fn ci_workflow_fixes_job_names_and_permissions() {
        let prompt = ci_workflow(&test_repo("demo", "Rust"));
        for job in ["`lint`", "`test`", "`build`", "`commitlint`"] {
            assert!(prompt.contains(job), "missing job {job}");
        }
        assert!(prompt.contains("permissions: contents: read"));
    }

    #[test]
    fn readme_includes_contribution_guidelines_section() {
        let prompt = readme(&test_repo("demo", "Rust"));
        assert!(prompt.contains("Contribution Guidelines"));
    }

    #[test]
    fn repo_context_handles_missing_frameworks() {
        let context = repo_context(&test_repo("demo", "Rust"));
        assert!(context.contains("none detected"));
        assert!(context.contains("Primary language: Rust"));
    }
}
