//! System instruction and task prompt for the portfolio analysis call.

/// Fixed system instruction for the structured-extraction call.
///
/// The five hard rules are the contract the scoring depends on; the
/// heuristics the task prompt states are what rule 5 refers to.
pub const ANALYSIS_SYSTEM_INSTRUCTION: &str = "\
You are a rigorous engineering auditor assessing a portfolio of source-code \
repositories. Hard rules:
1. Never fabricate popularity metrics. Do not invent stars, forks, download \
counts, or user numbers.
2. Prefer conservative, hedged language. When evidence is thin, say so \
rather than overstating.
3. Emit only output that conforms to the provided response schema. No \
commentary outside it.
4. If a repository cannot be read, do not fail the analysis. Infer what you \
can from its name, URL, and the owner's context, and mark its status \
Unknown.
5. Score every dimension against the stated best-practice heuristics, not \
against the other repositories in the portfolio.";

/// Build the analysis task prompt.
///
/// The URL list and owner context are interpolated verbatim; validation
/// that the URL list is non-empty happens in the capability layer before
/// this function is called.
pub fn analysis_prompt(urls: &str, context: &str) -> String {
    format!(
        "Audit the following repositories as one portfolio.\n\n\
         Repositories:\n{urls}\n\n\
         Context from the owner:\n{context}\n\n\
         Score each repository from 0 to 5 on documentation, developer \
         experience, testing, CI/CD, security, observability, \
         maintainability, and production readiness, using these heuristics: \
         a complete README with install and usage instructions; reproducible \
         build and dev setup; automated tests that run in CI; a CI workflow \
         on every push; dependency hygiene and a security policy; logging or \
         metrics hooks; coherent module structure; and deployment readiness \
         (versioning, configuration, error reporting).\n\n\
         For each repository also provide its lifecycle status, primary \
         language, detected frameworks, a one-paragraph description, a short \
         scoring rationale, and the top fixes in priority order.\n\n\
         Then summarise the portfolio as a whole: an executive narrative, \
         aggregate statistics, capability tags, and the projects most worth \
         spotlighting.\n\n\
         Propose prioritized action items across the portfolio, each naming \
         its target repository, priority, effort, impact, and rationale.\n\n\
         Finally, list any claims the repositories make about themselves \
         that your observations contradict; return an empty list if you \
         found none."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_states_five_rules() {
        for rule in ["1.", "2.", "3.", "4.", "5."] {
            assert!(ANALYSIS_SYSTEM_INSTRUCTION.contains(rule));
        }
        assert!(ANALYSIS_SYSTEM_INSTRUCTION.contains("Never fabricate popularity metrics"));
        assert!(ANALYSIS_SYSTEM_INSTRUCTION.contains("conservative, hedged"));
        assert!(ANALYSIS_SYSTEM_INSTRUCTION.contains("response schema"));
        assert!(ANALYSIS_SYSTEM_INSTRUCTION.contains("Unknown"));
        assert!(ANALYSIS_SYSTEM_INSTRUCTION.contains("best-practice heuristics"));
    }

    #[test]
    fn prompt_interpolates_inputs_verbatim() {
        let urls = "https://github.com/a/one\nhttps://github.com/a/two";
        let context = "Focus on the async services; ignore the dotfiles repo.";
        let prompt = analysis_prompt(urls, context);
        assert!(prompt.contains(urls));
        assert!(prompt.contains(context));
    }

    #[test]
    fn prompt_mentions_every_scored_dimension() {
        let prompt = analysis_prompt("https://github.com/a/one", "");
        for dimension in [
            "documentation",
            "developer experience",
            "testing",
            "CI/CD",
            "security",
            "observability",
            "maintainability",
            "production readiness",
        ] {
            assert!(prompt.contains(dimension), "missing dimension {dimension}");
        }
    }

    #[test]
    fn prompt_requests_claims_check_with_empty_list_semantics() {
        let prompt = analysis_prompt("https://github.com/a/one", "");
        assert!(prompt.contains("empty list"));
    }
}
