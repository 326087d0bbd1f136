//! Response normalization.
//!
//! Two independent behaviours: stripping markdown fence wrappers from
//! free-text artifact responses, and decoding the structured analysis
//! payload. Artifact normalization never fails; a blank response degrades
//! to the capability's fallback string so the caller always has content
//! to show. Structured decoding fails with a decode error that is
//! distinct from transport errors, because a decode failure means the
//! service violated its schema contract.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::AnalysisResult;
use crate::prompts::ArtifactKind;

/// Maximum length of response text quoted in decode error messages.
const DECODE_PREVIEW_LEN: usize = 2000;

/// Matches a response that is entirely one fenced block, with an optional
/// language tag. Anchored on both ends so fences embedded inside the
/// content do not count; input is trimmed before matching.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```[A-Za-z0-9_+-]*[ \t]*\n(.*?)\n?```$").unwrap()
});

/// The analysis response failed to decode as the expected shape.
#[derive(Error, Debug)]
#[error("failed to decode analysis response: {source}. Response preview: {preview}")]
pub struct DecodeError {
    pub preview: String,
    #[source]
    pub source: serde_json::Error,
}

/// Remove a whole-response fence wrapper, if present, and trim.
///
/// Idempotent: stripping an already-stripped string returns it unchanged.
pub fn strip_fences(text: &str) -> String {
    let trimmed = text.trim();
    match FENCE_RE.captures(trimmed) {
        Some(caps) => caps
            .get(1)
            .map(|inner| inner.as_str().trim().to_string())
            .unwrap_or_default(),
        None => trimmed.to_string(),
    }
}

/// Normalize a free-text artifact response.
///
/// An empty or whitespace-only response becomes the kind's fallback
/// string; generation failures surface as low-confidence content, not as
/// errors.
pub fn artifact_text(kind: ArtifactKind, raw: &str) -> String {
    let text = strip_fences(raw);
    if text.is_empty() {
        kind.fallback().to_string()
    } else {
        text
    }
}

/// Decode the structured analysis response.
///
/// Fences are stripped defensively first; the schema constraint makes
/// them unlikely but some responses wrap JSON anyway.
pub fn decode_analysis(raw: &str) -> Result<AnalysisResult, DecodeError> {
    let text = strip_fences(raw);
    serde_json::from_str(&text).map_err(|source| DecodeError {
        preview: text.chars().take(DECODE_PREVIEW_LEN).collect(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_tagged_fence() {
        assert_eq!(strip_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn strips_untagged_fence() {
        assert_eq!(strip_fences("```\n# README\n\nBody.\n```"), "# README\n\nBody.");
    }

    #[test]
    fn stripping_is_idempotent() {
        let once = strip_fences("```json\n{\"a\":1}\n```");
        assert_eq!(strip_fences(&once), once);
        assert_eq!(strip_fences("plain text"), "plain text");
    }

    #[test]
    fn unfenced_input_is_only_trimmed() {
        assert_eq!(strip_fences("  content with ``` inside  \n"), "content with ``` inside");
    }

    #[test]
    fn embedded_fences_are_preserved() {
        let raw = "```markdown\n# Title\n\n```bash\ncargo test\n```\n```";
        assert_eq!(strip_fences(raw), "# Title\n\n```bash\ncargo test\n```");
    }

    #[test]
    fn partial_fence_is_not_stripped() {
        // Opening fence without a closing one is content, not a wrapper
        let raw = "```json\n{\"a\":1}";
        assert_eq!(strip_fences(raw), raw);
    }

    #[test]
    fn empty_artifact_response_yields_fallback() {
        assert_eq!(
            artifact_text(ArtifactKind::Readme, ""),
            "Failed to generate README."
        );
        assert_eq!(
            artifact_text(ArtifactKind::License, "   \n\n  "),
            "Failed to generate license text."
        );
    }

    #[test]
    fn fence_wrapped_emptiness_yields_fallback() {
        assert_eq!(
            artifact_text(ArtifactKind::SecurityPolicy, "```\n\n```"),
            "Failed to generate security policy."
        );
    }

    #[test]
    fn nonempty_artifact_response_is_returned_stripped() {
        assert_eq!(
            artifact_text(ArtifactKind::Readme, "```markdown\n# demo\n```"),
            "# demo"
        );
    }

    #[test]
    fn decodes_valid_analysis() {
        let sample = crate::models::portfolio::sample_analysis_json();
        let result = decode_analysis(&sample).unwrap();
        assert_eq!(result.repos.len(), 1);
    }

    #[test]
    fn decodes_fence_wrapped_analysis() {
        let sample = crate::models::portfolio::sample_analysis_json();
        let wrapped = format!("```json\n{sample}\n```");
        assert!(decode_analysis(&wrapped).is_ok());
    }

    #[test]
    fn truncated_json_is_a_decode_error_with_preview() {
        let err = decode_analysis("{\"summary\": {\"narrative\": \"cut of").unwrap_err();
        assert!(err.preview.starts_with("{\"summary\""));
        assert!(err.to_string().contains("failed to decode"));
    }

    #[test]
    fn preview_is_bounded() {
        let long = format!("{{\"junk\": \"{}\"", "x".repeat(5000));
        let err = decode_analysis(&long).unwrap_err();
        assert!(err.preview.chars().count() <= DECODE_PREVIEW_LEN);
    }
}
