//! App-wide constants.
//!
//! Centralises the tool name, environment variable names, service endpoint,
//! and model identifiers so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "stocktake";

/// Base URL of the hosted completion service.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for calls that need multi-entity reasoning
/// (portfolio analysis, CI workflow, documentation strategy).
pub const DEFAULT_REASONING_MODEL: &str = "gemini-2.5-flash";

/// Model used for single-artifact generation (README, license, commit
/// config, issue templates, security policy, code of conduct, layout).
pub const DEFAULT_FAST_MODEL: &str = "gemini-2.5-flash-lite";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_API_KEY: &str = "STOCKTAKE_API_KEY";
/// Provider-native fallback, honoured when the tool-specific key is unset.
pub const ENV_API_KEY_FALLBACK: &str = "GEMINI_API_KEY";
pub const ENV_BASE_URL: &str = "STOCKTAKE_BASE_URL";
pub const ENV_REASONING_MODEL: &str = "STOCKTAKE_REASONING_MODEL";
pub const ENV_FAST_MODEL: &str = "STOCKTAKE_FAST_MODEL";
