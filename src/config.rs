//! Gateway configuration.
//!
//! The API credential is resolved from the environment exactly once, when
//! the configuration is built, and threaded into the gateway constructor.
//! Nothing in the crate reads ambient process state after that point.

use crate::constants;
use crate::env::Env;

/// Configuration for the completion gateway.
///
/// `api_key` is `None` when no credential could be resolved; the gateway
/// constructor turns that into a configuration error before any request
/// is issued.
#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub reasoning_model: String,
    pub fast_model: String,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("reasoning_model", &self.reasoning_model)
            .field("fast_model", &self.fast_model)
            .finish()
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            reasoning_model: constants::DEFAULT_REASONING_MODEL.to_string(),
            fast_model: constants::DEFAULT_FAST_MODEL.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Resolve configuration from environment variables.
    ///
    /// The credential is looked up under the tool-specific name first and
    /// falls back to the provider-native variable. Blank values count as
    /// absent.
    pub fn from_env(env: &Env) -> Self {
        let api_key = env
            .var_non_empty(constants::ENV_API_KEY)
            .or_else(|| env.var_non_empty(constants::ENV_API_KEY_FALLBACK));

        let defaults = Self::default();
        Self {
            api_key,
            base_url: env
                .var_non_empty(constants::ENV_BASE_URL)
                .unwrap_or(defaults.base_url),
            reasoning_model: env
                .var_non_empty(constants::ENV_REASONING_MODEL)
                .unwrap_or(defaults.reasoning_model),
            fast_model: env
                .var_non_empty(constants::ENV_FAST_MODEL)
                .unwrap_or(defaults.fast_model),
        }
    }

    /// Convenience constructor for callers that already hold a credential.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_env_prefers_tool_specific_key() {
        let env = Env::mock([
            (constants::ENV_API_KEY, "tool-key"),
            (constants::ENV_API_KEY_FALLBACK, "provider-key"),
        ]);
        let config = GatewayConfig::from_env(&env);
        assert_eq!(config.api_key.as_deref(), Some("tool-key"));
    }

    #[test]
    fn from_env_falls_back_to_provider_key() {
        let env = Env::mock([(constants::ENV_API_KEY_FALLBACK, "provider-key")]);
        let config = GatewayConfig::from_env(&env);
        assert_eq!(config.api_key.as_deref(), Some("provider-key"));
    }

    #[test]
    fn from_env_treats_blank_key_as_absent() {
        let env = Env::mock([(constants::ENV_API_KEY, "  ")]);
        let config = GatewayConfig::from_env(&env);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn from_env_applies_model_overrides() {
        let env = Env::mock([
            (constants::ENV_REASONING_MODEL, "gemini-2.5-pro"),
            (constants::ENV_FAST_MODEL, "gemini-2.0-flash"),
            (constants::ENV_BASE_URL, "https://proxy.example.com"),
        ]);
        let config = GatewayConfig::from_env(&env);
        assert_eq!(config.reasoning_model, "gemini-2.5-pro");
        assert_eq!(config.fast_model, "gemini-2.0-flash");
        assert_eq!(config.base_url, "https://proxy.example.com");
    }

    #[test]
    fn defaults_point_at_hosted_service() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, constants::DEFAULT_BASE_URL);
        assert_eq!(config.reasoning_model, constants::DEFAULT_REASONING_MODEL);
        assert_eq!(config.fast_model, constants::DEFAULT_FAST_MODEL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = GatewayConfig::with_api_key("sk-secret");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("sk-secret"));
    }
}
