//! Configuration resolution and endpoint normalization.
//!
//! Settings are read fresh before every transformation and resolved into a
//! [`Configuration`] value that is passed explicitly into the orchestrator
//! and transport client. The core never reads ambient state itself.

use crate::config::AiSettings;

/// Transport-layer fallbacks used when a setting is absent.
pub const FALLBACK_BASE_URL: &str = "https://api.opentyphoon.ai/v1";
pub const FALLBACK_MODEL: &str = "typhoon-v1.5-instruct";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Suggested values offered by `tcheck configure` when a setting is unset.
/// These target a local LM Studio server rather than the hosted fallback.
pub const SETUP_API_KEY: &str = "lm-studio";
pub const SETUP_BASE_URL: &str = "http://localhost:1234/v1";
pub const SETUP_MODEL: &str = "scb10x_-_llama-3-typhoon-v1.5-8b-instruct";

/// Resolved AI backend configuration for a single transformation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Normalized endpoint base URL (no trailing slash, no completion suffix).
    pub base_url: String,
    /// API key; may be empty when the endpoint is a local server.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Configuration {
    /// Resolves settings into a usable configuration, substituting transport
    /// fallbacks for absent values and normalizing the base URL.
    pub fn resolve(settings: &AiSettings) -> Self {
        let base_url = settings
            .base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(FALLBACK_BASE_URL);

        Self {
            base_url: normalize_base_url(base_url),
            api_key: settings.api_key.clone().unwrap_or_default(),
            model: settings
                .model
                .clone()
                .filter(|model| !model.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_MODEL.to_string()),
            timeout_secs: settings.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Returns `true` if the endpoint points at a local model server.
    ///
    /// Local servers (LM Studio, Ollama, vLLM) commonly run without
    /// authentication, so an empty API key is acceptable for them.
    pub fn is_loopback(&self) -> bool {
        self.base_url.contains("localhost") || self.base_url.contains("127.0.0.1")
    }

    /// Returns `true` if sending a request would fail the credential check.
    pub fn missing_credentials(&self) -> bool {
        self.api_key.is_empty() && !self.is_loopback()
    }
}

/// Normalizes an endpoint base URL.
///
/// Users routinely paste a full completion endpoint into the base-URL
/// setting; this repairs the common cases:
/// - trailing slashes are stripped
/// - a trailing `/chat/completions` or `/completions` suffix is stripped
/// - an accidental doubled `/v1/v1` suffix collapses to `/v1`
///
/// Normalization is idempotent: normalizing an already-normalized URL
/// returns it unchanged. No further URL validation happens here; a malformed
/// URL surfaces later as a transport failure.
pub fn normalize_base_url(raw: &str) -> String {
    let mut url = raw.trim().trim_end_matches('/').to_string();

    if let Some(stripped) = url.strip_suffix("/chat/completions") {
        url = stripped.to_string();
    }
    if let Some(stripped) = url.strip_suffix("/completions") {
        url = stripped.to_string();
    }
    if let Some(stripped) = url.strip_suffix("/v1/v1") {
        url = format!("{stripped}/v1");
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(normalize_base_url("http://x/v1/"), "http://x/v1");
        assert_eq!(normalize_base_url("http://x/v1///"), "http://x/v1");
    }

    #[test]
    fn test_normalize_strips_chat_completions_suffix() {
        assert_eq!(
            normalize_base_url("http://x/v1/chat/completions"),
            "http://x/v1"
        );
        assert_eq!(
            normalize_base_url("http://x/v1/chat/completions/"),
            "http://x/v1"
        );
    }

    #[test]
    fn test_normalize_strips_completions_suffix() {
        assert_eq!(normalize_base_url("http://x/v1/completions"), "http://x/v1");
    }

    #[test]
    fn test_normalize_collapses_doubled_v1() {
        assert_eq!(normalize_base_url("http://x/v1/v1"), "http://x/v1");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let cases = [
            "http://x/v1/chat/completions/",
            "http://x/v1/completions",
            "http://x/v1/v1",
            "https://api.opentyphoon.ai/v1",
        ];
        for raw in cases {
            let once = normalize_base_url(raw);
            let twice = normalize_base_url(&once);
            assert_eq!(once, twice, "normalization not idempotent for {raw}");
        }
    }

    #[test]
    fn test_normalize_leaves_clean_url_alone() {
        assert_eq!(
            normalize_base_url("https://api.opentyphoon.ai/v1"),
            "https://api.opentyphoon.ai/v1"
        );
    }

    #[test]
    fn test_resolve_applies_fallbacks() {
        let config = Configuration::resolve(&AiSettings::default());

        assert_eq!(config.base_url, FALLBACK_BASE_URL);
        assert_eq!(config.api_key, "");
        assert_eq!(config.model, FALLBACK_MODEL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_resolve_normalizes_base_url() {
        let settings = AiSettings {
            base_url: Some("http://localhost:1234/v1/chat/completions/".to_string()),
            ..AiSettings::default()
        };

        let config = Configuration::resolve(&settings);
        assert_eq!(config.base_url, "http://localhost:1234/v1");
    }

    #[test]
    fn test_resolve_ignores_blank_values() {
        let settings = AiSettings {
            base_url: Some("   ".to_string()),
            model: Some(String::new()),
            ..AiSettings::default()
        };

        let config = Configuration::resolve(&settings);
        assert_eq!(config.base_url, FALLBACK_BASE_URL);
        assert_eq!(config.model, FALLBACK_MODEL);
    }

    #[test]
    fn test_is_loopback() {
        let mut config = Configuration::resolve(&AiSettings::default());
        assert!(!config.is_loopback());

        config.base_url = "http://localhost:1234/v1".to_string();
        assert!(config.is_loopback());

        config.base_url = "http://127.0.0.1:8080/v1".to_string();
        assert!(config.is_loopback());
    }

    #[test]
    fn test_missing_credentials() {
        // Hosted endpoint without a key: credentials required
        let config = Configuration::resolve(&AiSettings::default());
        assert!(config.missing_credentials());

        // Loopback endpoint: empty key is fine
        let settings = AiSettings {
            base_url: Some("http://localhost:1234/v1".to_string()),
            ..AiSettings::default()
        };
        assert!(!Configuration::resolve(&settings).missing_credentials());

        // Hosted endpoint with a key: fine
        let settings = AiSettings {
            api_key: Some("sk-test".to_string()),
            ..AiSettings::default()
        };
        assert!(!Configuration::resolve(&settings).missing_credentials());
    }
}
