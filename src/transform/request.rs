use sha2::{Digest, Sha256};

use super::mode::{Locale, Mode};
use super::prompt;

/// Identity of a single transformation request, used for result caching.
#[derive(Debug, Clone)]
pub struct TransformRequest {
    /// Plain source text, markup already stripped and trimmed.
    pub source_text: String,
    /// Requested transformation mode.
    pub mode: Mode,
    /// Effective option (persona or style name), if the mode takes one.
    pub option: Option<String>,
    /// Prompt locale.
    pub locale: Locale,
    /// Model identifier the request targets.
    pub model: String,
    /// Endpoint the request targets.
    pub endpoint: String,
}

impl TransformRequest {
    /// Compute the cache key for this request.
    ///
    /// The key covers everything that influences the output, including the
    /// prompt-template digest, so cached results are invalidated when the
    /// template wording changes.
    pub fn cache_key(&self) -> String {
        let cache_input = serde_json::json!({
            "source_text": self.source_text,
            "mode": self.mode.key(),
            "option": self.option,
            "locale": self.locale.key(),
            "model": self.model,
            "endpoint": self.endpoint,
            "prompt_hash": prompt::templates_digest(),
        });

        let mut hasher = Sha256::new();
        hasher.update(cache_input.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}
