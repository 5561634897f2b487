//! Settings file management and configuration resolution.

mod manager;
mod resolve;

pub use manager::{AiSettings, DefaultsSettings, SettingsFile, SettingsManager};
pub use resolve::{
    Configuration, DEFAULT_TIMEOUT_SECS, FALLBACK_BASE_URL, FALLBACK_MODEL, SETUP_API_KEY,
    SETUP_BASE_URL, SETUP_MODEL, normalize_base_url,
};
