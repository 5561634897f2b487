use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// AI backend settings in the `[ai]` section of settings.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiSettings {
    /// API key for the chat-completion endpoint.
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: Option<String>,
    /// Model identifier sent with every request.
    pub model: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Default run settings in the `[defaults]` section of settings.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsSettings {
    /// Default transformation mode.
    pub mode: Option<String>,
    /// Default prompt locale.
    pub locale: Option<String>,
    /// Default humanizer voice persona.
    pub voice: Option<String>,
    /// Default paraphraser style.
    pub style: Option<String>,
}

/// The complete settings file structure.
///
/// Corresponds to `~/.config/tcheck/settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    /// AI backend settings.
    #[serde(default)]
    pub ai: AiSettings,
    /// Default run settings.
    #[serde(default)]
    pub defaults: DefaultsSettings,
}

/// Manages loading and saving the settings file.
pub struct SettingsManager {
    settings_path: PathBuf,
}

impl SettingsManager {
    /// Creates a new settings manager.
    ///
    /// Settings are stored at `$XDG_CONFIG_HOME/tcheck/settings.toml`
    /// or `~/.config/tcheck/settings.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            settings_path: paths::config_dir().join("settings.toml"),
        })
    }

    pub const fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    pub fn load(&self) -> Result<SettingsFile> {
        let contents = fs::read_to_string(&self.settings_path).with_context(|| {
            format!(
                "Failed to read settings file: {}",
                self.settings_path.display()
            )
        })?;

        let settings: SettingsFile =
            toml::from_str(&contents).with_context(|| "Failed to parse settings file")?;

        Ok(settings)
    }

    pub fn save(&self, settings: &SettingsFile) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;

        fs::write(&self.settings_path, contents).with_context(|| {
            format!(
                "Failed to write settings file: {}",
                self.settings_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the settings file, falling back to defaults when it is missing
    /// or unreadable. Settings are re-read before every transformation so
    /// edits take effect immediately.
    pub fn load_or_default(&self) -> SettingsFile {
        self.load().unwrap_or_default()
    }
}
