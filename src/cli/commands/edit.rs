use anyhow::Result;

use crate::config::SettingsManager;
use crate::editor::{EditorSession, SessionSettings};
use crate::transform::{Locale, Mode};

pub struct EditOptions {
    pub mode: Option<String>,
    pub voice: Option<String>,
    pub style: Option<String>,
    pub locale: Option<String>,
}

/// Starts an interactive editor session.
///
/// CLI options seed the session; settings-file defaults fill the gaps.
pub async fn run_edit(options: EditOptions) -> Result<()> {
    let manager = SettingsManager::new()?;
    let defaults = manager.load_or_default().defaults;

    let mode = match options.mode.as_deref().or(defaults.mode.as_deref()) {
        Some(key) => Mode::parse(key)?,
        None => Mode::Grammar,
    };
    let locale = match options.locale.as_deref().or(defaults.locale.as_deref()) {
        Some(key) => Locale::parse(key)?,
        None => Locale::En,
    };

    let settings = SessionSettings {
        mode,
        voice: options.voice.or(defaults.voice),
        style: options.style.or(defaults.style),
        locale,
    };

    let mut session = EditorSession::new(settings, manager);
    session.run().await
}
