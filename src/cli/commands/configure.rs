//! Configure command handler for editing AI backend settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{
    SETUP_API_KEY, SETUP_BASE_URL, SETUP_MODEL, SettingsFile, SettingsManager, normalize_base_url,
};
use crate::transform::{Locale, Mode};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current settings (API key masked). Otherwise
/// interactively edits the backend settings and run defaults. Unset values
/// are pre-filled with suggestions targeting a local LM Studio server.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        return show_settings();
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn show_settings() -> Result<()> {
    let manager = SettingsManager::new()?;
    let settings = manager.load_or_default();

    println!("{}", Style::header("AI settings"));
    println!(
        "  {}   {}",
        Style::label("api_key"),
        settings.ai.api_key.as_deref().map_or_else(
            || Style::secondary("(not set)"),
            |key| {
                if key.is_empty() {
                    Style::secondary("(empty)")
                } else {
                    Style::value("(set)")
                }
            }
        )
    );
    println!(
        "  {}  {}",
        Style::label("base_url"),
        settings
            .ai
            .base_url
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        settings
            .ai
            .model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
    println!("{}", Style::header("Defaults"));
    println!(
        "  {}    {}",
        Style::label("mode"),
        settings
            .defaults
            .mode
            .as_deref()
            .map_or_else(|| Style::secondary("(grammar)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("locale"),
        settings
            .defaults
            .locale
            .as_deref()
            .map_or_else(|| Style::secondary("(en)"), Style::value)
    );
    println!();
    println!(
        "{}",
        Style::secondary(format!(
            "Settings file: {}",
            manager.settings_path().display()
        ))
    );

    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = SettingsManager::new()?;
    let mut settings = manager.load_or_default();

    let api_key = prompt_api_key(settings.ai.api_key.as_deref())?;
    let base_url = prompt_base_url(settings.ai.base_url.as_deref())?;
    let model = prompt_model(settings.ai.model.as_deref())?;
    let mode = select_default_mode(settings.defaults.mode.as_deref())?;
    let locale = select_default_locale(settings.defaults.locale.as_deref())?;

    settings = SettingsFile {
        ai: crate::config::AiSettings {
            api_key: Some(api_key),
            base_url: Some(base_url),
            model: Some(model),
            timeout_secs: settings.ai.timeout_secs,
        },
        defaults: crate::config::DefaultsSettings {
            mode: Some(mode),
            locale: Some(locale),
            ..settings.defaults
        },
    };

    manager.save(&settings)?;

    println!();
    println!(
        "{} Settings saved to {}",
        Style::success("✓"),
        Style::secondary(manager.settings_path().display().to_string())
    );

    Ok(())
}

fn prompt_api_key(current: Option<&str>) -> Result<String> {
    let default = current.filter(|key| !key.is_empty()).unwrap_or(SETUP_API_KEY);

    let key = Text::new("API key:")
        .with_default(default)
        .with_help_message("Use any placeholder (e.g. lm-studio) for local servers")
        .prompt()?;

    Ok(key.trim().to_string())
}

fn prompt_base_url(current: Option<&str>) -> Result<String> {
    let default = current.filter(|url| !url.is_empty()).unwrap_or(SETUP_BASE_URL);

    let url = Text::new("Base URL:")
        .with_default(default)
        .with_help_message("e.g., https://api.opentyphoon.ai/v1")
        .prompt()?;

    let url = url.trim();
    if url.is_empty() {
        bail!("Base URL cannot be empty");
    }

    // Pasting a full completion endpoint is repaired on save
    Ok(normalize_base_url(url))
}

fn prompt_model(current: Option<&str>) -> Result<String> {
    let default = current.filter(|model| !model.is_empty()).unwrap_or(SETUP_MODEL);

    let model = Text::new("Model name:")
        .with_default(default)
        .with_help_message("e.g., typhoon-v1.5-instruct")
        .prompt()?;

    let model = model.trim();
    if model.is_empty() {
        bail!("Model name cannot be empty");
    }

    Ok(model.to_string())
}

fn select_default_mode(current: Option<&str>) -> Result<String> {
    let options: Vec<&str> = Mode::ALL.iter().map(|mode| mode.key()).collect();

    let default_index = current
        .and_then(|c| options.iter().position(|key| *key == c))
        .unwrap_or(0);

    let selection = Select::new("Default mode:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection.to_string())
}

fn select_default_locale(current: Option<&str>) -> Result<String> {
    let options = vec![Locale::En.key(), Locale::Th.key()];

    let default_index = current
        .and_then(|c| options.iter().position(|key| *key == c))
        .unwrap_or(0);

    let selection = Select::new("Default locale:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection.to_string())
}
