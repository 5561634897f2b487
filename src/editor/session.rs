use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::config::{Configuration, SettingsManager};
use crate::fs::atomic_write;
use crate::persona;
use crate::transform::{
    ChatClient, Locale, Mode, Orchestrator, RunOutcome, SessionState, TransformError, strip_tags,
};
use crate::ui::{Spinner, Style};

/// Adjustable settings for an editor session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Active transformation mode.
    pub mode: Mode,
    /// Humanizer voice persona, if set.
    pub voice: Option<String>,
    /// Paraphraser style, if set.
    pub style: Option<String>,
    /// Prompt locale.
    pub locale: Locale,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            mode: Mode::Grammar,
            voice: None,
            style: None,
            locale: Locale::En,
        }
    }
}

/// An interactive editor session.
///
/// REPL-style interface: typed text becomes the document and is transformed
/// with the active mode; slash commands adjust the session. Backend settings
/// are re-read from disk before every transformation, so `tcheck configure`
/// in another terminal takes effect immediately.
pub struct EditorSession {
    settings: SessionSettings,
    state: SessionState,
    manager: SettingsManager,
}

impl EditorSession {
    pub fn new(settings: SessionSettings, manager: SettingsManager) -> Self {
        Self {
            settings,
            state: SessionState::default(),
            manager,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to transform, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await? {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.state.document = text;
                        self.transform_document().await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `false` when the session should end.
    async fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::Config => {
                let settings = self.manager.load_or_default();
                let config = Configuration::resolve(&settings.ai);
                ui::print_config(&self.settings, &config);
            }
            SlashCommand::Doc => {
                self.compose_document().await?;
            }
            SlashCommand::Help => {
                ui::print_help();
            }
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Save(path) => {
                self.save_result(path.as_deref());
            }
            SlashCommand::Set { key, value } => {
                self.handle_set(&key, value.as_deref());
            }
            SlashCommand::Unknown(cmd) => {
                ui::print_error_text(&format!("Unknown command: /{cmd}"));
            }
        }
        Ok(true)
    }

    /// Opens $EDITOR for a multi-line document, then transforms it.
    async fn compose_document(&mut self) -> Result<()> {
        let doc = inquire::Editor::new("Document:")
            .with_predefined_text(&self.state.document)
            .prompt();

        match doc {
            Ok(doc) => {
                self.state.document = doc;
                self.transform_document().await;
                Ok(())
            }
            Err(
                inquire::InquireError::OperationCanceled
                | inquire::InquireError::OperationInterrupted,
            ) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn handle_set(&mut self, key: &str, value: Option<&str>) {
        match key {
            "mode" => self.set_mode(value),
            "voice" => self.set_voice(value),
            "style" => self.set_style(value),
            "locale" => self.set_locale(value),
            "" => {
                println!("Usage: /set <key> <value>");
                println!("Keys: mode, voice, style, locale");
            }
            _ => {
                ui::print_error_text(&format!("Unknown setting: {key}"));
                println!("Available: mode, voice, style, locale");
            }
        }
    }

    fn set_mode(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            ui::print_error_text("Usage: /set mode <grammar|humanize|paraphrase>");
            return;
        };

        match Mode::parse(value) {
            Ok(mode) => {
                self.settings.mode = mode;
                println!(
                    "{} Mode set to {}\n",
                    Style::success("✓"),
                    Style::value(mode.key())
                );
            }
            Err(e) => ui::print_error_text(&e.to_string()),
        }
    }

    fn set_voice(&mut self, value: Option<&str>) {
        match value {
            None => {
                self.settings.voice = None;
                println!("{} Voice cleared\n", Style::success("✓"));
            }
            Some(voice) => {
                self.settings.voice = Some(voice.to_string());
                println!(
                    "{} Voice set to {}\n",
                    Style::success("✓"),
                    Style::value(voice)
                );
            }
        }
    }

    fn set_style(&mut self, value: Option<&str>) {
        match value {
            None => {
                self.settings.style = None;
                println!("{} Style cleared\n", Style::success("✓"));
            }
            Some(style) => {
                self.settings.style = Some(style.to_string());
                println!(
                    "{} Style set to {}\n",
                    Style::success("✓"),
                    Style::value(style)
                );
            }
        }
    }

    fn set_locale(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            ui::print_error_text("Usage: /set locale <en|th>");
            return;
        };

        match Locale::parse(value) {
            Ok(locale) => {
                self.settings.locale = locale;
                println!(
                    "{} Locale set to {}\n",
                    Style::success("✓"),
                    Style::value(locale.key())
                );
            }
            Err(e) => ui::print_error_text(&e.to_string()),
        }
    }

    fn save_result(&self, path: Option<&str>) {
        let Some(path) = path else {
            ui::print_error_text("Usage: /save <file>");
            return;
        };

        let Some(result) = self.state.last_result.as_deref() else {
            ui::print_error_text("Nothing to save yet. Transform some text first.");
            return;
        };

        match atomic_write(path, result) {
            Ok(()) => println!(
                "{} Saved to {}\n",
                Style::success("✓"),
                Style::secondary(path)
            ),
            Err(e) => ui::print_error_text(&format!("Failed to save: {e}")),
        }
    }

    /// Runs one transformation over the current document and prints the
    /// outcome. Transformation errors are presented, never propagated — the
    /// session always survives a failed request.
    async fn transform_document(&mut self) {
        if strip_tags(&self.state.document).trim().is_empty() {
            return;
        }

        // Settings are re-read so edits take effect immediately
        let file = self.manager.load_or_default();
        let config = Configuration::resolve(&file.ai);

        // Checked before the spinner starts, so a missing key never shows a
        // processing indicator; the transport performs the same check again.
        if config.missing_credentials() {
            let err = TransformError::MissingCredentials;
            self.state.last_error = Some(err.clone());
            ui::print_error(&err);
            return;
        }

        let option = match self.settings.mode {
            Mode::Grammar => None,
            Mode::Humanize => self
                .settings
                .voice
                .as_deref()
                .map(|v| persona::resolve_voice(v, self.settings.locale)),
            Mode::Paraphrase => self
                .settings
                .style
                .as_deref()
                .map(|s| persona::resolve_style(s, self.settings.locale)),
        };

        let orchestrator = Orchestrator::new(ChatClient::from_config(&config));

        let spinner = Spinner::start(spinner_message(self.settings.mode));
        let outcome = orchestrator
            .run(
                &mut self.state,
                &config,
                self.settings.mode,
                option.as_deref(),
                self.settings.locale,
            )
            .await;
        spinner.stop();

        match outcome {
            Ok(RunOutcome::Completed(result)) => {
                ui::print_result(&result, &self.state.document);
            }
            Ok(RunOutcome::SkippedEmpty) => {}
            Err(err) => ui::print_error(&err),
        }
    }
}

const fn spinner_message(mode: Mode) -> &'static str {
    match mode {
        Mode::Grammar => "Checking grammar...",
        Mode::Humanize => "Humanizing...",
        Mode::Paraphrase => "Paraphrasing...",
    }
}
