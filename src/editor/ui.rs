//! Editor session UI components.

use crate::config::Configuration;
use crate::transform::{Mode, TransformError, strip_tags};
use crate::ui::Style;

use super::session::SessionSettings;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Writing Assistant",
        Style::header("tcheck"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(settings: &SessionSettings, config: &Configuration) {
    println!("{}", Style::header("Session settings"));
    println!(
        "  {}      {}",
        Style::label("mode"),
        Style::value(settings.mode.key())
    );
    if settings.mode == Mode::Humanize {
        println!(
            "  {}     {}",
            Style::label("voice"),
            settings
                .voice
                .as_deref()
                .map_or_else(|| Style::secondary("(default)"), Style::value)
        );
    }
    if settings.mode == Mode::Paraphrase {
        println!(
            "  {}     {}",
            Style::label("style"),
            settings
                .style
                .as_deref()
                .map_or_else(|| Style::secondary("(default)"), Style::value)
        );
    }
    println!(
        "  {}    {}",
        Style::label("locale"),
        Style::value(settings.locale.key())
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::secondary(&config.base_url)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}          {}",
        Style::command("/config"),
        Style::secondary("Show current session settings")
    );
    println!(
        "  {}             {}",
        Style::command("/doc"),
        Style::secondary("Compose a multi-line document in your editor")
    );
    println!(
        "  {}  {}",
        Style::command("/set <key> <value>"),
        Style::secondary("Change mode, voice, style, or locale")
    );
    println!(
        "  {}     {}",
        Style::command("/save <file>"),
        Style::secondary("Save the last result to a file")
    );
    println!(
        "  {}            {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}            {}",
        Style::command("/quit"),
        Style::secondary("Exit the editor session")
    );
    println!();
}

/// Prints the result panel: the transformed text alongside the original.
///
/// Model output is printed as plain text; it is never interpreted as markup.
pub fn print_result(result: &str, original_document: &str) {
    println!("{}", Style::header("Suggested"));
    println!("{result}");
    println!();

    let original = strip_tags(original_document);
    let original = original.trim();
    if !original.is_empty() {
        println!("{}", Style::label("Original"));
        println!("{}", Style::original(original));
        println!();
    }
}

pub fn print_error(err: &TransformError) {
    eprintln!("{} {err}", Style::error("Error:"));
    eprintln!("{}", Style::hint(err.hint()));
    eprintln!();
}

pub fn print_error_text(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
