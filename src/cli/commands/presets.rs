//! Voice persona and paraphrase style listings.

use crate::persona::{DEFAULT_STYLE, DEFAULT_VOICE, STYLES, VOICES};
use crate::ui::Style;

/// Prints the built-in humanizer voice personas.
pub fn print_voices() {
    println!("{}", Style::header("Voice personas"));
    for voice in VOICES {
        let marker = if voice.name == DEFAULT_VOICE {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {}  {}  {}{marker}",
            Style::value(format!("{:20}", voice.name)),
            Style::code(voice.thai_name),
            Style::secondary(voice.tagline),
        );
    }
    println!();
    println!(
        "{}",
        Style::hint("Any other persona name is accepted too: tcheck --mode humanize --voice \"...\"")
    );
}

/// Prints the built-in paraphraser styles.
pub fn print_styles() {
    println!("{}", Style::header("Paraphrase styles"));
    for style in STYLES {
        let marker = if style.name == DEFAULT_STYLE {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {}  {}{marker}",
            Style::value(format!("{:12}", style.name)),
            Style::code(style.thai_name),
        );
    }
    println!();
    println!(
        "{}",
        Style::hint("Any other style name is accepted too: tcheck --mode paraphrase --style \"...\"")
    );
}
