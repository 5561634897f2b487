//! Built-in humanizer voice personas and paraphraser styles.
//!
//! Personas and styles are suggestions, not a closed set: the option string
//! is interpolated into the prompt verbatim, so any name is accepted. The
//! presets here back the `voices` and `styles` listing commands and the
//! per-mode defaults.

use crate::transform::Locale;

/// A voice persona for the humanizer.
#[derive(Debug, Clone)]
pub struct Voice {
    /// The persona key (e.g., "everyday").
    pub key: &'static str,
    /// English display name, interpolated into English prompts.
    pub name: &'static str,
    /// Thai display name, interpolated into Thai prompts.
    pub thai_name: &'static str,
    /// Short tagline for listings.
    pub tagline: &'static str,
}

/// All built-in voice personas.
pub const VOICES: &[Voice] = &[
    Voice {
        key: "everyday",
        name: "The Everyday Voice",
        thai_name: "เสียงทั่วไป",
        tagline: "Natural • Balanced",
    },
    Voice {
        key: "precisionist",
        name: "The Precisionist",
        thai_name: "เสียงกระชับ",
        tagline: "Concise • Efficient",
    },
    Voice {
        key: "executive",
        name: "The Executive",
        thai_name: "เสียงผู้บริหาร",
        tagline: "Formal • Confident",
    },
    Voice {
        key: "scholar",
        name: "The Scholar",
        thai_name: "เสียงนักวิชาการ",
        tagline: "Formal • Precise",
    },
];

/// A paraphrase style.
#[derive(Debug, Clone)]
pub struct ParaphraseStyle {
    /// The style key (e.g., "academic").
    pub key: &'static str,
    /// English display name, interpolated into English prompts.
    pub name: &'static str,
    /// Thai display name, interpolated into Thai prompts.
    pub thai_name: &'static str,
}

/// All built-in paraphrase styles.
pub const STYLES: &[ParaphraseStyle] = &[
    ParaphraseStyle {
        key: "humanize",
        name: "Humanize",
        thai_name: "ธรรมชาติ",
    },
    ParaphraseStyle {
        key: "academic",
        name: "Academic",
        thai_name: "วิชาการ",
    },
    ParaphraseStyle {
        key: "professional",
        name: "Professional",
        thai_name: "มืออาชีพ",
    },
    ParaphraseStyle {
        key: "streamlined",
        name: "Streamlined",
        thai_name: "กระชับ",
    },
    ParaphraseStyle {
        key: "creative",
        name: "Creative",
        thai_name: "สร้างสรรค์",
    },
];

/// Default persona applied when the humanizer is run without a voice.
pub const DEFAULT_VOICE: &str = "The Everyday Voice";

/// Default style applied when the paraphraser is run without a style.
pub const DEFAULT_STYLE: &str = "Professional";

/// Looks up a built-in voice by key or English name.
pub fn get_voice(input: &str) -> Option<&'static Voice> {
    VOICES
        .iter()
        .find(|v| v.key.eq_ignore_ascii_case(input) || v.name.eq_ignore_ascii_case(input))
}

/// Looks up a built-in style by key or English name.
pub fn get_style(input: &str) -> Option<&'static ParaphraseStyle> {
    STYLES
        .iter()
        .find(|s| s.key.eq_ignore_ascii_case(input) || s.name.eq_ignore_ascii_case(input))
}

/// Resolves a voice option to the display name used in prompts.
///
/// Built-in personas resolve to their locale-specific display name; anything
/// else passes through unchanged so users can invent their own personas.
pub fn resolve_voice(input: &str, locale: Locale) -> String {
    get_voice(input).map_or_else(
        || input.to_string(),
        |voice| match locale {
            Locale::En => voice.name.to_string(),
            Locale::Th => voice.thai_name.to_string(),
        },
    )
}

/// Resolves a style option to the display name used in prompts.
///
/// Built-in styles resolve to their locale-specific display name; anything
/// else passes through unchanged.
pub fn resolve_style(input: &str, locale: Locale) -> String {
    get_style(input).map_or_else(
        || input.to_string(),
        |style| match locale {
            Locale::En => style.name.to_string(),
            Locale::Th => style.thai_name.to_string(),
        },
    )
}
