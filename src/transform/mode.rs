//! Transformation modes and prompt locales.

use anyhow::Result;

/// The three text transformations offered by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Correct grammar while preserving meaning.
    Grammar,
    /// Rewrite in the tone of a voice persona.
    Humanize,
    /// Rephrase in a named style.
    Paraphrase,
}

impl Mode {
    /// All modes with their CLI keys.
    pub const ALL: &'static [Self] = &[Self::Grammar, Self::Humanize, Self::Paraphrase];

    /// The CLI key for this mode.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::Humanize => "humanize",
            Self::Paraphrase => "paraphrase",
        }
    }

    /// Sampling temperature for this mode.
    ///
    /// Grammar correction favors the single standard answer; rewriting wants
    /// more stylistic variance.
    pub const fn temperature(self) -> f64 {
        match self {
            Self::Grammar => 0.7,
            Self::Humanize | Self::Paraphrase => 0.8,
        }
    }

    /// Output token bound for this mode.
    ///
    /// Only grammar correction is bounded; rewritten text length is less
    /// predictable and truncation would be worse than a slow response.
    pub const fn max_tokens(self) -> Option<u32> {
        match self {
            Self::Grammar => Some(1000),
            Self::Humanize | Self::Paraphrase => None,
        }
    }

    /// Parses a mode key.
    ///
    /// # Errors
    ///
    /// Returns an error listing the valid keys when the input matches none.
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "grammar" => Ok(Self::Grammar),
            "humanize" | "humanizer" => Ok(Self::Humanize),
            "paraphrase" | "paraphraser" => Ok(Self::Paraphrase),
            _ => anyhow::bail!(
                "Invalid mode: '{input}'\n\n\
                 Valid modes: grammar, humanize, paraphrase"
            ),
        }
    }
}

/// Prompt language selector, independent of the document's own language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English prompt phrasing.
    #[default]
    En,
    /// Thai prompt phrasing.
    Th,
}

impl Locale {
    /// The CLI key for this locale.
    pub const fn key(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Th => "th",
        }
    }

    /// Parses a locale key.
    ///
    /// # Errors
    ///
    /// Returns an error listing the valid keys when the input matches none.
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "th" => Ok(Self::Th),
            _ => anyhow::bail!(
                "Invalid locale: '{input}'\n\n\
                 Valid locales: en, th"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_valid() {
        assert_eq!(Mode::parse("grammar").ok(), Some(Mode::Grammar));
        assert_eq!(Mode::parse("Humanize").ok(), Some(Mode::Humanize));
        assert_eq!(Mode::parse("paraphraser").ok(), Some(Mode::Paraphrase));
        assert_eq!(Mode::parse(" PARAPHRASE ").ok(), Some(Mode::Paraphrase));
    }

    #[test]
    fn test_mode_parse_invalid() {
        let err = Mode::parse("translate").unwrap_err();
        assert!(err.to_string().contains("Valid modes"));
    }

    #[test]
    fn test_mode_temperature() {
        assert!((Mode::Grammar.temperature() - 0.7).abs() < f64::EPSILON);
        assert!((Mode::Humanize.temperature() - 0.8).abs() < f64::EPSILON);
        assert!((Mode::Paraphrase.temperature() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mode_max_tokens() {
        assert_eq!(Mode::Grammar.max_tokens(), Some(1000));
        assert_eq!(Mode::Humanize.max_tokens(), None);
        assert_eq!(Mode::Paraphrase.max_tokens(), None);
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("en").ok(), Some(Locale::En));
        assert_eq!(Locale::parse("TH").ok(), Some(Locale::Th));
        assert!(Locale::parse("ja").is_err());
    }

    #[test]
    fn test_keys_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::parse(mode.key()).ok(), Some(*mode));
        }
        assert_eq!(Locale::parse(Locale::En.key()).ok(), Some(Locale::En));
        assert_eq!(Locale::parse(Locale::Th.key()).ok(), Some(Locale::Th));
    }
}
