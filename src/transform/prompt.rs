//! Prompt templates for each transformation mode and locale.
//!
//! Every template instructs the model to reply with ONLY the transformed
//! text. The transport layer relies on this framing: the whole response body
//! is treated as the result, with no commentary parsing or echo stripping.

use sha2::{Digest, Sha256};

use super::mode::{Locale, Mode};
use crate::persona;

pub const GRAMMAR_EN: &str = "You are a helpful grammar assistant. Correct the grammar of the following text to be standard and natural, keeping the original meaning: \"{text}\". Reply ONLY with the corrected text.";

pub const GRAMMAR_TH: &str = "คุณเป็นผู้ช่วยตรวจทานไวยากรณ์ภาษาไทย แก้ไขข้อความต่อไปนี้ให้ถูกต้องตามหลักภาษาและเป็นธรรมชาติ โดยรักษาความหมายเดิมไว้: \"{text}\" ตอบกลับเฉพาะข้อความที่แก้ไขแล้วเท่านั้น";

pub const HUMANIZE_EN: &str = "Rewrite the following text to sound like a \"{option}\" persona. Keep the meaning but change the tone and vocabulary to match the persona. Text: \"{text}\". Reply ONLY with the rewritten text.";

pub const HUMANIZE_TH: &str = "เขียนข้อความต่อไปนี้ใหม่ให้มีน้ำเสียงแบบ \"{option}\" โดยยังคงความหมายเดิมไว้ ข้อความ: \"{text}\" ตอบกลับเฉพาะข้อความที่เขียนใหม่เท่านั้น";

pub const PARAPHRASE_EN: &str = "Paraphrase the following text in a \"{option}\" style. Text: \"{text}\". Reply ONLY with the paraphrased text.";

pub const PARAPHRASE_TH: &str = "ปรับสำนวนข้อความต่อไปนี้ให้อยู่ในสไตล์ \"{option}\" ข้อความ: \"{text}\" ตอบกลับเฉพาะข้อความที่ปรับสำนวนแล้วเท่านั้น";

const ALL_TEMPLATES: &[&str] = &[
    GRAMMAR_EN,
    GRAMMAR_TH,
    HUMANIZE_EN,
    HUMANIZE_TH,
    PARAPHRASE_EN,
    PARAPHRASE_TH,
];

const fn template_for(mode: Mode, locale: Locale) -> &'static str {
    match (mode, locale) {
        (Mode::Grammar, Locale::En) => GRAMMAR_EN,
        (Mode::Grammar, Locale::Th) => GRAMMAR_TH,
        (Mode::Humanize, Locale::En) => HUMANIZE_EN,
        (Mode::Humanize, Locale::Th) => HUMANIZE_TH,
        (Mode::Paraphrase, Locale::En) => PARAPHRASE_EN,
        (Mode::Paraphrase, Locale::Th) => PARAPHRASE_TH,
    }
}

/// The effective option for a mode: the caller's option when present,
/// otherwise the fixed per-mode default. Grammar takes no option.
pub fn effective_option(mode: Mode, option: Option<&str>) -> Option<String> {
    match mode {
        Mode::Grammar => None,
        Mode::Humanize => Some(
            option
                .filter(|o| !o.trim().is_empty())
                .unwrap_or(persona::DEFAULT_VOICE)
                .to_string(),
        ),
        Mode::Paraphrase => Some(
            option
                .filter(|o| !o.trim().is_empty())
                .unwrap_or(persona::DEFAULT_STYLE)
                .to_string(),
        ),
    }
}

/// Builds the prompt for a transformation request.
///
/// `{text}` and `{option}` are placeholders for string replacement, not
/// format arguments.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(mode: Mode, source_text: &str, option: Option<&str>, locale: Locale) -> String {
    let template = template_for(mode, locale);
    let prompt = template.replace("{text}", source_text);

    match effective_option(mode, option) {
        Some(option) => prompt.replace("{option}", &option),
        None => prompt,
    }
}

/// Digest of all prompt templates, used to invalidate cached results when
/// the template wording changes.
pub fn templates_digest() -> String {
    let mut hasher = Sha256::new();
    for template in ALL_TEMPLATES {
        hasher.update(template.as_bytes());
    }
    hex::encode(hasher.finalize())
}
