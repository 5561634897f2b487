//! Markup stripping for rich-text documents.

use regex::Regex;
use std::sync::OnceLock;

static TAG_RE: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used)]
fn tag_re() -> &'static Regex {
    // expect is safe: pattern is a compile-time constant
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"))
}

/// Strips markup tags from an editor document, leaving plain text.
///
/// Rich-text editors emit HTML; the model only ever sees plain text. Tag
/// contents are kept as-is — entities are not decoded and no whitespace is
/// collapsed beyond what the caller trims.
pub fn strip_tags(document: &str) -> String {
    tag_re().replace_all(document, "").into_owned()
}
