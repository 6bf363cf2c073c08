//! Content normalization
//!
//! Turns the raw lines collected for a chapter into the single content
//! string stored on a section.

use once_cell::sync::Lazy;
use regex::Regex;

use super::parsing::variant::{resolve_title, resolve_variants};

static REFERENCE_CODE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\d+\.\d+\]").unwrap());

static WHITESPACE_RUN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Join, clean and collapse a chapter's content lines.
///
/// An empty result means nothing substantive survived and the chapter
/// should not be emitted.
pub fn normalize_content<S: AsRef<str>>(content_lines: &[S], title: Option<&str>) -> String {
    let joined = content_lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");

    let text = strip_reference_codes(&joined);
    let mut text = resolve_variants(&text);

    if let Some(title) = title {
        let clean_title = resolve_title(title);
        if let Some(rest) = text.strip_prefix(clean_title.as_str()) {
            text = rest.trim().to_string();
        }
    }

    collapse_whitespace(&text)
}

/// Remove `[6.001]`-style section reference codes
pub(crate) fn strip_reference_codes(text: &str) -> String {
    REFERENCE_CODE_PATTERN.replace_all(text, "").into_owned()
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN_PATTERN
        .replace_all(text, " ")
        .trim()
        .to_string()
}
