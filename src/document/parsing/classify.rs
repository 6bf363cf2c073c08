//! Line classification
//!
//! Each input line is classified once, in this order:
//! 1. Chapter headers
//! 2. Structural noise (blank lines, page furniture, title repeats)
//! 3. Numbered book-list lines ("I Corinthians", "II Kings", ...)
//! 4. Canonical book-list lines ("Genesis", "Revelation", ...)
//! 5. Content
//!
//! Headers are checked first because the noise prefixes include "CHAPTER".

use once_cell::sync::Lazy;
use regex::Regex;

use super::books::{CANONICAL_BOOKS, NUMBERED_BOOKS};
use super::heading::{is_chapter_header, TITLE_LEAD_IN};

/// Page headers, footers and front-matter dividers
const NOISE_PREFIXES: &[&str] = &[
    "Presbyterian Church",
    "in the United States",
    "The United Presbyterian",
    "CHAPTER",
    "Of the Old Testament",
    "Of the New Testament",
];

static NUMBERED_BOOK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[IVX]+ (?:{})", NUMBERED_BOOKS.join("|"))).unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    ChapterHeader,
    Noise,
    NumberedBookList,
    BookList,
    Content(&'a str),
}

/// Classify a line given the raw title of the chapter being collected
pub(crate) fn classify_line<'a>(line: &'a str, current_title: Option<&str>) -> LineKind<'a> {
    let line = line.trim();

    if is_chapter_header(line) {
        return LineKind::ChapterHeader;
    }

    if is_structural_noise(line, current_title) {
        return LineKind::Noise;
    }

    if is_numbered_book_line(line) {
        return LineKind::NumberedBookList;
    }

    if is_book_name_line(line) {
        return LineKind::BookList;
    }

    LineKind::Content(line)
}

pub(crate) fn is_structural_noise(line: &str, current_title: Option<&str>) -> bool {
    let line = line.trim();

    if line.is_empty() {
        return true;
    }

    if NOISE_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
        return true;
    }

    // The title line reappearing verbatim is not content
    line.starts_with(TITLE_LEAD_IN) && current_title == Some(line)
}

/// "I Samuel", "II Corinthians 11:3", "III John"
pub(crate) fn is_numbered_book_line(line: &str) -> bool {
    NUMBERED_BOOK_PATTERN.is_match(line.trim())
}

/// Any line opening with a canonical book name
pub(crate) fn is_book_name_line(line: &str) -> bool {
    let line = line.trim();
    CANONICAL_BOOKS.iter().any(|book| line.starts_with(book))
}
