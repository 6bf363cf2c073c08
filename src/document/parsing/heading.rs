//! Chapter header detection and title reconstruction
//!
//! Headers look like `CHAPTER XXIII (PCUS)`. The numeral only identifies the
//! line as a header; chapters are numbered by the order they are found.
//! Titles follow a few lines later, start with "Of " and may wrap.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lines scanned after a header when looking for its title
pub const DEFAULT_TITLE_LOOKAHEAD: usize = 9;

pub(crate) const TITLE_LEAD_IN: &str = "Of ";

static CHAPTER_HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CHAPTER [IVX]+ \(PCUS\)").unwrap());

/// True when the trimmed line opens a new chapter
pub(crate) fn is_chapter_header(line: &str) -> bool {
    CHAPTER_HEADER_PATTERN.is_match(line.trim())
}

/// Rebuild the title of the chapter whose header sits at `header_index`.
///
/// The title starts at the first line beginning with "Of " within the next
/// `lookahead` lines. After that, non-empty lines that do not open with `[`
/// are continuations; the first other line ends the title.
pub(crate) fn reconstruct_title<S: AsRef<str>>(
    lines: &[S],
    header_index: usize,
    lookahead: usize,
) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();

    for line in lines.iter().skip(header_index + 1).take(lookahead) {
        let line = line.as_ref().trim();
        if line.starts_with(TITLE_LEAD_IN) {
            parts.push(line);
        } else if parts.is_empty() {
            continue;
        } else if !line.is_empty() && !line.starts_with('[') {
            parts.push(line);
        } else {
            break;
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
