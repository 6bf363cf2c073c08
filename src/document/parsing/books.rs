//! Static scripture book tables
//!
//! The confession's front matter lists the canonical books one per line.
//! These tables let the segmenter recognise and drop those lines.

/// Names shared by numbered books ("I Samuel", "II Kings", "III John", ...)
pub(crate) const NUMBERED_BOOKS: &[&str] = &[
    "Samuel",
    "Kings",
    "Chronicles",
    "Corinthians",
    "Thessalonians",
    "Timothy",
    "Peter",
    "John",
];

/// The 66 canonical books, with numbered books collapsed to their shared name
pub(crate) const CANONICAL_BOOKS: &[&str] = &[
    // Old Testament
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "Samuel",
    "Kings",
    "Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    // New Testament
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "Thessalonians",
    "Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "Peter",
    "Jude",
    "Revelation",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_books_are_canonical() {
        for name in NUMBERED_BOOKS {
            assert!(CANONICAL_BOOKS.contains(name), "{name} missing");
        }
    }

    #[test]
    fn test_canonical_table_has_no_duplicates() {
        let mut names = CANONICAL_BOOKS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CANONICAL_BOOKS.len());
    }
}
