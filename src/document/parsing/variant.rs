//! PCUS/UPCUSA variant annotation resolution
//!
//! The source text carries inline `[PCUS ...]` and `[UPCUSA ...]` tags where
//! the two denominational lineages word a passage differently. Exactly one
//! reading survives: the UPCUSA text of an adjacent pair, or the unwrapped
//! text of a lone tag.

use once_cell::sync::Lazy;
use regex::Regex;

// Paired forms must run before lone forms: a lone rule applied first would
// unwrap one half of a pair and leave the other half orphaned.
static VARIANT_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        // "[PCUS a] [UPCUSA b]" -> "b"
        (
            Regex::new(r"\[PCUS [^\]]+\] \[UPCUSA ([^\]]+)\]").unwrap(),
            "${1}",
        ),
        // "[UPCUSA a] [PCUS b]" -> "a"
        (
            Regex::new(r"\[UPCUSA ([^\]]+)\] \[PCUS [^\]]+\]").unwrap(),
            "${1}",
        ),
        (Regex::new(r"\[PCUS ([^\]]+)\]").unwrap(), "${1}"),
        (Regex::new(r"\[UPCUSA ([^\]]+)\]").unwrap(), "${1}"),
    ]
});

/// Apply the four variant substitutions once, in order, each globally
pub(crate) fn resolve_variants(text: &str) -> String {
    VARIANT_RULES
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}

/// Apply the substitutions until nothing changes.
///
/// Every substitution removes at least the tag and its brackets, so the text
/// strictly shrinks and the loop terminates. Same-tag nesting such as
/// `[PCUS [PCUS a]]` needs more than one pass.
pub(crate) fn resolve_variants_fully(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = resolve_variants(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Resolve a raw, possibly multi-line-joined chapter title to its canonical form
pub fn resolve_title(raw_title: &str) -> String {
    resolve_variants_fully(raw_title).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paired_pcus_then_upcusa_keeps_upcusa() {
        assert_eq!(
            resolve_title("Of [PCUS Civil] [UPCUSA Civil Government] Matters"),
            "Of Civil Government Matters"
        );
    }

    #[test]
    fn test_paired_upcusa_then_pcus_keeps_upcusa() {
        assert_eq!(
            resolve_title("Of [UPCUSA the Civil Magistrate] [PCUS Magistrates]"),
            "Of the Civil Magistrate"
        );
    }

    #[test]
    fn test_lone_tags_are_unwrapped() {
        assert_eq!(
            resolve_variants("the [UPCUSA civil magistrate] shall"),
            "the civil magistrate shall"
        );
        assert_eq!(resolve_variants("a [PCUS lawful] oath"), "a lawful oath");
    }

    #[test]
    fn test_pair_needs_single_space_separator() {
        // Not adjacent, so both tags are unwrapped on their own
        assert_eq!(
            resolve_variants("[PCUS one]  [UPCUSA two]"),
            "one  two"
        );
    }

    #[test]
    fn test_multiple_annotations_resolve_globally() {
        assert_eq!(
            resolve_variants("[PCUS a] [UPCUSA b] and [PCUS c] [UPCUSA d]"),
            "b and d"
        );
    }

    #[test]
    fn test_untagged_and_unknown_tags_pass_through() {
        assert_eq!(resolve_title("  Of God  "), "Of God");
        assert_eq!(resolve_variants("[OPC text] stays"), "[OPC text] stays");
    }

    #[test]
    fn test_nested_tags_reach_fixpoint() {
        // Lone PCUS then lone UPCUSA unwrap this within one pass
        assert_eq!(resolve_title("Of [PCUS [UPCUSA the Law]]"), "Of the Law");

        // Same-tag nesting leaves a tag behind after one pass
        assert_eq!(resolve_variants("[PCUS [PCUS x]]"), "[PCUS x]");
        assert_eq!(resolve_title("[PCUS [PCUS x]]"), "x");
        assert_eq!(resolve_title("x"), "x");
    }

    #[test]
    fn test_resolve_title_is_idempotent_on_known_titles() {
        for raw in [
            "Of the Holy Scripture",
            "Of [PCUS Civil] [UPCUSA Civil Government] Matters",
            "Of [UPCUSA Marriage and Divorce] [PCUS Marriage]",
            "Of the [PCUS Lord's] Supper",
        ] {
            let once = resolve_title(raw);
            assert_eq!(resolve_title(&once), once, "not idempotent for {raw:?}");
        }
    }
}
