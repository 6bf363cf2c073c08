use confession::document::{normalize_content, resolve_title};
use proptest::prelude::*;

/// Fragments that combine into titles with well-formed, nested and broken tags
fn title_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z ,']{0,12}",
        "[a-z ]{1,8}".prop_map(|s| format!("[PCUS {s}]")),
        "[a-z ]{1,8}".prop_map(|s| format!("[UPCUSA {s}]")),
        Just("[PCUS ".to_string()),
        Just("[UPCUSA ".to_string()),
        Just("]".to_string()),
        Just(" ".to_string()),
    ]
}

fn raw_title() -> impl Strategy<Value = String> {
    prop::collection::vec(title_fragment(), 0..8).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn resolve_title_is_idempotent(raw in raw_title()) {
        let once = resolve_title(&raw);
        prop_assert_eq!(resolve_title(&once), once.clone());
    }

    #[test]
    fn resolved_title_has_no_surrounding_whitespace(raw in raw_title()) {
        let resolved = resolve_title(&raw);
        prop_assert_eq!(resolved.trim(), resolved.as_str());
    }

    #[test]
    fn normalized_content_has_no_whitespace_runs(lines in prop::collection::vec(raw_title(), 0..5)) {
        let content = normalize_content(&lines, None);
        prop_assert!(!content.contains("  "));
        prop_assert_eq!(content.trim(), content.as_str());
    }
}

#[test]
fn test_paired_variant_title() {
    assert_eq!(
        resolve_title("Of [PCUS Civil] [UPCUSA Civil Government] Matters"),
        "Of Civil Government Matters"
    );
}

#[test]
fn test_lone_variant_content() {
    assert_eq!(
        normalize_content(&["the [UPCUSA civil magistrate] shall"], None),
        "the civil magistrate shall"
    );
}

#[test]
fn test_reference_code_content() {
    assert_eq!(
        normalize_content(&["[6.001] All men are sinners."], None),
        "All men are sinners."
    );
}
