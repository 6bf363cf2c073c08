//! Section search and navigation operations
//!
//! Read-only queries over a parsed document: outline generation, topic
//! filtering and case-insensitive full-text search.

use super::models::*;

pub fn search_sections(document: &Document, query: &str) -> Vec<SearchResult> {
    let mut results = Vec::new();
    let query = query.trim();
    if query.is_empty() {
        return results;
    }
    let query_lower = query.to_lowercase();

    for (section_index, section) in document.sections.iter().enumerate() {
        for (field, text) in [
            (SearchField::Title, &section.title),
            (SearchField::Content, &section.content),
        ] {
            if let Some((start_pos, end_pos)) = find_case_insensitive(text, &query_lower) {
                results.push(SearchResult {
                    section_index,
                    chapter: section.chapter,
                    field,
                    text: text.clone(),
                    start_pos,
                    end_pos,
                });
            }
        }
    }

    results
}

/// Find `query_lower` in the lowercased `text` and return the match as a byte
/// range of the original `text`.
///
/// Lowercasing can change byte lengths ("İ" becomes "i\u{307}"), so every
/// lowercased char remembers the original char it came from.
fn find_case_insensitive(text: &str, query_lower: &str) -> Option<(usize, usize)> {
    let mut lowered = String::with_capacity(text.len());
    // (offset in `lowered`, offset in `text`, byte length in `text`)
    let mut origins: Vec<(usize, usize, usize)> = Vec::with_capacity(text.len());

    for (offset, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            origins.push((lowered.len(), offset, ch.len_utf8()));
            lowered.push(lower);
        }
    }

    let start = lowered.find(query_lower)?;
    let last = start + query_lower.len() - 1;
    let origin_of = |pos: usize| origins[origins.partition_point(|&(at, _, _)| at <= pos) - 1];

    let (_, start_pos, _) = origin_of(start);
    let (_, last_offset, last_len) = origin_of(last);
    Some((start_pos, last_offset + last_len))
}

/// Sections tagged with `topic`, compared case-insensitively
pub fn sections_with_topic<'a>(document: &'a Document, topic: &str) -> Vec<&'a Section> {
    let topic = topic.trim().to_lowercase();
    document
        .sections
        .iter()
        .filter(|section| section.topics.iter().any(|t| t.to_lowercase() == topic))
        .collect()
}

pub fn generate_outline(document: &Document) -> Vec<OutlineItem> {
    document
        .sections
        .iter()
        .enumerate()
        .map(|(section_index, section)| OutlineItem {
            chapter: section.chapter,
            title: section.title.clone(),
            section_index,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        let section = |chapter: u32, title: &str, content: &str, topics: &[&str]| Section {
            chapter,
            title: title.to_string(),
            content: content.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        };
        Document::new(
            DocumentMetadata::default(),
            vec![
                section(1, "Of the Holy Scripture", "The light of nature.", &["scripture"]),
                section(3, "Of God's Eternal Decree", "God from all eternity.", &["god", "decrees"]),
            ],
        )
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        assert!(search_sections(&document(), "").is_empty());
        assert!(search_sections(&document(), "   ").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_content() {
        let results = search_sections(&document(), "GOD");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].field, SearchField::Title);
        assert_eq!(results[1].field, SearchField::Content);
        assert!(results.iter().all(|r| r.chapter == 3));
        assert_eq!(results[1].start_pos, 0);
        assert_eq!(results[1].end_pos, 3);
    }

    #[test]
    fn test_match_offsets_index_the_original_text() {
        let document = Document::new(
            DocumentMetadata::default(),
            vec![Section {
                chapter: 1,
                title: "Of Faith".to_string(),
                content: "İstanbul believers hold the faith.".to_string(),
                topics: vec!["faith".to_string()],
            }],
        );

        let results = search_sections(&document, "FAITH");
        assert_eq!(results.len(), 2);
        let content = &results[1];
        assert_eq!(content.field, SearchField::Content);
        assert_eq!(&content.text[content.start_pos..content.end_pos], "faith");

        let results = search_sections(&document, "istanbul");
        assert!(results.is_empty());
        let results = search_sections(&document, "i\u{307}stanbul");
        assert_eq!(&results[0].text[results[0].start_pos..results[0].end_pos], "İstanbul");
    }

    #[test]
    fn test_sections_with_topic() {
        let document = document();
        let hits = sections_with_topic(&document, "Decrees");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].chapter, 3);
        assert!(sections_with_topic(&document, "baptism").is_empty());
    }

    #[test]
    fn test_outline_keeps_emitted_numbering() {
        let outline = generate_outline(&document());
        assert_eq!(
            outline.iter().map(|item| item.chapter).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(outline[1].section_index, 1);
        assert_eq!(outline[1].title, "Of God's Eternal Decree");
    }
}
