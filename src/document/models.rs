//! Core data structures for the parsed confession
//!
//! This module defines the public types produced by the segmenter and
//! written by the exporter: sections, document metadata and the read-only
//! query results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_TITLE: &str = "Westminster Confession of Faith";
pub const DEFAULT_KIND: &str = "confession";
pub const DEFAULT_DATE: &str = "1647";

/// Fallback topic for sections whose title matches no key phrase
pub const FALLBACK_TOPIC: &str = "theology";

/// One emitted chapter of the confession
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Positional chapter number, serialized as a string
    #[serde(with = "chapter_number")]
    pub chapter: u32,
    pub title: String,
    pub content: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        DocumentMetadata {
            title: DEFAULT_TITLE.to_string(),
            kind: DEFAULT_KIND.to_string(),
            date: DEFAULT_DATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    pub metadata: DocumentMetadata,
    /// Sorted, de-duplicated union of every section's topics
    pub topics: Vec<String>,
    pub sections: Vec<Section>,
}

impl Document {
    /// Assemble a document, deriving the global topic index from the sections
    pub fn new(metadata: DocumentMetadata, sections: Vec<Section>) -> Self {
        let topics: BTreeSet<&str> = sections
            .iter()
            .flat_map(|section| section.topics.iter().map(String::as_str))
            .collect();

        Document {
            metadata,
            topics: topics.into_iter().map(str::to_string).collect(),
            sections,
        }
    }
}

/// Why a detected chapter produced no section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// No line starting with "Of " within the title lookahead
    MissingTitle,
    /// Normalized content came out empty
    EmptyContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedChapter {
    pub chapter: u32,
    pub reason: DropReason,
}

/// Full result of a segmentation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    pub sections: Vec<Section>,
    pub headers_detected: u32,
    pub dropped: Vec<DroppedChapter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineItem {
    pub chapter: u32,
    pub title: String,
    pub section_index: usize,
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub section_index: usize,
    pub chapter: u32,
    pub field: SearchField,
    pub text: String,
    /// Byte range of the match within `text`
    pub start_pos: usize,
    pub end_pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Content,
}

mod chapter_number {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(chapter: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(chapter)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(chapter: u32, topics: &[&str]) -> Section {
        Section {
            chapter,
            title: format!("Of Chapter {chapter}"),
            content: "Body.".to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_document_topics_are_sorted_union() {
        let document = Document::new(
            DocumentMetadata::default(),
            vec![
                section(1, &["scripture", "authority"]),
                section(2, &["god", "authority", "god"]),
            ],
        );

        assert_eq!(document.topics, vec!["authority", "god", "scripture"]);
        // Per-section lists keep their duplicates
        assert_eq!(document.sections[1].topics, vec!["god", "authority", "god"]);
    }

    #[test]
    fn test_chapter_serializes_as_string() {
        let json = serde_json::to_value(section(7, &["law"])).unwrap();
        assert_eq!(json["chapter"], serde_json::json!("7"));

        let back: Section = serde_json::from_value(json).unwrap();
        assert_eq!(back.chapter, 7);
    }

    #[test]
    fn test_document_shape() {
        let document = Document::new(DocumentMetadata::default(), vec![section(1, &["law"])]);
        let json = serde_json::to_value(&document).unwrap();

        assert_eq!(json["title"], "Westminster Confession of Faith");
        assert_eq!(json["type"], "confession");
        assert_eq!(json["date"], "1647");
        assert_eq!(json["topics"], serde_json::json!(["law"]));
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn test_empty_document_has_no_topics() {
        let document = Document::new(DocumentMetadata::default(), Vec::new());
        assert!(document.topics.is_empty());
        assert!(document.sections.is_empty());
    }
}
