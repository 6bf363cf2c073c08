//! Document loading and orchestration
//!
//! Reads the source text, runs the segmenter and assembles the final
//! `Document` with its metadata and topic index.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use super::io::read_lines;
use super::models::{Document, DocumentMetadata};
use super::segmenter::{segment_detailed, SegmentOptions};

/// Build a document from lines already in memory
pub fn parse_confession<S: AsRef<str>>(
    lines: &[S],
    metadata: DocumentMetadata,
    options: &SegmentOptions,
) -> Document {
    let segmentation = segment_detailed(lines, options);

    info!(
        headers = segmentation.headers_detected,
        sections = segmentation.sections.len(),
        dropped = segmentation.dropped.len(),
        "segmented confession"
    );

    Document::new(metadata, segmentation.sections)
}

/// Main loading function: read the text file and parse it into a Document
pub fn load_confession(
    file_path: &Path,
    metadata: DocumentMetadata,
    options: &SegmentOptions,
) -> Result<Document> {
    let lines = read_lines(file_path)?;
    debug!(path = %file_path.display(), lines = lines.len(), "read source text");

    Ok(parse_confession(&lines, metadata, options))
}
