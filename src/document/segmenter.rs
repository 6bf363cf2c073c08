//! Chapter segmentation
//!
//! A single forward pass over the input lines. The only state is whether a
//! chapter is open and, if so, its number, raw title and collected lines.
//! Each classified line moves the state forward and may finish a section.

use tracing::debug;

use super::cleanup::normalize_content;
use super::models::{DropReason, DroppedChapter, Section, Segmentation};
use super::parsing::classify::{classify_line, LineKind};
use super::parsing::heading::{reconstruct_title, DEFAULT_TITLE_LOOKAHEAD};
use super::parsing::variant::resolve_title;
use super::topics::topics_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Lines after a header searched for the chapter title
    pub title_lookahead: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        SegmentOptions {
            title_lookahead: DEFAULT_TITLE_LOOKAHEAD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenChapter {
    number: u32,
    title: Option<String>,
    buffer: Vec<String>,
}

impl OpenChapter {
    fn finish(self) -> Result<Section, DroppedChapter> {
        let Some(raw_title) = self.title else {
            return Err(DroppedChapter {
                chapter: self.number,
                reason: DropReason::MissingTitle,
            });
        };

        let content = normalize_content(&self.buffer, Some(&raw_title));
        if content.is_empty() {
            return Err(DroppedChapter {
                chapter: self.number,
                reason: DropReason::EmptyContent,
            });
        }

        // Topics come from the raw title, so both variant readings count
        let topics = topics_for(&raw_title);
        let title = resolve_title(&raw_title);
        Ok(Section {
            chapter: self.number,
            title,
            content,
            topics,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SegmenterState {
    /// Before the first chapter header; everything is front matter
    Preamble,
    Accumulating(OpenChapter),
}

impl SegmenterState {
    fn current_title(&self) -> Option<&str> {
        match self {
            SegmenterState::Preamble => None,
            SegmenterState::Accumulating(chapter) => chapter.title.as_deref(),
        }
    }

    fn chapters_seen(&self) -> u32 {
        match self {
            SegmenterState::Preamble => 0,
            SegmenterState::Accumulating(chapter) => chapter.number,
        }
    }

    /// Close whatever is open and start chapter `number`
    fn open_chapter(self, number: u32, title: Option<String>) -> (Self, Option<OpenChapter>) {
        let next = SegmenterState::Accumulating(OpenChapter {
            number,
            title,
            buffer: Vec::new(),
        });
        match self {
            SegmenterState::Preamble => (next, None),
            SegmenterState::Accumulating(previous) => (next, Some(previous)),
        }
    }

    fn push_content(self, line: &str) -> Self {
        match self {
            SegmenterState::Preamble => SegmenterState::Preamble,
            SegmenterState::Accumulating(mut chapter) => {
                chapter.buffer.push(line.to_string());
                SegmenterState::Accumulating(chapter)
            }
        }
    }

    fn into_open_chapter(self) -> Option<OpenChapter> {
        match self {
            SegmenterState::Preamble => None,
            SegmenterState::Accumulating(chapter) => Some(chapter),
        }
    }
}

/// Split the confession into sections, dropping chapters without a title or content
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<Section> {
    segment_detailed(lines, &SegmentOptions::default()).sections
}

/// Like [`segment`], but also report how many headers were seen and what was dropped
pub fn segment_detailed<S: AsRef<str>>(lines: &[S], options: &SegmentOptions) -> Segmentation {
    let mut segmentation = Segmentation::default();
    let mut state = SegmenterState::Preamble;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        match classify_line(line, state.current_title()) {
            LineKind::ChapterHeader => {
                let number = state.chapters_seen() + 1;
                let title = reconstruct_title(lines, index, options.title_lookahead);
                debug!(chapter = number, title = ?title, line = index + 1, "chapter header");

                let (next, finished) = state.open_chapter(number, title);
                state = next;
                segmentation.headers_detected += 1;
                if let Some(chapter) = finished {
                    record(&mut segmentation, chapter.finish());
                }
            }
            LineKind::Content(text) => state = state.push_content(text),
            LineKind::Noise | LineKind::NumberedBookList | LineKind::BookList => {}
        }
    }

    if let Some(chapter) = state.into_open_chapter() {
        record(&mut segmentation, chapter.finish());
    }

    segmentation
}

fn record(segmentation: &mut Segmentation, outcome: Result<Section, DroppedChapter>) {
    match outcome {
        Ok(section) => segmentation.sections.push(section),
        Err(dropped) => {
            debug!(chapter = dropped.chapter, reason = ?dropped.reason, "chapter dropped");
            segmentation.dropped.push(dropped);
        }
    }
}
