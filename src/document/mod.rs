//! Confession parsing and data structures module
//!
//! This module turns the plain-text confession into a structured
//! `Document`: chapter segmentation, title and content cleanup, topic
//! tagging, JSON export and read-only queries.

pub(crate) mod cleanup;
pub mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;
pub mod query;
pub mod segmenter;
pub mod topics;

// Re-export the public API
pub use cleanup::normalize_content;
pub use io::{document_to_json, write_document, ConfessionIoError};
pub use loader::{load_confession, parse_confession};
pub use models::*;
pub use parsing::heading::DEFAULT_TITLE_LOOKAHEAD;
pub use parsing::variant::resolve_title;
pub use query::*;
pub use segmenter::{segment, segment_detailed, SegmentOptions};
pub use topics::{topics_for, TOPIC_TABLE};
