//! confession: structured extraction for the Westminster Confession of Faith
//!
//! This library splits the plain-text confession into chapters, resolves
//! PCUS/UPCUSA variant readings, drops scripture book lists and reference
//! codes, tags each chapter with topics and exports the result as JSON.

pub mod config;
pub mod document;

/// Output format options
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// The JSON document (written to the output path)
    #[default]
    Json,
    /// Chapter number and title, one per line
    Outline,
}

// Re-export commonly used types
pub use config::Config;
pub use document::{load_confession, parse_confession, segment, Document, Section};
