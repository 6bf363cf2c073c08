//! File I/O operations and validation
//!
//! Reading the source text and writing the JSON document. Parsing itself
//! never fails; everything that can go wrong lives here.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::models::Document;

#[derive(Debug, Error)]
pub enum ConfessionIoError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("input path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Validates that the input path exists and is a regular file
pub(crate) fn validate_input_file(file_path: &Path) -> Result<(), ConfessionIoError> {
    if !file_path.exists() {
        return Err(ConfessionIoError::InputNotFound(file_path.to_path_buf()));
    }

    if !file_path.is_file() {
        return Err(ConfessionIoError::NotAFile(file_path.to_path_buf()));
    }

    Ok(())
}

/// Read the whole source text and split it into lines
pub(crate) fn read_lines(file_path: &Path) -> Result<Vec<String>, ConfessionIoError> {
    validate_input_file(file_path)?;

    let text = fs::read_to_string(file_path).map_err(|source| ConfessionIoError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;

    Ok(text.lines().map(str::to_string).collect())
}

/// Serialize a document to JSON.
///
/// `indent` is the number of spaces per level; 0 produces compact output.
/// Non-ASCII text is written as-is.
pub fn document_to_json(document: &Document, indent: usize) -> Result<String, ConfessionIoError> {
    let mut buffer = Vec::new();

    if indent == 0 {
        serde_json::to_writer(&mut buffer, document)?;
    } else {
        let indent = " ".repeat(indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        document.serialize(&mut serializer)?;
    }

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the document in one go; nothing is written if serialization fails
pub fn write_document(
    document: &Document,
    output_path: &Path,
    indent: usize,
) -> Result<(), ConfessionIoError> {
    let json = document_to_json(document, indent)?;

    fs::write(output_path, json).map_err(|source| ConfessionIoError::Write {
        path: output_path.to_path_buf(),
        source,
    })
}
