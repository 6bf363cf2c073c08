//! Line-level parsing utilities
//!
//! This module contains the pure pieces the segmenter is built from:
//! header and title detection, line classification, scripture book tables
//! and variant annotation resolution.

pub(crate) mod books;
pub(crate) mod classify;
pub(crate) mod heading;
pub(crate) mod variant;
