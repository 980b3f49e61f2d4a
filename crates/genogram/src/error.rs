//! Error types for genogram operations.
//!
//! This module provides the main error type [`GenogramError`]. Missing
//! partner or child references are deliberately absent from it: the layout
//! skips them instead of failing.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for genogram operations.
///
/// # Diagnostic Variants
///
/// The `Input` variant carries the decoded source text and, when the decoder
/// reported one, the byte range of the offending input. Outer surfaces use
/// these to point at the problem in rich error reports.
#[derive(Debug, Error)]
pub enum GenogramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Input {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Empty input: the dataset contains no people to lay out")]
    EmptyInput,

    #[error("Style error: {0}")]
    Style(String),
}

impl GenogramError {
    /// Create a new `Input` error with the associated source text.
    pub fn new_input_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Input {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}
