//! Error types for Strata operations.
//!
//! This module provides the main error type [`StrataError`] which wraps the
//! error conditions that can occur while loading and assembling a diagram.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for Strata operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text and, when known, the byte span
/// of the offending input so callers can point at it.
#[derive(Debug, Error)]
pub enum StrataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Parse {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StrataError {
    /// Create a new `Parse` error from a TOML error and the source it came from.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }
}
