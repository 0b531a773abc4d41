//! Error types for the core emitters.
//!
//! Emitting markup itself cannot fail. The only fallible operation is turning
//! user-supplied color text into a [`Fill`](crate::color::Fill).

use thiserror::Error;

/// Errors raised while building emitter inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid color `{value}`: {reason}")]
    InvalidColor { value: String, reason: String },
}
