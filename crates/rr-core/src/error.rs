//! Core error type.
//!
//! Sub-crates define their own error enums and map `CoreError` into them
//! where it crosses their boundary.

use thiserror::Error;

/// Errors produced by `rr-core` conversions.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate {input:?}: {reason}")]
    InvalidCoordinate {
        input:  String,
        reason: &'static str,
    },
}

/// Shorthand result type for `rr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
