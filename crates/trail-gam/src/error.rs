//! Error types for save file operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::layout::{FieldKind, RECORD_LEN};

/// Errors that can occur when decoding, encoding, reading or writing saves.
#[derive(Debug, Error)]
pub enum GamError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input is not exactly one record long.
    #[error("save record must be {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Text or raw value does not fit its field.
    #[error("value for {field} is {actual} bytes, field holds {width}")]
    ValueTooLong {
        field: &'static str,
        width: usize,
        actual: usize,
    },

    /// Integer value does not fit its field's type.
    #[error("value {value} for {field} is outside the {kind} range {min}..={max}")]
    ValueOutOfRange {
        field: &'static str,
        value: i64,
        kind: FieldKind,
        min: i64,
        max: i64,
    },

    /// Text cannot be represented in the save file's encoding.
    #[error("value for {field} cannot be encoded: {reason}")]
    Unencodable {
        field: &'static str,
        reason: &'static str,
    },

    /// No field with this name exists.
    #[error("unknown field: {name}")]
    UnknownField { name: String },

    /// Value does not match the field's kind.
    #[error("field {field} expects a {expected} value")]
    KindMismatch {
        field: &'static str,
        expected: FieldKind,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for save file operations.
pub type Result<T> = std::result::Result<T, GamError>;

impl GamError {
    /// Create a SizeMismatch error for an input of `actual` bytes.
    pub fn size_mismatch(actual: usize) -> Self {
        Self::SizeMismatch {
            expected: RECORD_LEN,
            actual,
        }
    }

    /// Create a ValueTooLong error.
    pub fn value_too_long(field: &'static str, width: usize, actual: usize) -> Self {
        Self::ValueTooLong {
            field,
            width,
            actual,
        }
    }

    /// Create a ValueOutOfRange error, filling in the kind's bounds.
    pub fn value_out_of_range(field: &'static str, value: i64, kind: FieldKind) -> Self {
        let (min, max) = kind.range().unwrap_or((0, 0));
        Self::ValueOutOfRange {
            field,
            value,
            kind,
            min,
            max,
        }
    }

    /// Create an UnknownField error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }
}
