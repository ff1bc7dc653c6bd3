//! Error types for parameter collection and session I/O

use std::io;
use thiserror::Error;

/// Failures while collecting simulation parameters
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid value {value:?} for {field}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("input ended before {field} was entered")]
    UnexpectedEof { field: &'static str },

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Top-level error for a calculator session
#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}
