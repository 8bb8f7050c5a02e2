use std::fmt;
use std::io;

use crate::arguments::ValidationError;

/// Errors surfaced by the mining pipeline. I/O errors are returned
/// unchanged under the phase that hit them; there is no retry and no
/// partial-result recovery.
#[derive(Debug)]
pub enum MineError {
    /// The transactions file could not be opened.
    InputOpen(io::Error),
    /// Reading the transactions file failed mid-pass.
    InputRead(io::Error),
    /// Creating or writing an output file failed.
    OutputWrite(io::Error),
    /// A threshold was out of range.
    Validation(ValidationError),
    /// An invariant of the mining engine was violated.
    Internal(String),
}

impl fmt::Display for MineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MineError::InputOpen(err) => write!(f, "failed to open transactions file: {err}"),
            MineError::InputRead(err) => write!(f, "failed to read transactions file: {err}"),
            MineError::OutputWrite(err) => write!(f, "failed to write output file: {err}"),
            MineError::Validation(err) => write!(f, "invalid arguments: {err}"),
            MineError::Internal(msg) => write!(f, "internal invariant violated: {msg}"),
        }
    }
}

impl std::error::Error for MineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MineError::InputOpen(err) | MineError::InputRead(err) | MineError::OutputWrite(err) => {
                Some(err)
            }
            MineError::Validation(err) => Some(err),
            MineError::Internal(_) => None,
        }
    }
}

impl From<ValidationError> for MineError {
    fn from(err: ValidationError) -> Self {
        MineError::Validation(err)
    }
}
