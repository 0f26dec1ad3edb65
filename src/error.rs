// src/error.rs
//! Errors produced by the picker core.

use thiserror::Error;

/// Rejections from picker operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The typed save name was empty after trimming whitespace
    #[error("file name is empty")]
    EmptyFileName,
}
