// src/picker/outcome.rs
//! How a picker session ended, and its machine-readable form.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Exit status when a path was picked or named.
pub const EXIT_SELECTED: u8 = 0;
/// Exit status when the user cancelled.
pub const EXIT_CANCELLED: u8 = 1;
/// Exit status when the picker itself failed (terminal or I/O error).
pub const EXIT_FAILURE: u8 = 2;

/// Final result handed back to whoever launched the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// An existing file was picked, or a save target was named
    Selected(PathBuf),
    /// The user backed out
    Cancelled,
}

impl PickerOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            PickerOutcome::Selected(path) => Some(path),
            PickerOutcome::Cancelled => None,
        }
    }

    /// Process exit status: [`EXIT_SELECTED`] or [`EXIT_CANCELLED`].
    /// A picker that fails exits with [`EXIT_FAILURE`] instead.
    pub fn exit_code(&self) -> u8 {
        match self {
            PickerOutcome::Selected(_) => EXIT_SELECTED,
            PickerOutcome::Cancelled => EXIT_CANCELLED,
        }
    }

    pub fn to_record(&self) -> OutcomeRecord {
        match self {
            PickerOutcome::Selected(path) => OutcomeRecord {
                status: OutcomeStatus::Ok,
                file_path: Some(path.to_string_lossy().into_owned()),
                error: None,
            },
            PickerOutcome::Cancelled => OutcomeRecord {
                status: OutcomeStatus::Cancelled,
                file_path: None,
                error: None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Ok,
    Cancelled,
    Error,
}

/// JSON shape printed with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub status: OutcomeStatus,
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OutcomeRecord {
    /// Record for a picker that failed before producing an outcome.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Error,
            file_path: None,
            error: Some(message.into()),
        }
    }
}
