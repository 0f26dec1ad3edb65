// src/picker/mod.rs
//! Picker core - browser state, navigation, and session results.

pub mod outcome;
pub mod state;

pub use outcome::{
    OutcomeRecord, OutcomeStatus, PickerOutcome, EXIT_CANCELLED, EXIT_FAILURE, EXIT_SELECTED,
};
pub use state::{commit_save_filename, go_to_parent, navigate, BrowserState, Selection, Stage};
