// src/lib.rs
//! Filepick - a terminal file picker.
//!
//! Browse directories, then pick an existing file or name a new one to save.

pub mod app;
pub mod config;
pub mod error;
pub mod fs;
pub mod picker;
pub mod ui;

pub use config::PickerConfig;
pub use error::PickerError;
pub use picker::PickerOutcome;
