// src/fs/mod.rs
//! Filesystem module - handles directory listing and file categories.

pub mod browser;
pub mod detection;

// Re-export commonly used types
pub use browser::{
    compare_entries, is_hidden_name, list_directory, matches_extension, tail_path,
    DirectoryEntry, HIDDEN_PREFIX,
};
pub use detection::{category_for_path, FileCategory};
