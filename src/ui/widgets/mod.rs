// src/ui/widgets/mod.rs
//! Widgets for the picker screen.

pub mod file_list;
pub mod filename_input;
pub mod header;
pub mod help_bar;

// Re-export widget rendering functions
pub use file_list::{render_file_list, EMPTY_LIST_TEXT};
pub use filename_input::render_filename_input;
pub use header::render_header;
pub use help_bar::{help_text, render_help_bar};
