// src/config/mod.rs
//! Launch parameters for a picker session.

use std::path::PathBuf;

/// Directory used when no initial directory is given.
pub const DEFAULT_INITIAL_DIRECTORY: &str = "/";

/// Options a picker session is started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// Directory the browser opens in
    pub initial_directory: PathBuf,
    /// Type a new file name instead of picking an existing file
    pub save_mode: bool,
    /// List entries whose names start with a dot
    pub show_hidden: bool,
    /// Accepted file name suffixes; empty accepts every file
    pub accepted_extensions: Vec<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_directory: PathBuf::from(DEFAULT_INITIAL_DIRECTORY),
            save_mode: false,
            show_hidden: false,
            accepted_extensions: Vec::new(),
        }
    }
}

impl PickerConfig {
    pub fn new(initial_directory: PathBuf) -> Self {
        Self {
            initial_directory,
            ..Self::default()
        }
    }

    pub fn with_save_mode(mut self, save_mode: bool) -> Self {
        self.save_mode = save_mode;
        self
    }

    pub fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    /// Set the accepted suffixes, verbatim and in order.
    pub fn with_accepted_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
}
