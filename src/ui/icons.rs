// src/ui/icons.rs
//! Icon mappings for entries in the picker list.

use crate::fs::FileCategory;

/// Get the appropriate icon for a file or directory entry.
pub fn icon_for_entry(category: FileCategory) -> &'static str {
    match category {
        FileCategory::Folder => "\u{f07b}",
        FileCategory::Audio => "\u{f1c7}",
        FileCategory::Image => "\u{f1c5}",
        FileCategory::Video => "\u{f1c8}",
        FileCategory::Document => "\u{f15c}",
        FileCategory::Binary => "\u{f1c6}",
    }
}
