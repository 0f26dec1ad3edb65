// src/fs/detection.rs
//! Extension-based file categories, used to pick list icons.

use std::{fmt, path::Path};

use mime_guess::MimeGuess;

/// High-level entry categories.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FileCategory {
    Folder,
    Image,
    Audio,
    Video,
    Document,
    Binary,
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileCategory::Folder => "Folder",
            FileCategory::Image => "Image",
            FileCategory::Audio => "Audio",
            FileCategory::Video => "Video",
            FileCategory::Document => "Document",
            FileCategory::Binary => "Binary",
        };
        write!(f, "{}", s)
    }
}

/// Guess the category of a file from its extension. Never touches the file.
pub fn category_for_path(path: &Path) -> FileCategory {
    let Some(mime) = MimeGuess::from_path(path).first() else {
        return FileCategory::Binary;
    };

    match mime.type_().as_str() {
        "image" => FileCategory::Image,
        "audio" => FileCategory::Audio,
        "video" => FileCategory::Video,
        "text" => FileCategory::Document,
        "application" => match mime.subtype().as_str() {
            "octet-stream" => FileCategory::Binary,
            _ => FileCategory::Document,
        },
        _ => FileCategory::Binary,
    }
}
