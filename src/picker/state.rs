// src/picker/state.rs
//! Browser state and the navigation operations that move it.

use std::{
    ffi::OsString,
    path::{self, Path, PathBuf, MAIN_SEPARATOR_STR},
};

use log::{debug, info};

use crate::{
    config::PickerConfig,
    error::PickerError,
    fs::{list_directory, DirectoryEntry},
};

use super::outcome::PickerOutcome;

/// Where a picker session is browsing, and what it lists there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    current_dir: PathBuf,
    accepted_extensions: Vec<String>,
    show_hidden: bool,
}

impl BrowserState {
    pub fn new(current_dir: PathBuf, accepted_extensions: Vec<String>, show_hidden: bool) -> Self {
        Self {
            current_dir: absolutize(current_dir),
            accepted_extensions,
            show_hidden,
        }
    }

    pub fn from_config(config: &PickerConfig) -> Self {
        Self::new(
            config.initial_directory.clone(),
            config.accepted_extensions.clone(),
            config.show_hidden,
        )
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn accepted_extensions(&self) -> &[String] {
        &self.accepted_extensions
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// Same session settings, different directory.
    fn at(&self, dir: PathBuf) -> Self {
        Self {
            current_dir: dir,
            accepted_extensions: self.accepted_extensions.clone(),
            show_hidden: self.show_hidden,
        }
    }

    /// Filtered, ordered children of the current directory.
    pub fn list(&self) -> Vec<DirectoryEntry> {
        list_directory(&self.current_dir, &self.accepted_extensions, self.show_hidden)
    }
}

/// What activating a list entry leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Keep browsing inside the entry
    Directory(BrowserState),
    /// The session is done with this file
    File(PathBuf),
}

/// Lifecycle of a picker session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Browsing,
    Finished(PickerOutcome),
}

impl Stage {
    pub fn is_finished(&self) -> bool {
        matches!(self, Stage::Finished(_))
    }
}

/// Activate `entry`: enter it when it is a directory, select it otherwise.
pub fn navigate(state: &BrowserState, entry: &DirectoryEntry) -> Selection {
    if entry.is_dir {
        debug!("entering {}", entry.path.display());
        Selection::Directory(state.at(absolutize(entry.path.clone())))
    } else {
        let path = absolutize(entry.path.clone());
        info!("selected {}", path.display());
        Selection::File(path)
    }
}

/// Move to the parent directory. At the filesystem root the state is returned unchanged.
pub fn go_to_parent(state: &BrowserState) -> BrowserState {
    match state.current_dir.parent() {
        Some(parent) => {
            debug!("leaving {} for {}", state.current_dir.display(), parent.display());
            state.at(parent.to_path_buf())
        }
        None => state.clone(),
    }
}

/// Build the save target from a typed name: current directory, separator, trimmed name.
///
/// The result is not checked for existence or sanitized.
pub fn commit_save_filename(state: &BrowserState, typed_name: &str) -> Result<PathBuf, PickerError> {
    let name = typed_name.trim();
    if name.is_empty() {
        return Err(PickerError::EmptyFileName);
    }

    let mut joined: OsString = state.current_dir.as_os_str().to_os_string();
    joined.push(MAIN_SEPARATOR_STR);
    joined.push(name);

    let target = PathBuf::from(joined);
    info!("save target {}", target.display());
    Ok(target)
}

fn absolutize(dir: PathBuf) -> PathBuf {
    if dir.is_absolute() {
        return dir;
    }
    path::absolute(&dir).unwrap_or(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state_at(dir: &Path) -> BrowserState {
        BrowserState::new(dir.to_path_buf(), Vec::new(), false)
    }

    #[test]
    fn test_from_config_is_absolute() {
        let config = PickerConfig::new(PathBuf::from("relative/dir"))
            .with_show_hidden(true)
            .with_accepted_extensions([".txt"]);
        let state = BrowserState::from_config(&config);

        assert!(state.current_dir().is_absolute());
        assert!(state.current_dir().ends_with("relative/dir"));
        assert!(state.show_hidden());
        assert_eq!(state.accepted_extensions(), &[".txt".to_string()]);
    }

    #[test]
    fn test_navigate_into_directory() {
        let temp_dir = TempDir::new().unwrap();
        let sub = temp_dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("inner.txt"), "").unwrap();

        let state = BrowserState::new(temp_dir.path().to_path_buf(), vec![".txt".into()], true);
        let entries = state.list();
        assert_eq!(entries.len(), 1);

        match navigate(&state, &entries[0]) {
            Selection::Directory(next) => {
                assert_eq!(next.current_dir(), sub.as_path());
                assert_eq!(next.accepted_extensions(), state.accepted_extensions());
                assert!(next.show_hidden());
                assert_eq!(next.list()[0].name, "inner.txt");
            }
            other => panic!("expected directory, got {:?}", other),
        }
    }

    #[test]
    fn test_navigate_into_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("pick.me");
        std::fs::write(&file, "").unwrap();

        let state = state_at(temp_dir.path());
        let entries = state.list();

        assert_eq!(navigate(&state, &entries[0]), Selection::File(file));
    }

    #[test]
    fn test_go_to_parent() {
        let temp_dir = TempDir::new().unwrap();
        let sub = temp_dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();

        let parent = go_to_parent(&state_at(&sub));
        assert_eq!(parent.current_dir(), temp_dir.path());
    }

    #[test]
    fn test_go_to_parent_at_root_is_noop() {
        let root = state_at(Path::new("/"));
        assert_eq!(go_to_parent(&root), root);
    }

    #[test]
    fn test_commit_rejects_blank_names() {
        let state = state_at(Path::new("/tmp"));
        assert_eq!(commit_save_filename(&state, ""), Err(PickerError::EmptyFileName));
        assert_eq!(commit_save_filename(&state, "  "), Err(PickerError::EmptyFileName));
        assert_eq!(commit_save_filename(&state, "\t\n"), Err(PickerError::EmptyFileName));
    }

    #[test]
    fn test_commit_joins_trimmed_name() {
        let state = state_at(Path::new("/tmp/out"));
        let expected = format!("/tmp/out{}a.txt", MAIN_SEPARATOR_STR);

        assert_eq!(commit_save_filename(&state, "a.txt").unwrap(), PathBuf::from(&expected));
        assert_eq!(commit_save_filename(&state, "  a.txt \n").unwrap(), PathBuf::from(&expected));
    }

    #[test]
    fn test_commit_is_verbatim() {
        let state = state_at(Path::new("/tmp"));
        let target = commit_save_filename(&state, "../etc/x y").unwrap();
        assert_eq!(target.as_os_str(), "/tmp/../etc/x y");
    }

    #[test]
    fn test_stage() {
        assert_eq!(Stage::default(), Stage::Browsing);
        assert!(!Stage::Browsing.is_finished());
        assert!(Stage::Finished(PickerOutcome::Cancelled).is_finished());
    }
}
