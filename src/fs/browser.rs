// src/fs/browser.rs
//! Directory listing: enumerate, filter, and order the children of a directory.

use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use super::detection::{category_for_path, FileCategory};

/// Leading character that marks a hidden entry.
pub const HIDDEN_PREFIX: char = '.';

/// One immediate child of a directory, as surfaced in the picker list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Full path of the entry (absolute when the listed directory is)
    pub path: PathBuf,
    /// Last path segment
    pub name: String,
    /// True for directories, including symlinks that resolve to one
    pub is_dir: bool,
    /// True when the name starts with [`HIDDEN_PREFIX`]
    pub is_hidden: bool,
    /// Icon category
    pub category: FileCategory,
}

impl DirectoryEntry {
    /// Build an entry from a path, probing the filesystem for its type.
    pub fn from_path(path: PathBuf) -> Self {
        let is_dir = path.is_dir();
        Self::with_kind(path, is_dir)
    }

    /// Build an entry with a known directory flag.
    pub fn with_kind(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let is_hidden = is_hidden_name(&name);
        let category = if is_dir {
            FileCategory::Folder
        } else {
            category_for_path(&path)
        };
        Self {
            path,
            name,
            is_dir,
            is_hidden,
            category,
        }
    }
}

impl Ord for DirectoryEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_entries(self, other)
    }
}

impl PartialOrd for DirectoryEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Directories first, then case-insensitive name, then byte-wise name.
pub fn compare_entries(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.path.cmp(&b.path))
}

/// Whether a name follows the hidden-file convention.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with(HIDDEN_PREFIX)
}

/// Whether a file name ends with one of `extensions`. An empty list accepts everything.
pub fn matches_extension(name: &str, extensions: &[String]) -> bool {
    extensions.is_empty() || extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Extension filter followed by the hidden-file rule.
pub fn is_visible(entry: &DirectoryEntry, extensions: &[String], show_hidden: bool) -> bool {
    if !entry.is_dir && !matches_extension(&entry.name, extensions) {
        return false;
    }
    show_hidden || !entry.is_hidden
}

/// List the immediate children of `dir` that pass the extension and hidden
/// filters, ordered with [`compare_entries`].
///
/// A directory that cannot be read yields an empty list.
pub fn list_directory(dir: &Path, extensions: &[String], show_hidden: bool) -> Vec<DirectoryEntry> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(err) => {
            debug!("cannot list {}: {}", dir.display(), err);
            return Vec::new();
        }
    };

    let mut entries: Vec<DirectoryEntry> = read
        .filter_map(Result::ok)
        .map(|e| DirectoryEntry::from_path(e.path()))
        .filter(|e| is_visible(e, extensions, show_hidden))
        .collect();
    entries.sort();

    debug!("listed {} entries in {}", entries.len(), dir.display());
    entries
}

/// Last `n` components of `path`, prefixed with `…/` when truncated.
pub fn tail_path(path: &Path, n: usize) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if n == 0 || parts.len() <= n {
        return path.display().to_string();
    }
    format!("…/{}", parts[parts.len() - n..].join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_directories_first_then_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir(root.join("B")).unwrap();
        std::fs::create_dir(root.join("c")).unwrap();
        std::fs::write(root.join("a.txt"), "").unwrap();
        std::fs::write(root.join("A.txt"), "").unwrap();

        let entries = list_directory(root, &exts(&[".txt"]), false);
        assert_eq!(names(&entries), vec!["B", "c", "A.txt", "a.txt"]);
        assert!(entries[0].is_dir);
        assert!(entries[1].is_dir);
        assert!(!entries[2].is_dir);
    }

    #[test]
    fn test_no_extensions_accepts_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("notes.md"), "").unwrap();
        std::fs::write(root.join("Zeta.bin"), "").unwrap();
        std::fs::write(root.join("alpha"), "").unwrap();
        std::fs::create_dir(root.join("zdir")).unwrap();

        let entries = list_directory(root, &[], false);
        assert_eq!(names(&entries), vec!["zdir", "alpha", "notes.md", "Zeta.bin"]);
    }

    #[test]
    fn test_extension_filter_keeps_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir(root.join("docs.dir")).unwrap();
        std::fs::write(root.join("keep.txt"), "").unwrap();
        std::fs::write(root.join("keep.csv"), "").unwrap();
        std::fs::write(root.join("drop.png"), "").unwrap();
        std::fs::write(root.join("upper.TXT"), "").unwrap();

        let entries = list_directory(root, &exts(&[".txt", ".csv"]), false);
        assert_eq!(names(&entries), vec!["docs.dir", "keep.csv", "keep.txt"]);
        for entry in entries.iter().filter(|e| !e.is_dir) {
            assert!(entry.name.ends_with(".txt") || entry.name.ends_with(".csv"));
        }
    }

    #[test]
    fn test_hidden_entries() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir(root.join(".cache")).unwrap();
        std::fs::write(root.join(".profile"), "").unwrap();
        std::fs::write(root.join("visible"), "").unwrap();

        let hidden_off = list_directory(root, &[], false);
        assert_eq!(names(&hidden_off), vec!["visible"]);

        let hidden_on = list_directory(root, &[], true);
        assert_eq!(names(&hidden_on), vec![".cache", ".profile", "visible"]);
        assert!(hidden_on[0].is_hidden);
    }

    #[test]
    fn test_hidden_rule_after_extension_filter() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join(".secret.txt"), "").unwrap();
        std::fs::write(root.join(".secret.log"), "").unwrap();

        let entries = list_directory(root, &exts(&[".txt"]), true);
        assert_eq!(names(&entries), vec![".secret.txt"]);
    }

    #[test]
    fn test_unreadable_paths_give_empty_listing() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(list_directory(&file, &[], true).is_empty());
        assert!(list_directory(&temp_dir.path().join("missing"), &[], true).is_empty());
        assert!(list_directory(temp_dir.path(), &[], true).len() == 1);
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_directory(temp_dir.path(), &[], false).is_empty());
    }

    #[test]
    fn test_entry_paths_are_children() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("one"), "").unwrap();

        let entries = list_directory(temp_dir.path(), &[], false);
        assert_eq!(entries[0].path, temp_dir.path().join("one"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_follow_their_target() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir(root.join("real")).unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("zlink")).unwrap();
        std::os::unix::fs::symlink(root.join("missing"), root.join("broken.txt")).unwrap();

        let entries = list_directory(root, &exts(&[".md"]), false);
        let kinds: Vec<(&str, bool)> = entries.iter().map(|e| (e.name.as_str(), e.is_dir)).collect();
        // The broken link is a file and fails the extension filter.
        assert_eq!(kinds, vec![("real", true), ("zlink", true)]);

        let all = list_directory(root, &[], false);
        let broken = all.iter().find(|e| e.name == "broken.txt").unwrap();
        assert!(!broken.is_dir);
        assert_eq!(all.last().unwrap().name, "broken.txt");
    }

    #[test]
    fn test_compare_is_total() {
        let a = DirectoryEntry::with_kind(PathBuf::from("/x/a.txt"), false);
        let same = DirectoryEntry::with_kind(PathBuf::from("/x/a.txt"), false);
        let upper = DirectoryEntry::with_kind(PathBuf::from("/x/A.txt"), false);
        let dir = DirectoryEntry::with_kind(PathBuf::from("/x/zz"), true);

        assert_eq!(compare_entries(&a, &same), Ordering::Equal);
        assert_eq!(compare_entries(&upper, &a), Ordering::Less);
        assert_eq!(compare_entries(&a, &upper), Ordering::Greater);
        assert_eq!(compare_entries(&dir, &upper), Ordering::Less);
    }

    #[test]
    fn test_matches_extension_is_case_sensitive_suffix() {
        let list = exts(&[".txt"]);
        assert!(matches_extension("a.txt", &list));
        assert!(matches_extension("txt.txt", &list));
        assert!(!matches_extension("a.TXT", &list));
        assert!(!matches_extension("a.txt.bak", &list));
        assert!(matches_extension("anything", &[]));
    }

    #[test]
    fn test_tail_path() {
        assert_eq!(tail_path(Path::new("/a/b/c/d"), 2), "…/c/d");
        assert_eq!(tail_path(Path::new("/a"), 3), "/a");
        assert_eq!(tail_path(Path::new("/"), 3), "/");
    }
}
