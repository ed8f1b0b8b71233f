//! Previous/next file browsing within a folder.
//!
//! The sibling list is the files of the current file's directory, symlinks
//! followed, in whatever order `read_dir` yields them. That order is not
//! sorted and is only assumed stable for the length of a browsing session. The listing is taken
//! fresh on every step so files added or removed in the meantime are seen.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Direction of a sibling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// The current file and a snapshot of its directory listing.
#[derive(Debug, Clone)]
pub struct NavigationContext {
    current: PathBuf,
    siblings: Vec<OsString>,
    index: Option<usize>,
}

impl NavigationContext {
    /// List the directory containing `current`.
    ///
    /// Returns `None` when `current` no longer exists or its directory cannot
    /// be read.
    pub fn scan(current: &Path) -> Option<Self> {
        if !current.is_file() {
            return None;
        }
        let dir = match current.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("cannot list {}: {e}", dir.display());
                return None;
            }
        };

        let siblings: Vec<OsString> = entries
            .filter_map(|entry| entry.ok())
            // Follows symlinks, like `current.is_file()` above.
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name())
            .collect();

        let index = current
            .file_name()
            .and_then(|name| siblings.iter().position(|s| s == name));

        Some(Self {
            current: current.to_path_buf(),
            siblings,
            index,
        })
    }

    /// Number of files in the directory.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Whether stepping can land on a different file.
    pub fn can_navigate(&self) -> bool {
        self.siblings.len() > 1
    }

    /// The neighbouring file, wrapping at both ends.
    ///
    /// `None` when there is nothing to step to: fewer than two files, or the
    /// current file is missing from the listing.
    pub fn step(&self, direction: Direction) -> Option<PathBuf> {
        if !self.can_navigate() {
            return None;
        }
        let index = self.index?;
        let len = self.siblings.len();
        let target = match direction {
            Direction::Previous => (index + len - 1) % len,
            Direction::Next => (index + 1) % len,
        };
        Some(self.current.with_file_name(&self.siblings[target]))
    }
}

/// Step from `current` to its previous or next sibling.
///
/// Every failure case is a no-op that returns `current` unchanged.
pub fn step(current: &Path, direction: Direction) -> PathBuf {
    match NavigationContext::scan(current).and_then(|ctx| ctx.step(direction)) {
        Some(path) => path,
        None => {
            tracing::debug!(path = %current.display(), ?direction, "sibling step is a no-op");
            current.to_path_buf()
        }
    }
}
