//! Filesystem entries as seen by the walker

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Classification of a filesystem entry.
///
/// Anything that is neither a plain file nor a directory (symlinks, sockets,
/// devices, unstatable paths) is `Other`: it sorts with files and is never
/// descended into, which also keeps symlink cycles out of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
    Other,
}

/// A filesystem node, immutable once read. The walker never mutates
/// filesystem state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    /// Classify `path` without following symlinks.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = classify(&path);
        Self { path, kind }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Final path component, or "." when there is none.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string())
    }
}

fn classify(path: &Path) -> EntryKind {
    match fs::symlink_metadata(path) {
        Ok(meta) => {
            let file_type = meta.file_type();
            if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            }
        }
        Err(_) => EntryKind::Other,
    }
}
