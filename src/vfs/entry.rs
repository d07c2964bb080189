use std::path::{Path, PathBuf};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// An entry met while walking a subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,     // host path
    relative: PathBuf, // relative to the walk start, empty for the start itself
    entry_type: EntryType,
    depth: usize,
}

impl Entry {
    pub(crate) fn new(path: PathBuf, relative: PathBuf, entry_type: EntryType, depth: usize) -> Entry {
        Entry {
            path,
            relative,
            entry_type,
            depth,
        }
    }

    /// Host path of the entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path relative to the start of the walk.
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Distance from the walk start, which has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}
