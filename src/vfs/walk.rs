//! Lazy depth-first traversal of a host subtree.
//!
//! [`Walk`] yields every entry under a start path, the start included, either
//! before its children ([`Order::Pre`]) or after them ([`Order::Post`]).
//! Directory listings are read when a directory is first reached, and
//! children are visited in file-name order. Symlinks are reported as files and
//! never descended.

use std::path::{Path, PathBuf};

use log::trace;

use crate::core::{Error, Result};
use crate::{Entry, EntryType};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Order {
    /// A directory is yielded before its children.
    Pre,
    /// A directory is yielded after all of its children.
    Post,
}

struct Frame {
    entry: Entry,
    children: Option<std::vec::IntoIter<Entry>>, // None until the entry is visited
}

impl Frame {
    fn new(entry: Entry) -> Self {
        Self {
            entry,
            children: None,
        }
    }
}

/// Iterator over `Result<Entry>`; the first error ends the walk.
pub struct Walk {
    start: Option<PathBuf>,
    order: Order,
    pruned: Vec<PathBuf>,
    stack: Vec<Frame>,
}

impl Walk {
    pub fn new<P: AsRef<Path>>(start: P, order: Order) -> Self {
        Self {
            start: Some(start.as_ref().to_path_buf()),
            order,
            pruned: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Excludes the directory at `path`, and everything below it, from the walk.
    ///
    /// Directories are matched by their real location, so `path` may be spelled
    /// with `..` or go through symlinks. It must already exist.
    pub fn prune<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();
        let real = std::fs::canonicalize(path).map_err(|e| Error::from_io(path, e))?;
        self.pruned.push(real);
        Ok(self)
    }

    fn is_pruned(&self, dir: &Path) -> Result<bool> {
        if self.pruned.is_empty() {
            return Ok(false);
        }
        let real = std::fs::canonicalize(dir).map_err(|e| Error::from_io(dir, e))?;
        Ok(self.pruned.contains(&real))
    }

    fn fail(&mut self, err: Error) -> Option<Result<Entry>> {
        self.stack.clear();
        Some(Err(err))
    }

    fn read_children(&self, parent: &Entry) -> Result<Vec<Entry>> {
        let dir = parent.path();
        let mut children = Vec::new();
        for item in std::fs::read_dir(dir).map_err(|e| Error::from_io(dir, e))? {
            let item = item.map_err(|e| Error::from_io(dir, e))?;
            let path = item.path();
            let file_type = item.file_type().map_err(|e| Error::from_io(&path, e))?;
            let entry_type = if file_type.is_dir() {
                EntryType::Directory
            } else {
                EntryType::File
            };
            if entry_type == EntryType::Directory && self.is_pruned(&path)? {
                trace!("walk: pruned {}", path.display());
                continue;
            }
            let relative = parent.relative().join(item.file_name());
            children.push(Entry::new(path, relative, entry_type, parent.depth() + 1));
        }
        children.sort_by(|a, b| a.path().cmp(b.path()));
        Ok(children)
    }
}

impl Iterator for Walk {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            let meta = match std::fs::symlink_metadata(&start) {
                Ok(meta) => meta,
                Err(e) => return self.fail(Error::from_io(&start, e)),
            };
            let entry_type = if meta.is_dir() {
                EntryType::Directory
            } else {
                EntryType::File
            };
            self.stack
                .push(Frame::new(Entry::new(start, PathBuf::new(), entry_type, 0)));
        }

        loop {
            let frame = self.stack.last()?;

            if frame.children.is_none() {
                let children = if frame.entry.is_dir() {
                    match self.read_children(&frame.entry) {
                        Ok(children) => children,
                        Err(e) => return self.fail(e),
                    }
                } else {
                    Vec::new()
                };
                let frame = self.stack.last_mut()?;
                frame.children = Some(children.into_iter());
                if self.order == Order::Pre {
                    trace!("walk: {}", frame.entry.path().display());
                    return Some(Ok(frame.entry.clone()));
                }
                continue;
            }

            let next_child = self
                .stack
                .last_mut()
                .and_then(|frame| frame.children.as_mut())
                .and_then(Iterator::next);
            match next_child {
                Some(child) => self.stack.push(Frame::new(child)),
                None => {
                    let frame = self.stack.pop()?;
                    if self.order == Order::Post {
                        trace!("walk: {}", frame.entry.path().display());
                        return Some(Ok(frame.entry));
                    }
                }
            }
        }
    }
}
