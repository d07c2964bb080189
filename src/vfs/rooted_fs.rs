//! This module provides a filesystem view that is scoped to one directory on the host.
//!
//! ### Key Features:
//! - **Fixed root**: Every logical path is resolved against the root given at construction.
//! - **Implicit parents**: Write-like operations create missing intermediate directories.
//! - **Idempotent removal**: Deleting something that is already gone is not an error.
//! - **Tree operations**: Recursive copy (pre-order) and recursive delete (post-order),
//!   both driven by [`Walk`].
//!
//! ### Limitations:
//! Operations are synchronous and take no locks. Concurrent calls that touch
//! overlapping subtrees get whatever the host filesystem gives them. Nothing is
//! transactional: a failed recursive operation leaves its partial effects in place.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::{Error, Result, utils};
use crate::vfs::root::Root;
use crate::vfs::walk::{Order, Walk};
use crate::{Entry, EntryType};

/// A filesystem view rooted at a host directory.
///
/// `RootedFS` holds nothing but its [`Root`]; each call resolves its paths afresh.
/// Mutating operations return `&Self` so calls can be chained.
///
/// ### Example:
/// ```
/// use rooted_fs::RootedFS;
///
/// let root = std::env::temp_dir().join("rooted_fs_doc");
/// let fs = RootedFS::new(&root).unwrap();
///
/// fs.write_file("docs/note.txt", "Hello").unwrap()
///     .append_file("docs/note.txt", ", World").unwrap();
/// assert_eq!(fs.read_to_string("docs/note.txt").unwrap(), "Hello, World");
///
/// fs.delete_root_recursively().unwrap();
/// assert!(!root.exists());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootedFS {
    root: Root,
}

impl RootedFS {
    /// Creates a view rooted at `root`. The directory is not created here,
    /// see [`create_root_folder`](Self::create_root_folder).
    /// Fails with [`Error::Config`] if `root` is empty or is not a directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        Ok(Self::from_root(Root::new(root)?))
    }

    pub fn from_root(root: Root) -> Self {
        Self { root }
    }

    /// Returns root path related to the host file system.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Returns the host path for a logical path. See [`Root::resolve`].
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.root.resolve(path)
    }

    /// Checks if anything exists at `path`. A final symlink is not followed.
    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        utils::is_present(self.resolve(path))
    }

    /// Returns a lazy walk over the subtree at `path` (the entry itself included).
    pub fn walk<P: AsRef<Path>>(&self, path: P, order: Order) -> Walk {
        Walk::new(self.resolve(path), order)
    }

    /// Reads the entire contents of a file.
    /// Returns [`Error::NotFound`] if there is no such file.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Vec<u8>> {
        let host = self.resolve(path);
        std::fs::read(&host).map_err(|e| Error::from_io(&host, e))
    }

    /// Reads the entire contents of a file as UTF-8 text.
    pub fn read_to_string<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let host = self.resolve(path);
        let bytes = std::fs::read(&host).map_err(|e| Error::from_io(&host, e))?;
        String::from_utf8(bytes).map_err(|source| Error::InvalidUtf8 { path: host, source })
    }

    /// Writes `content` to a file, replacing its entire contents.
    /// The file and any missing parent directories are created.
    pub fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(&self, path: P, content: C) -> Result<&Self> {
        let host = self.resolve(path);
        let content = content.as_ref();
        debug!("write {} ({} bytes)", host.display(), content.len());

        utils::ensure_parent(&host)?;
        std::fs::write(&host, content).map_err(|e| Error::from_io(&host, e))?;
        Ok(self)
    }

    /// Appends `content` to the end of a file, preserving its old contents.
    /// The file and any missing parent directories are created.
    pub fn append_file<P: AsRef<Path>, C: AsRef<[u8]>>(&self, path: P, content: C) -> Result<&Self> {
        let host = self.resolve(path);
        let content = content.as_ref();
        debug!("append {} ({} bytes)", host.display(), content.len());

        utils::ensure_parent(&host)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&host)
            .map_err(|e| Error::from_io(&host, e))?;
        file.write_all(content).map_err(|e| Error::from_io(&host, e))?;
        Ok(self)
    }

    /// Creates a new empty file. Missing parent directories are created.
    /// Returns [`Error::AlreadyExists`] if something is already at `path`;
    /// an existing file is never truncated.
    pub fn create_file<P: AsRef<Path>>(&self, path: P) -> Result<&Self> {
        let host = self.resolve(path);
        debug!("create {}", host.display());

        utils::ensure_parent(&host)?;
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&host)
            .map_err(|e| Error::from_io(&host, e))?;
        Ok(self)
    }

    /// Removes a file (or symlink, or empty directory). Does nothing if `path` is absent.
    pub fn delete_file<P: AsRef<Path>>(&self, path: P) -> Result<&Self> {
        let host = self.resolve(path);
        if !utils::is_present(&host) {
            return Ok(self);
        }
        debug!("delete {}", host.display());

        utils::rm_on_host(&host)?;
        Ok(self)
    }

    /// Creates directory and all its parents (if needed). Existing directories are fine.
    pub fn create_folders<P: AsRef<Path>>(&self, path: P) -> Result<&Self> {
        let host = self.resolve(path);
        debug!("mkdir {}", host.display());

        utils::mkdir_all(&host)?;
        Ok(self)
    }

    /// Creates the root directory and all its parents (if needed).
    pub fn create_root_folder(&self) -> Result<&Self> {
        self.create_folders("")
    }

    /// Removes `path` and everything below it. Does nothing if `path` is absent.
    ///
    /// Entries are removed children first, so a directory is only removed once
    /// it is empty. The first failure stops the walk; whatever was removed
    /// before it stays removed.
    pub fn delete_folder_recursively<P: AsRef<Path>>(&self, path: P) -> Result<&Self> {
        let host = self.resolve(path);
        if !utils::is_present(&host) {
            return Ok(self);
        }
        debug!("delete tree {}", host.display());

        let mut removed = 0usize;
        for entry in Walk::new(&host, Order::Post) {
            utils::rm_on_host(entry?.path())?;
            removed += 1;
        }

        debug!("delete tree {}: {} entries removed", host.display(), removed);
        Ok(self)
    }

    /// Removes the root directory and everything below it.
    pub fn delete_root_recursively(&self) -> Result<&Self> {
        self.delete_folder_recursively("")
    }

    /// Copies the subtree at `from` to `to`, both relative to the root.
    ///
    /// Directories are created before their contents are copied, and existing
    /// destination directories are reused. Files are never overwritten: a file
    /// already present at a destination path fails with [`Error::AlreadyExists`]
    /// and stops the copy, leaving what was copied so far in place.
    ///
    /// If `from` is a file, it is copied to `to`. If `to` lies inside `from`,
    /// however it is spelled, the destination subtree is skipped while walking
    /// the source.
    pub fn copy_from_to<F: AsRef<Path>, T: AsRef<Path>>(&self, from: F, to: T) -> Result<&Self> {
        let src = self.resolve(from);
        let dst = self.resolve(to);
        debug!("copy {} -> {}", src.display(), dst.display());

        let mut walk = Walk::new(&src, Order::Pre);
        let src_is_dir = std::fs::symlink_metadata(&src).is_ok_and(|meta| meta.is_dir());
        if src_is_dir {
            // the destination has to exist to be pruned by its real location
            utils::mkdir_all(&dst)?;
            walk = walk.prune(&dst)?;
        }

        let (mut dirs, mut files) = (0usize, 0usize);
        for entry in walk {
            let entry = entry?;
            let target = utils::rebase(&dst, entry.relative());
            match entry.entry_type() {
                EntryType::Directory => {
                    utils::mkdir_all(&target)?;
                    dirs += 1;
                }
                EntryType::File => {
                    if entry.depth() == 0 {
                        utils::ensure_parent(&target)?;
                    }
                    Self::copy_file(&entry, &target)?;
                    files += 1;
                }
            }
        }

        debug!(
            "copy {} -> {}: {} directories, {} files",
            src.display(),
            dst.display(),
            dirs,
            files
        );
        Ok(self)
    }

    /// Copies one file's bytes into a destination that must not exist yet.
    fn copy_file(entry: &Entry, target: &Path) -> Result<u64> {
        let src = entry.path();
        let mut reader = std::fs::File::open(src).map_err(|e| Error::from_io(src, e))?;
        let mut writer = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(target)
            .map_err(|e| Error::from_io(target, e))?;
        std::io::copy(&mut reader, &mut writer).map_err(|e| Error::from_io(target, e))
    }
}
