//! Root binding and root-relative path resolution.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::core::{Error, Result};

/// An immutable base directory that logical paths are resolved against.
///
/// The root is fixed at construction. It does not have to exist yet
/// (see [`RootedFS::create_root_folder`](crate::RootedFS::create_root_folder)),
/// but if it does exist it must be a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    path: PathBuf, // host path, kept as given
}

impl Root {
    /// Binds a new root. Fails with [`Error::Config`] if `path` is empty or
    /// names an existing non-directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(Error::Config("root path is empty".into()));
        }
        if path.exists() && !path.is_dir() {
            return Err(Error::Config(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Returns root path related to the host file system.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Composes the root with `logical` and returns the host path.
    ///
    /// Both `/` and `\` act as separators and leading separators are ignored,
    /// so `"/a/b"`, `"a/b"` and `"a\\b"` all land on `<root>/a/b`. The result
    /// is not normalized: `..` is kept as is and may leave the root.
    /// An empty logical path yields the root itself.
    pub fn resolve<P: AsRef<Path>>(&self, logical: P) -> PathBuf {
        let mut resolved = self.path.clone();
        for component in logical.as_ref().components() {
            match component {
                Component::Normal(part) => push_segments(&mut resolved, part),
                Component::ParentDir => resolved.push(".."),
                // root-relative: drive prefixes and leading separators carry no meaning
                Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            }
        }
        resolved
    }
}

// On hosts where `\` is not a separator, split it out by hand.
fn push_segments(path: &mut PathBuf, part: &OsStr) {
    match part.to_str() {
        Some(text) if text.contains('\\') => {
            for segment in text.split('\\').filter(|s| !s.is_empty()) {
                match segment {
                    "." => {}
                    _ => path.push(segment),
                }
            }
        }
        _ => path.push(part),
    }
}
