use std::path::{Path, PathBuf};

use crate::core::{Error, Result};

/// Returns true if something (file, directory or link) is present at `path`.
/// A final symlink is not followed, so dangling links count as present.
pub fn is_present<P: AsRef<Path>>(path: P) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Creates the whole directory chain up to `path`. Existing directories are reused.
pub fn mkdir_all<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path).map_err(|e| Error::from_io(path, e))
}

/// Creates the parent directories of the host file `path`, if any.
pub fn ensure_parent<P: AsRef<Path>>(path: P) -> Result<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => mkdir_all(parent),
        _ => Ok(()),
    }
}

/// Removes a single host entry: a file, a symlink or an empty directory.
pub fn rm_on_host<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let meta = std::fs::symlink_metadata(path).map_err(|e| Error::from_io(path, e))?;
    let removed = if meta.is_dir() {
        std::fs::remove_dir(path)
    } else {
        std::fs::remove_file(path)
    };
    removed.map_err(|e| Error::from_io(path, e))
}

/// Places `relative` under `base`. An empty `relative` maps to `base` itself
/// (joining an empty path would leave a trailing separator).
pub fn rebase<P: AsRef<Path>>(base: &Path, relative: P) -> PathBuf {
    let relative = relative.as_ref();
    if relative.as_os_str().is_empty() {
        base.to_path_buf()
    } else {
        base.join(relative)
    }
}
