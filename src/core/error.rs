use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors returned by root-scoped operations.
///
/// Every variant produced by a filesystem call keeps the path it was touching
/// and the underlying cause.
#[derive(Debug, Error)]
pub enum Error {
    /// The root is empty or does not name a directory.
    #[error("invalid root: {0}")]
    Config(String),

    #[error("{} does not exist", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} already exists", .path.display())]
    AlreadyExists {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("access denied: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other failure of the host filesystem.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

impl Error {
    /// Classifies `source` by its kind and attaches `path`.
    pub(crate) fn from_io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path, source },
            io::ErrorKind::AlreadyExists => Error::AlreadyExists { path, source },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path, source },
            _ => Error::Io { path, source },
        }
    }

    /// Returns the host path the failed operation was touching.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Config(_) => None,
            Error::NotFound { path, .. }
            | Error::AlreadyExists { path, .. }
            | Error::PermissionDenied { path, .. }
            | Error::Io { path, .. }
            | Error::InvalidUtf8 { path, .. } => Some(path),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::AlreadyExists { .. })
    }
}
