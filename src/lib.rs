//! A root-scoped view of a host directory for Rust.
//! Every path handed to it is resolved against one fixed root directory.
//!
//! ### Overview
//!
//! `rooted-fs` binds a [`RootedFS`] to a base directory and exposes file and directory
//! operations on paths relative to it: read, write, append, create, delete, recursive copy
//! and recursive delete. Missing intermediate directories are created on demand.
//!
//! **Key ideas**:
//! - **Fixed root**: The root is set once at construction; there is no way to re-root.
//! - **Composable paths**: `"/a/b"`, `"a/b"` and `"a\\b"` all name `<root>/a/b`.
//! - **Idempotence**: Deleting what is absent and creating directories that exist succeed.
//! - **Tree walks**: [`Walk`] drives both recursive operations, pre-order for copy and
//!   post-order for delete.
//! - **Typed errors**: Every failure is an [`Error`] that keeps the path and the cause.
//!
//! Paths are not sandboxed against `..`: callers are trusted.

mod core;
mod vfs;

pub use self::core::{Error, Result};
pub use vfs::{Entry, EntryType, Order, Root, RootedFS, Walk};
