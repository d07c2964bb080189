mod entry;
mod root;
mod rooted_fs;
mod walk;

pub use entry::{Entry, EntryType};
pub use root::Root;
pub use rooted_fs::RootedFS;
pub use walk::{Order, Walk};
