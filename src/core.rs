mod error;
pub(crate) mod utils;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
