//! Loading whitespace-separated base-10 integers from text and files.
pub mod error;
pub mod file;
pub mod text;

pub use error::{LoadError, ParseError, TokenError};
pub use file::load_ints;
pub use text::parse_ints;
