//! Filesystem access: the served root and the document scanner

pub mod root;
pub mod scanner;

pub use root::DocumentRoot;
pub use scanner::{DocumentScanner, Documents, MARKDOWN_EXTENSION};
