//! Core types and front matter logic
//!
//! Nothing in here touches the filesystem:
//! - `value`: the decoded value model
//! - `notation`: the ordered table of supported notations
//! - `extractor`: detection and decoding of a leading front matter block
//! - `document`: descriptors returned by the index and the reader

pub mod document;
pub mod extractor;
pub mod notation;
pub mod value;

pub use document::{DocumentContent, DocumentInfo};
pub use extractor::FrontMatterExtractor;
pub use notation::{FrontMatterFormat, Notation, FORMATS};
pub use value::{FrontMatter, FrontMatterValue};
