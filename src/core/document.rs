//! Document descriptors
//!
//! [`DocumentInfo`] is what the index knows about a file; [`DocumentContent`]
//! adds the full, unmodified text. Both serialize to the shapes the tools
//! return (`path`, `size`, `frontmatter`, and `content` for reads).

use crate::core::FrontMatter;
use serde::{Deserialize, Serialize};

/// Metadata about one markdown document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Slash-separated path relative to the served root
    pub path: String,
    /// Size of the whole file on disk, in bytes
    pub size: u64,
    /// Decoded front matter; `None` when absent or empty
    pub frontmatter: Option<FrontMatter>,
}

impl DocumentInfo {
    pub fn new(path: impl Into<String>, size: u64, frontmatter: Option<FrontMatter>) -> Self {
        Self {
            path: path.into(),
            size,
            frontmatter,
        }
    }

    /// Final segment of the logical path
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn has_front_matter(&self) -> bool {
        self.frontmatter.is_some()
    }
}

/// A document's metadata together with its full text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentContent {
    #[serde(flatten)]
    pub info: DocumentInfo,
    /// The original text, front matter delimiters included
    pub content: String,
}

impl DocumentContent {
    pub fn new(info: DocumentInfo, content: String) -> Self {
        Self { info, content }
    }

    pub fn path(&self) -> &str {
        &self.info.path
    }

    pub fn size(&self) -> u64 {
        self.info.size
    }

    pub fn frontmatter(&self) -> Option<&FrontMatter> {
        self.info.frontmatter.as_ref()
    }
}
