//! mds: serve a directory of markdown documents and their front matter
//!
//! This library indexes the `.md` files under a directory, decodes the front
//! matter at the top of each one, and exposes the result the way a tool/resource
//! protocol server needs it: a catalog of resources built once at startup, a
//! listing tool, a reading tool, and reads by resource address.
//!
//! # Front matter
//!
//! Two notations are recognised, tried in order:
//!
//! ```text
//! ---                      +++
//! title: YAML              title = "TOML"
//! ---                      +++
//! ```
//!
//! A block that is empty, or whose keys are all excluded, counts as no front
//! matter at all. Numbers keep the family their notation decodes them to:
//! YAML gives unsigned integers for non-negative values, TOML gives signed ones.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mds::{MarkdownServer, ReadMarkdownFileRequest, Result, ServerConfig};
//!
//! fn main() -> Result<()> {
//!     let config = ServerConfig::new("docs", "Project documentation", "docs/")
//!         .with_exclude_frontmatter(["draft"]);
//!     let server = MarkdownServer::new(config)?;
//!
//!     for resource in server.resources() {
//!         println!("{} {}", resource.uri, resource.description);
//!     }
//!
//!     let doc = server.read_markdown_file(&ReadMarkdownFileRequest::new("guide/intro.md"))?;
//!     println!("{}", doc.content);
//!     Ok(())
//! }
//! ```
//!
//! ## Extracting front matter only
//!
//! ```rust
//! use mds::{FrontMatterExtractor, FrontMatterValue};
//!
//! let extractor = FrontMatterExtractor::new();
//! let fm = extractor.extract(b"---\ntitle: T\n---\nBody").unwrap().unwrap();
//! assert_eq!(fm["title"], FrontMatterValue::from("T"));
//! ```
//!
//! # Architecture
//!
//! - [`core`]: value model, notation table, extractor, document descriptors
//! - [`io`]: the served root and the lazy document scanner
//! - [`server`]: configuration, catalog, tools and resource reads
//! - [`error`]: the crate error type

// Public API exports
pub use error::{MdsError, Result};

// Core types
pub use self::core::{
    DocumentContent, DocumentInfo, FrontMatter, FrontMatterExtractor, FrontMatterValue,
    Notation,
};

// IO types
pub use io::{DocumentRoot, DocumentScanner, Documents};

// Server types
pub use server::{
    Catalog, ListMarkdownFilesRequest, ListMarkdownFilesResponse, MarkdownServer,
    ReadMarkdownFileRequest, ReadResourceResult, Resource, ServerConfig, TextResourceContents,
    ToolDefinition,
};

pub mod core;
pub mod error;
pub mod io;
pub mod server;

/// Convenience functions for common operations
pub mod convenience {
    //! One-call helpers using default settings (no excluded keys)

    use crate::{DocumentInfo, DocumentRoot, DocumentScanner, FrontMatter, FrontMatterExtractor};
    use crate::Result;
    use std::path::Path;

    /// Extract front matter from text
    pub fn extract_front_matter(content: &str) -> Result<Option<FrontMatter>> {
        FrontMatterExtractor::new().extract(content.as_bytes())
    }

    /// Read a file and extract its front matter
    pub fn read_front_matter<P: AsRef<Path>>(path: P) -> Result<Option<FrontMatter>> {
        let content = std::fs::read(path)?;
        FrontMatterExtractor::new().extract(&content)
    }

    /// Scan a directory for markdown documents
    pub fn scan_directory<P: AsRef<Path>>(dir: P) -> Result<Vec<DocumentInfo>> {
        DocumentScanner::new(
            DocumentRoot::new(dir.as_ref()),
            FrontMatterExtractor::new(),
        )
        .scan_all()
    }
}
