//! The markdown document server
//!
//! [`MarkdownServer`] is everything a protocol layer needs to serve a
//! directory: the resource catalog built at construction, the two tools and
//! resource reads. It holds no mutable state; every read goes to the
//! filesystem.

pub mod catalog;
pub mod config;
pub mod tools;

pub use catalog::{
    resource_path, resource_uri, Catalog, CatalogEntry, Resource, MARKDOWN_MIME_TYPE,
    RESOURCE_PREFIX, RESOURCE_SCHEME,
};
pub use config::{ServerConfig, DEFAULT_DESCRIPTION, DEFAULT_NAME};
pub use tools::{
    ListMarkdownFilesRequest, ListMarkdownFilesResponse, ReadMarkdownFileRequest,
    ReadResourceResult, TextResourceContents, ToolDefinition,
};

use crate::core::{DocumentContent, DocumentInfo, FrontMatterExtractor};
use crate::error::Result;
use crate::io::{DocumentRoot, DocumentScanner};
use log::{debug, info, warn};

/// Serves the markdown files of one directory
#[derive(Debug, Clone)]
pub struct MarkdownServer {
    config: ServerConfig,
    scanner: DocumentScanner,
    catalog: Catalog,
}

impl MarkdownServer {
    /// Build a server, cataloging every document under the root
    ///
    /// Fails if any document cannot be read or has malformed front matter.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let extractor =
            FrontMatterExtractor::with_excluded_keys(config.exclude_frontmatter.iter().cloned());
        let scanner = DocumentScanner::new(DocumentRoot::new(config.root.clone()), extractor);
        let catalog = Catalog::build(&scanner)?;
        info!(
            "Cataloged {} markdown files under {}",
            catalog.len(),
            config.root.display()
        );

        Ok(Self {
            config,
            scanner,
            catalog,
        })
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn description(&self) -> &str {
        &self.config.description
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resources declared at construction, in scan order
    pub fn resources(&self) -> Vec<Resource> {
        self.catalog.resources().cloned().collect()
    }

    /// The tools this server offers
    pub fn tools(&self) -> Vec<ToolDefinition> {
        vec![tools::list_tool(self.name()), tools::read_tool(self.name())]
    }

    /// List every markdown file, scanning the root again
    pub fn list_markdown_files(
        &self,
        _request: &ListMarkdownFilesRequest,
    ) -> Result<ListMarkdownFilesResponse> {
        let files: Vec<DocumentInfo> = self.scanner.scan_all()?;
        debug!("Listed {} markdown files", files.len());
        Ok(ListMarkdownFilesResponse { files })
    }

    /// Read one document with its front matter
    ///
    /// The path does not have to be in the catalog. A missing file yields an
    /// error for which [`is_not_found`](crate::MdsError::is_not_found) holds.
    pub fn read_markdown_file(&self, request: &ReadMarkdownFileRequest) -> Result<DocumentContent> {
        let root = self.scanner.root();
        let content = root.read(&request.path)?;
        let size = root.size(&request.path)?;
        let frontmatter = self.scanner.extractor().extract(&content)?;

        Ok(DocumentContent::new(
            DocumentInfo::new(request.path.clone(), size, frontmatter),
            String::from_utf8_lossy(&content).into_owned(),
        ))
    }

    /// Read a document by resource address, returning its text verbatim
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult> {
        let path = resource_path(uri).map_err(|err| {
            warn!("Rejected resource address {}: {}", uri, err);
            err
        })?;
        let content = self.scanner.root().read(path)?;

        Ok(ReadResourceResult {
            contents: vec![TextResourceContents {
                uri: uri.to_string(),
                text: String::from_utf8_lossy(&content).into_owned(),
                mime_type: MARKDOWN_MIME_TYPE.to_string(),
            }],
        })
    }
}
