//! The resource catalog
//!
//! Built once from a full scan when the server is constructed. Each document
//! becomes a [`Resource`] addressed by `file://` followed by its logical path.

use crate::core::DocumentInfo;
use crate::error::{MdsError, Result};
use crate::io::DocumentScanner;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Scheme of every resource address
pub const RESOURCE_SCHEME: &str = "file";

/// Prefix joined with a logical path to form a resource address
pub const RESOURCE_PREFIX: &str = "file://";

/// Media type declared for every document
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";

/// An addressable resource as declared to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub uri: String,
    pub name: String,
    /// Front matter as compact JSON, `null` when absent
    pub description: String,
    pub mime_type: String,
    pub size: u64,
}

impl Resource {
    /// Describe a scanned document
    pub fn from_document(info: &DocumentInfo) -> Result<Self> {
        Ok(Self {
            uri: resource_uri(&info.path),
            name: info.file_name().to_string(),
            description: serde_json::to_string(&info.frontmatter)?,
            mime_type: MARKDOWN_MIME_TYPE.to_string(),
            size: info.size,
        })
    }
}

/// Address of the document at a logical path
pub fn resource_uri(path: &str) -> String {
    format!("{}{}", RESOURCE_PREFIX, path)
}

/// Recover the logical path named by a resource address
///
/// Addresses starting with `file://` are taken as-is. Anything else is parsed
/// to tell a foreign scheme from an address that does not parse at all.
pub fn resource_path(uri: &str) -> Result<&str> {
    if let Some(path) = uri.strip_prefix(RESOURCE_PREFIX) {
        return Ok(path);
    }

    let url = Url::parse(uri).map_err(|e| MdsError::malformed_address(uri, e))?;
    if url.scheme() == RESOURCE_SCHEME {
        return Err(MdsError::malformed_address(
            uri,
            format!("expected the {} prefix", RESOURCE_PREFIX),
        ));
    }
    Err(MdsError::unsupported_scheme(url.scheme()))
}

/// One cataloged document
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub document: DocumentInfo,
    pub resource: Resource,
}

/// Immutable table of the documents found at construction time
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_path: HashMap<String, usize>,
}

impl Catalog {
    /// Run a full scan and catalog every document
    pub fn build(scanner: &DocumentScanner) -> Result<Self> {
        let documents = scanner.scan_all()?;
        Self::from_documents(documents)
    }

    /// Catalog already scanned documents, keeping their order
    pub fn from_documents<I>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = DocumentInfo>,
    {
        let mut catalog = Self::default();
        for document in documents {
            let resource = Resource::from_document(&document)?;
            catalog
                .by_path
                .insert(document.path.clone(), catalog.entries.len());
            catalog.entries.push(CatalogEntry { document, resource });
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in scan order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.entries.iter().map(|entry| &entry.resource)
    }

    /// Look up an entry by logical path
    pub fn get(&self, path: &str) -> Option<&CatalogEntry> {
        self.by_path.get(path).map(|&index| &self.entries[index])
    }

    /// Look up an entry by resource address
    pub fn get_by_uri(&self, uri: &str) -> Option<&CatalogEntry> {
        uri.strip_prefix(RESOURCE_PREFIX)
            .and_then(|path| self.get(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FrontMatter, FrontMatterValue};
    use pretty_assertions::assert_eq;

    fn documents() -> Vec<DocumentInfo> {
        let mut fm = FrontMatter::new();
        fm.insert("title".to_string(), FrontMatterValue::from("File 2"));
        fm.insert("order".to_string(), FrontMatterValue::Unsigned(2));
        vec![
            DocumentInfo::new("another.md", 8, None),
            DocumentInfo::new("dir/file2.md", 30, Some(fm)),
        ]
    }

    #[test]
    fn test_resource_from_document() {
        let catalog = Catalog::from_documents(documents()).unwrap();
        let resources: Vec<_> = catalog.resources().cloned().collect();

        assert_eq!(
            resources,
            vec![
                Resource {
                    uri: "file://another.md".to_string(),
                    name: "another.md".to_string(),
                    description: "null".to_string(),
                    mime_type: "text/markdown".to_string(),
                    size: 8,
                },
                Resource {
                    uri: "file://dir/file2.md".to_string(),
                    name: "file2.md".to_string(),
                    description: r#"{"order":2,"title":"File 2"}"#.to_string(),
                    mime_type: "text/markdown".to_string(),
                    size: 30,
                },
            ]
        );
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::from_documents(documents()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("dir/file2.md").unwrap().resource.size, 30);
        assert_eq!(
            catalog.get_by_uri("file://another.md").unwrap().document.path,
            "another.md"
        );
        assert!(catalog.get("missing.md").is_none());
        assert!(catalog.get_by_uri("http://another.md").is_none());
    }

    #[test]
    fn test_resource_serializes_camel_case() {
        let resource = Resource::from_document(&DocumentInfo::new("a.md", 1, None)).unwrap();
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["mimeType"], "text/markdown");
        assert_eq!(json["description"], "null");
    }

    #[test]
    fn test_resource_path() {
        assert_eq!(resource_path("file://file1.md").unwrap(), "file1.md");
        assert_eq!(resource_path("file://dir/file2.md").unwrap(), "dir/file2.md");
        assert_eq!(resource_path("file://my notes.md").unwrap(), "my notes.md");
    }

    #[test]
    fn test_resource_path_rejects_other_schemes() {
        let err = resource_path("http://example.com/file.md").unwrap_err();
        assert!(matches!(err, MdsError::UnsupportedScheme { ref scheme } if scheme == "http"));
        assert!(err.to_string().contains("unsupported scheme"));
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_resource_path_rejects_malformed() {
        let err = resource_path(":invalid:").unwrap_err();
        assert!(matches!(err, MdsError::MalformedAddress { .. }));

        let err = resource_path("file:relative.md").unwrap_err();
        assert!(matches!(err, MdsError::MalformedAddress { .. }));
    }
}
