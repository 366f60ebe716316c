//! Lazy, ordered scanning of the document tree
//!
//! [`DocumentScanner::scan`] walks the root depth-first with entries sorted by
//! file name, and yields a [`DocumentInfo`] for every non-directory entry whose
//! name ends in `.md`, the root itself excepted. The walk is pulled one document at a time, so dropping
//! the iterator early simply stops it. The first failure is yielded as an
//! error and ends the iteration.

use crate::core::{DocumentInfo, FrontMatterExtractor};
use crate::error::{MdsError, Result};
use crate::io::DocumentRoot;
use log::debug;
use std::fs;
use std::iter::FusedIterator;
use walkdir::{DirEntry, WalkDir};

/// Extension of the files that get indexed
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Scanner producing document descriptors for a root
#[derive(Debug, Clone)]
pub struct DocumentScanner {
    root: DocumentRoot,
    extractor: FrontMatterExtractor,
}

impl DocumentScanner {
    pub fn new(root: DocumentRoot, extractor: FrontMatterExtractor) -> Self {
        Self { root, extractor }
    }

    pub fn root(&self) -> &DocumentRoot {
        &self.root
    }

    pub fn extractor(&self) -> &FrontMatterExtractor {
        &self.extractor
    }

    /// Start a walk over the root
    pub fn scan(&self) -> Documents<'_> {
        let walker = WalkDir::new(self.root.dir())
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();
        Documents {
            scanner: self,
            walker,
            finished: false,
        }
    }

    /// Scan everything, failing on the first error
    pub fn scan_all(&self) -> Result<Vec<DocumentInfo>> {
        self.scan().collect()
    }

    /// Whether a file name carries the markdown extension
    pub fn is_markdown(file_name: &str) -> bool {
        file_name.ends_with(MARKDOWN_EXTENSION)
    }

    fn describe(&self, entry: &DirEntry) -> Result<DocumentInfo> {
        let path = self
            .root
            .logical_path(entry.path())
            .ok_or_else(|| MdsError::invalid_path(entry.path().to_string_lossy()))?;
        debug!("Scanning {}", path);

        // Links are followed for the size just as they are for the content.
        let size = fs::metadata(entry.path())?.len();
        let content = fs::read(entry.path())?;
        let frontmatter = self.extractor.extract(&content)?;

        Ok(DocumentInfo::new(path, size, frontmatter))
    }
}

/// Iterator over the documents of a scan
pub struct Documents<'a> {
    scanner: &'a DocumentScanner,
    walker: walkdir::IntoIter,
    finished: bool,
}

impl Iterator for Documents<'_> {
    type Item = Result<DocumentInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err.into()));
                }
            };

            // The root itself has no logical name to serve it under.
            if entry.depth() == 0
                || entry.file_type().is_dir()
                || !DocumentScanner::is_markdown(&entry.file_name().to_string_lossy())
            {
                continue;
            }

            let described = self.scanner.describe(&entry);
            if described.is_err() {
                self.finished = true;
            }
            return Some(described);
        }
    }
}

impl FusedIterator for Documents<'_> {}
