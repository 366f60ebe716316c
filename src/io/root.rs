//! The served document root
//!
//! Documents are addressed by logical paths: slash-separated, relative to the
//! root, without `.` or `..` elements. [`DocumentRoot`] validates a logical
//! path before touching the filesystem, so nothing outside the root can be
//! read through it.

use crate::error::{MdsError, Result};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// A directory whose markdown files are served
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    dir: PathBuf,
}

impl DocumentRoot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory on disk
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Check that `path` is a valid logical path
    ///
    /// `.` names the root itself. Otherwise the path must be non-empty, must
    /// not start or end with `/`, and every element must be non-empty and
    /// neither `.` nor `..`.
    pub fn validate(path: &str) -> Result<()> {
        if path == "." {
            return Ok(());
        }
        let valid = !path.is_empty()
            && !path.contains('\0')
            && path
                .split('/')
                .all(|elem| !elem.is_empty() && elem != "." && elem != "..");
        if valid {
            Ok(())
        } else {
            Err(MdsError::invalid_path(path))
        }
    }

    /// Map a logical path to a location on disk
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        Self::validate(path)?;
        if path == "." {
            return Ok(self.dir.clone());
        }
        Ok(path.split('/').fold(self.dir.clone(), |acc, elem| acc.join(elem)))
    }

    /// Map a location under the root back to its logical path
    ///
    /// Returns `None` for locations outside the root. The root itself maps
    /// to `.`.
    pub fn logical_path(&self, location: &Path) -> Option<String> {
        let relative = location.strip_prefix(&self.dir).ok()?;
        let mut parts = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                _ => return None,
            }
        }
        if parts.is_empty() {
            Some(".".to_string())
        } else {
            Some(parts.join("/"))
        }
    }

    /// Read the full bytes of a document
    pub fn read(&self, path: &str) -> Result<Vec<u8>> {
        let location = self.resolve(path)?;
        fs::read(&location).map_err(|e| map_io_error(e, path))
    }

    /// Size of a document on disk, in bytes
    pub fn size(&self, path: &str) -> Result<u64> {
        let location = self.resolve(path)?;
        fs::metadata(&location)
            .map(|metadata| metadata.len())
            .map_err(|e| map_io_error(e, path))
    }
}

fn map_io_error(err: io::Error, path: &str) -> MdsError {
    match err.kind() {
        io::ErrorKind::NotFound => MdsError::not_found(path),
        _ => MdsError::Io(err),
    }
}
