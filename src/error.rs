//! Error types for the mds library
//!
//! Every fallible operation in the crate returns [`Result`]. Decoding failures,
//! missing documents and rejected resource addresses each get their own variant
//! so callers can branch on them; filesystem errors are carried unchanged.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::Notation;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum MdsError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors raised while walking the document tree
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Document does not exist under the served root
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    /// Logical path that is not a valid slash-separated relative path
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// Malformed YAML front matter
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed TOML front matter
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Front matter that decoded but is not a key/value mapping
    #[error("Invalid {notation} front matter: {reason}")]
    InvalidFrontMatter { notation: Notation, reason: String },

    /// Resource address with a scheme other than `file`
    #[error("unsupported scheme: {scheme}")]
    UnsupportedScheme { scheme: String },

    /// Resource address that cannot be parsed
    #[error("Malformed address {address}: {reason}")]
    MalformedAddress { address: String, reason: String },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MdsError>;

impl MdsError {
    /// Create a new not found error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a new invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create a new invalid front matter error
    pub fn invalid_front_matter(notation: Notation, reason: impl Into<String>) -> Self {
        Self::InvalidFrontMatter {
            notation,
            reason: reason.into(),
        }
    }

    /// Create a new unsupported scheme error
    pub fn unsupported_scheme(scheme: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.into(),
        }
    }

    /// Create a new malformed address error
    pub fn malformed_address(address: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::MalformedAddress {
            address: address.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error means the requested document does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io(err) => err.kind() == io::ErrorKind::NotFound,
            Self::Walk(err) => err
                .io_error()
                .map_or(false, |io_err| io_err.kind() == io::ErrorKind::NotFound),
            _ => false,
        }
    }

    /// Whether this error comes from malformed front matter
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::Yaml(_) | Self::Toml(_) | Self::InvalidFrontMatter { .. }
        )
    }

    /// Whether this error comes from a rejected resource address
    pub fn is_address_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedScheme { .. } | Self::MalformedAddress { .. }
        )
    }
}
