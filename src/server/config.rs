//! Server configuration

use std::path::{Path, PathBuf};

/// Server name used when none is given
pub const DEFAULT_NAME: &str = "mcp-server-mds";

/// Server description used when none is given
pub const DEFAULT_DESCRIPTION: &str = "Markdown Documents Server";

/// Everything a [`MarkdownServer`](crate::MarkdownServer) is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Human-readable name, also used to derive the tool names
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Directory whose markdown files are served
    pub root: PathBuf,
    /// Front matter keys stripped from every description and response
    pub exclude_frontmatter: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            root: PathBuf::from("."),
            exclude_frontmatter: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            root: root.into(),
            exclude_frontmatter: Vec::new(),
        }
    }

    /// Add front matter keys to exclude
    ///
    /// Empty keys are dropped, so the result of splitting an empty list can be
    /// passed straight through.
    pub fn with_exclude_frontmatter<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_frontmatter.extend(
            keys.into_iter()
                .map(Into::into)
                .filter(|key: &String| !key.is_empty()),
        );
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.name, "mcp-server-mds");
        assert_eq!(config.description, "Markdown Documents Server");
        assert_eq!(config.root(), Path::new("."));
        assert!(config.exclude_frontmatter.is_empty());
    }

    #[test]
    fn test_exclude_frontmatter_accumulates() {
        let config = ServerConfig::new("docs", "My docs", "/srv/docs")
            .with_exclude_frontmatter("draft,secret".split(','))
            .with_exclude_frontmatter([""])
            .with_exclude_frontmatter(vec!["internal".to_string()]);
        assert_eq!(config.exclude_frontmatter, vec!["draft", "secret", "internal"]);
    }
}
