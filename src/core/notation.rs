//! Front matter notations and their delimiter/decoder table

use crate::core::value::{toml_table, yaml_mapping, FrontMatter};
use crate::error::{MdsError, Result};
use std::fmt;

/// A structured-text notation a front matter block can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// YAML between `---` lines
    Yaml,
    /// TOML between `+++` lines
    Toml,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Toml => write!(f, "TOML"),
        }
    }
}

/// One entry of the notation table
#[derive(Clone, Copy)]
pub struct FrontMatterFormat {
    pub notation: Notation,
    /// Opening delimiter line, newline included
    pub delimiter: &'static str,
    /// Closing delimiter searched for after the opening one
    pub closing: &'static str,
    /// Decode the text between the delimiters
    pub decode: fn(&[u8]) -> Result<FrontMatter>,
}

/// Notations in the order they are tried
pub static FORMATS: &[FrontMatterFormat] = &[
    FrontMatterFormat {
        notation: Notation::Yaml,
        delimiter: "---\n",
        closing: "\n---\n",
        decode: decode_yaml,
    },
    FrontMatterFormat {
        notation: Notation::Toml,
        delimiter: "+++\n",
        closing: "\n+++\n",
        decode: decode_toml,
    },
];

fn decode_yaml(block: &[u8]) -> Result<FrontMatter> {
    let text = block_text(block, Notation::Yaml)?;
    if text.trim().is_empty() {
        return Ok(FrontMatter::new());
    }

    match serde_yaml::from_str::<serde_yaml::Value>(text)? {
        serde_yaml::Value::Null => Ok(FrontMatter::new()),
        serde_yaml::Value::Mapping(map) => yaml_mapping(map),
        other => Err(MdsError::invalid_front_matter(
            Notation::Yaml,
            format!("expected a mapping, found {:?}", other),
        )),
    }
}

fn decode_toml(block: &[u8]) -> Result<FrontMatter> {
    let text = block_text(block, Notation::Toml)?;
    let table: toml::Table = toml::from_str(text)?;
    Ok(toml_table(table))
}

fn block_text(block: &[u8], notation: Notation) -> Result<&str> {
    std::str::from_utf8(block)
        .map_err(|e| MdsError::invalid_front_matter(notation, format!("invalid UTF-8: {}", e)))
}
