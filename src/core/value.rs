//! Core value types for front matter handling
//!
//! Front matter decoded from either notation is normalised into one tagged
//! union, [`FrontMatterValue`]. The numeric family of the source notation is
//! kept: YAML hands out unsigned integers for non-negative numbers while TOML
//! only knows signed integers, and the two stay distinguishable.

use crate::core::Notation;
use crate::error::{MdsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A decoded front matter block: string keys to dynamically typed values
pub type FrontMatter = BTreeMap<String, FrontMatterValue>;

/// A dynamically typed front matter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrontMatterValue {
    Null,
    Bool(bool),
    Unsigned(u64),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<FrontMatterValue>),
    Mapping(BTreeMap<String, FrontMatterValue>),
}

impl FrontMatterValue {
    /// Convert a decoded YAML value
    ///
    /// Fails only for mapping keys that are themselves sequences or mappings.
    pub fn from_yaml(value: serde_yaml::Value) -> Result<Self> {
        Ok(match value {
            serde_yaml::Value::Null => Self::Null,
            serde_yaml::Value::Bool(b) => Self::Bool(b),
            serde_yaml::Value::Number(n) => yaml_number(&n),
            serde_yaml::Value::String(s) => Self::String(s),
            serde_yaml::Value::Sequence(seq) => Self::Sequence(
                seq.into_iter()
                    .map(Self::from_yaml)
                    .collect::<Result<Vec<_>>>()?,
            ),
            serde_yaml::Value::Mapping(map) => Self::Mapping(yaml_mapping(map)?),
            serde_yaml::Value::Tagged(tagged) => Self::from_yaml(tagged.value)?,
        })
    }

    /// Convert a decoded TOML value
    pub fn from_toml(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Self::String(s),
            toml::Value::Integer(i) => Self::Integer(i),
            toml::Value::Float(f) => Self::Float(f),
            toml::Value::Boolean(b) => Self::Bool(b),
            toml::Value::Datetime(dt) => Self::String(dt.to_string()),
            toml::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from_toml).collect())
            }
            toml::Value::Table(table) => Self::Mapping(toml_table(table)),
        }
    }

    /// Name of the value's type, for messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Unsigned(_) => "unsigned integer",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Only values decoded as unsigned integers
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Unsigned(u) => Some(*u),
            _ => None,
        }
    }

    /// Only values decoded as signed integers
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Any numeric value, widened to a float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Unsigned(u) => Some(*u as f64),
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[FrontMatterValue]> {
        match self {
            Self::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, FrontMatterValue>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

/// Convert a YAML mapping into front matter, stringifying scalar keys
pub(crate) fn yaml_mapping(map: serde_yaml::Mapping) -> Result<FrontMatter> {
    let mut out = BTreeMap::new();
    for (key, value) in map {
        out.insert(yaml_key(key)?, FrontMatterValue::from_yaml(value)?);
    }
    Ok(out)
}

/// Convert a TOML table into front matter
pub(crate) fn toml_table(table: toml::Table) -> FrontMatter {
    table
        .into_iter()
        .map(|(k, v)| (k, FrontMatterValue::from_toml(v)))
        .collect()
}

fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        other => Err(MdsError::invalid_front_matter(
            Notation::Yaml,
            format!("unsupported mapping key: {:?}", other),
        )),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> FrontMatterValue {
    if let Some(u) = n.as_u64() {
        FrontMatterValue::Unsigned(u)
    } else if let Some(i) = n.as_i64() {
        FrontMatterValue::Integer(i)
    } else {
        FrontMatterValue::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl fmt::Display for FrontMatterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Unsigned(u) => write!(f, "{}", u),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => write!(f, "{}", s),
            other => match serde_json::to_string(other) {
                Ok(json) => write!(f, "{}", json),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

impl From<&str> for FrontMatterValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FrontMatterValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for FrontMatterValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u64> for FrontMatterValue {
    fn from(u: u64) -> Self {
        Self::Unsigned(u)
    }
}

impl From<i64> for FrontMatterValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for FrontMatterValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}
