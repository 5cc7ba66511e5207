//! The dynamic configuration tree.
//!
//! Configuration decoded from files, flags, or environment variables has no
//! schema known in advance. [`Node`] models that data as a closed sum type
//! over mappings, sequences, and opaque leaf scalars; all traversal logic in
//! this crate pattern-matches exhaustively over its three variants.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// A string-keyed mapping of nested nodes.
pub type Map = BTreeMap<String, Node>;

/// One node of a dynamically shaped configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A mapping from string keys to nested nodes.
    Map(Map),
    /// An ordered list of nested nodes.
    Sequence(Vec<Node>),
    /// An opaque leaf value.
    Scalar(Scalar),
}

/// An opaque leaf value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// An explicit null. Distinct from absence: lookups report absence as
    /// `None`, never as a stored null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    String(String),
}

impl Node {
    /// Parse a JSON document into a tree.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`](crate::ConfigError::Json) if the text is
    /// not valid JSON.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(value.into())
    }

    /// Parse a TOML document into a tree.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`](crate::ConfigError::Toml) if the text is
    /// not valid TOML.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let value: toml::Value = toml::from_str(text)?;
        Ok(value.into())
    }

    /// Whether this node is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Borrow the map, if this node is one.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutably borrow the map, if this node is one.
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Consume the node, returning the map if it is one.
    pub fn into_map(self) -> Option<Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the sequence, if this node is one.
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the scalar, if this node is one.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// The string value, if this node is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The integer value, if this node is an integer scalar.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Scalar(Scalar::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// The float value, if this node is a float scalar.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Scalar(Scalar::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// The boolean value, if this node is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(object) => Self::Map(
                object
                    .into_iter()
                    .map(|(key, val)| (key, Self::from(val)))
                    .collect(),
            ),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            },
            serde_json::Value::Null => Self::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => Self::Scalar(match n.as_i64() {
                Some(i) => Scalar::Integer(i),
                None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            serde_json::Value::String(s) => Self::Scalar(Scalar::String(s)),
        }
    }
}

impl From<toml::Value> for Node {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::Table(table) => Self::Map(
                table
                    .into_iter()
                    .map(|(key, val)| (key, Self::from(val)))
                    .collect(),
            ),
            toml::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            },
            toml::Value::String(s) => Self::Scalar(Scalar::String(s)),
            toml::Value::Integer(i) => Self::Scalar(Scalar::Integer(i)),
            toml::Value::Float(f) => Self::Scalar(Scalar::Float(f)),
            toml::Value::Boolean(b) => Self::Scalar(Scalar::Bool(b)),
            // TOML datetimes have no scalar variant of their own; keep the
            // lexical form.
            toml::Value::Datetime(dt) => Self::Scalar(Scalar::String(dt.to_string())),
        }
    }
}
