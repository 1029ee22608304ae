//! The user's global preferences.
//!
//! [`GlobalConfig`] is a flat, ordered mapping from option name to a scalar
//! [`ConfigValue`]. There is no schema: whatever mapping is written is
//! exactly what gets persisted.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A single scalar preference value.
///
/// Untagged so the serialized form is the bare value (`autoupdate = true`).
/// Variant order matters for deserialization: the first matching variant
/// wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl ConfigValue {
    /// Interpret user-typed text: `true`/`false` become booleans, whole
    /// numbers become integers, anything else stays a string.
    pub fn parse_loose(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => raw
                .parse::<i64>()
                .map(Self::Integer)
                .unwrap_or_else(|_| Self::String(raw.to_owned())),
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Flat mapping of preference name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalConfig {
    values: BTreeMap<String, ConfigValue>,
}

impl GlobalConfig {
    /// An empty mapping; the state of a first-time user.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check that `key` can be used as a preference name.
    pub fn validate_key(key: &str) -> Result<(), DomainError> {
        if key.trim().is_empty() {
            return Err(DomainError::InvalidConfigKey {
                key: key.into(),
                reason: "key cannot be empty".into(),
            });
        }
        if key != key.trim() {
            return Err(DomainError::InvalidConfigKey {
                key: key.into(),
                reason: "key cannot start or end with whitespace".into(),
            });
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for GlobalConfig
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
