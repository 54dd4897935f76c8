use serde::Deserialize;
use serde_yaml::Number;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Mapping;

/// A dynamically typed record or field value, e.g. parsed from YAML or JSON.
///
/// Equality is typed: the integer `1` and the float `1.0` are different values, while integers
/// of different Rust types compare equal if they hold the same number.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(from = "serde_yaml::Value")]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    String(String),
    Number(Number),
    /// A record with named fields. This is the only variant which has fields for [`Shape`].
    ///
    /// [`Shape`]: crate::Shape
    Mapping(Mapping),
    Sequence(Vec<Value>),
}

impl fmt::Display for Value {
    /// Renders the value in YAML flow style, so that a printed descriptor can be passed to
    /// [`Criteria::from_yaml`](crate::Criteria::from_yaml) again.
    ///
    /// ```
    /// use seqops::types::Mapping;
    /// use std::str::FromStr;
    ///
    /// let m = Mapping::from_str("{id: 1, tags: [a, ~], done: false}").unwrap();
    /// assert_eq!(m.to_string(), r#"{"id": 1, "tags": ["a", ~], "done": false}"#);
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("~"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Mapping(m) => write!(f, "{m}"),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (i, it) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{it}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl Eq for Value {}

// `unique_by_keys` hashes field values, so this must agree with `PartialEq`.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::String(s) => s.hash(state),
            Self::Number(n) => n.hash(state),
            Self::Mapping(m) => m.hash(state),
            Self::Sequence(items) => items.hash(state),
        }
    }
}

impl Value {
    /// Returns the string if the value is a `Value::String`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number as `i64` if the value is an integer in range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up field `key` of a record. Values other than `Value::Mapping` have no fields.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// Describes the kind of value for error messages.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "a boolean",
            Self::String(_) => "a string",
            Self::Number(_) => "a number",
            Self::Mapping(_) => "a mapping",
            Self::Sequence(_) => "a sequence",
        }
    }
}
