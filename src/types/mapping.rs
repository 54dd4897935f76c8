use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use serde::Deserialize;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::Value;

/// An insertion-ordered map of field names to values.
///
/// A `Mapping` is both a record and a shape descriptor. As a descriptor, each entry names a field
/// and the value the field must hold.
///
/// Two mappings are equal if they hold the same entries, in any order.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(from = "serde_yaml::Mapping")]
pub struct Mapping {
    fields: IndexMap<Value, Value>,
}

impl Mapping {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets field `key` to `value` and returns the previous value.
    ///
    /// An existing field keeps its position, a new field is appended.
    #[inline]
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.fields.insert(key, value)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Visits the fields in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Value, Value> {
        self.fields.iter()
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        f.write_str("}")
    }
}

impl FromStr for Mapping {
    type Err = anyhow::Error;

    /// Parses a YAML mapping, in block or flow style.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let m: serde_yaml::Mapping = serde_yaml::from_str(s)?;
        Ok(m.into())
    }
}

impl From<serde_yaml::Mapping> for Mapping {
    fn from(m: serde_yaml::Mapping) -> Self {
        m.into_iter()
            .map(|(k, v)| (Value::from(k), Value::from(v)))
            .collect()
    }
}

impl FromIterator<(Value, Value)> for Mapping {
    /// Repeated keys keep their first position and their last value.
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Value, Value)> for Mapping {
    #[inline]
    fn extend<I: IntoIterator<Item = (Value, Value)>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}

impl IntoIterator for Mapping {
    type Item = (Value, Value);
    type IntoIter = IntoIter<Value, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a Value, &'a Value);
    type IntoIter = Iter<'a, Value, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Equality ignores entry order, so the entry hashes are combined with a commutative operation.
impl Hash for Mapping {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self.iter().fold(0u64, |acc, entry| {
            let mut h = DefaultHasher::new();
            entry.hash(&mut h);
            acc.wrapping_add(h.finish())
        });
        state.write_usize(self.fields.len());
        state.write_u64(combined);
    }
}

#[cfg(test)]
mod mapping_tests {
    use super::*;

    fn hash_of(m: &Mapping) -> u64 {
        let mut h = DefaultHasher::new();
        m.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_from_str_block_and_flow() {
        let block = Mapping::from_str(
            r#"
            id: 3
            tags: [a, b]
            owner:
              name: foo
            "#,
        )
        .unwrap();
        let flow = Mapping::from_str("{id: 3, tags: [a, b], owner: {name: foo}}").unwrap();
        assert_eq!(block, flow);
        assert_eq!(block.get(&"id".into()), Some(&3.into()));
    }

    #[test]
    fn test_from_str_not_a_mapping() {
        assert!(Mapping::from_str("[1, 2]").is_err());
        assert!(Mapping::from_str("{a: [}").is_err());
    }

    #[test]
    fn test_insert_keeps_position() {
        let mut m = Mapping::from_str("{a: 1, b: 2, c: 3}").unwrap();
        assert_eq!(m.insert("b".into(), 20.into()), Some(2.into()));
        assert_eq!(m.insert("d".into(), 4.into()), None);
        assert_eq!(m.to_string(), r#"{"a": 1, "b": 20, "c": 3, "d": 4}"#);
    }

    #[test]
    fn test_repeated_keys_from_iter() {
        let m: Mapping = vec![
            ("a".into(), 1.into()),
            ("b".into(), 2.into()),
            ("a".into(), 3.into()),
        ]
        .into_iter()
        .collect();
        assert_eq!(m.to_string(), r#"{"a": 3, "b": 2}"#);
    }

    #[test]
    fn test_entry_order_doesnt_affect_eq_and_hash() {
        let a = Mapping::from_str("{a: 1, b: [x, y]}").unwrap();
        let b = Mapping::from_str("{b: [x, y], a: 1}").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = Mapping::from_str("{a: 1, b: [y, x]}").unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_deserialize_nested() {
        let records: Vec<Mapping> =
            serde_yaml::from_str("[{id: 1}, {id: 2, sub: {id: 3}}]").unwrap();
        assert_eq!(records.len(), 2);
        let sub = records[1].get(&"sub".into()).and_then(Value::as_mapping);
        assert_eq!(sub.and_then(|s| s.get(&"id".into())), Some(&3.into()));
    }
}
