use super::{Mapping, Value};

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Self::Mapping(m)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! from_number {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Number(n.into())
                }
            }
        )*
    }
}

from_number! {
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
    f32 f64
}

impl From<serde_yaml::Value> for Value {
    fn from(v: serde_yaml::Value) -> Self {
        use serde_yaml::Value as Yaml;
        match v {
            Yaml::Null => Self::Null,
            Yaml::Bool(b) => Self::Bool(b),
            Yaml::Number(n) => Self::Number(n),
            Yaml::String(s) => Self::String(s),
            Yaml::Sequence(items) => items.into(),
            Yaml::Mapping(m) => Self::Mapping(m.into()),
            // tags don't take part in matching
            Yaml::Tagged(t) => t.value.into(),
        }
    }
}

impl From<serde_json::Value> for Value {
    /// Converts a JSON document, e.g. a record received from a web API.
    ///
    /// Object fields keep the order in which `serde_json` yields them.
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match v {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => match (n.as_u64(), n.as_i64()) {
                (Some(u), _) => u.into(),
                (None, Some(i)) => i.into(),
                // without `arbitrary_precision` every other JSON number is an f64
                (None, None) => n.as_f64().unwrap_or(f64::NAN).into(),
            },
            Json::String(s) => Self::String(s),
            Json::Array(items) => items.into(),
            Json::Object(fields) => Self::Mapping(
                fields
                    .into_iter()
                    .map(|(k, v)| (Self::String(k), v.into()))
                    .collect(),
            ),
        }
    }
}
