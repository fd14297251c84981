use serde::{Serialize, Serializer};
use std::fmt;
use ulid::Ulid;

///
/// Value
///
/// Owned dynamic field value handed across the `EntitySource` boundary.
/// Serialization is pass-through: the engine never coerces values, it only
/// moves them into envelopes.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    None,
    Unit,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float64(f64),
    Text(String),
    Timestamp(u64),
    Ulid(Ulid),
    Blob(Vec<u8>),
    List(Vec<Value>),
}

impl Value {
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_uint(&self) -> Option<u64> {
        match self {
            Self::Uint(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_ulid(&self) -> Option<Ulid> {
        match self {
            Self::Ulid(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Unit => write!(f, "unit"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{v}"),
            Self::Ulid(v) => write!(f, "{v}"),
            Self::Blob(v) => write!(f, "blob({} bytes)", v.len()),
            Self::List(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// Envelopes render to natural JSON shapes, not enum-tagged ones.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::None | Self::Unit => serializer.serialize_none(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Uint(v) => serializer.serialize_u64(*v),
            Self::Float64(v) => serializer.serialize_f64(*v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Timestamp(v) => serializer.serialize_u64(*v),
            Self::Ulid(v) => serializer.collect_str(v),
            Self::Blob(v) => serializer.serialize_bytes(v),
            Self::List(v) => serializer.collect_seq(v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Ulid> for Value {
    fn from(v: Ulid) -> Self {
        Self::Ulid(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_natural_json() {
        let value = Value::List(vec![
            Value::None,
            Value::Bool(true),
            Value::Int(-3),
            Value::Text("hi".to_string()),
        ]);
        let json = serde_json::to_value(&value).expect("value should serialize");
        assert_eq!(json, serde_json::json!([null, true, -3, "hi"]));
    }

    #[test]
    fn ulid_serializes_as_text() {
        let id = Ulid::from_parts(1, 42);
        let json = serde_json::to_value(Value::Ulid(id)).expect("ulid should serialize");
        assert_eq!(json, serde_json::json!(id.to_string()));
    }

    #[test]
    fn option_conversion_maps_none() {
        let absent: Option<&str> = None;
        assert_eq!(Value::from(absent), Value::None);
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    }
}
