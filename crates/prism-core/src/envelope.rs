use crate::value::Value;
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::borrow::Cow;

/// Reserved envelope key carrying the plural type name.
pub const NAME_KEY: &str = "_name";

/// Reserved envelope key carrying the primary-key value.
pub const PK_KEY: &str = "_pk";

///
/// Rendered
///
/// One serialized output node: a scalar pass-through (including bare
/// primary keys from identifier-only serialization), a full envelope, or an
/// ordered sequence of either.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Rendered {
    Scalar(Value),
    Record(Box<Representation>),
    List(Vec<Rendered>),
}

impl Rendered {
    #[must_use]
    pub fn as_record(&self) -> Option<&Representation> {
        match self {
            Self::Record(rep) => Some(rep),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&Vec<Rendered>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl Serialize for Rendered {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(value) => value.serialize(serializer),
            Self::Record(rep) => rep.serialize(serializer),
            Self::List(items) => serializer.collect_seq(items),
        }
    }
}

///
/// Representation
///
/// The envelope for one serialized entity: field values in schema order
/// plus the identity metadata the sideloading renderer collates on. Created
/// fresh per entity per call and owned exclusively by the caller; the
/// reserved keys live outside the field map so they can never collide with
/// a declared field.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Representation {
    plural_name: Cow<'static, str>,
    pk: Value,
    fields: Vec<(&'static str, Rendered)>,
}

impl Representation {
    pub(crate) const fn new(
        plural_name: Cow<'static, str>,
        pk: Value,
        fields: Vec<(&'static str, Rendered)>,
    ) -> Self {
        Self {
            plural_name,
            pk,
            fields,
        }
    }

    /// Plural type name stamped for the sideloading renderer.
    #[must_use]
    pub fn plural_name(&self) -> &str {
        &self.plural_name
    }

    /// Primary-key value of the serialized instance.
    #[must_use]
    pub const fn pk(&self) -> &Value {
        &self.pk
    }

    /// Look up a serialized field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rendered> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, rendered)| rendered)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate `(name, value)` pairs in schema declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &Rendered)> {
        self.fields.iter().map(|(name, rendered)| (*name, rendered))
    }

    /// Number of serialized fields, excluding identity metadata.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Field entries first, then the reserved identity keys, mirroring the
// post-serialization stamp the renderer expects.
impl Serialize for Representation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 2))?;
        for (name, rendered) in &self.fields {
            map.serialize_entry(name, rendered)?;
        }
        map.serialize_entry(NAME_KEY, self.plural_name.as_ref())?;
        map.serialize_entry(PK_KEY, &self.pk)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Representation {
        Representation::new(
            Cow::Borrowed("people"),
            Value::Uint(7),
            vec![
                ("name", Rendered::Scalar(Value::Text("ada".to_string()))),
                ("age", Rendered::Scalar(Value::Uint(36))),
            ],
        )
    }

    #[test]
    fn accessors_expose_identity_and_fields() {
        let rep = sample();
        assert_eq!(rep.plural_name(), "people");
        assert_eq!(rep.pk(), &Value::Uint(7));
        assert_eq!(rep.len(), 2);
        assert!(rep.contains("name"));
        assert!(!rep.contains("_pk"));

        let order: Vec<&str> = rep.fields().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["name", "age"]);
    }

    #[test]
    fn serialization_stamps_reserved_keys_inline() {
        let json = serde_json::to_value(sample()).expect("envelope should serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "ada",
                "age": 36,
                "_name": "people",
                "_pk": 7,
            })
        );
    }

    #[test]
    fn rendered_list_serializes_as_sequence() {
        let list = Rendered::List(vec![
            Rendered::Scalar(Value::Uint(1)),
            Rendered::Scalar(Value::Uint(2)),
        ]);
        let json = serde_json::to_value(&list).expect("list should serialize");
        assert_eq!(json, serde_json::json!([1, 2]));
    }
}
