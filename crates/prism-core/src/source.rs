use crate::value::Value;
use prism_schema::model::EntityModel;
use std::collections::BTreeMap;

///
/// EntitySource
///
/// Opaque handle to one data record, implemented by the mapping layer.
/// Every read must be a cheap in-memory lookup; prefetching related records
/// is the mapping layer's concern, not the engine's.
///

pub trait EntitySource {
    /// Declared model for this record's entity type.
    fn model(&self) -> &'static EntityModel;

    /// Primary-key value of this record.
    fn primary_key(&self) -> Value;

    /// Extract a scalar field value. Absent values yield [`Value::None`].
    fn value(&self, field: &str) -> Value;

    /// Look up a single related record.
    fn related_one(&self, field: &str) -> Option<&dyn EntitySource>;

    /// Look up a collection of related records.
    fn related_many(&self, field: &str) -> Vec<&dyn EntitySource>;
}

///
/// Record
///
/// Map-backed in-memory [`EntitySource`]. Hosts without a mapping layer
/// (and the test suite) build these directly; related records are owned by
/// the parent record.
///

#[derive(Clone, Debug)]
pub struct Record {
    model: &'static EntityModel,
    values: BTreeMap<&'static str, Value>,
    one: BTreeMap<&'static str, Option<Record>>,
    many: BTreeMap<&'static str, Vec<Record>>,
}

impl Record {
    #[must_use]
    pub fn new(model: &'static EntityModel) -> Self {
        Self {
            model,
            values: BTreeMap::new(),
            one: BTreeMap::new(),
            many: BTreeMap::new(),
        }
    }

    /// Set a scalar field value.
    #[must_use]
    pub fn with_value(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    /// Attach a single related record.
    #[must_use]
    pub fn with_one(mut self, name: &'static str, related: Self) -> Self {
        self.one.insert(name, Some(related));
        self
    }

    /// Mark a single relation as explicitly absent.
    #[must_use]
    pub fn with_none(mut self, name: &'static str) -> Self {
        self.one.insert(name, None);
        self
    }

    /// Attach a collection of related records.
    #[must_use]
    pub fn with_many(mut self, name: &'static str, related: Vec<Self>) -> Self {
        self.many.insert(name, related);
        self
    }
}

impl EntitySource for Record {
    fn model(&self) -> &'static EntityModel {
        self.model
    }

    fn primary_key(&self) -> Value {
        self.value(self.model.primary_key)
    }

    fn value(&self, field: &str) -> Value {
        self.values.get(field).cloned().unwrap_or(Value::None)
    }

    fn related_one(&self, field: &str) -> Option<&dyn EntitySource> {
        self.one
            .get(field)
            .and_then(Option::as_ref)
            .map(|record| record as &dyn EntitySource)
    }

    fn related_many(&self, field: &str) -> Vec<&dyn EntitySource> {
        self.many.get(field).map_or_else(Vec::new, |records| {
            records
                .iter()
                .map(|record| record as &dyn EntitySource)
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixtures::{PERSON, person_ada};

    #[test]
    fn record_reads_back_values_and_pk() {
        let ada = person_ada();
        assert_eq!(ada.value("name"), Value::Text("ada".to_string()));
        assert_eq!(ada.primary_key(), ada.value("id"));
        assert_eq!(ada.value("missing"), Value::None);
    }

    #[test]
    fn absent_relations_read_as_none_or_empty() {
        let bare = Record::new(&PERSON);
        assert!(bare.related_one("anything").is_none());
        assert!(bare.related_many("anything").is_empty());
    }
}
