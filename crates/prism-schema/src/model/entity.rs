use crate::model::FieldModel;
use serde::Serialize;
use std::borrow::Cow;

///
/// EntityModel
/// Declared, immutable metadata for one entity type. Built once at startup
/// and shared read-only for the life of the process.
///

#[derive(Clone, Debug, Serialize)]
pub struct EntityModel {
    /// Fully-qualified type path (registry key and diagnostics).
    pub path: &'static str,

    /// Stable external name used in envelopes and request errors.
    pub entity_name: &'static str,

    /// Plural name; `entity_name` + "s" when not declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural_name: Option<&'static str>,

    /// Primary key field (must name an entry in `fields`).
    pub primary_key: &'static str,

    /// Ordered field list; declaration order is authoritative for
    /// serialization output.
    pub fields: &'static [FieldModel],

    /// Field names deferred unless explicitly requested, in addition to
    /// any field-level `deferred` flags.
    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub deferred_fields: &'static [&'static str],
}

impl EntityModel {
    /// Look up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Return the primary key field if it exists on the entity.
    #[must_use]
    pub fn pk_field(&self) -> Option<&'static FieldModel> {
        self.field(self.primary_key)
    }

    /// Resolve the plural name used for envelope identity.
    #[must_use]
    pub fn resolved_plural_name(&self) -> Cow<'static, str> {
        match self.plural_name {
            Some(plural) => Cow::Borrowed(plural),
            None => Cow::Owned(format!("{}s", self.entity_name)),
        }
    }

    /// Whether a field is excluded unless explicitly requested.
    #[must_use]
    pub fn is_deferred_by_default(&self, name: &str) -> bool {
        self.deferred_fields.contains(&name)
            || self.field(name).is_some_and(|f| f.deferred)
    }
}
