use derive_more::Display;
use serde::Serialize;

///
/// FieldModel
/// Runtime field metadata used by resolution and serialization.
///

#[derive(Clone, Debug, Serialize)]
pub struct FieldModel {
    /// Field name as referenced by selection requests.
    pub name: &'static str,
    /// Runtime shape of the field value.
    pub kind: FieldKind,
    /// Deferred unless explicitly requested.
    pub deferred: bool,
}

impl FieldModel {
    /// Declare a scalar field.
    #[must_use]
    pub const fn scalar(name: &'static str, kind: ScalarKind) -> Self {
        Self {
            name,
            kind: FieldKind::Scalar(kind),
            deferred: false,
        }
    }

    /// Declare a relation field pointing at another registered entity.
    #[must_use]
    pub const fn relation(
        name: &'static str,
        target: &'static str,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            name,
            kind: FieldKind::Relation {
                target,
                cardinality,
            },
            deferred: false,
        }
    }

    /// Mark the field as deferred-by-default.
    #[must_use]
    pub const fn deferred(mut self) -> Self {
        self.deferred = true;
        self
    }

    #[must_use]
    pub const fn is_relation(&self) -> bool {
        self.kind.is_relation()
    }

    #[must_use]
    pub const fn relation_target(&self) -> Option<&'static str> {
        self.kind.relation_target()
    }
}

///
/// FieldKind
///
/// Explicit tagged field shape, resolved once when the model is declared.
/// Resolution and serialization dispatch on this instead of inspecting
/// values at runtime.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum FieldKind {
    Scalar(ScalarKind),
    Relation {
        /// Entity path of the related entity type.
        target: &'static str,
        cardinality: Cardinality,
    },
}

impl FieldKind {
    #[must_use]
    pub const fn is_relation(&self) -> bool {
        matches!(self, Self::Relation { .. })
    }

    #[must_use]
    pub const fn relation_target(&self) -> Option<&'static str> {
        match self {
            Self::Relation { target, .. } => Some(target),
            Self::Scalar(_) => None,
        }
    }
}

///
/// Cardinality
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, Serialize)]
pub enum Cardinality {
    #[default]
    One,
    Opt,
    Many,
}

impl Cardinality {
    #[must_use]
    pub const fn is_many(self) -> bool {
        matches!(self, Self::Many)
    }
}

///
/// ScalarKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ScalarKind {
    Blob,
    Bool,
    Float64,
    Int,
    Text,
    Timestamp,
    Uint,
    Ulid,
    Unit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_helpers_expose_target() {
        let field = FieldModel::relation("author", "app::Person", Cardinality::One);
        assert!(field.is_relation());
        assert_eq!(field.relation_target(), Some("app::Person"));
        assert!(!field.kind.relation_target().unwrap().is_empty());
    }

    #[test]
    fn scalar_fields_have_no_target() {
        let field = FieldModel::scalar("name", ScalarKind::Text);
        assert!(!field.is_relation());
        assert_eq!(field.relation_target(), None);
    }

    #[test]
    fn deferred_builder_sets_flag() {
        let field = FieldModel::scalar("email", ScalarKind::Text).deferred();
        assert!(field.deferred);
    }
}
