//! Prism — a dynamic field-selection and representation engine for typed
//! entity graphs.
//!
//! ## Crate layout
//! - `core`: selection requests, field resolution, serialization, and
//!   representation envelopes.
//! - `schema`: entity model declarations, the process-wide registry, and
//!   registration-time validation.
//!
//! The `prelude` module mirrors the surface used by hosts: declare models,
//! register them with [`register_model!`], then serialize instances against
//! the validated registry.

pub use prism_core as core;
pub use prism_schema as schema;

pub use prism_core::{Error, ErrorClass, RequestError};
pub use prism_schema::register_model;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use prism_core::prelude::*;
    pub use prism_schema::{register_model, registry::get_registry, traits::EntityKind};
}

use prism_core::{
    envelope::Rendered, selection::SelectionRequest, serialize::Serializer, source::EntitySource,
};

/// Serialize one instance against the global, validated registry.
pub fn serialize(
    source: &dyn EntitySource,
    request: &SelectionRequest,
) -> Result<Rendered, Error> {
    let registry = prism_schema::registry::get_registry().map_err(Error::Schema)?;
    Serializer::new(&registry).serialize(source, request)
}

/// Serialize a collection of instances against the global registry.
pub fn serialize_many(
    sources: &[&dyn EntitySource],
    request: &SelectionRequest,
) -> Result<Rendered, Error> {
    let registry = prism_schema::registry::get_registry().map_err(Error::Schema)?;
    Serializer::new(&registry).serialize_many(sources, request)
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use ulid::Ulid;

    static ACCOUNT_FIELDS: &[FieldModel] = &[
        FieldModel::scalar("id", ScalarKind::Ulid),
        FieldModel::scalar("handle", ScalarKind::Text),
        FieldModel::scalar("bio", ScalarKind::Text).deferred(),
    ];

    static ACCOUNT: EntityModel = EntityModel {
        path: "prism_tests::Account",
        entity_name: "account",
        plural_name: None,
        primary_key: "id",
        fields: ACCOUNT_FIELDS,
        deferred_fields: &[],
    };

    struct Account;

    impl EntityKind for Account {
        const MODEL: &'static EntityModel = &ACCOUNT;
    }

    crate::register_model!(Account);

    #[test]
    fn global_registry_round_trip() {
        let record = Record::new(&ACCOUNT)
            .with_value("id", Ulid::from_parts(9, 9))
            .with_value("handle", "ada")
            .with_value("bio", "mathematician");

        let rendered = crate::serialize(&record, &SelectionRequest::Default)
            .expect("global serialization should succeed");
        let envelope = rendered.as_record().expect("should be an envelope");

        assert_eq!(envelope.plural_name(), "accounts");
        assert!(envelope.contains("handle"));
        assert!(!envelope.contains("bio"));

        let json = serde_json::to_value(&rendered).expect("envelope should serialize");
        assert_eq!(json["_name"], serde_json::json!("accounts"));
    }

    #[test]
    fn registry_seals_after_first_validated_read() {
        // force validation
        let _guard = get_registry().expect("fixture registry should validate");
        drop(_guard);

        static LATE: EntityModel = EntityModel {
            path: "prism_tests::Late",
            entity_name: "late",
            plural_name: None,
            primary_key: "id",
            fields: &[],
            deferred_fields: &[],
        };

        let err = prism_schema::registry::register_global(&LATE)
            .expect_err("late registration should be rejected");
        assert!(err.to_string().contains("sealed"));
    }
}
