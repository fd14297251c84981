mod naming;
mod relation;


use crate::{
    RESERVED_FIELD_NAMES, err, error::ErrorTree, model::FieldKind, registry::SchemaRegistry,
};
use thiserror::Error as ThisError;

///
/// ValidateError
///

#[derive(Debug, ThisError)]
pub enum ValidateError {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

/// Validate every registered model. Runs once at startup via
/// [`get_registry`](crate::registry::get_registry); configuration errors
/// surface here rather than per request.
pub fn validate_registry(registry: &SchemaRegistry) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    naming::validate_entity_naming(registry, &mut errs);
    validate_entity_fields(registry, &mut errs);
    relation::validate_relations(registry, &mut errs);

    errs.result()
}

// Structural checks on each entity's field list.
fn validate_entity_fields(registry: &SchemaRegistry, errs: &mut ErrorTree) {
    for (path, model) in registry.iter() {
        // primary key
        match model.pk_field() {
            None => {
                err!(
                    errs,
                    path => "primary key '{}' is not a declared field",
                    model.primary_key,
                );
            }
            Some(pk) => {
                if matches!(pk.kind, FieldKind::Relation { .. }) {
                    err!(errs, path => "primary key '{}' must be scalar", pk.name);
                }
            }
        }

        // duplicate field names
        for (i, field) in model.fields.iter().enumerate() {
            if model.fields[..i].iter().any(|f| f.name == field.name) {
                err!(errs, path => "duplicate field name '{}'", field.name);
            }
        }

        // reserved envelope keys
        for field in model.fields {
            if RESERVED_FIELD_NAMES.contains(&field.name) {
                err!(
                    errs,
                    path => "field name '{}' is reserved for envelope metadata",
                    field.name,
                );
            }
        }

        // deferred list must reference declared fields
        for name in model.deferred_fields {
            if model.field(name).is_none() {
                err!(
                    errs,
                    path => "deferred field '{name}' is not a declared field",
                );
            }
        }
    }
}
