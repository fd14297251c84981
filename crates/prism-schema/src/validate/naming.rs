use crate::{
    MAX_ENTITY_NAME_LEN, MAX_FIELD_NAME_LEN, err, error::ErrorTree, registry::SchemaRegistry,
};
use std::collections::BTreeMap;

pub(super) fn validate_entity_naming(registry: &SchemaRegistry, errs: &mut ErrorTree) {
    let mut by_name: BTreeMap<&str, &str> = BTreeMap::new();
    let mut by_plural: BTreeMap<String, &str> = BTreeMap::new();

    for (path, model) in registry.iter() {
        if model.entity_name.is_empty() {
            err!(errs, path => "entity has no name declared");
            continue;
        }

        check_ident(errs, path, "entity name", model.entity_name, MAX_ENTITY_NAME_LEN);

        if let Some(plural) = model.plural_name {
            check_ident(errs, path, "plural name", plural, MAX_ENTITY_NAME_LEN);
        }

        for field in model.fields {
            check_ident(errs, path, "field name", field.name, MAX_FIELD_NAME_LEN);
        }

        // names must be unique across the registry so the sideloading
        // renderer can collate envelopes by type
        if let Some(prev) = by_name.insert(model.entity_name, path) {
            err!(
                errs,
                path => "duplicate entity name '{}' also declared by '{prev}'",
                model.entity_name,
            );
        }

        let plural = model.resolved_plural_name().into_owned();
        if let Some(prev) = by_plural.insert(plural.clone(), path) {
            err!(
                errs,
                path => "duplicate plural name '{plural}' also declared by '{prev}'",
            );
        }
    }
}

fn check_ident(errs: &mut ErrorTree, path: &str, what: &str, ident: &str, max_len: usize) {
    if ident.is_empty() {
        err!(errs, path => "{what} is empty");
        return;
    }
    if ident.len() > max_len {
        err!(errs, path => "{what} '{ident}' exceeds {max_len} characters");
    }
    if !ident.is_ascii() {
        err!(errs, path => "{what} '{ident}' contains non-ascii characters");
    }
}
