use crate::{err, error::ErrorTree, registry::SchemaRegistry};

pub(super) fn validate_relations(registry: &SchemaRegistry, errs: &mut ErrorTree) {
    for (path, model) in registry.iter() {
        for field in model.fields {
            let Some(target) = field.relation_target() else {
                continue;
            };

            if registry.try_get(target).is_err() {
                err!(
                    errs,
                    path => "relation field '{}' targets unregistered entity '{target}'",
                    field.name,
                );
            }
        }
    }
}
