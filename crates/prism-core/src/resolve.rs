use crate::{
    error::RequestError,
    selection::{Directive, SelectionMap, SelectionRequest},
};
use prism_schema::model::{EntityModel, FieldModel};
use std::collections::{BTreeMap, BTreeSet};

///
/// ResolvedFields
///
/// Output of field resolution: the schema-ordered fields to serialize plus
/// the selection request to propagate into each retained relation field.
///

#[derive(Debug)]
pub struct ResolvedFields {
    /// Fields to serialize, in declaration order.
    pub fields: Vec<&'static FieldModel>,
    /// Child request per retained relation field.
    pub children: BTreeMap<&'static str, SelectionRequest>,
}

// Directive view over merged request sources; nested maps stay borrowed
// until propagation so the merge never clones or mutates caller data.
#[derive(Clone, Copy)]
enum Merged<'a> {
    Include,
    Exclude,
    Nested(&'a SelectionMap),
}

/// Compute the exact field set to serialize for one entity and one request.
///
/// Precedence: flat include names, then flat exclude names, then the request
/// map's own directives (the map overrides both lists). Identifier-only mode
/// is decided by the serializer before this runs.
pub fn resolve(
    model: &'static EntityModel,
    request: Option<&SelectionMap>,
    include: &[&str],
    exclude: &[&str],
) -> Result<ResolvedFields, RequestError> {
    // fields deferred by default: field-level flags plus the entity list
    let mut deferred: BTreeSet<&'static str> = model
        .fields
        .iter()
        .filter(|f| f.deferred)
        .map(|f| f.name)
        .collect();
    deferred.extend(model.deferred_fields.iter().copied());

    // merge the three request sources into one directive map
    let mut merged: BTreeMap<&str, Merged<'_>> = BTreeMap::new();
    for name in include {
        merged.insert(*name, Merged::Include);
    }
    for name in exclude {
        merged.insert(*name, Merged::Exclude);
    }
    if let Some(map) = request {
        for (name, directive) in map.iter() {
            let entry = match directive {
                Directive::Include => Merged::Include,
                Directive::Exclude => Merged::Exclude,
                Directive::Nested(sub) => Merged::Nested(sub),
            };
            merged.insert(name.as_str(), entry);
        }
    }

    // apply directives against the declared field set
    for (name, directive) in &merged {
        let Some(field) = model.field(name) else {
            return Err(RequestError::UnknownField {
                entity: model.entity_name,
                field: (*name).to_string(),
            });
        };

        match directive {
            Merged::Exclude => {
                deferred.insert(field.name);
            }
            Merged::Include | Merged::Nested(_) => {
                deferred.remove(field.name);
            }
        }
    }

    let fields: Vec<&'static FieldModel> = model
        .fields
        .iter()
        .filter(|f| !deferred.contains(f.name))
        .collect();

    // child request per retained relation: a nested map propagates verbatim,
    // anything else collapses to identifier-only
    let mut children = BTreeMap::new();
    for field in &fields {
        if !field.is_relation() {
            continue;
        }
        let child = match merged.get(field.name) {
            Some(Merged::Nested(map)) => SelectionRequest::Fields((*map).clone()),
            _ => SelectionRequest::IdentifierOnly,
        };
        children.insert(field.name, child);
    }

    tracing::trace!(
        entity = model.entity_name,
        field_count = fields.len(),
        relation_count = children.len(),
        "resolved field selection"
    );

    Ok(ResolvedFields { fields, children })
}
