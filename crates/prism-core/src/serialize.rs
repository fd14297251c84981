use crate::{
    DEFAULT_MAX_DEPTH,
    envelope::{Rendered, Representation},
    error::{Error, RequestError},
    resolve::resolve,
    selection::SelectionRequest,
    source::EntitySource,
    value::Value,
};
use prism_schema::{model::FieldKind, registry::SchemaRegistry};

///
/// SerializerConfig
///

#[derive(Clone, Copy, Debug)]
pub struct SerializerConfig {
    /// Maximum depth of nested envelopes before a request is rejected.
    pub max_depth: usize,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

///
/// Serializer
///
/// Serializes entity instances into representation envelopes against a
/// read-only schema registry. Holds no per-call state: one serializer can
/// be shared across calls and threads.
///

pub struct Serializer<'a> {
    registry: &'a SchemaRegistry,
    config: SerializerConfig,
}

impl<'a> Serializer<'a> {
    #[must_use]
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self {
            registry,
            config: SerializerConfig::default(),
        }
    }

    /// Replace the default depth cap.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Serialize one instance under a selection request.
    pub fn serialize(
        &self,
        source: &dyn EntitySource,
        request: &SelectionRequest,
    ) -> Result<Rendered, Error> {
        self.serialize_with(source, request, &[], &[])
    }

    /// Serialize one instance with root-level flat include/exclude lists.
    /// The lists apply to the root entity only; related entities receive
    /// nothing but their propagated requests.
    pub fn serialize_with(
        &self,
        source: &dyn EntitySource,
        request: &SelectionRequest,
        include: &[&str],
        exclude: &[&str],
    ) -> Result<Rendered, Error> {
        self.serialize_at(source, request, include, exclude, 0)
    }

    /// Serialize a collection of top-level instances under one request.
    /// Each member is serialized independently.
    pub fn serialize_many(
        &self,
        sources: &[&dyn EntitySource],
        request: &SelectionRequest,
    ) -> Result<Rendered, Error> {
        let rendered = sources
            .iter()
            .map(|source| self.serialize(*source, request))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Rendered::List(rendered))
    }

    fn serialize_at(
        &self,
        source: &dyn EntitySource,
        request: &SelectionRequest,
        include: &[&str],
        exclude: &[&str],
        depth: usize,
    ) -> Result<Rendered, Error> {
        let model = source.model();

        // identifier-only short-circuits before any field resolution
        if request.is_identifier_only() {
            return Ok(Rendered::Scalar(source.primary_key()));
        }

        if depth >= self.config.max_depth {
            return Err(RequestError::DepthLimitExceeded {
                entity: model.entity_name,
                limit: self.config.max_depth,
            }
            .into());
        }

        let resolved = resolve(model, request.directive_map(), include, exclude)?;

        let mut fields = Vec::with_capacity(resolved.fields.len());
        for field in &resolved.fields {
            let rendered = match &field.kind {
                FieldKind::Scalar(_) => Rendered::Scalar(source.value(field.name)),
                FieldKind::Relation {
                    target,
                    cardinality,
                } => {
                    // the target must be registered even when the related
                    // value is absent
                    self.registry.try_get(target)?;

                    let child = resolved
                        .children
                        .get(field.name)
                        .cloned()
                        .unwrap_or(SelectionRequest::IdentifierOnly);

                    if cardinality.is_many() {
                        let members = source.related_many(field.name);
                        let mut items = Vec::with_capacity(members.len());
                        for member in members {
                            items.push(self.serialize_at(member, &child, &[], &[], depth + 1)?);
                        }
                        Rendered::List(items)
                    } else {
                        match source.related_one(field.name) {
                            Some(related) => {
                                self.serialize_at(related, &child, &[], &[], depth + 1)?
                            }
                            None => Rendered::Scalar(Value::None),
                        }
                    }
                }
            };

            fields.push((field.name, rendered));
        }

        tracing::debug!(
            entity = model.entity_name,
            depth,
            field_count = fields.len(),
            "serialized representation"
        );

        Ok(Rendered::Record(Box::new(Representation::new(
            model.resolved_plural_name(),
            source.primary_key(),
            fields,
        ))))
    }
}
