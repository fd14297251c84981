use crate::model::EntityModel;

///
/// EntityKind
///
/// Associates a Rust type with its declared entity model. Implemented by
/// mapping-layer types so models can be registered and resolved statically.
///

pub trait EntityKind: 'static {
    const MODEL: &'static EntityModel;

    /// Entity path used as the registry key.
    #[must_use]
    fn path() -> &'static str {
        Self::MODEL.path
    }
}
