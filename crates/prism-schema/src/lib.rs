//! Entity model declarations and the process-wide model registry for Prism.
//!
//! ## Crate layout
//! - `model`: runtime entity/field metadata consumed by resolution and
//!   serialization.
//! - `registry`: the process-wide, read-only model registry and its global
//!   accessors.
//! - `traits`: the `EntityKind` association between Rust types and models.
//! - `validate`: registration-time validation (fails fast at startup, never
//!   per request).

mod macros;

pub mod error;
pub mod model;
pub mod registry;
pub mod traits;
pub mod validate;

use crate::{registry::RegistryError, validate::ValidateError};
use thiserror::Error as ThisError;

/// Maximum length for entity names.
pub const MAX_ENTITY_NAME_LEN: usize = 64;

/// Maximum length for field names.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Envelope keys reserved for identity metadata; no field may use them.
pub const RESERVED_FIELD_NAMES: &[&str] = &["_name", "_pk"];

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::ErrorTree,
        model::{Cardinality, EntityModel, FieldKind, FieldModel, ScalarKind},
        registry::SchemaRegistry,
        traits::EntityKind,
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Validate(#[from] ValidateError),
}

/// re-exports
///
/// macros can use these, stops the user having to specify all the
/// dependencies in the Cargo.toml file manually
#[doc(hidden)]
pub mod __reexports {
    pub use ctor;
}
