//! Core engine for Prism: selection requests, field resolution, entity
//! serialization, and representation envelopes.
//!
//! The engine is purely computational: no I/O happens inside resolution or
//! serialization, and every call works on per-call owned data against a
//! read-only schema registry. Each `serialize` call is a bounded synchronous
//! tree traversal whose depth is capped by the serializer configuration.

pub mod envelope;
pub mod error;
pub mod resolve;
pub mod selection;
pub mod serialize;
pub mod source;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Default cap on nested envelope depth.
///
/// Selection requests are caller-supplied and entity graphs may be cyclic,
/// so serialization bounds recursion rather than trusting the request.
pub const DEFAULT_MAX_DEPTH: usize = 16;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        envelope::{Rendered, Representation},
        selection::{Directive, SelectionMap, SelectionRequest},
        serialize::{Serializer, SerializerConfig},
        source::{EntitySource, Record},
        value::Value,
    };
    pub use prism_schema::prelude::*;
}

pub use crate::error::{Error, ErrorClass, RequestError};
