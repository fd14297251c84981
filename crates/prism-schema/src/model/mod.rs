mod entity;
mod field;

pub use entity::EntityModel;
pub use field::{Cardinality, FieldKind, FieldModel, ScalarKind};
