//! Entity type metadata as exposed by the entity registry.
//!
//! These structs are owned by the registry and are read-only to discovery.
//! All derive `Serialize`, `Deserialize`, and `JsonSchema` so catalogs can be
//! loaded from files and bindings can be emitted as JSON.

mod entity;
mod field;
mod relation;

pub use entity::EntityType;
pub use field::FieldDescriptor;
pub use relation::{EntityRef, RelationDescriptor};
