//! # nav-registry
//!
//! External collaborators consumed by navkit discovery:
//! - [`EntityRegistry`]: read-only introspection over entity types
//! - [`SchemaLookup`]: resolve a schema path to an authored definition
//! - [`Catalog`]: a file bundling entities, schemas and routes, split into
//!   a [`StaticRegistry`], a [`SchemaCatalog`] and a route tree

mod catalog;
mod entities;
mod error;
mod schemas;

pub use catalog::{Catalog, SchemaEntry};
pub use entities::{EntityRegistry, StaticRegistry};
pub use error::{LookupError, RegistryError};
pub use schemas::{SchemaCatalog, SchemaLookup};
