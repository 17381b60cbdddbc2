//! # nav-core
//!
//! Core types and error types for navkit.
//!
//! This crate provides the foundational types shared across all navkit crates:
//! - Route tree nodes and flattened route descriptors
//! - Entity type metadata (fields, relations, display names, sidebar hints)
//! - Schema definitions and the record of where each binding came from
//! - Produced navigation surface (sidebar items, extra groups)
//! - Section and subsection bindings for the editing-screen composer
//! - Cross-cutting error types

pub mod bindings;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod navigation;
pub mod routes;
pub mod schema;
