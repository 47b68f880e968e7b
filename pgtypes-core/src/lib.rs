//! Core types and utilities for pgtypes.
//!
//! This crate provides the schema model handed over by introspection, the
//! identifier and type-name normalization rules, and the file primitives
//! used when persisting generated units.

mod file;
mod schema;
mod type_mapper;
mod utils;

// File operations
pub use file::write_file;
// Schema model
pub use schema::{Column, DEFAULT_SCHEMA, Table};
// Type mapping
pub use type_mapper::{ImportTag, MappedType, TypeMapper};
// String utilities
pub use utils::{normalize_type_name, to_pascal_case};
