//! Schema introspection for pgtypes.
//!
//! A [`SchemaSource`] yields the ordered list of tables that code generation
//! consumes. Two sources are provided:
//!
//! - [`PostgresIntrospector`] - reads `information_schema` from a live database
//! - [`JsonSchemaFile`] - reads a snapshot previously written by `pgtypes inspect --json`

mod error;
mod json;
mod postgres;
mod rows;

pub use error::{Error, Result};
pub use json::JsonSchemaFile;
pub use postgres::PostgresIntrospector;
pub use rows::{ColumnRow, group_rows};

use pgtypes_core::Table;

/// Something that can describe the tables of a schema.
pub trait SchemaSource {
    /// Human readable description for logs and reports.
    fn describe(&self) -> String;

    /// Load every table, in introspection order.
    fn load(&self) -> Result<Vec<Table>>;
}

impl<S: SchemaSource + ?Sized> SchemaSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn load(&self) -> Result<Vec<Table>> {
        (**self).load()
    }
}
