//! Core operations.
//!
//! This module contains the business logic for pgtypes commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod inspect;

pub use generate::generate;
pub use inspect::inspect;
use pgtypes_config::SourceConfig;
use pgtypes_introspect::{JsonSchemaFile, PostgresIntrospector, SchemaSource};

/// Build the schema source a resolved configuration points at.
pub fn open_source(config: &SourceConfig) -> Box<dyn SchemaSource> {
    match config {
        SourceConfig::Database { url, schema } => {
            Box::new(PostgresIntrospector::new(url).with_schema(schema))
        }
        SourceConfig::Snapshot { path } => Box::new(JsonSchemaFile::new(path)),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use pgtypes_core::Table;
    use pgtypes_introspect::{Error, Result, SchemaSource};

    /// Source that returns fixed tables.
    pub struct StaticSource(pub Vec<Table>);

    impl SchemaSource for StaticSource {
        fn describe(&self) -> String {
            "static tables".to_string()
        }

        fn load(&self) -> Result<Vec<Table>> {
            Ok(self.0.clone())
        }
    }

    /// Source whose introspection always fails.
    pub struct FailingSource;

    impl SchemaSource for FailingSource {
        fn describe(&self) -> String {
            "failing source".to_string()
        }

        fn load(&self) -> Result<Vec<Table>> {
            Err(Error::Runtime(std::io::Error::other("connection reset")))
        }
    }
}
