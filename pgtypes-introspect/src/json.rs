//! Offline schema snapshots.

use std::{
    fs,
    path::{Path, PathBuf},
};

use pgtypes_core::Table;
use tracing::info;

use crate::{Error, Result, SchemaSource};

/// Loads tables from a JSON snapshot.
///
/// The format is the one `pgtypes inspect --json` prints:
///
/// ```json
/// [{"name": "users", "columns": [{"name": "id", "type": "integer", "nullable": false}]}]
/// ```
pub struct JsonSchemaFile {
    path: PathBuf,
}

impl JsonSchemaFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a snapshot from a string.
    pub fn parse(content: &str, path: &Path) -> Result<Vec<Table>> {
        serde_json::from_str(content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl SchemaSource for JsonSchemaFile {
    fn describe(&self) -> String {
        format!("snapshot '{}'", self.path.display())
    }

    fn load(&self) -> Result<Vec<Table>> {
        let content = fs::read_to_string(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;

        let tables = Self::parse(&content, &self.path)?;
        info!(tables = tables.len(), path = %self.path.display(), "loaded schema snapshot");
        Ok(tables)
    }
}
