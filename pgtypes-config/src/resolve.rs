//! Merging of file settings, command line overrides and the environment.

use std::path::PathBuf;

use pgtypes_core::DEFAULT_SCHEMA;
use tracing::debug;

use crate::{Config, Error, Result, TableFilter};

/// Values given on the command line. They win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub db: Option<String>,
    pub output: Option<PathBuf>,
    pub schema: Option<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub from_json: Option<PathBuf>,
}

/// Where the tables come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// A live database.
    Database { url: String, schema: String },
    /// A JSON snapshot on disk.
    Snapshot { path: PathBuf },
}

/// Everything the generate operation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub source: SourceConfig,
    pub output: PathBuf,
    pub filter: TableFilter,
}

/// Everything the inspect operation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    pub source: SourceConfig,
    pub filter: TableFilter,
}

impl Config {
    /// Resolve settings for `generate`.
    ///
    /// `env` looks up environment variables; pass `|k| std::env::var(k).ok()`.
    pub fn resolve(
        &self,
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<GenerateConfig> {
        let InspectConfig { source, filter } = self.resolve_inspect(overrides, env)?;

        let output = overrides
            .output
            .clone()
            .or_else(|| self.output.path.clone())
            .ok_or(Box::new(Error::MissingOutput))?;

        Ok(GenerateConfig {
            source,
            output,
            filter,
        })
    }

    /// Resolve settings for `inspect`, which needs no output directory.
    pub fn resolve_inspect(
        &self,
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<InspectConfig> {
        Ok(InspectConfig {
            source: self.resolve_source(overrides, env)?,
            filter: self.resolve_filter(overrides)?,
        })
    }

    fn resolve_source(
        &self,
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<SourceConfig> {
        if let Some(path) = &overrides.from_json {
            debug!(path = %path.display(), "using schema snapshot");
            return Ok(SourceConfig::Snapshot { path: path.clone() });
        }

        let present = |url: &String| !url.trim().is_empty();
        let env_var = self.database.env_var();
        let url = overrides
            .db
            .clone()
            .filter(present)
            .or_else(|| self.database.url.clone().filter(present))
            .or_else(|| env(env_var).filter(present))
            .ok_or_else(|| {
                Box::new(Error::MissingConnection {
                    env: env_var.to_string(),
                })
            })?;

        let schema = overrides
            .schema
            .clone()
            .or_else(|| self.database.schema.clone())
            .unwrap_or_else(|| DEFAULT_SCHEMA.to_string());

        Ok(SourceConfig::Database { url, schema })
    }

    fn resolve_filter(&self, overrides: &Overrides) -> Result<TableFilter> {
        let include = self
            .tables
            .include
            .iter()
            .chain(&overrides.include)
            .cloned()
            .collect();
        let exclude = self
            .tables
            .exclude
            .iter()
            .chain(&overrides.exclude)
            .cloned()
            .collect();

        let filter = TableFilter::new(include, exclude);
        if let Some(table) = filter.conflict() {
            return Err(Box::new(Error::FilterConflict {
                table: table.to_string(),
            }));
        }
        Ok(filter)
    }
}
