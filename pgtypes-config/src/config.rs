use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result, error::find_value_span};

/// File read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pgtypes.toml";

/// Environment variable holding the connection string by default.
pub const DEFAULT_DATABASE_ENV: &str = "DB_CONNECTION_STRING";

/// Root of pgtypes.toml
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tables: TablesConfig,
}

/// `[database]` section
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection string. Takes precedence over `env`.
    pub url: Option<String>,
    /// Environment variable consulted when `url` is not set.
    pub env: Option<String>,
    /// Schema to introspect.
    pub schema: Option<String>,
}

impl DatabaseConfig {
    pub fn env_var(&self) -> &str {
        self.env.as_deref().unwrap_or(DEFAULT_DATABASE_ENV)
    }
}

/// `[output]` section
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Root directory for generated units.
    pub path: Option<PathBuf>,
}

/// `[tables]` section
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TablesConfig {
    /// Only generate these tables. Empty means every table.
    #[serde(default)]
    pub include: Vec<String>,
    /// Never generate these tables.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_CONFIG_FILE)
    }
}

impl Config {
    /// Parse a pgtypes.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Load the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `./pgtypes.toml` is read if
    /// present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a pgtypes.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let blank = |field: &str, value: &Option<String>| -> Result<()> {
            match value {
                Some(v) if v.trim().is_empty() => Err(Error::validation(
                    format!("{} must not be empty", field),
                    src,
                    filename,
                    find_value_span(src, v),
                )),
                _ => Ok(()),
            }
        };
        blank("database.url", &self.database.url)?;
        blank("database.env", &self.database.env)?;
        blank("database.schema", &self.database.schema)?;

        for table in &self.tables.include {
            if self.tables.exclude.contains(table) {
                return Err(Error::validation(
                    format!("table '{}' is both included and excluded", table),
                    src,
                    filename,
                    find_value_span(src, table),
                ));
            }
        }

        Ok(())
    }
}
