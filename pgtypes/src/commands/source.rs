use std::path::PathBuf;

use clap::Args;
use pgtypes_config::{Config, Overrides};

use super::UnwrapOrExit;

/// Options shared by every command that reads a schema.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to pgtypes.toml (defaults to ./pgtypes.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Database connection string (falls back to $DB_CONNECTION_STRING)
    #[arg(short, long, value_name = "URL")]
    pub db: Option<String>,

    /// Schema to introspect (defaults to public)
    #[arg(long)]
    pub schema: Option<String>,

    /// Only process this table (repeatable)
    #[arg(long, value_name = "TABLE")]
    pub include: Vec<String>,

    /// Skip this table (repeatable)
    #[arg(long, value_name = "TABLE")]
    pub exclude: Vec<String>,

    /// Read tables from a JSON snapshot instead of a database
    #[arg(long, value_name = "FILE", conflicts_with = "db")]
    pub from_json: Option<PathBuf>,
}

impl SourceArgs {
    pub fn load_config(&self) -> Config {
        Config::load(self.config.as_deref()).unwrap_or_exit()
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            db: self.db.clone(),
            output: None,
            schema: self.schema.clone(),
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            from_json: self.from_json.clone(),
        }
    }
}

pub fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
