//! Configuration for pgtypes.
//!
//! Settings come from an optional `pgtypes.toml`, command line overrides and
//! the environment. [`Config::resolve`] merges them into an explicit
//! [`GenerateConfig`] that the generate operation receives.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod filter;
mod resolve;

pub use config::{
    Config, DEFAULT_CONFIG_FILE, DEFAULT_DATABASE_ENV, DatabaseConfig, OutputConfig, TablesConfig,
};
pub use error::{Error, Result};
pub use filter::TableFilter;
pub use resolve::{GenerateConfig, InspectConfig, Overrides, SourceConfig};
