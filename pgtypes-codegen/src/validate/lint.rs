//! Lint trait for schema validation.

use pgtypes_core::Table;

use super::Diagnostic;

/// A lint that checks the introspected tables for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the tables and add any diagnostics.
    fn check(&self, tables: &[Table], diagnostics: &mut Vec<Diagnostic>);
}
