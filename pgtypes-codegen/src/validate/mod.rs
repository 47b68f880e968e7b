//! Schema validation run before any unit is built.

mod diagnostic;
mod lint;
pub mod lints;

use eyre::{Result, bail};
use pgtypes_core::Table;
use tracing::warn;

pub use diagnostic::{Diagnostic, Severity};
pub use lint::Lint;
pub use lints::{DuplicateIdentifierLint, InvalidIdentifierLint, TablePathLint};

/// Runs a set of lints over the tables.
pub struct Validator {
    lints: Vec<Box<dyn Lint>>,
}

impl Validator {
    /// Create a validator with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Run every lint and collect the diagnostics.
    pub fn run(&self, tables: &[Table]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(tables, &mut diagnostics);
        }
        diagnostics
    }

    /// Run every lint and fail if any error was reported.
    ///
    /// Returns the warnings on success.
    pub fn check(&self, tables: &[Table]) -> Result<Vec<Diagnostic>> {
        let diagnostics = self.run(tables);
        let errors: Vec<&Diagnostic> = diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .collect();

        if !errors.is_empty() {
            let details: Vec<String> = errors.iter().map(|d| format!("  {}", d)).collect();
            bail!(
                "validation failed with {} error(s):\n{}",
                errors.len(),
                details.join("\n")
            );
        }

        for diag in &diagnostics {
            warn!("{}", diag);
        }

        Ok(diagnostics)
    }
}
