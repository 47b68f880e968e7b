//! Lint for table names that can't be used as a directory name.

use pgtypes_core::Table;

use super::super::Lint;
use crate::validate::Diagnostic;

/// Lint that errors when a table name would place its unit outside the
/// output root, or isn't a single path component at all.
pub struct TablePathLint;

impl TablePathLint {
    fn is_plain_component(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\', '\0'])
    }
}

impl Lint for TablePathLint {
    fn name(&self) -> &'static str {
        "table-path"
    }

    fn check(&self, tables: &[Table], diagnostics: &mut Vec<Diagnostic>) {
        for table in tables {
            if !Self::is_plain_component(table.name()) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "table name '{}' cannot be used as a directory name",
                            table.name()
                        ),
                    )
                    .at(table.name()),
                );
            }
        }
    }
}
