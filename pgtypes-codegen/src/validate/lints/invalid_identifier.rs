//! Lint for names that won't form valid identifiers in generated code.

use pgtypes_core::Table;

use super::super::Lint;
use crate::{naming::NamingConvention, validate::Diagnostic};

/// Lint that warns about table names unusable as package names and column
/// names whose normalized form is not a valid identifier.
pub struct InvalidIdentifierLint {
    naming: NamingConvention,
}

impl InvalidIdentifierLint {
    pub fn new(naming: NamingConvention) -> Self {
        Self { naming }
    }
}

impl Lint for InvalidIdentifierLint {
    fn name(&self) -> &'static str {
        "invalid-identifier"
    }


    fn check(&self, tables: &[Table], diagnostics: &mut Vec<Diagnostic>) {
        for table in tables {
            if !self.naming.is_valid_identifier(table.name()) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("table name '{}' is not a valid package name", table.name()),
                    )
                    .at(table.name()),
                );
            }

            for column in table.columns() {
                let ident = self.naming.type_name(column.name());
                if !self.naming.is_valid_identifier(&ident) {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "column '{}' normalizes to '{}', which is not a valid identifier",
                                column.name(),
                                ident
                            ),
                        )
                        .at(format!("{}.{}", table.name(), column.name())),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pgtypes_core::Column;

    use super::*;
    use crate::GO_NAMING;

    fn check(tables: &[Table]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        InvalidIdentifierLint::new(GO_NAMING).check(tables, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_valid_names() {
        let tables = vec![Table::new(
            "users",
            vec![Column::new("first_name", "text", false)],
        )];
        assert!(check(&tables).is_empty());
    }

    #[test]
    fn test_keyword_table_name() {
        let tables = vec![Table::new("select", vec![])];
        let diagnostics = check(&tables);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].location.as_deref(), Some("select"));
    }

    #[test]
    fn test_bad_column_identifiers() {
        let tables = vec![Table::new(
            "users",
            vec![
                Column::new("2fa_secret", "text", false),
                Column::new("_", "text", false),
                Column::new("e-mail", "text", false),
            ],
        )];

        let diagnostics = check(&tables);
        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics[1].message.contains("normalizes to ''"));
    }
}
