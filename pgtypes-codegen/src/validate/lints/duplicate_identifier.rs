//! Lint for identifier collisions after normalization.

use std::collections::HashMap;

use pgtypes_core::Table;

use super::super::Lint;
use crate::{naming::NamingConvention, validate::Diagnostic};

/// Lint that errors when two columns of a table normalize to the same
/// identifier, or when a column takes a name the unit itself declares.
pub struct DuplicateIdentifierLint {
    naming: NamingConvention,
    reserved: Vec<&'static str>,
    table_declarations: Vec<fn(&str) -> String>,
}

impl DuplicateIdentifierLint {
    pub fn new(naming: NamingConvention) -> Self {
        Self {
            naming,
            reserved: Vec::new(),
            table_declarations: Vec::new(),
        }
    }

    /// Declare identifiers every unit already uses (e.g. `C`, `Table`).
    pub fn reserve(mut self, names: impl IntoIterator<Item = &'static str>) -> Self {
        self.reserved.extend(names);
        self
    }

    /// Declare an identifier every unit derives from its table name
    /// (e.g. the column-name struct).
    pub fn reserve_per_table(mut self, declaration: fn(&str) -> String) -> Self {
        self.table_declarations.push(declaration);
        self
    }
}

impl Lint for DuplicateIdentifierLint {
    fn name(&self) -> &'static str {
        "duplicate-identifier"
    }


    fn check(&self, tables: &[Table], diagnostics: &mut Vec<Diagnostic>) {
        for table in tables {
            let mut seen: HashMap<String, &str> = HashMap::new();
            let declared: Vec<String> = self
                .table_declarations
                .iter()
                .map(|declaration| declaration(table.name()))
                .collect();

            for column in table.columns() {
                let ident = self.naming.type_name(column.name());
                let location = format!("{}.{}", table.name(), column.name());

                if self.reserved.contains(&ident.as_str()) || declared.contains(&ident) {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!(
                                "column '{}' normalizes to '{}', which the generated unit already declares",
                                column.name(),
                                ident
                            ),
                        )
                        .at(location),
                    );
                    continue;
                }

                if let Some(first) = seen.get(&ident) {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!(
                                "columns '{}' and '{}' both normalize to '{}'",
                                first,
                                column.name(),
                                ident
                            ),
                        )
                        .at(location),
                    );
                } else {
                    seen.insert(ident, column.name());
                }
            }
        }
    }
}
