//! Inspect command report data structures.

use pgtypes_core::Table;

use super::output::{Output, Report};

/// Tables as loaded from a source.
#[derive(Debug)]
pub struct InspectReport {
    pub source: String,
    pub tables: Vec<Table>,
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Source", &self.source);
        out.key_value("Tables", &self.tables.len().to_string());

        for table in &self.tables {
            out.newline();
            out.section(table.name());
            if table.is_empty() {
                out.list_item("(no columns)");
            }
            for column in table.columns() {
                let null = if column.is_nullable() { "null" } else { "not null" };
                out.list_item(&format!(
                    "{} {} {}",
                    column.name(),
                    column.data_type(),
                    null
                ));
            }
        }
    }
}
