//! Inspect operation - list the tables a source describes.

use eyre::{Context, Result};
use pgtypes_config::InspectConfig;
use pgtypes_introspect::SchemaSource;

use crate::reports::InspectReport;

/// Load and filter the tables without generating anything.
pub fn inspect(source: &dyn SchemaSource, config: &InspectConfig) -> Result<InspectReport> {
    let tables = source
        .load()
        .wrap_err_with(|| format!("Failed to load tables from {}", source.describe()))?;

    Ok(InspectReport {
        source: source.describe(),
        tables: config.filter.apply(tables),
    })
}

#[cfg(test)]
mod tests {
    use pgtypes_config::{SourceConfig, TableFilter};
    use pgtypes_core::Table;

    use super::*;
    use crate::ops::testing::{FailingSource, StaticSource};

    fn config(filter: TableFilter) -> InspectConfig {
        InspectConfig {
            source: SourceConfig::Snapshot {
                path: "unused.json".into(),
            },
            filter,
        }
    }

    #[test]
    fn test_inspect_applies_filter() {
        let source = StaticSource(vec![
            Table::new("users", vec![]),
            Table::new("schema_migrations", vec![]),
        ]);
        let filter = TableFilter::new(vec![], vec!["schema_migrations".into()]);

        let report = inspect(&source, &config(filter)).unwrap();

        assert_eq!(report.source, "static tables");
        assert_eq!(report.tables.len(), 1);
        assert_eq!(report.tables[0].name(), "users");
    }

    #[test]
    fn test_inspect_propagates_failure() {
        assert!(inspect(&FailingSource, &config(TableFilter::all())).is_err());
    }
}
