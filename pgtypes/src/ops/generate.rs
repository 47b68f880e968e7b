//! Generate operation - one Go package per table.

use eyre::{Context, Result};
use pgtypes_codegen_go::{Generator, LanguageCodegen};
use pgtypes_config::GenerateConfig;
use pgtypes_introspect::SchemaSource;
use tracing::info;

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Execute the generate operation.
///
/// Loads the tables, applies the filter, validates, then writes (or previews)
/// every unit. Nothing is written when loading or validation fails.
pub fn generate(
    source: &dyn SchemaSource,
    config: &GenerateConfig,
    dry_run: bool,
) -> Result<GenerateReport> {
    let tables = source
        .load()
        .wrap_err_with(|| format!("Failed to load tables from {}", source.describe()))?;

    let mut warnings: Vec<String> = config
        .filter
        .unmatched(&tables)
        .into_iter()
        .map(|name| format!("included table '{}' was not found", name))
        .collect();

    let tables = config.filter.apply(tables);
    info!(tables = tables.len(), "selected tables");

    let generator = Generator::new(&tables);
    let result = if dry_run {
        let preview = generator.preview().wrap_err("Failed to generate code")?;
        warnings.extend(preview.warnings);

        GenerationResult::Preview(PreviewResult {
            files: preview.files,
        })
    } else {
        let generated = generator
            .generate(&config.output)
            .wrap_err("Failed to generate code")?;
        warnings.extend(generated.warnings);

        GenerationResult::Written(WrittenResult {
            output_dir: config.output.clone(),
            files: generated.written,
        })
    };

    Ok(GenerateReport {
        source: source.describe(),
        table_count: tables.len(),
        warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use pgtypes_config::{SourceConfig, TableFilter};
    use pgtypes_core::{Column, Table};

    use super::*;
    use crate::ops::testing::{FailingSource, StaticSource};

    fn config(output: &std::path::Path, filter: TableFilter) -> GenerateConfig {
        GenerateConfig {
            source: SourceConfig::Snapshot {
                path: "unused.json".into(),
            },
            output: output.to_path_buf(),
            filter,
        }
    }

    fn users() -> Table {
        Table::new(
            "users",
            vec![
                Column::new("id", "serial", false),
                Column::new("email", "varchar(100)", false),
                Column::new("google_user_id", "varchar(100)", true),
            ],
        )
    }

    #[test]
    fn test_generate_writes_units() {
        let temp = tempfile::TempDir::new().unwrap();
        let output = temp.path().join("internal/tables");
        let source = StaticSource(vec![users(), Table::new("audit", vec![])]);

        let report = generate(&source, &config(&output, TableFilter::all()), false).unwrap();

        assert_eq!(report.table_count, 2);
        let GenerationResult::Written(written) = &report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.files, vec!["users/users.go", "audit/audit.go"]);

        let unit = std::fs::read_to_string(output.join("users/users.go")).unwrap();
        assert!(unit.contains("type GoogleUserId = *string\n"));
    }

    #[test]
    fn test_failed_introspection_writes_nothing() {
        let temp = tempfile::TempDir::new().unwrap();
        let output = temp.path().join("out");

        let err = generate(&FailingSource, &config(&output, TableFilter::all()), false).unwrap_err();

        assert!(err.to_string().contains("failing source"));
        assert!(!output.exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = tempfile::TempDir::new().unwrap();
        let output = temp.path().join("out");
        let source = StaticSource(vec![users()]);

        let report = generate(&source, &config(&output, TableFilter::all()), true).unwrap();

        let GenerationResult::Preview(preview) = &report.result else {
            panic!("expected preview result");
        };
        assert_eq!(preview.files.len(), 1);
        assert_eq!(preview.files[0].path, "users/users.go");
        assert!(!output.exists());
    }

    #[test]
    fn test_dry_run_reports_the_same_warnings() {
        let temp = tempfile::TempDir::new().unwrap();
        let tables = vec![Table::new("type", vec![Column::new("id", "int4", false)])];

        let previewed = generate(
            &StaticSource(tables.clone()),
            &config(temp.path(), TableFilter::all()),
            true,
        )
        .unwrap();
        let written = generate(
            &StaticSource(tables),
            &config(temp.path(), TableFilter::all()),
            false,
        )
        .unwrap();

        assert_eq!(previewed.warnings.len(), 1);
        assert_eq!(previewed.warnings, written.warnings);
    }

    #[test]
    fn test_filter_and_unmatched_warning() {
        let temp = tempfile::TempDir::new().unwrap();
        let source = StaticSource(vec![users(), Table::new("audit", vec![])]);
        let filter = TableFilter::new(vec!["users".into(), "ghosts".into()], vec![]);

        let report = generate(&source, &config(temp.path(), filter), false).unwrap();

        assert_eq!(report.table_count, 1);
        assert_eq!(report.warnings, vec!["included table 'ghosts' was not found"]);
        assert!(!temp.path().join("audit").exists());
    }

    #[test]
    fn test_collision_writes_nothing() {
        let temp = tempfile::TempDir::new().unwrap();
        let source = StaticSource(vec![
            users(),
            Table::new(
                "orders",
                vec![
                    Column::new("order_id", "int4", false),
                    Column::new("orderId", "int4", false),
                ],
            ),
        ]);

        assert!(generate(&source, &config(temp.path(), TableFilter::all()), false).is_err());
        assert!(!temp.path().join("users").exists());
    }
}
