use std::path::Path;

use eyre::Result;
use indexmap::IndexMap;
use pgtypes_codegen::{
    FileEntry, FileRegistry, GO_NAMING, GenerateResult, LanguageCodegen, Preview, PreviewFile,
    Validator,
    validate::{DuplicateIdentifierLint, InvalidIdentifierLint, TablePathLint},
};
use pgtypes_core::{Table, TypeMapper};
use tracing::{debug, info};

use crate::{GoTypeMapper, GoUnit, unit::struct_name};

/// Table name -> generated unit text, in input table order.
pub type Units = IndexMap<String, String>;

/// Identifiers every unit declares besides the column aliases.
const UNIT_DECLARATIONS: [&str; 2] = ["C", "Table"];

/// Go code generator that produces one package per table.
pub struct Generator<'a, M: TypeMapper = GoTypeMapper> {
    tables: &'a [Table],
    mapper: M,
    validator: Validator,
}

impl<M: TypeMapper> LanguageCodegen for Generator<'_, M> {
    fn language(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn preview(&self) -> Result<Preview> {
        let (registry, warnings) = self.registry()?;
        let files = registry
            .entries()
            .map(|e| PreviewFile {
                path: e.path.clone(),
                content: e.content.clone(),
            })
            .collect();

        Ok(Preview { files, warnings })
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let (registry, warnings) = self.registry()?;
        let stats = registry.write_all(output_dir)?;

        info!(
            language = self.language(),
            files = stats.written,
            output = %output_dir.display(),
            "wrote generated units"
        );

        Ok(GenerateResult {
            written: stats.written_paths,
            warnings,
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(tables: &'a [Table]) -> Self {
        Self::with_mapper(tables, GoTypeMapper)
    }
}

impl<'a, M: TypeMapper> Generator<'a, M> {
    /// Create a generator with a custom type mapper.
    pub fn with_mapper(tables: &'a [Table], mapper: M) -> Self {
        let validator = Validator::empty()
            .with_lint(TablePathLint)
            .with_lint(
                DuplicateIdentifierLint::new(GO_NAMING)
                    .reserve(UNIT_DECLARATIONS)
                    .reserve_per_table(struct_name),
            )
            .with_lint(InvalidIdentifierLint::new(GO_NAMING));

        Self {
            tables,
            mapper,
            validator,
        }
    }

    /// Build every unit in memory.
    ///
    /// Fails before rendering anything if validation reports an error.
    pub fn build(&self) -> Result<Units> {
        self.build_with_warnings().map(|(units, _)| units)
    }

    fn build_with_warnings(&self) -> Result<(Units, Vec<String>)> {
        let warnings = self
            .validator
            .check(self.tables)?
            .iter()
            .map(|d| d.message.clone())
            .collect();

        let mut units = Units::with_capacity(self.tables.len());
        for table in self.tables {
            let text = GoUnit::new(table, &self.mapper).render();
            debug!(
                table = table.name(),
                columns = table.columns().len(),
                "built unit"
            );
            units.insert(table.name().to_string(), text);
        }

        Ok((units, warnings))
    }

    /// Relative path of a table's unit under the output root.
    fn unit_path(&self, table: &str) -> String {
        format!("{0}/{0}.{1}", table, self.file_extension())
    }

    fn registry(&self) -> Result<(FileRegistry, Vec<String>)> {
        let (units, warnings) = self.build_with_warnings()?;

        let mut registry = FileRegistry::new();
        for (table, text) in units {
            registry.register(FileEntry::new(self.unit_path(&table), text));
        }

        Ok((registry, warnings))
    }
}

#[cfg(test)]
mod tests {
    use pgtypes_core::Column;

    use super::*;

    fn tables() -> Vec<Table> {
        vec![
            Table::new(
                "users",
                vec![
                    Column::new("id", "serial", false),
                    Column::new("email", "varchar(100)", false),
                ],
            ),
            Table::new("accounts", vec![Column::new("id", "uuid", false)]),
            Table::new("audit", vec![]),
        ]
    }

    #[test]
    fn test_build_preserves_table_order() {
        let tables = tables();
        let units = Generator::new(&tables).build().unwrap();

        let names: Vec<_> = units.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["users", "accounts", "audit"]);
        assert!(units["accounts"].contains("type Id = uuid.UUID"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let tables = tables();
        let first = Generator::new(&tables).build().unwrap();
        let second = Generator::new(&tables).build().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_collision_fails_fast() {
        let tables = vec![Table::new(
            "users",
            vec![
                Column::new("user_id", "int4", false),
                Column::new("userId", "int4", false),
            ],
        )];

        let err = Generator::new(&tables).build().unwrap_err();
        assert!(err.to_string().contains("UserId"));
    }

    #[test]
    fn test_unit_declaration_collision() {
        let tables = vec![Table::new("t", vec![Column::new("c", "text", false)])];
        assert!(Generator::new(&tables).build().is_err());
    }

    #[test]
    fn test_struct_name_collision() {
        let tables = vec![Table::new(
            "Users",
            vec![
                Column::new("id", "int4", false),
                Column::new("users_column_names", "text", false),
            ],
        )];

        let err = Generator::new(&tables).build().unwrap_err();
        assert!(err.to_string().contains("'UsersColumnNames'"));
    }

    #[test]
    fn test_escaping_table_name_writes_nothing() {
        let temp = tempfile::TempDir::new().unwrap();
        let output = temp.path().join("out");
        let tables = vec![Table::new(
            "../escaped",
            vec![Column::new("id", "int4", false)],
        )];

        let err = Generator::new(&tables).generate(&output).unwrap_err();

        assert!(err.to_string().contains("cannot be used as a directory name"));
        assert!(!temp.path().join("escaped.go").exists());
        assert!(!temp.path().join("escaped").exists());
        assert!(!output.exists());
    }

    #[test]
    fn test_preview_carries_warnings() {
        let tables = vec![Table::new("type", vec![Column::new("id", "int4", false)])];

        let preview = Generator::new(&tables).preview().unwrap();

        assert_eq!(preview.files.len(), 1);
        assert_eq!(preview.warnings.len(), 1);
        assert!(preview.warnings[0].contains("'type'"));
    }

    #[test]
    fn test_preview_paths() {
        let tables = tables();
        let preview = Generator::new(&tables).preview().unwrap();

        let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["users/users.go", "accounts/accounts.go", "audit/audit.go"]
        );
    }

    #[test]
    fn test_generate_writes_one_directory_per_table() {
        let temp = tempfile::TempDir::new().unwrap();
        let tables = tables();

        let result = Generator::new(&tables).generate(temp.path()).unwrap();

        assert_eq!(result.written.len(), 3);
        assert!(result.warnings.is_empty());
        let written = std::fs::read_to_string(temp.path().join("users/users.go")).unwrap();
        assert!(written.ends_with("var Table = \"users\"\n"));
    }

    #[test]
    fn test_generate_reports_warnings() {
        let temp = tempfile::TempDir::new().unwrap();
        let tables = vec![Table::new("type", vec![Column::new("id", "int4", false)])];

        let result = Generator::new(&tables).generate(temp.path()).unwrap();

        assert_eq!(result.warnings.len(), 1);
        assert!(temp.path().join("type/type.go").exists());
    }
}
