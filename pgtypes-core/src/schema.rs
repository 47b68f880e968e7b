//! Schema model shared between introspection and code generation.

use serde::{Deserialize, Serialize};

/// A column as reported by schema introspection.
/// Schema inspected when none is configured.
pub const DEFAULT_SCHEMA: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    #[serde(rename = "type")]
    data_type: String,
    #[serde(default)]
    nullable: bool,
}

impl Column {
    /// Create a column from its raw name, raw database type and nullability.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable,
        }
    }

    /// Raw column name (snake_case in the database).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw database type, possibly parameterized (e.g. `varchar(255)`).
    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

/// A table with its columns in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    name: String,
    #[serde(default)]
    columns: Vec<Column>,
}

impl Table {
    /// Create a table. Column order is kept as given.
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in schema (ordinal) order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_preserves_column_order() {
        let table = Table::new(
            "users",
            vec![
                Column::new("id", "serial", false),
                Column::new("email", "varchar(100)", false),
                Column::new("google_user_id", "varchar(100)", true),
            ],
        );

        let names: Vec<_> = table.columns().iter().map(Column::name).collect();
        assert_eq!(names, vec!["id", "email", "google_user_id"]);
        assert!(table.columns()[2].is_nullable());
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"name":"users","columns":[{"name":"id","type":"int4"},{"name":"bio","type":"text","nullable":true}]}"#;
        let table: Table = serde_json::from_str(json).unwrap();

        assert_eq!(table.name(), "users");
        assert_eq!(table.columns()[0].data_type(), "int4");
        assert!(!table.columns()[0].is_nullable());
        assert!(table.columns()[1].is_nullable());
    }

    #[test]
    fn test_table_without_columns() {
        let table: Table = serde_json::from_str(r#"{"name":"empty"}"#).unwrap();
        assert!(table.is_empty());
    }
}
