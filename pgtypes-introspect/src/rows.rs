//! Grouping of flat introspection rows into tables.

use indexmap::IndexMap;
use pgtypes_core::{Column, Table};
use sqlx::FromRow;

/// One row of the schema query.
///
/// The column fields are empty for a table without columns.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ColumnRow {
    pub table_name: String,
    pub column_name: Option<String>,
    pub data_type: Option<String>,
    pub is_nullable: Option<bool>,
}

impl ColumnRow {
    pub fn new(
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        data_type: impl Into<String>,
        is_nullable: bool,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            column_name: Some(column_name.into()),
            data_type: Some(data_type.into()),
            is_nullable: Some(is_nullable),
        }
    }

    /// A row for a table that has no columns.
    pub fn bare(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            column_name: None,
            data_type: None,
            is_nullable: None,
        }
    }
}

/// Group rows into tables.
///
/// Tables appear in order of first appearance and columns keep row order.
pub fn group_rows(rows: impl IntoIterator<Item = ColumnRow>) -> Vec<Table> {
    let mut grouped: IndexMap<String, Vec<Column>> = IndexMap::new();

    for row in rows {
        let columns = grouped.entry(row.table_name).or_default();
        if let Some(name) = row.column_name {
            columns.push(Column::new(
                name,
                row.data_type.unwrap_or_default(),
                row.is_nullable.unwrap_or(false),
            ));
        }
    }

    grouped
        .into_iter()
        .map(|(name, columns)| Table::new(name, columns))
        .collect()
}
