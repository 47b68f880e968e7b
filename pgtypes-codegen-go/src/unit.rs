//! One generated Go package per table.

use std::collections::BTreeSet;

use pgtypes_codegen::{CodeBuilder, GO_NAMING, ImportCollector};
use pgtypes_core::{Column, ImportTag, MappedType, Table, TypeMapper};

use crate::type_mapper::import_path;

/// A column resolved to its Go declaration.
struct ColumnDecl<'a> {
    ident: String,
    ty: MappedType,
    column: &'a Column,
}

/// Name of the column-name struct declared by a table's unit.
pub fn struct_name(table: &str) -> String {
    format!("{table}ColumnNames")
}

/// The Go unit for a single table.
///
/// Layout: package clause, import block (only when a column needs one), one
/// type alias per column, the column-name struct and its `C` instance, and
/// the `Table` constant.
pub struct GoUnit<'a, M: TypeMapper> {
    table: &'a Table,
    mapper: &'a M,
}

impl<'a, M: TypeMapper> GoUnit<'a, M> {
    pub fn new(table: &'a Table, mapper: &'a M) -> Self {
        Self { table, mapper }
    }

    /// Name of the generated column-name struct.
    pub fn struct_name(&self) -> String {
        struct_name(self.table.name())
    }

    /// Imports required by the table's columns, in emission order.
    pub fn imports(&self) -> ImportCollector {
        let tags: BTreeSet<ImportTag> = self
            .table
            .columns()
            .iter()
            .filter_map(|c| {
                self.mapper
                    .map_column_type(c.data_type(), c.is_nullable())
                    .import
            })
            .collect();

        let mut imports = ImportCollector::new();
        for tag in tags {
            imports.add(import_path(tag));
        }
        imports
    }

    fn declarations(&self) -> Vec<ColumnDecl<'a>> {
        self.table
            .columns()
            .iter()
            .map(|column| ColumnDecl {
                ident: GO_NAMING.type_name(column.name()),
                ty: self
                    .mapper
                    .map_column_type(column.data_type(), column.is_nullable()),
                column,
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let decls = self.declarations();
        let imports = self.imports();
        let struct_name = self.struct_name();

        CodeBuilder::go()
            .line(&format!("package {}", self.table.name()))
            .blank()
            .when(!imports.is_empty(), |b| {
                b.block_with_close("import (", ")", |b| {
                    b.each(imports.iter(), |b, path| b.line(&go_string_literal(path)))
                })
                .blank()
            })
            .when(!decls.is_empty(), |b| {
                b.each(&decls, |b, decl| {
                    b.line(&format!("type {} = {}", decl.ident, decl.ty.expr))
                })
                .blank()
            })
            .block_with_close(&format!("type {} struct {{", struct_name), "}", |b| {
                b.each(&decls, |b, decl| b.line(&format!("{} string", decl.ident)))
            })
            .blank()
            .block_with_close(&format!("var C = {}{{", struct_name), "}", |b| {
                b.each(&decls, |b, decl| {
                    b.line(&format!(
                        "{}: {},",
                        decl.ident,
                        go_string_literal(decl.column.name())
                    ))
                })
            })
            .blank()
            .line(&format!(
                "var Table = {}",
                go_string_literal(self.table.name())
            ))
            .build()
    }
}

/// Quote a string as a Go interpreted string literal.
pub fn go_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
