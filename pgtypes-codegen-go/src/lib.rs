//! Go code generator for pgtypes.
//!
//! Every table becomes one package at `<table>/<table>.go` holding a type
//! alias per column, a struct of column names with its instance `C`, and the
//! `Table` name constant.

mod generator;
mod type_mapper;
mod unit;

pub use generator::{Generator, Units};
pub use pgtypes_codegen::{GenerateResult, LanguageCodegen, Preview, PreviewFile};
pub use type_mapper::{GoTypeMapper, import_path};
pub use unit::{GoUnit, go_string_literal, struct_name};
