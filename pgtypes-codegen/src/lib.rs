//! Shared code generation utilities for pgtypes.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by target-specific generators (e.g., `pgtypes-codegen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code building blocks (CodeBuilder)
//! - [`generation`] - Output management (ImportCollector, FileRegistry)
//! - [`language`] - The LanguageCodegen trait and its result types
//! - [`naming`] - Identifier conventions per target language
//! - [`validate`] - Schema lints and diagnostics run before generation

pub mod builder;
pub mod generation;
pub mod language;
pub mod naming;
pub mod validate;

pub use builder::CodeBuilder;
pub use generation::{FileEntry, FileRegistry, ImportCollector, WriteStats};
pub use language::{GenerateResult, LanguageCodegen, Preview, PreviewFile};
pub use naming::{GO_NAMING, NamingConvention};
pub use validate::{Diagnostic, Lint, Severity, Validator};
