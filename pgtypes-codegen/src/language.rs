//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for emitting table units in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "go")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "go")
    fn file_extension(&self) -> &'static str;

    /// Render every unit without writing to disk
    fn preview(&self) -> Result<Preview>;

    /// Generate all units into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written, relative to the output directory
    pub written: Vec<String>,
    /// Non-fatal diagnostics raised while validating the schema
    pub warnings: Vec<String>,
}

/// Result of a preview
#[derive(Debug, Default)]
pub struct Preview {
    /// Units that would be written, in output order
    pub files: Vec<PreviewFile>,
    /// Non-fatal diagnostics raised while validating the schema
    pub warnings: Vec<String>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
