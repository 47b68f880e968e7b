//! Import collection utilities.

use indexmap::IndexSet;

/// Tracks imported module paths and deduplicates them.
///
/// Maintains insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use pgtypes_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("time");
/// imports.add("github.com/google/uuid");
/// imports.add("time");
///
/// let paths: Vec<&str> = imports.iter().collect();
/// assert_eq!(paths, vec!["time", "github.com/google/uuid"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexSet<String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module path. Adding a path twice keeps the first position.
    pub fn add(&mut self, module: &str) {
        if !self.imports.contains(module) {
            self.imports.insert(module.to_string());
        }
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}
