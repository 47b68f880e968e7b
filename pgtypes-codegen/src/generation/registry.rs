//! File registration pattern for declarative code generation.
//!
//! Generators register one [`FileEntry`] per output unit, then either preview
//! the registry or write it under an output root.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::new("users/users.go", unit));
//! registry.write_all(&output_dir)?;
//! ```

use std::path::{Component, Path, PathBuf};

use eyre::{Context, Result, bail};
use pgtypes_core::write_file;
use tracing::debug;

/// An entry in the file registry representing a file to be generated.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the full path for this entry.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    /// Write this file to disk, overwriting any previous version.
    ///
    /// Refuses paths that are absolute or step out of `base`.
    pub fn write(&self, base: &Path) -> Result<()> {
        let relative = Path::new(&self.path);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            bail!("refusing to write {} outside the output root", self.path);
        }

        let path = self.full_path(base);
        write_file(&path, &self.content)
            .wrap_err_with(|| format!("failed to write {}", path.display()))
    }
}

/// Registry for collecting and persisting generated files.
///
/// Entries keep registration order, both for preview and for writing.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file entry.
    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    /// Get all registered entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// Write all files under `base`.
    ///
    /// Stops at the first failure. Files written before it stay on disk.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in &self.entries {
            entry.write(base)?;
            debug!(path = %entry.path, "wrote file");
            stats.written += 1;
            stats.written_paths.push(entry.path.clone());
        }

        Ok(stats)
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Number of files written.
    pub written: usize,
    /// Paths of written files, relative to the output root.
    pub written_paths: Vec<String>,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_registry_keeps_registration_order() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("users/users.go", ""));
        registry.register(FileEntry::new("accounts/accounts.go", ""));

        let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["users/users.go", "accounts/accounts.go"]);
    }

    #[test]
    fn test_registry_write_all() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();

        registry.register(FileEntry::new("users/users.go", "package users\n"));
        registry.register(FileEntry::new("orders/orders.go", "package orders\n"));

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written, 2);
        assert_eq!(
            fs::read_to_string(temp.path().join("users/users.go")).unwrap(),
            "package users\n"
        );
        assert!(temp.path().join("orders/orders.go").exists());
    }

    #[test]
    fn test_write_rejects_escaping_paths() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("out");

        for path in ["../escaped/escaped.go", "/tmp/abs.go", "a/../../b.go", "./a.go"] {
            let err = FileEntry::new(path, "package x\n").write(&root).unwrap_err();
            assert!(err.to_string().contains("outside the output root"), "{path}");
        }

        assert!(!temp.path().join("escaped").exists());
        assert!(!root.exists());
    }

    #[test]
    fn test_write_all_stops_at_first_failure() {
        let temp = TempDir::new().unwrap();
        // A plain file where the "orders" directory should go.
        fs::write(temp.path().join("orders"), "blocker").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("users/users.go", "package users\n"));
        registry.register(FileEntry::new("orders/orders.go", "package orders\n"));
        registry.register(FileEntry::new("zones/zones.go", "package zones\n"));

        let err = registry.write_all(temp.path()).unwrap_err();

        assert!(err.to_string().contains("orders.go"));
        assert!(temp.path().join("users/users.go").exists());
        assert!(!temp.path().join("zones").exists());
    }
}
