//! Naming conventions for generated code.

use pgtypes_core::to_pascal_case;

/// Language-specific naming conventions.
///
/// Defines how database identifiers become declaration names and which
/// words the language reserves.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a column name to a type/field name (e.g., "first_name" -> "FirstName")
    pub column_to_type: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Normalized declaration name for a column.
    pub fn type_name(&self, name: &str) -> String {
        (self.column_to_type)(name)
    }

    /// Check that a name is usable as an identifier: a letter or underscore
    /// followed by letters, digits or underscores, and not reserved.
    pub fn is_valid_identifier(&self, name: &str) -> bool {
        let mut chars = name.chars();
        let starts_ok = matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_');
        starts_ok && chars.all(|c| c.is_alphanumeric() || c == '_') && !self.is_reserved(name)
    }
}

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    column_to_type: to_pascal_case, // exported identifiers are PascalCase
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
};
