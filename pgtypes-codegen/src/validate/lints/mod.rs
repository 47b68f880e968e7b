//! Built-in lints.

mod duplicate_identifier;
mod invalid_identifier;
mod table_path;

pub use duplicate_identifier::DuplicateIdentifierLint;
pub use invalid_identifier::InvalidIdentifierLint;
pub use table_path::TablePathLint;
