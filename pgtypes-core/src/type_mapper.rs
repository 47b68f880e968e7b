//! Type mapping between database column types and target-language types.

use tracing::debug;

use crate::normalize_type_name;

/// Extra dependency a mapped type needs in the generated unit.
///
/// Variant order is the order imports are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImportTag {
    /// Structured JSON support.
    Json,
    /// Arbitrary-precision decimal support.
    Decimal,
    /// Timestamp and duration support.
    Time,
    /// UUID support.
    Uuid,
}

impl ImportTag {
    /// All tags in emission order.
    pub const ALL: [ImportTag; 4] = [
        ImportTag::Json,
        ImportTag::Decimal,
        ImportTag::Time,
        ImportTag::Uuid,
    ];
}

/// A resolved target type expression plus its import requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    pub expr: String,
    pub import: Option<ImportTag>,
}

impl MappedType {
    pub fn new(expr: impl Into<String>, import: Option<ImportTag>) -> Self {
        Self {
            expr: expr.into(),
            import,
        }
    }

    /// A built-in type that needs no import.
    pub fn builtin(expr: impl Into<String>) -> Self {
        Self::new(expr, None)
    }
}

/// Trait for mapping database column types to language-specific types.
///
/// Implementors provide the lookup table and the fallbacks; the provided
/// [`TypeMapper::map_column_type`] handles normalization and nullability so
/// every target shares the same resolution order.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Look up an already normalized type name in the mapping table.
    fn lookup(&self, normalized: &str) -> Option<MappedType>;

    /// Type used for array types missing from the table.
    fn array_fallback(&self) -> MappedType;

    /// Type used for unrecognized types.
    fn fallback(&self) -> MappedType;

    /// Wrap a type expression in the language's optional form.
    fn map_optional(&self, inner: &str) -> String;

    /// Map a raw column type and nullability to a type expression.
    ///
    /// Unrecognized types resolve to [`TypeMapper::fallback`]; this never fails.
    fn map_column_type(&self, raw: &str, nullable: bool) -> MappedType {
        let normalized = normalize_type_name(raw);

        let mapped = match self.lookup(&normalized) {
            Some(mapped) => mapped,
            None if normalized.ends_with("[]") => {
                debug!(
                    language = self.language(),
                    raw,
                    "unlisted array type, using generic list"
                );
                self.array_fallback()
            }
            None => {
                debug!(
                    language = self.language(),
                    raw,
                    "unrecognized type, using fallback"
                );
                self.fallback()
            }
        };

        if nullable {
            MappedType::new(self.map_optional(&mapped.expr), mapped.import)
        } else {
            mapped
        }
    }
}
