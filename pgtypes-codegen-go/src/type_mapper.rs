//! PostgreSQL to Go type mapping.

use std::{collections::HashMap, sync::LazyLock};

use pgtypes_core::{ImportTag, MappedType, TypeMapper};

use ImportTag::{Decimal, Json, Time, Uuid};

/// Normalized PostgreSQL type name -> (Go type expression, import).
///
/// Several spellings of the same type map to the same expression.
const GO_TYPE_TABLE: &[(&str, &str, Option<ImportTag>)] = &[
    // Integer types
    ("smallint", "int16", None),
    ("int2", "int16", None),
    ("integer", "int32", None),
    ("int", "int32", None),
    ("int4", "int32", None),
    ("bigint", "int64", None),
    ("int8", "int64", None),
    ("serial", "int32", None),
    ("serial4", "int32", None),
    ("bigserial", "int64", None),
    ("serial8", "int64", None),
    ("smallserial", "int16", None),
    ("serial2", "int16", None),
    // Floating point types
    ("real", "float32", None),
    ("float4", "float32", None),
    ("double precision", "float64", None),
    ("float8", "float64", None),
    // Decimal types
    ("numeric", "decimal.Decimal", Some(Decimal)),
    ("decimal", "decimal.Decimal", Some(Decimal)),
    // String types
    ("character varying", "string", None),
    ("varchar", "string", None),
    ("character", "string", None),
    ("char", "string", None),
    ("bpchar", "string", None),
    ("name", "string", None),
    ("text", "string", None),
    // Boolean type
    ("boolean", "bool", None),
    ("bool", "bool", None),
    // Date/time types
    ("timestamp", "time.Time", Some(Time)),
    ("timestamp with time zone", "time.Time", Some(Time)),
    ("timestamptz", "time.Time", Some(Time)),
    ("timestamp without time zone", "time.Time", Some(Time)),
    ("date", "time.Time", Some(Time)),
    ("time", "time.Time", Some(Time)),
    ("time with time zone", "time.Time", Some(Time)),
    ("timetz", "time.Time", Some(Time)),
    ("time without time zone", "time.Time", Some(Time)),
    ("interval", "time.Duration", Some(Time)),
    // UUID type
    ("uuid", "uuid.UUID", Some(Uuid)),
    // JSON types
    ("json", "json.RawMessage", Some(Json)),
    ("jsonb", "json.RawMessage", Some(Json)),
    // Binary types
    ("bytea", "[]byte", None),
    // Network address types
    ("inet", "string", None),
    ("cidr", "string", None),
    ("macaddr", "string", None),
    ("macaddr8", "string", None),
    // Geometric types
    ("point", "string", None),
    ("line", "string", None),
    ("lseg", "string", None),
    ("box", "string", None),
    ("path", "string", None),
    ("polygon", "string", None),
    ("circle", "string", None),
    // Range types
    ("int4range", "string", None),
    ("int8range", "string", None),
    ("numrange", "string", None),
    ("tsrange", "string", None),
    ("tstzrange", "string", None),
    ("daterange", "string", None),
    // Array types
    ("text[]", "[]string", None),
    ("varchar[]", "[]string", None),
    ("character varying[]", "[]string", None),
    ("bpchar[]", "[]string", None),
    ("integer[]", "[]int32", None),
    ("int4[]", "[]int32", None),
    ("bigint[]", "[]int64", None),
    ("int8[]", "[]int64", None),
    ("smallint[]", "[]int16", None),
    ("int2[]", "[]int16", None),
    ("boolean[]", "[]bool", None),
    ("bool[]", "[]bool", None),
    ("real[]", "[]float32", None),
    ("float4[]", "[]float32", None),
    ("double precision[]", "[]float64", None),
    ("float8[]", "[]float64", None),
    // Money type, kept textual to avoid lossy parsing
    ("money", "string", None),
    // Enum types
    ("enum", "string", None),
    // XML type
    ("xml", "string", None),
    // Bit string types
    ("bit", "string", None),
    ("bit varying", "string", None),
    ("varbit", "string", None),
    // PostgreSQL internal types
    ("tsvector", "string", None),
    ("tsquery", "string", None),
    ("pg_lsn", "string", None),
    ("pg_snapshot", "string", None),
    ("txid_snapshot", "string", None),
];

static GO_TYPES: LazyLock<HashMap<&'static str, (&'static str, Option<ImportTag>)>> =
    LazyLock::new(|| {
        GO_TYPE_TABLE
            .iter()
            .map(|&(pg, go, import)| (pg, (go, import)))
            .collect()
    });

/// Go import path for an import requirement.
pub fn import_path(tag: ImportTag) -> &'static str {
    match tag {
        ImportTag::Json => "encoding/json",
        ImportTag::Decimal => "github.com/shopspring/decimal",
        ImportTag::Time => "time",
        ImportTag::Uuid => "github.com/google/uuid",
    }
}

/// Go type mapper implementation.
///
/// Nullable columns become pointers; unknown types become `string`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn language(&self) -> &'static str {
        "go"
    }

    fn lookup(&self, normalized: &str) -> Option<MappedType> {
        GO_TYPES
            .get(normalized)
            .map(|&(expr, import)| MappedType::new(expr, import))
    }

    fn array_fallback(&self) -> MappedType {
        MappedType::builtin("[]interface{}")
    }

    fn fallback(&self) -> MappedType {
        MappedType::builtin("string")
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("*{}", inner)
    }
}
