//! Shared string utilities for code generation.

/// Convert a string to PascalCase (e.g., "first_name" -> "FirstName")
///
/// Splits on underscores and uppercases the first character of every
/// non-empty segment. The remainder of each segment is kept as is, so input
/// that is already PascalCase comes back unchanged.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Normalize a raw database type name for lookup.
///
/// Lowercases, drops every parenthesized group (length, precision) and
/// collapses whitespace: `"VARCHAR(255)"` -> `"varchar"`,
/// `"timestamp(3) with time zone"` -> `"timestamp with time zone"`,
/// `"varchar(20)[]"` -> `"varchar[]"`.
pub fn normalize_type_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut stripped = String::with_capacity(lowered.len());
    let mut depth = 0usize;

    for c in lowered.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => stripped.push(c),
            _ => {}
        }
    }

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
