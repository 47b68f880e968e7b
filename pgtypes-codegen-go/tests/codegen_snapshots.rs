//! Snapshot tests for Go unit generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use pgtypes_codegen_go::{Generator, LanguageCodegen, Units};
use pgtypes_core::{Column, Table};

fn build(tables: &[Table]) -> Units {
    Generator::new(tables)
        .build()
        .expect("Failed to build units")
}

fn unit(table: Table) -> String {
    let name = table.name().to_string();
    let mut units = build(&[table]);
    units.shift_remove(&name).expect("unit not found")
}

#[test]
fn test_users_unit() {
    let unit = unit(Table::new(
        "users",
        vec![
            Column::new("id", "serial", false),
            Column::new("email", "varchar(100)", false),
            Column::new("google_user_id", "varchar(100)", true),
        ],
    ));

    insta::assert_snapshot!("users_unit", unit);
}

#[test]
fn test_numeric_columns_share_one_import() {
    let unit = unit(Table::new(
        "invoices",
        vec![
            Column::new("amount", "numeric(10,2)", false),
            Column::new("tax", "numeric", true),
            Column::new("total", "NUMERIC(12, 4)", false),
        ],
    ));

    insta::assert_snapshot!("numeric_unit", unit);
}

#[test]
fn test_empty_table_unit() {
    let unit = unit(Table::new("audit", vec![]));
    insta::assert_snapshot!("empty_unit", unit);
}

#[test]
fn test_mixed_types_unit() {
    let unit = unit(Table::new(
        "events",
        vec![
            Column::new("id", "uuid", false),
            Column::new("payload", "jsonb", true),
            Column::new("created_at", "timestamp with time zone", false),
            Column::new("duration", "interval", true),
            Column::new("tags", "text[]", false),
            Column::new("scores", "int4[]", true),
            Column::new("labels", "uuid[]", false),
            Column::new("location", "point", false),
            Column::new("custom", "USER-DEFINED", true),
        ],
    ));

    insta::assert_snapshot!("mixed_unit", unit);
}

#[test]
fn test_units_follow_input_order() {
    let tables = vec![
        Table::new("zebra", vec![Column::new("id", "int8", false)]),
        Table::new("alpha", vec![Column::new("id", "int8", false)]),
    ];

    let units = build(&tables);
    let names: Vec<_> = units.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["zebra", "alpha"]);
}

#[test]
fn test_generate_overwrites_previous_output() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("users/users.go");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "stale").unwrap();

    let tables = vec![Table::new("users", vec![Column::new("id", "int4", false)])];
    let generator = Generator::new(&tables);
    let result = generator.generate(temp.path()).unwrap();

    assert_eq!(result.written, vec!["users/users.go".to_string()]);
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, build(&tables)["users"]);
    assert_eq!(generator.language(), "go");
}

#[test]
fn test_collision_writes_nothing() {
    let temp = tempfile::TempDir::new().unwrap();
    let tables = vec![
        Table::new("users", vec![Column::new("id", "int4", false)]),
        Table::new(
            "orders",
            vec![
                Column::new("order_id", "int4", false),
                Column::new("orderId", "int4", false),
            ],
        ),
    ];

    assert!(Generator::new(&tables).generate(temp.path()).is_err());
    assert!(!temp.path().join("users").exists());
}
