// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod common;

use common::{init_tracing, table};
use tabula_table::{Column, Error, Type, Value};

#[test]
fn test_add_column() {
	init_tracing();
	let table = table();

	let result = table.with_column_added(Column::bool("c", [true, true, true])).unwrap();
	assert_eq!(result.row_count(), 3);
	assert_eq!(result.column_names().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn test_add_short_column() {
	init_tracing();
	let table = table();

	let result = table.with_column_added(Column::bool("c", [true, true]));
	assert!(matches!(result, Err(Error::UnevenRowCount { .. })));
	assert_eq!(table.column_count(), 2);
}

#[test]
fn test_add_row() {
	init_tracing();
	let table = table();

	let result = table.with_row_added([Value::int4(4), Value::utf8("w")]).unwrap();
	assert_eq!(result.row_count(), 4);
	assert_eq!(result.typed_column::<i32>("a").unwrap().as_slice(), &[1, 2, 3, 4]);
	assert_eq!(result.typed_column::<String>("b").unwrap().as_slice(), &["x", "y", "z", "w"]);
}

#[test]
fn test_add_row_with_too_many_values() {
	init_tracing();
	let table = table();

	let result = table.with_row_added([Value::int4(4), Value::utf8("w"), Value::bool(true)]);
	assert!(matches!(result, Err(Error::ColumnCountMismatch { .. })));
	assert_eq!(result.unwrap_err().code(), "TABLE_008");
}

#[test]
fn test_typed_row_access() {
	init_tracing();
	let table = table();
	let row = table.row(1).unwrap();

	assert_eq!(row.try_get_as::<String>("b"), Ok("y".to_string()));
	assert_eq!(row.try_get_as::<i32>("b"), Err(Error::type_mismatch(Type::Int4, Type::Utf8)));
	assert_eq!(row.try_get_as::<String>("zzz"), Err(Error::column_not_found("zzz")));
}

#[test]
fn test_chained_edits_stop_at_first_failure() {
	init_tracing();
	let table = table();

	let result = table
		.with_column_added(Column::bool("c", [true, false, true]))
		.and_then(|t| t.with_row_added([Value::int4(4), Value::utf8("w")]))
		.and_then(|t| t.with_column_removed("c"));
	assert_eq!(
		result,
		Err(Error::ColumnCountMismatch {
			expected: 3,
			actual: 2
		})
	);

	let result = table
		.with_column_added(Column::bool("c", [true, false, true]))
		.and_then(|t| t.with_row_added([Value::int4(4), Value::utf8("w"), Value::bool(false)]))
		.and_then(|t| t.with_column_removed("b"))
		.unwrap();
	assert_eq!(result.column_names().collect::<Vec<_>>(), ["a", "c"]);
	assert_eq!(result.row(3).unwrap().values(), vec![Value::int4(4), Value::bool(false)]);
}

#[test]
fn test_construction_failures_are_independent() {
	init_tracing();

	let uneven = tabula_table::Table::new("T", [Column::int4("a", [1, 2]), Column::int4("b", [1])]);
	assert!(matches!(uneven, Err(Error::UnevenRowCount { .. })));

	let duplicate = tabula_table::Table::new("T", [Column::int4("a", [1]), Column::int4("a", [1])]);
	assert!(matches!(duplicate, Err(Error::DuplicateColumnName { .. })));
}
