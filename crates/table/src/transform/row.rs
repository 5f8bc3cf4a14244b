// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tabula_type::{CowVec, Error, Result, Value};
use tracing::{debug, instrument};

use crate::{Column, Row, Table};

// Row edits apply one column edit per column, in column order. The first
// failing column aborts the whole edit; partial results are dropped and the
// table is rebuilt only from a complete set.
impl Table {
	#[instrument(name = "table::with_row_added", level = "debug", skip_all, fields(table = %self.name()))]
	pub fn with_row_added(&self, values: impl IntoIterator<Item = Value>) -> Result<Table> {
		let values = self.row_values(values)?;
		self.with_each_column(values, |column, value| column.with_value_added(value))
	}

	/// Inserts a row before row `index`; `index` may equal the row count.
	#[instrument(name = "table::with_row_inserted", level = "debug", skip_all, fields(table = %self.name(), index = index))]
	pub fn with_row_inserted(&self, index: usize, values: impl IntoIterator<Item = Value>) -> Result<Table> {
		if index > self.row_count() {
			return Err(Error::IndexOutOfRange {
				index,
				len: self.row_count(),
			});
		}

		let values = self.row_values(values)?;
		self.with_each_column(values, |column, value| column.with_value_inserted(index, value))
	}

	#[instrument(name = "table::with_row_replaced", level = "debug", skip_all, fields(table = %self.name(), index = index))]
	pub fn with_row_replaced(&self, index: usize, values: impl IntoIterator<Item = Value>) -> Result<Table> {
		if index >= self.row_count() {
			return Err(Error::IndexOutOfRange {
				index,
				len: self.row_count(),
			});
		}

		let values = self.row_values(values)?;
		self.with_each_column(values, |column, value| column.with_value_replaced(index, value))
	}

	#[instrument(name = "table::with_row_removed", level = "debug", skip_all, fields(table = %self.name(), index = index))]
	pub fn with_row_removed(&self, index: usize) -> Result<Table> {
		if index >= self.row_count() {
			return Err(Error::IndexOutOfRange {
				index,
				len: self.row_count(),
			});
		}

		let columns = self.columns().iter().map(|column| column.with_value_removed(index)).collect::<Result<CowVec<_>>>()?;
		self.rebuild(columns, None)
	}

	/// Removes the row `row` points at. Fails with `ForeignRow` unless `row`
	/// was taken from this very table instance.
	pub fn with_row_removed_by(&self, row: &Row<'_>) -> Result<Table> {
		if !row.table().ptr_eq(self) {
			debug!(table = self.name(), row = row.index(), "row belongs to another table");
			return Err(Error::ForeignRow);
		}
		self.with_row_removed(row.index())
	}

	fn row_values(&self, values: impl IntoIterator<Item = Value>) -> Result<Vec<Value>> {
		let values: Vec<Value> = values.into_iter().collect();
		if values.len() != self.column_count() {
			debug!(expected = self.column_count(), actual = values.len(), "column count mismatch");
			return Err(Error::ColumnCountMismatch {
				expected: self.column_count(),
				actual: values.len(),
			});
		}
		Ok(values)
	}

	fn with_each_column(&self, values: Vec<Value>, edit: impl Fn(&Column, Value) -> Result<Column>) -> Result<Table> {
		let columns = self
			.columns()
			.iter()
			.zip(values)
			.map(|(column, value)| edit(column, value))
			.collect::<Result<CowVec<_>>>()?;
		self.rebuild(columns, None)
	}
}

#[cfg(test)]
mod tests {
	use tabula_type::{Error, Type, Value};

	use crate::{Column, Table};

	fn table() -> Table {
		Table::new("T", [Column::int4("a", [1, 2, 3]), Column::utf8("b", ["x", "y", "z"])]).unwrap()
	}

	#[test]
	fn test_with_row_added() {
		let table = table();
		let result = table.with_row_added([Value::int4(4), Value::utf8("w")]).unwrap();
		assert_eq!(result.row_count(), 4);
		assert_eq!(result.typed_column::<i32>("a").unwrap().as_slice(), &[1, 2, 3, 4]);
		assert_eq!(result.typed_column::<String>("b").unwrap().as_slice(), &["x", "y", "z", "w"]);
		assert_eq!(table.row_count(), 3);
	}

	#[test]
	fn test_with_row_added_column_count_mismatch() {
		let table = table();
		assert_eq!(
			table.with_row_added([Value::int4(4), Value::utf8("w"), Value::bool(true)]),
			Err(Error::ColumnCountMismatch {
				expected: 2,
				actual: 3
			})
		);
		assert_eq!(
			table.with_row_added([Value::int4(4)]),
			Err(Error::ColumnCountMismatch {
				expected: 2,
				actual: 1
			})
		);
	}

	#[test]
	fn test_with_row_added_is_all_or_nothing() {
		let table = table();
		let result = table.with_row_added([Value::int4(4), Value::int4(5)]);
		assert_eq!(result, Err(Error::type_mismatch(Type::Utf8, Type::Int4)));
		assert_eq!(table.typed_column::<i32>("a").unwrap().as_slice(), &[1, 2, 3]);
	}

	#[test]
	fn test_first_failing_column_wins() {
		let table = table();
		let result = table.with_row_added([Value::utf8("4"), Value::int4(5)]);
		assert_eq!(result, Err(Error::type_mismatch(Type::Int4, Type::Utf8)));
	}

	#[test]
	fn test_with_row_added_no_columns() {
		let table = Table::empty("T");
		let result = table.with_row_added([]).unwrap();
		assert_eq!(result.row_count(), 0);
		assert!(table.with_row_added([Value::int4(1)]).is_err());
	}

	#[test]
	fn test_with_row_inserted() {
		let table = table();

		let front = table.with_row_inserted(0, [Value::int4(0), Value::utf8("w")]).unwrap();
		assert_eq!(front.typed_column::<i32>("a").unwrap().as_slice(), &[0, 1, 2, 3]);
		assert_eq!(front.typed_column::<String>("b").unwrap().as_slice(), &["w", "x", "y", "z"]);

		let end = table.with_row_inserted(3, [Value::int4(9), Value::utf8("w")]).unwrap();
		assert_eq!(end.typed_column::<i32>("a").unwrap().as_slice(), &[1, 2, 3, 9]);

		assert_eq!(
			table.with_row_inserted(4, [Value::int4(9), Value::utf8("w")]),
			Err(Error::IndexOutOfRange {
				index: 4,
				len: 3
			})
		);
		assert_eq!(
			table.with_row_inserted(3, [Value::utf8("9"), Value::utf8("w")]),
			Err(Error::type_mismatch(Type::Int4, Type::Utf8))
		);
	}

	#[test]
	fn test_with_row_replaced() {
		let table = table();
		let result = table.with_row_replaced(1, [Value::int4(20), Value::utf8("Y")]).unwrap();
		assert_eq!(result.row_count(), 3);
		assert_eq!(result.row(1).unwrap().values(), vec![Value::int4(20), Value::utf8("Y")]);
		assert_eq!(table.row(1).unwrap().values(), vec![Value::int4(2), Value::utf8("y")]);

		assert!(matches!(
			table.with_row_replaced(3, [Value::int4(20), Value::utf8("Y")]),
			Err(Error::IndexOutOfRange { .. })
		));
		assert!(matches!(
			table.with_row_replaced(0, [Value::int4(20), Value::bool(false)]),
			Err(Error::TypeMismatch { .. })
		));
	}

	#[test]
	fn test_with_row_inserted_checks_index_without_columns() {
		let table = Table::empty("T");
		assert_eq!(
			table.with_row_inserted(99, []),
			Err(Error::IndexOutOfRange {
				index: 99,
				len: 0
			})
		);
		assert_eq!(table.with_row_inserted(0, []).unwrap().row_count(), 0);
	}

	#[test]
	fn test_with_row_replaced_checks_index_without_columns() {
		let table = Table::empty("T");
		assert_eq!(
			table.with_row_replaced(0, []),
			Err(Error::IndexOutOfRange {
				index: 0,
				len: 0
			})
		);
		assert_eq!(
			table.with_row_replaced(99, []),
			Err(Error::IndexOutOfRange {
				index: 99,
				len: 0
			})
		);
	}

	#[test]
	fn test_with_row_removed() {
		let table = table();
		let result = table.with_row_removed(1).unwrap();
		assert_eq!(result.row_count(), 2);
		assert_eq!(result.typed_column::<i32>("a").unwrap().as_slice(), &[1, 3]);
		assert_eq!(result.typed_column::<String>("b").unwrap().as_slice(), &["x", "z"]);

		assert_eq!(
			table.with_row_removed(3),
			Err(Error::IndexOutOfRange {
				index: 3,
				len: 3
			})
		);
		assert!(Table::empty("T").with_row_removed(0).is_err());
	}

	#[test]
	fn test_with_row_removed_by() {
		let table = table();
		let row = table.row(0).unwrap();
		let result = table.with_row_removed_by(&row).unwrap();
		assert_eq!(result.typed_column::<i32>("a").unwrap().as_slice(), &[2, 3]);
	}

	#[test]
	fn test_with_row_removed_by_foreign_row() {
		let table = table();
		let other = self::table();
		assert_eq!(table, other);

		let row = other.row(0).unwrap();
		assert_eq!(table.with_row_removed_by(&row), Err(Error::ForeignRow));

		let edited = table.with_row_added([Value::int4(4), Value::utf8("w")]).unwrap();
		let stale = table.row(0).unwrap();
		assert_eq!(edited.with_row_removed_by(&stale), Err(Error::ForeignRow));
	}
}
