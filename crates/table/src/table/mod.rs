// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use tabula_type::{CowVec, Error, Result};
use tracing::{debug, instrument};

use crate::{Column, Element, Row, Rows, TypedColumn};

mod reference;

pub use reference::{ColumnKey, ColumnRef};

/// An immutable table: an ordered set of distinct-named, equal-length
/// columns.
///
/// Cloning a `Table` hands out another reference to the same instance.
/// Every edit builds a new instance; columns the edit did not touch are
/// shared with the table it started from.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
	inner: Arc<TableInner>,
}

#[derive(Debug, PartialEq)]
struct TableInner {
	name: String,
	columns: CowVec<Column>,
	index: HashMap<String, usize>,
}

impl Table {
	/// Builds a table, rejecting uneven row counts, duplicate names and
	/// empty names.
	pub fn new(name: impl Into<String>, columns: impl IntoIterator<Item = Column>) -> Result<Self> {
		Self::build(name.into(), columns.into_iter().collect(), None)
	}

	pub fn empty(name: impl Into<String>) -> Self {
		Self {
			inner: Arc::new(TableInner {
				name: name.into(),
				columns: CowVec::default(),
				index: HashMap::new(),
			}),
		}
	}

	/// `edited` is the position of the column an edit placed, so a row count
	/// mismatch is reported against that column.
	#[instrument(name = "table::build", level = "trace", skip(columns))]
	pub(crate) fn build(name: String, columns: CowVec<Column>, edited: Option<usize>) -> Result<Self> {
		let index = validate(&columns, edited)?;
		Ok(Self {
			inner: Arc::new(TableInner {
				name,
				columns,
				index,
			}),
		})
	}

	pub(crate) fn rebuild(&self, columns: CowVec<Column>, edited: Option<usize>) -> Result<Self> {
		Self::build(self.inner.name.clone(), columns, edited)
	}

	pub fn name(&self) -> &str {
		&self.inner.name
	}

	pub fn row_count(&self) -> usize {
		self.inner.columns.first().map_or(0, Column::len)
	}

	pub fn column_count(&self) -> usize {
		self.inner.columns.len()
	}

	pub fn columns(&self) -> &[Column] {
		&self.inner.columns
	}

	pub(crate) fn column_sequence(&self) -> &CowVec<Column> {
		&self.inner.columns
	}

	pub fn column_names(&self) -> impl Iterator<Item = &str> {
		self.inner.columns.iter().map(Column::name)
	}

	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.inner.index.get(name).copied()
	}

	/// Position of an existing column. Fails with `ColumnNotFound`.
	pub fn position(&self, key: impl ColumnRef) -> Result<usize> {
		let position = key.locate(self)?;
		if position >= self.column_count() {
			return Err(Error::column_not_found(key.describe()));
		}
		Ok(position)
	}

	pub fn column(&self, key: impl ColumnRef) -> Result<&Column> {
		let position = self.position(key)?;
		Ok(&self.inner.columns[position])
	}

	pub fn get_column(&self, key: impl ColumnRef) -> Option<&Column> {
		self.column(key).ok()
	}

	pub fn typed_column<T: Element>(&self, key: impl ColumnRef) -> Result<TypedColumn<T>> {
		self.column(key)?.downcast()
	}

	/// True when both handles refer to the same table instance.
	pub fn ptr_eq(&self, other: &Table) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}

	pub fn rows(&self) -> Rows<'_> {
		Rows::new(self)
	}

	pub fn row(&self, index: usize) -> Result<Row<'_>> {
		self.rows().get(index)
	}
}

fn validate(columns: &[Column], edited: Option<usize>) -> Result<HashMap<String, usize>> {
	let reference = columns.iter().enumerate().find(|(position, _)| Some(*position) != edited).map(|(_, c)| c).or(columns.first());
	let expected = reference.map_or(0, Column::len);

	for column in columns {
		if column.len() != expected {
			debug!(column = column.name(), expected, actual = column.len(), "uneven row count");
			return Err(Error::UnevenRowCount {
				column: column.name().to_string(),
				expected,
				actual: column.len(),
			});
		}
	}

	let mut index = HashMap::with_capacity(columns.len());
	for (position, column) in columns.iter().enumerate() {
		if column.name().is_empty() {
			debug!(position, "empty column name");
			return Err(Error::EmptyColumnName);
		}
		if index.insert(column.name().to_string(), position).is_some() {
			debug!(column = column.name(), "duplicate column name");
			return Err(Error::DuplicateColumnName {
				column: column.name().to_string(),
			});
		}
	}

	Ok(index)
}

#[cfg(test)]
mod tests {
	use tabula_type::{Type, Value};

	use super::*;

	fn table() -> Table {
		Table::new("T", [Column::int4("a", [1, 2, 3]), Column::utf8("b", ["x", "y", "z"])]).unwrap()
	}

	#[test]
	fn test_new() {
		let table = table();
		assert_eq!(table.name(), "T");
		assert_eq!(table.row_count(), 3);
		assert_eq!(table.column_count(), 2);
		assert_eq!(table.column_names().collect::<Vec<_>>(), ["a", "b"]);
	}

	#[test]
	fn test_new_uneven_row_count() {
		let result = Table::new("T", [Column::int4("a", [1, 2, 3]), Column::utf8("b", ["x"])]);
		assert_eq!(
			result,
			Err(Error::UnevenRowCount {
				column: "b".to_string(),
				expected: 3,
				actual: 1
			})
		);
	}

	#[test]
	fn test_new_duplicate_name() {
		let result = Table::new("T", [Column::int4("a", [1]), Column::utf8("a", ["x"])]);
		assert_eq!(
			result,
			Err(Error::DuplicateColumnName {
				column: "a".to_string()
			})
		);
	}

	#[test]
	fn test_new_empty_column_name() {
		assert_eq!(Table::new("T", [Column::int4("", [1])]), Err(Error::EmptyColumnName));
	}

	#[test]
	fn test_no_columns() {
		let table = Table::new("", []).unwrap();
		assert_eq!(table.row_count(), 0);
		assert_eq!(table.column_count(), 0);
		assert_eq!(table, Table::empty(""));
	}

	#[test]
	fn test_single_empty_column() {
		let table = Table::new("T", [Column::bool("flag", [])]).unwrap();
		assert_eq!(table.row_count(), 0);
		assert_eq!(table.column_count(), 1);
	}

	#[test]
	fn test_column_lookup() {
		let table = table();
		assert_eq!(table.column("b").unwrap().get_type(), Type::Utf8);
		assert_eq!(table.column(0).unwrap().name(), "a");
		assert_eq!(table.column("b".to_string()).unwrap().name(), "b");
		assert_eq!(table.column("zzz"), Err(Error::column_not_found("zzz")));
		assert_eq!(table.column(2), Err(Error::column_not_found("#2")));
		assert!(table.get_column("a").is_some());
		assert!(table.get_column("zzz").is_none());
		assert_eq!(table.column_index("b"), Some(1));
		assert_eq!(table.position("b"), Ok(1));
	}

	#[test]
	fn test_typed_column() {
		let table = table();
		let a = table.typed_column::<i32>("a").unwrap();
		assert_eq!(a.as_slice(), &[1, 2, 3]);
		assert_eq!(table.typed_column::<String>(1).unwrap().get_value(0), Some(Value::utf8("x")));
		assert_eq!(table.typed_column::<i64>("a"), Err(Error::type_mismatch(Type::Int8, Type::Int4)));
		assert_eq!(table.typed_column::<i32>("c"), Err(Error::column_not_found("c")));
	}

	#[test]
	fn test_clone_is_same_instance() {
		let table = table();
		let clone = table.clone();
		assert!(table.ptr_eq(&clone));
		assert!(!table.ptr_eq(&self::table()));
		assert_eq!(table, self::table());
	}

	#[test]
	fn test_is_send_and_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<Table>();
		assert_send_sync::<Column>();
		assert_send_sync::<TypedColumn<String>>();
		assert_send_sync::<crate::View>();
	}
}
