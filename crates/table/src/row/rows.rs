// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tabula_type::{Error, Result, Value};

use crate::{Row, Table};

/// The rows of a table, addressable by index.
#[derive(Clone, Copy, Debug)]
pub struct Rows<'a> {
	table: &'a Table,
}

impl<'a> Rows<'a> {
	pub(crate) fn new(table: &'a Table) -> Self {
		Self {
			table,
		}
	}

	pub fn table(&self) -> &'a Table {
		self.table
	}

	pub fn len(&self) -> usize {
		self.table.row_count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Fails with `RowNotFound` for an index at or past the row count.
	pub fn get(&self, index: usize) -> Result<Row<'a>> {
		if index >= self.len() {
			return Err(Error::RowNotFound {
				row: index,
				row_count: self.len(),
			});
		}
		Ok(Row::new(self.table, index))
	}

	pub fn iter(&self) -> RowsIter<'a> {
		RowsIter {
			table: self.table,
			row_index: 0,
			row_total: self.len(),
		}
	}

	pub fn with_row_added(&self, values: impl IntoIterator<Item = Value>) -> Result<Table> {
		self.table.with_row_added(values)
	}

	pub fn with_row_inserted(&self, index: usize, values: impl IntoIterator<Item = Value>) -> Result<Table> {
		self.table.with_row_inserted(index, values)
	}

	pub fn with_row_replaced(&self, index: usize, values: impl IntoIterator<Item = Value>) -> Result<Table> {
		self.table.with_row_replaced(index, values)
	}

	pub fn with_row_removed(&self, index: usize) -> Result<Table> {
		self.table.with_row_removed(index)
	}

	pub fn with_row_removed_by(&self, row: &Row<'_>) -> Result<Table> {
		self.table.with_row_removed_by(row)
	}
}

impl<'a> IntoIterator for Rows<'a> {
	type Item = Row<'a>;
	type IntoIter = RowsIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

pub struct RowsIter<'a> {
	table: &'a Table,
	row_index: usize,
	row_total: usize,
}

impl<'a> Iterator for RowsIter<'a> {
	type Item = Row<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.row_index >= self.row_total {
			return None;
		}

		let row = Row::new(self.table, self.row_index);
		self.row_index += 1;
		Some(row)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.row_total - self.row_index;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for RowsIter<'_> {}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Column;

	fn table() -> Table {
		Table::new("T", [Column::int4("a", [1, 2, 3]), Column::utf8("b", ["x", "y", "z"])]).unwrap()
	}

	#[test]
	fn test_get() {
		let table = table();
		let rows = table.rows();
		assert_eq!(rows.len(), 3);
		assert_eq!(rows.get(2).unwrap().get("a"), Value::int4(3));
		assert_eq!(
			rows.get(3).unwrap_err(),
			Error::RowNotFound {
				row: 3,
				row_count: 3
			}
		);
	}

	#[test]
	fn test_iter() {
		let table = table();
		let collected: Vec<String> = table.rows().iter().map(|row| row.get_as::<String>("b")).collect();
		assert_eq!(collected, ["x", "y", "z"]);
		assert_eq!(table.rows().iter().len(), 3);

		let indices: Vec<usize> = table.rows().into_iter().map(|row| row.index()).collect();
		assert_eq!(indices, [0, 1, 2]);
	}

	#[test]
	fn test_empty() {
		let table = Table::empty("T");
		assert!(table.rows().is_empty());
		assert_eq!(table.rows().iter().count(), 0);
		assert!(table.row(0).is_err());
	}

	#[test]
	fn test_edits_forward_to_table() {
		let table = table();
		let rows = table.rows();

		let added = rows.with_row_added([Value::int4(4), Value::utf8("w")]).unwrap();
		assert_eq!(added.row_count(), 4);

		let removed = rows.with_row_removed(0).unwrap();
		assert_eq!(removed.typed_column::<i32>("a").unwrap().as_slice(), &[2, 3]);

		let row = rows.get(1).unwrap();
		let removed = rows.with_row_removed_by(&row).unwrap();
		assert_eq!(removed.typed_column::<i32>("a").unwrap().as_slice(), &[1, 3]);

		assert_eq!(table.row_count(), 3);
	}
}
