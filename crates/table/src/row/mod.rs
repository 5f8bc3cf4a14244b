// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

use tabula_type::{Error, Result, Value};

use crate::{ColumnRef, Element, Table};

mod rows;

pub use rows::{Rows, RowsIter};

/// One logical row of a table, read lazily through the table's columns.
///
/// A `Row` borrows its table and never outlives it. Cell access comes in
/// two tiers: the `try_*` accessors return a `Result`, the plain accessors
/// panic on the same failures.
#[derive(Clone, Copy)]
pub struct Row<'a> {
	table: &'a Table,
	index: usize,
}

impl<'a> Row<'a> {
	pub(crate) fn new(table: &'a Table, index: usize) -> Self {
		debug_assert!(index < table.row_count());
		Self {
			table,
			index,
		}
	}

	pub fn table(&self) -> &'a Table {
		self.table
	}

	pub fn index(&self) -> usize {
		self.index
	}

	/// Fails with `ColumnNotFound` if `key` names no column.
	pub fn try_get(&self, key: impl ColumnRef) -> Result<Value> {
		let column = self.table.column(key)?;
		column.get(self.index).ok_or(Error::RowNotFound {
			row: self.index,
			row_count: column.len(),
		})
	}

	/// # Panics
	///
	/// Panics if `key` names no column.
	pub fn get(&self, key: impl ColumnRef) -> Value {
		self.try_get(key).unwrap_or_else(|err| panic!("{err}"))
	}

	/// Fails with `ColumnNotFound` if `key` names no column and with
	/// `TypeMismatch` if the column does not hold `T`.
	pub fn try_get_as<T: Element>(&self, key: impl ColumnRef) -> Result<T> {
		let column = self.table.column(key)?;
		let data = T::data(column.data()).ok_or_else(|| Error::type_mismatch(T::get_type(), column.get_type()))?;
		data.get(self.index).cloned().ok_or(Error::RowNotFound {
			row: self.index,
			row_count: data.len(),
		})
	}

	/// # Panics
	///
	/// Panics if `key` names no column, or if the column does not hold `T`.
	pub fn get_as<T: Element>(&self, key: impl ColumnRef) -> T {
		self.try_get_as(key).unwrap_or_else(|err| panic!("{err}"))
	}

	/// Every cell of the row, in column order.
	pub fn values(&self) -> Vec<Value> {
		self.table.columns().iter().filter_map(|column| column.get(self.index)).collect()
	}
}

impl Debug for Row<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Row").field("table", &self.table.name()).field("index", &self.index).finish()
	}
}
