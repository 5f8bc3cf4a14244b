// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tabula_type::{CowVec, Error, Result};
use tracing::debug;

use crate::{Row, Table};

/// A named, ordered selection of rows over a table.
///
/// A view never copies cells. It keeps the table it was built from and a
/// sequence of row indices into it; the same row may appear more than once.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
	name: String,
	table: Table,
	indices: CowVec<usize>,
}

impl View {
	/// Fails with `RowNotFound` if any index is at or past the table's row
	/// count.
	pub fn new(name: impl Into<String>, table: &Table, indices: impl IntoIterator<Item = usize>) -> Result<Self> {
		let indices: CowVec<usize> = indices.into_iter().collect();
		let row_count = table.row_count();
		if let Some(&row) = indices.iter().find(|&&row| row >= row_count) {
			debug!(table = table.name(), row, row_count, "view index out of range");
			return Err(Error::RowNotFound {
				row,
				row_count,
			});
		}

		Ok(Self {
			name: name.into(),
			table: table.clone(),
			indices,
		})
	}

	/// Every row of `table`, in table order.
	pub fn all(name: impl Into<String>, table: &Table) -> Self {
		Self {
			name: name.into(),
			table: table.clone(),
			indices: (0..table.row_count()).collect(),
		}
	}

	pub(crate) fn from_parts(name: String, table: Table, indices: CowVec<usize>) -> Self {
		Self {
			name,
			table,
			indices,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn table(&self) -> &Table {
		&self.table
	}

	pub fn indices(&self) -> &[usize] {
		&self.indices
	}

	pub fn len(&self) -> usize {
		self.indices.len()
	}

	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	/// The `index`-th row of the view, as a row of the underlying table.
	pub fn row(&self, index: usize) -> Result<Row<'_>> {
		match self.indices.get(index) {
			Some(&row) => self.table.row(row),
			None => Err(Error::RowNotFound {
				row: index,
				row_count: self.len(),
			}),
		}
	}

	pub fn rows(&self) -> impl ExactSizeIterator<Item = Row<'_>> + '_ {
		self.indices.iter().map(|&row| Row::new(&self.table, row))
	}

	/// Keeps the rows `predicate` accepts, in view order.
	pub fn filter(&self, mut predicate: impl FnMut(&Row<'_>) -> bool) -> View {
		let indices = self
			.indices
			.iter()
			.copied()
			.filter(|&row| predicate(&Row::new(&self.table, row)))
			.collect();
		View::from_parts(self.name.clone(), self.table.clone(), indices)
	}
}
