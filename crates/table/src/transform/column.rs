// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tabula_type::Result;
use tracing::instrument;

use crate::{Column, ColumnRef, Table};

impl Table {
	#[instrument(name = "table::with_column_added", level = "debug", skip_all, fields(table = %self.name(), column = %column.name()))]
	pub fn with_column_added(&self, column: Column) -> Result<Table> {
		let position = self.column_count();
		let columns = self.column_sequence().with_added(column);
		self.rebuild(columns, Some(position))
	}

	/// Inserts `column` before the column `key` addresses. A position may be
	/// one past the last column, which appends.
	#[instrument(name = "table::with_column_inserted", level = "debug", skip_all, fields(table = %self.name(), column = %column.name()))]
	pub fn with_column_inserted(&self, key: impl ColumnRef, column: Column) -> Result<Table> {
		let position = key.locate(self)?;
		let columns = self.column_sequence().with_inserted(position, column)?;
		self.rebuild(columns, Some(position))
	}

	#[instrument(name = "table::with_column_replaced", level = "debug", skip_all, fields(table = %self.name(), column = %column.name()))]
	pub fn with_column_replaced(&self, key: impl ColumnRef, column: Column) -> Result<Table> {
		let position = key.locate(self)?;
		let columns = self.column_sequence().with_replaced(position, column)?;
		self.rebuild(columns, Some(position))
	}

	#[instrument(name = "table::with_column_removed", level = "debug", skip_all, fields(table = %self.name(), column = %key.describe()))]
	pub fn with_column_removed(&self, key: impl ColumnRef) -> Result<Table> {
		let position = key.locate(self)?;
		let columns = self.column_sequence().with_removed(position)?;
		self.rebuild(columns, None)
	}
}
