// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tabula_type::{Error, Result};

use crate::Table;

/// Addresses a column either by position or by name.
pub trait ColumnRef {
	/// Resolves to a position in the column sequence. Names must exist;
	/// positions are returned as given and left to the caller to bounds check.
	fn locate(&self, table: &Table) -> Result<usize>;

	fn describe(&self) -> String;
}

impl ColumnRef for usize {
	fn locate(&self, _table: &Table) -> Result<usize> {
		Ok(*self)
	}

	fn describe(&self) -> String {
		format!("#{self}")
	}
}

impl ColumnRef for &str {
	fn locate(&self, table: &Table) -> Result<usize> {
		table.column_index(self).ok_or_else(|| Error::column_not_found(*self))
	}

	fn describe(&self) -> String {
		self.to_string()
	}
}

impl ColumnRef for String {
	fn locate(&self, table: &Table) -> Result<usize> {
		self.as_str().locate(table)
	}

	fn describe(&self) -> String {
		self.clone()
	}
}

impl ColumnRef for &String {
	fn locate(&self, table: &Table) -> Result<usize> {
		self.as_str().locate(table)
	}

	fn describe(&self) -> String {
		self.to_string()
	}
}

/// An owned column reference, for places that store a key rather than
/// resolve it on the spot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnKey {
	Name(String),
	Position(usize),
}

impl ColumnRef for ColumnKey {
	fn locate(&self, table: &Table) -> Result<usize> {
		match self {
			ColumnKey::Name(name) => name.locate(table),
			ColumnKey::Position(position) => position.locate(table),
		}
	}

	fn describe(&self) -> String {
		match self {
			ColumnKey::Name(name) => name.describe(),
			ColumnKey::Position(position) => position.describe(),
		}
	}
}

impl ColumnRef for &ColumnKey {
	fn locate(&self, table: &Table) -> Result<usize> {
		(*self).locate(table)
	}

	fn describe(&self) -> String {
		(*self).describe()
	}
}

impl From<&str> for ColumnKey {
	fn from(name: &str) -> Self {
		ColumnKey::Name(name.to_string())
	}
}

impl From<String> for ColumnKey {
	fn from(name: String) -> Self {
		ColumnKey::Name(name)
	}
}

impl From<usize> for ColumnKey {
	fn from(position: usize) -> Self {
		ColumnKey::Position(position)
	}
}
