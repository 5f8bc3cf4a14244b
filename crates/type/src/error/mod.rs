// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::Type;

/// Every way a table, column or row operation can be rejected.
///
/// A rejected operation never produces a partially built structure; the
/// inputs the caller holds stay valid and unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("index {index} is out of range for a sequence of length {len}")]
	IndexOutOfRange {
		index: usize,
		len: usize,
	},

	#[error("type mismatch: expected {expected}, found {actual}")]
	TypeMismatch {
		expected: Type,
		actual: Type,
	},

	#[error("column '{column}' not found")]
	ColumnNotFound {
		column: String,
	},

	#[error("row {row} not found in a table of {row_count} rows")]
	RowNotFound {
		row: usize,
		row_count: usize,
	},

	#[error("column '{column}' has {actual} rows, expected {expected}")]
	UnevenRowCount {
		column: String,
		expected: usize,
		actual: usize,
	},

	#[error("duplicate column name '{column}'")]
	DuplicateColumnName {
		column: String,
	},

	#[error("column name must not be empty")]
	EmptyColumnName,

	#[error("expected {expected} values, one per column, got {actual}")]
	ColumnCountMismatch {
		expected: usize,
		actual: usize,
	},

	#[error("row belongs to a different table")]
	ForeignRow,
}

impl Error {
	/// Stable diagnostic code, independent of the message wording.
	pub fn code(&self) -> &'static str {
		match self {
			Error::IndexOutOfRange {
				..
			} => "TABLE_001",
			Error::TypeMismatch {
				..
			} => "TABLE_002",
			Error::ColumnNotFound {
				..
			} => "TABLE_003",
			Error::RowNotFound {
				..
			} => "TABLE_004",
			Error::UnevenRowCount {
				..
			} => "TABLE_005",
			Error::DuplicateColumnName {
				..
			} => "TABLE_006",
			Error::EmptyColumnName => "TABLE_007",
			Error::ColumnCountMismatch {
				..
			} => "TABLE_008",
			Error::ForeignRow => "TABLE_009",
		}
	}

	pub fn type_mismatch(expected: Type, actual: Type) -> Self {
		Error::TypeMismatch {
			expected,
			actual,
		}
	}

	pub fn column_not_found(column: impl Into<String>) -> Self {
		Error::ColumnNotFound {
			column: column.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_codes_are_distinct() {
		let errors = [
			Error::IndexOutOfRange {
				index: 0,
				len: 0,
			},
			Error::type_mismatch(Type::Int4, Type::Utf8),
			Error::column_not_found("a"),
			Error::RowNotFound {
				row: 1,
				row_count: 0,
			},
			Error::UnevenRowCount {
				column: "a".to_string(),
				expected: 1,
				actual: 2,
			},
			Error::DuplicateColumnName {
				column: "a".to_string(),
			},
			Error::EmptyColumnName,
			Error::ColumnCountMismatch {
				expected: 1,
				actual: 2,
			},
			Error::ForeignRow,
		];

		let mut codes: Vec<_> = errors.iter().map(Error::code).collect();
		codes.sort();
		codes.dedup();
		assert_eq!(codes.len(), errors.len());
	}

	#[test]
	fn test_display() {
		assert_eq!(
			Error::type_mismatch(Type::Int4, Type::Utf8).to_string(),
			"type mismatch: expected Int4, found Utf8"
		);
		assert_eq!(
			Error::IndexOutOfRange {
				index: 3,
				len: 2
			}
			.to_string(),
			"index 3 is out of range for a sequence of length 2"
		);
	}
}
