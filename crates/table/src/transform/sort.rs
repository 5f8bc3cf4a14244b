// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use tabula_type::{Error, Result};
use tracing::instrument;

use crate::{ColumnData, ColumnKey, Table, View};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
	Asc,
	Desc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortKey {
	pub column: ColumnKey,
	pub direction: SortDirection,
}

impl SortKey {
	pub fn asc(column: impl Into<ColumnKey>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Asc,
		}
	}

	pub fn desc(column: impl Into<ColumnKey>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Desc,
		}
	}
}

impl View {
	/// Reorders the view by `keys`, first key most significant. Rows that
	/// compare equal on every key keep their view order.
	#[instrument(name = "view::sorted", level = "debug", skip_all, fields(view = %self.name(), keys = keys.len()))]
	pub fn sorted(&self, keys: &[SortKey]) -> Result<View> {
		let key_refs: Vec<(&ColumnData, SortDirection)> = keys
			.iter()
			.map(|key| Ok::<_, Error>((self.table().column(&key.column)?.data(), key.direction)))
			.collect::<Result<_>>()?;

		let mut indices = self.indices().to_vec();
		indices.sort_by(|&a, &b| {
			for (data, direction) in &key_refs {
				let ord = match direction {
					SortDirection::Asc => data.compare(a, b),
					SortDirection::Desc => data.compare(a, b).reverse(),
				};
				if ord != Ordering::Equal {
					return ord;
				}
			}
			Ordering::Equal
		});

		Ok(View::from_parts(self.name().to_string(), self.table().clone(), indices.into()))
	}
}

impl Table {
	/// A view over every row of the table, ordered by `keys`.
	pub fn sort(&self, keys: &[SortKey]) -> Result<View> {
		View::all(self.name(), self).sorted(keys)
	}
}
