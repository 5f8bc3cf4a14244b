// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use tabula_type::{CowVec, Result, Type, Value};

use crate::{Column, Element};

/// A column whose element type is known statically.
///
/// Obtained either by construction or by a checked [`Column::downcast`]. It
/// shares storage with the column it came from; every edit returns a new
/// `TypedColumn<T>` of the same `T`.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedColumn<T: Element> {
	name: String,
	data: CowVec<T>,
}

impl<T: Element> TypedColumn<T> {
	pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = T>) -> Self {
		Self {
			name: name.into(),
			data: values.into_iter().collect(),
		}
	}

	pub(crate) fn from_parts(name: String, data: CowVec<T>) -> Self {
		Self {
			name,
			data,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn get_type(&self) -> Type {
		T::get_type()
	}

	pub fn as_slice(&self) -> &[T] {
		self.data.as_slice()
	}

	pub fn get_value(&self, index: usize) -> Option<Value> {
		self.data.get(index).cloned().map(T::into_value)
	}

	pub fn with_added(&self, value: T) -> Self {
		Self::from_parts(self.name.clone(), self.data.with_added(value))
	}

	pub fn with_inserted(&self, index: usize, value: T) -> Result<Self> {
		Ok(Self::from_parts(self.name.clone(), self.data.with_inserted(index, value)?))
	}

	pub fn with_replaced(&self, index: usize, value: T) -> Result<Self> {
		Ok(Self::from_parts(self.name.clone(), self.data.with_replaced(index, value)?))
	}

	pub fn with_removed(&self, index: usize) -> Result<Self> {
		Ok(Self::from_parts(self.name.clone(), self.data.with_removed(index)?))
	}

	pub fn into_column(self) -> Column {
		Column::from_data(self.name, T::into_data(self.data))
	}
}

impl<T: Element> Deref for TypedColumn<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.data.as_slice()
	}
}

impl<T: Element> From<TypedColumn<T>> for Column {
	fn from(column: TypedColumn<T>) -> Self {
		column.into_column()
	}
}
