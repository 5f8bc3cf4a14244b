// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tabula_type::{Error, Result, Type, Value};

mod data;
mod element;
mod typed;

pub use data::ColumnData;
pub use element::Element;
pub use typed::TypedColumn;

/// A named, type-erased column.
///
/// Cloning is cheap: the element storage is shared. Edits return a new
/// column and never touch storage another column or table may observe.
///
/// Construction never fails. Column names are validated when a column enters
/// a [`Table`](crate::Table): an empty name fails there with
/// `EmptyColumnName`, a repeated one with `DuplicateColumnName`.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
	name: String,
	data: ColumnData,
}

impl Column {
	pub fn new<T: Element>(name: impl Into<String>, values: impl IntoIterator<Item = T>) -> Self {
		Self::from_data(name, T::into_data(values.into_iter().collect()))
	}

	pub fn from_data(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn bool(name: impl Into<String>, values: impl IntoIterator<Item = bool>) -> Self {
		Self::new(name, values)
	}

	pub fn float4(name: impl Into<String>, values: impl IntoIterator<Item = f32>) -> Self {
		Self::new(name, values)
	}

	pub fn float8(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
		Self::new(name, values)
	}

	pub fn int1(name: impl Into<String>, values: impl IntoIterator<Item = i8>) -> Self {
		Self::new(name, values)
	}

	pub fn int2(name: impl Into<String>, values: impl IntoIterator<Item = i16>) -> Self {
		Self::new(name, values)
	}

	pub fn int4(name: impl Into<String>, values: impl IntoIterator<Item = i32>) -> Self {
		Self::new(name, values)
	}

	pub fn int8(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
		Self::new(name, values)
	}

	pub fn int16(name: impl Into<String>, values: impl IntoIterator<Item = i128>) -> Self {
		Self::new(name, values)
	}

	pub fn utf8(name: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self::new(name, values.into_iter().map(Into::<String>::into))
	}

	pub fn uint1(name: impl Into<String>, values: impl IntoIterator<Item = u8>) -> Self {
		Self::new(name, values)
	}

	pub fn uint2(name: impl Into<String>, values: impl IntoIterator<Item = u16>) -> Self {
		Self::new(name, values)
	}

	pub fn uint4(name: impl Into<String>, values: impl IntoIterator<Item = u32>) -> Self {
		Self::new(name, values)
	}

	pub fn uint8(name: impl Into<String>, values: impl IntoIterator<Item = u64>) -> Self {
		Self::new(name, values)
	}

	pub fn uint16(name: impl Into<String>, values: impl IntoIterator<Item = u128>) -> Self {
		Self::new(name, values)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<Value> {
		self.data.get(index)
	}

	/// Appends `value`. Fails with `TypeMismatch` if its type is not this
	/// column's type.
	pub fn with_value_added(&self, value: Value) -> Result<Column> {
		Ok(self.with_data(self.data.with_added(value)?))
	}

	/// The type of `value` is checked before `index`.
	pub fn with_value_inserted(&self, index: usize, value: Value) -> Result<Column> {
		Ok(self.with_data(self.data.with_inserted(index, value)?))
	}

	pub fn with_value_replaced(&self, index: usize, value: Value) -> Result<Column> {
		Ok(self.with_data(self.data.with_replaced(index, value)?))
	}

	pub fn with_value_removed(&self, index: usize) -> Result<Column> {
		Ok(self.with_data(self.data.with_removed(index)?))
	}

	fn with_data(&self, data: ColumnData) -> Column {
		Column {
			name: self.name.clone(),
			data,
		}
	}

	/// Checked downcast. Fails with `TypeMismatch` when `T` is not the
	/// element type of this column; the storage is shared, not copied.
	pub fn downcast<T: Element>(&self) -> Result<TypedColumn<T>> {
		match T::data(&self.data) {
			Some(data) => Ok(TypedColumn::from_parts(self.name.clone(), data.clone())),
			None => Err(Error::type_mismatch(T::get_type(), self.get_type())),
		}
	}

	/// Downcast for callers that already know the element type.
	///
	/// # Panics
	///
	/// Panics if `T` is not the element type of this column.
	pub fn typed<T: Element>(&self) -> TypedColumn<T> {
		self.downcast().unwrap_or_else(|err| panic!("{err}"))
	}
}
