// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use tabula_type::{CowVec, FromValue, IntoValue, Result, Type, Value};

/// Type-erased column storage: one variant per supported element type.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
	Boolean(CowVec<bool>),
	Float4(CowVec<f32>),
	Float8(CowVec<f64>),
	Int1(CowVec<i8>),
	Int2(CowVec<i16>),
	Int4(CowVec<i32>),
	Int8(CowVec<i64>),
	Int16(CowVec<i128>),
	Utf8(CowVec<String>),
	Uint1(CowVec<u8>),
	Uint2(CowVec<u16>),
	Uint4(CowVec<u32>),
	Uint8(CowVec<u64>),
	Uint16(CowVec<u128>),
}

macro_rules! with_data {
	($data:expr, $v:ident => $body:expr) => {
		match $data {
			ColumnData::Boolean($v) => $body,
			ColumnData::Float4($v) => $body,
			ColumnData::Float8($v) => $body,
			ColumnData::Int1($v) => $body,
			ColumnData::Int2($v) => $body,
			ColumnData::Int4($v) => $body,
			ColumnData::Int8($v) => $body,
			ColumnData::Int16($v) => $body,
			ColumnData::Utf8($v) => $body,
			ColumnData::Uint1($v) => $body,
			ColumnData::Uint2($v) => $body,
			ColumnData::Uint4($v) => $body,
			ColumnData::Uint8($v) => $body,
			ColumnData::Uint16($v) => $body,
		}
	};
}

macro_rules! map_data {
	($data:expr, $v:ident => $body:expr) => {
		match $data {
			ColumnData::Boolean($v) => ColumnData::Boolean($body),
			ColumnData::Float4($v) => ColumnData::Float4($body),
			ColumnData::Float8($v) => ColumnData::Float8($body),
			ColumnData::Int1($v) => ColumnData::Int1($body),
			ColumnData::Int2($v) => ColumnData::Int2($body),
			ColumnData::Int4($v) => ColumnData::Int4($body),
			ColumnData::Int8($v) => ColumnData::Int8($body),
			ColumnData::Int16($v) => ColumnData::Int16($body),
			ColumnData::Utf8($v) => ColumnData::Utf8($body),
			ColumnData::Uint1($v) => ColumnData::Uint1($body),
			ColumnData::Uint2($v) => ColumnData::Uint2($body),
			ColumnData::Uint4($v) => ColumnData::Uint4($body),
			ColumnData::Uint8($v) => ColumnData::Uint8($body),
			ColumnData::Uint16($v) => ColumnData::Uint16($body),
		}
	};
}

impl ColumnData {
	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Boolean(_) => Type::Boolean,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Int16(_) => Type::Int16,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Uint1(_) => Type::Uint1,
			ColumnData::Uint2(_) => Type::Uint2,
			ColumnData::Uint4(_) => Type::Uint4,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Uint16(_) => Type::Uint16,
		}
	}

	pub fn len(&self) -> usize {
		with_data!(self, v => v.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get(&self, index: usize) -> Option<Value> {
		with_data!(self, v => v.get(index).cloned().map(IntoValue::into_value))
	}

	pub fn as_string(&self, index: usize) -> String {
		self.get(index).map(|v| v.to_string()).unwrap_or_default()
	}

	/// True when both sides share one allocation.
	pub fn ptr_eq(&self, other: &ColumnData) -> bool {
		match (self, other) {
			(ColumnData::Boolean(l), ColumnData::Boolean(r)) => l.ptr_eq(r),
			(ColumnData::Float4(l), ColumnData::Float4(r)) => l.ptr_eq(r),
			(ColumnData::Float8(l), ColumnData::Float8(r)) => l.ptr_eq(r),
			(ColumnData::Int1(l), ColumnData::Int1(r)) => l.ptr_eq(r),
			(ColumnData::Int2(l), ColumnData::Int2(r)) => l.ptr_eq(r),
			(ColumnData::Int4(l), ColumnData::Int4(r)) => l.ptr_eq(r),
			(ColumnData::Int8(l), ColumnData::Int8(r)) => l.ptr_eq(r),
			(ColumnData::Int16(l), ColumnData::Int16(r)) => l.ptr_eq(r),
			(ColumnData::Utf8(l), ColumnData::Utf8(r)) => l.ptr_eq(r),
			(ColumnData::Uint1(l), ColumnData::Uint1(r)) => l.ptr_eq(r),
			(ColumnData::Uint2(l), ColumnData::Uint2(r)) => l.ptr_eq(r),
			(ColumnData::Uint4(l), ColumnData::Uint4(r)) => l.ptr_eq(r),
			(ColumnData::Uint8(l), ColumnData::Uint8(r)) => l.ptr_eq(r),
			(ColumnData::Uint16(l), ColumnData::Uint16(r)) => l.ptr_eq(r),
			_ => false,
		}
	}

	/// Orders two rows of this column. The order is total: NaN sorts after
	/// every other float and equal to another NaN.
	pub fn compare(&self, a: usize, b: usize) -> Ordering {
		match self {
			ColumnData::Float4(v) => nan_last(v[a].is_nan(), v[b].is_nan(), v[a].partial_cmp(&v[b])),
			ColumnData::Float8(v) => nan_last(v[a].is_nan(), v[b].is_nan(), v[a].partial_cmp(&v[b])),
			_ => with_data!(self, v => v[a].partial_cmp(&v[b]).unwrap_or(Ordering::Equal)),
		}
	}

	pub fn with_added(&self, value: Value) -> Result<ColumnData> {
		Ok(map_data!(self, v => v.with_added(FromValue::from_value(value)?)))
	}

	pub fn with_inserted(&self, index: usize, value: Value) -> Result<ColumnData> {
		Ok(map_data!(self, v => v.with_inserted(index, FromValue::from_value(value)?)?))
	}

	pub fn with_replaced(&self, index: usize, value: Value) -> Result<ColumnData> {
		Ok(map_data!(self, v => v.with_replaced(index, FromValue::from_value(value)?)?))
	}

	pub fn with_removed(&self, index: usize) -> Result<ColumnData> {
		Ok(map_data!(self, v => v.with_removed(index)?))
	}
}

fn nan_last(a_nan: bool, b_nan: bool, ord: Option<Ordering>) -> Ordering {
	match (a_nan, b_nan) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => ord.unwrap_or(Ordering::Equal),
	}
}
