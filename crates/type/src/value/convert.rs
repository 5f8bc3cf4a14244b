// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Error, GetType, Result, Value};

pub trait IntoValue {
	fn into_value(self) -> Value;
}

/// Checked extraction of a native value. Fails with
/// [`Error::TypeMismatch`] when the value carries a different type tag.
pub trait FromValue: GetType + Sized {
	fn from_value(value: Value) -> Result<Self>;
}

macro_rules! impl_value_conversion {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl IntoValue for $ty {
				fn into_value(self) -> Value {
					Value::$variant(self)
				}
			}

			impl FromValue for $ty {
				fn from_value(value: Value) -> Result<Self> {
					match value {
						Value::$variant(v) => Ok(v),
						other => Err(Error::type_mismatch(<$ty>::get_type(), other.get_type())),
					}
				}
			}

			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					Value::$variant(v)
				}
			}
		)*
	};
}

impl_value_conversion! {
	bool => Boolean,
	f32 => Float4,
	f64 => Float8,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	i128 => Int16,
	String => Utf8,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	u128 => Uint16,
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}
