// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use tabula_type::{CowVec, FromValue, GetType, IntoValue};

use crate::ColumnData;

mod sealed {
	pub trait Sealed {}
}

/// A Rust type a column can store.
///
/// The set is closed: every implementor has exactly one [`ColumnData`]
/// variant, and [`Element::data`] is the only way from erased storage back
/// to typed storage. It returns `None` instead of reinterpreting a variant
/// of another type.
pub trait Element: GetType + IntoValue + FromValue + Clone + PartialEq + PartialOrd + Debug + Send + Sync + 'static + sealed::Sealed {
	fn data(data: &ColumnData) -> Option<&CowVec<Self>>;

	fn into_data(data: CowVec<Self>) -> ColumnData;
}

macro_rules! impl_element {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl sealed::Sealed for $ty {}

			impl Element for $ty {
				fn data(data: &ColumnData) -> Option<&CowVec<Self>> {
					match data {
						ColumnData::$variant(v) => Some(v),
						_ => None,
					}
				}

				fn into_data(data: CowVec<Self>) -> ColumnData {
					ColumnData::$variant(data)
				}
			}
		)*
	};
}

impl_element! {
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
