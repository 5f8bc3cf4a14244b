// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod column;
mod display;
mod row;
mod table;
mod transform;
mod view;

pub use column::{Column, ColumnData, Element, TypedColumn};
pub use row::{Row, Rows, RowsIter};
pub use table::{ColumnKey, ColumnRef, Table};
pub use tabula_type::{CowVec, Error, FromValue, GetType, IntoValue, Result, Type, Value};
pub use transform::{SortDirection, SortKey};
pub use view::View;
