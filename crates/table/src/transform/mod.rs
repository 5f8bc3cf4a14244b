// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod column;
mod row;
mod sort;

pub use sort::{SortDirection, SortKey};
