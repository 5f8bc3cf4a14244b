// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![allow(dead_code)]

use tabula_table::{Column, Table};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_test_writer().try_init();
}

pub fn table() -> Table {
	Table::new("T", [Column::int4("a", [1, 2, 3]), Column::utf8("b", ["x", "y", "z"])]).unwrap()
}
