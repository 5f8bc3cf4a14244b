// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use crate::{Table, View};

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

fn width(s: &str) -> usize {
	s.chars().count()
}

fn cell(value: &str, width: usize) -> String {
	let pad = width - self::width(value);
	let l = pad / 2;
	let r = pad - l;
	format!(" {:l$}{}{:r$} ", "", value, "")
}

/// Renders a header plus `rows` (indices into `table`) as a boxed grid.
fn render(f: &mut Formatter<'_>, table: &Table, rows: &[usize]) -> fmt::Result {
	let headers: Vec<String> = table.column_names().map(escape_control_chars).collect();
	let cells: Vec<Vec<String>> = rows
		.iter()
		.map(|&row| table.columns().iter().map(|column| escape_control_chars(&column.data().as_string(row))).collect())
		.collect();

	let mut col_widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
	for row in &cells {
		for (w, value) in col_widths.iter_mut().zip(row) {
			*w = (*w).max(width(value));
		}
	}
	for w in &mut col_widths {
		*w += 2;
	}

	let sep: String = if col_widths.is_empty() {
		"++".to_string()
	} else {
		col_widths.iter().map(|w| format!("+{}", "-".repeat(*w + 2))).collect::<String>() + "+"
	};

	writeln!(f, "{}", sep)?;
	let header: Vec<String> = headers.iter().zip(&col_widths).map(|(h, &w)| cell(h, w)).collect();
	writeln!(f, "|{}|", header.join("|"))?;
	writeln!(f, "{}", sep)?;

	for row in &cells {
		let parts: Vec<String> = row.iter().zip(&col_widths).map(|(v, &w)| cell(v, w)).collect();
		writeln!(f, "|{}|", parts.join("|"))?;
	}

	writeln!(f, "{}", sep)
}

impl Display for Table {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let rows: Vec<usize> = (0..self.row_count()).collect();
		render(f, self, &rows)
	}
}

impl Display for View {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		render(f, self.table(), self.indices())
	}
}
