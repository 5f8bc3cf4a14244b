// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Debug},
	ops::Deref,
	sync::Arc,
};

use crate::{Error, Result};

/// An immutable, reference-counted vector.
///
/// Clones share one allocation. The `with_*` edits never touch the shared
/// allocation: each builds a fresh vector in one linear pass and leaves
/// every existing clone observing the old contents.
#[derive(Clone, PartialEq)]
pub struct CowVec<T> {
	inner: Arc<Vec<T>>,
}

impl<T> CowVec<T> {
	pub fn new(vec: Vec<T>) -> Self {
		Self {
			inner: Arc::new(vec),
		}
	}

	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}

	/// True when both handles point at the same allocation.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}

	/// True iff `index` does not address an existing element. Always true on
	/// an empty vector, including for index 0.
	pub fn out_of_bounds(&self, index: usize) -> bool {
		index >= self.inner.len()
	}

	fn check_bounds(&self, index: usize) -> Result<()> {
		if self.out_of_bounds(index) {
			return Err(Error::IndexOutOfRange {
				index,
				len: self.inner.len(),
			});
		}
		Ok(())
	}
}

impl<T: Clone> CowVec<T> {
	/// Ensures unique ownership and returns a mutable reference to the inner Vec.
	pub fn make_mut(&mut self) -> &mut Vec<T> {
		Arc::make_mut(&mut self.inner)
	}

	pub fn push(&mut self, value: T) {
		self.make_mut().push(value);
	}

	pub fn with_added(&self, value: T) -> Self {
		let mut result = Vec::with_capacity(self.len() + 1);
		result.extend_from_slice(self.as_slice());
		result.push(value);
		Self::new(result)
	}

	/// Places `value` before the element currently at `index`. `index` may be
	/// one past the end, which appends.
	pub fn with_inserted(&self, index: usize, value: T) -> Result<Self> {
		if index > self.len() {
			return Err(Error::IndexOutOfRange {
				index,
				len: self.len(),
			});
		}

		let mut result = Vec::with_capacity(self.len() + 1);
		result.extend_from_slice(&self[..index]);
		result.push(value);
		result.extend_from_slice(&self[index..]);
		Ok(Self::new(result))
	}

	pub fn with_replaced(&self, index: usize, value: T) -> Result<Self> {
		self.check_bounds(index)?;

		let mut result = self.inner.as_ref().clone();
		result[index] = value;
		Ok(Self::new(result))
	}

	pub fn with_removed(&self, index: usize) -> Result<Self> {
		self.check_bounds(index)?;

		let mut result = Vec::with_capacity(self.len() - 1);
		result.extend_from_slice(&self[..index]);
		result.extend_from_slice(&self[index + 1..]);
		Ok(Self::new(result))
	}
}

impl<T> Deref for CowVec<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl<T: Debug> Debug for CowVec<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.inner.iter()).finish()
	}
}

impl<T> Default for CowVec<T> {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl<T> From<Vec<T>> for CowVec<T> {
	fn from(vec: Vec<T>) -> Self {
		Self::new(vec)
	}
}

impl<T> FromIterator<T> for CowVec<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<'a, T> IntoIterator for &'a CowVec<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.inner.iter()
	}
}
