// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod util;
pub mod value;

pub use error::Error;
pub use util::CowVec;
pub use value::{FromValue, GetType, IntoValue, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
