// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Resizable contiguous array with doubling growth.
//!
//! `DynamicArray<T>` owns a single buffer of default-initialized slots and
//! keeps a live prefix of it. It offers amortized O(1) append, O(1) indexing
//! and O(n) positional insert/erase.
//!
//! # Core Guarantees
//!
//! - **Doubling growth**: a full array grows to twice its capacity (1 from empty)
//! - **Move-based reallocation**: growth moves elements, it never clones them
//! - **No automatic shrinking**: `clear`, `truncate` and shrinking `resize` keep capacity
//! - **Single ownership**: `clone` allocates fresh storage, `take` leaves the source empty
//! - **One recoverable error**: [`DynamicArray::at`] reports [`DynArrayError::OutOfRange`];
//!   every other misuse (bad index, `pop_back` on empty) is a panic
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use dynarr::{DynamicArray, DynArrayError};
//!
//! fn example() -> Result<(), DynArrayError> {
//!     let mut array = DynamicArray::new();
//!     for i in 1..=3 {
//!         array.push_back(i);
//!     }
//!
//!     assert_eq!(array.len(), 3);
//!     assert_eq!(array.capacity(), 4);
//!     assert_eq!(*array.at(2)?, 3);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Reserving Up Front
//!
//! ```rust
//! use dynarr::{reserve, DynamicArray};
//!
//! let mut array: DynamicArray<u64> = DynamicArray::from(reserve(8));
//! for i in 0..8 {
//!     array.push_back(i);
//! }
//!
//! // No reallocation happened
//! assert_eq!(array.capacity(), 8);
//! ```
//!
//! # Logging
//!
//! Reallocations emit a `trace`-level `tracing` event with the old and new
//! capacity. Nothing else is logged.
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inspect dead slots through
//! `DynamicArray::as_capacity_slice()`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod dynamic_array;
mod error;
mod iter;
mod macros;
mod size_hint;

#[cfg(test)]
mod tests;

pub use dynamic_array::{DynamicArray, swap};
pub use error::DynArrayError;
pub use iter::IntoIter;
pub use size_hint::{SizeHint, reserve};
