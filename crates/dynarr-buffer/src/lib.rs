// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exclusively owned storage for a run of default-initialized slots.
//!
//! [`ArrayBuffer`] is the raw storage behind `dynarr::DynamicArray`. It knows
//! nothing about live or dead elements: every slot is a constructed `T`, and
//! the buffer only hands out, exchanges or drops the whole run.
//!
//! # Contract
//!
//! - **Allocate**: [`ArrayBuffer::allocate`] builds `n` slots of `T::default()`
//! - **Access**: indexed and slice access to every slot
//! - **Transfer**: [`ArrayBuffer::take`] moves the slots out, leaving the source empty
//! - **Swap**: [`ArrayBuffer::swap`] exchanges contents in O(1)
//! - **Release**: [`ArrayBuffer::release`] drops the slots, leaving the buffer empty
//!
//! # Example
//!
//! ```rust
//! use dynarr_buffer::ArrayBuffer;
//!
//! let mut buffer = ArrayBuffer::<u32>::allocate(4);
//! buffer[0] = 7;
//!
//! let moved = buffer.take();
//! assert!(buffer.is_empty());
//! assert_eq!(moved.as_slice(), &[7, 0, 0, 0]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod array_buffer;

pub use array_buffer::ArrayBuffer;
