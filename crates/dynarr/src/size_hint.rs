// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// A construction-time capacity request.
///
/// Converting a `SizeHint` into a [`DynamicArray`](crate::DynamicArray)
/// reserves exactly the requested number of slots and leaves the array empty.
///
/// # Example
///
/// ```rust
/// use dynarr::{DynamicArray, reserve};
///
/// let array: DynamicArray<u32> = reserve(16).into();
/// assert_eq!(array.capacity(), 16);
/// assert!(array.is_empty());
/// ```
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SizeHint {
    capacity: usize,
}

impl SizeHint {
    /// Creates a request for `capacity` slots.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the requested capacity.
    #[inline]
    pub const fn value(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`SizeHint::new`].
#[inline]
pub const fn reserve(capacity: usize) -> SizeHint {
    SizeHint::new(capacity)
}
