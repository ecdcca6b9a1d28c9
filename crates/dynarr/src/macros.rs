// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Builds a [`DynamicArray`](crate::DynamicArray) the way `vec!` builds a `Vec`.
///
/// ```rust
/// use dynarr::{dynarr, DynamicArray};
///
/// let empty: DynamicArray<u8> = dynarr![];
/// assert!(empty.is_empty());
///
/// let listed = dynarr![1, 2, 3];
/// assert_eq!(listed.capacity(), 3);
///
/// let repeated = dynarr!["x"; 2];
/// assert_eq!(repeated, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}
