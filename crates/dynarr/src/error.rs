// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynarr.

use thiserror::Error;

/// Error type for checked `DynamicArray` access.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynArrayError {
    /// The requested index is not below the current length.
    #[error("index {index} is out of range for DynamicArray of length {len}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the array at the time of the request.
        len: usize,
    },
}
