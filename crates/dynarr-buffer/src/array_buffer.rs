// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ArrayBuffer - heap slots with single ownership.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

/// A heap-allocated, exclusively owned run of constructed slots.
///
/// The buffer has no notion of length versus capacity: `len()` is the number
/// of allocated slots and every one of them holds a valid `T`.
pub struct ArrayBuffer<T> {
    slots: Box<[T]>,
}

impl<T> ArrayBuffer<T> {
    /// Creates an empty buffer without allocating.
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Allocates `len` slots, each set to `T::default()`.
    pub fn allocate(len: usize) -> Self
    where
        T: Default,
    {
        let slots: Box<[T]> = (0..len).map(|_| T::default()).collect();

        Self { slots }
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slots are allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns every slot as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Returns every slot as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Moves the slots out into a new buffer, leaving `self` empty.
    ///
    /// No allocation takes place.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            slots: core::mem::take(&mut self.slots),
        }
    }

    /// Exchanges the contents of two buffers.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Drops the current slots and leaves the buffer empty.
    pub fn release(&mut self) {
        self.slots = Box::default();
    }

    /// Consumes the buffer and returns its slots.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.slots
    }
}

impl<T> Default for ArrayBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for ArrayBuffer<T> {
    fn from(slots: Box<[T]>) -> Self {
        Self { slots }
    }
}

impl<T> From<Vec<T>> for ArrayBuffer<T> {
    fn from(vec: Vec<T>) -> Self {
        Self {
            slots: vec.into_boxed_slice(),
        }
    }
}

impl<T> Index<usize> for ArrayBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for ArrayBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

impl<T> core::fmt::Debug for ArrayBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
