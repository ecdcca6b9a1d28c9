// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use dynarr_buffer::ArrayBuffer;

use crate::error::DynArrayError;
use crate::size_hint::SizeHint;

#[cold]
#[inline(never)]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}");
}

#[cold]
#[inline(never)]
#[track_caller]
fn insert_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("insertion index (is {index}) should be <= len (is {len})");
}

#[cold]
#[inline(never)]
#[track_caller]
fn erase_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("erase index (is {index}) should be < len (is {len})");
}

#[cold]
#[inline(never)]
#[track_caller]
fn pop_back_on_empty() -> ! {
    panic!("pop_back called on an empty DynamicArray");
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

/// A growable contiguous array with doubling growth.
///
/// The array owns an [`ArrayBuffer`] of `capacity()` slots, of which the
/// first `len()` are live. Every slot always holds a constructed `T`, which
/// is why growth needs `T: Default`. Slots past `len()` keep whatever value
/// they last held until an operation reuses them.
///
/// # Growth
///
/// Appending to a full array reallocates to twice the capacity (or to 1 from
/// empty) and moves the live elements across. Capacity never shrinks on its
/// own; [`clear`](Self::clear), [`truncate`](Self::truncate) and a shrinking
/// [`resize`](Self::resize) only move the length.
///
/// Any reallocating or shifting operation invalidates outstanding references
/// and iterators; the borrow checker enforces this.
///
/// # Threading
///
/// `DynamicArray` has no internal synchronization. It is `Send`/`Sync`
/// exactly when `T` is; sharing one for mutation across threads needs an
/// external lock.
///
/// # Example
///
/// ```rust
/// use dynarr::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.push_back(1);
/// array.push_back(2);
/// array.push_back(3);
/// assert_eq!(array.capacity(), 4);
///
/// array.insert(1, 99);
/// assert_eq!(array, [1, 99, 2, 3]);
///
/// array.erase(1);
/// assert_eq!(array, [1, 2, 3]);
/// assert!(array.at(5).is_err());
/// ```
pub struct DynamicArray<T> {
    items: ArrayBuffer<T>,
    size: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array. Does not allocate.
    pub fn new() -> Self {
        Self {
            items: ArrayBuffer::new(),
            size: 0,
        }
    }

    /// Creates an array of `size` default values, with capacity `size`.
    pub fn with_size(size: usize) -> Self
    where
        T: Default,
    {
        Self {
            items: ArrayBuffer::allocate(size),
            size,
        }
    }

    /// Creates an array of `size` copies of `value`, with capacity `size`.
    pub fn from_elem(size: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from(alloc::vec![value; size])
    }

    /// Creates an empty array with exactly `capacity` slots reserved.
    pub fn with_capacity(capacity: usize) -> Self
    where
        T: Default,
    {
        Self {
            items: ArrayBuffer::allocate(capacity),
            size: 0,
        }
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the array holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.size]
    }

    /// Returns every allocated slot, live or not.
    ///
    /// Slots past `len()` hold default values or stale values left behind
    /// by `clear`, `truncate`, `pop_back` and `erase`.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn as_capacity_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Returns a reference to the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Checked access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::OutOfRange`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarr::{dynarr, DynArrayError};
    ///
    /// let array = dynarr![10, 20];
    /// assert_eq!(array.at(1), Ok(&20));
    /// assert_eq!(array.at(2), Err(DynArrayError::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, DynArrayError> {
        let len = self.size;
        self.as_slice()
            .get(index)
            .ok_or(DynArrayError::OutOfRange { index, len })
    }

    /// Checked mutable access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DynArrayError> {
        let len = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(DynArrayError::OutOfRange { index, len })
    }

    /// Returns the first live element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last live element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Iterates over the live elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates mutably over the live elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Sets the length to zero. Capacity and slot contents are untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Shortens the array to `len` elements. No-op if `len >= self.len()`.
    ///
    /// Dropped-off slots keep their values until reused.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        if len < self.size {
            self.size = len;
        }
    }

    /// Grows the capacity to exactly `capacity` slots if it is currently smaller.
    ///
    /// Unlike `Vec::reserve`, the argument is the total capacity requested,
    /// not an additional amount. Never shrinks.
    pub fn reserve(&mut self, capacity: usize)
    where
        T: Default,
    {
        if capacity > self.capacity() {
            self.reallocate(capacity);
        }
    }

    /// Changes the length to `new_size`.
    ///
    /// - Shrinking only moves the length.
    /// - Growing within capacity resets the newly exposed slots to `T::default()`.
    /// - Growing past capacity reallocates to `max(new_size, 2 * capacity())`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarr::dynarr;
    ///
    /// let mut array = dynarr![1, 2, 3];
    /// array.resize(5);
    /// assert_eq!(array, [1, 2, 3, 0, 0]);
    /// assert_eq!(array.capacity(), 6);
    ///
    /// array.resize(1);
    /// assert_eq!(array, [1]);
    /// assert_eq!(array.capacity(), 6);
    /// ```
    pub fn resize(&mut self, new_size: usize)
    where
        T: Default,
    {
        if new_size <= self.size {
            self.size = new_size;
            return;
        }

        if new_size <= self.capacity() {
            for slot in &mut self.items.as_mut_slice()[self.size..new_size] {
                *slot = T::default();
            }
            self.size = new_size;
            return;
        }

        let doubled = self
            .capacity()
            .checked_mul(2)
            .unwrap_or_else(|| capacity_overflow());
        self.reallocate(new_size.max(doubled));
        self.size = new_size;
    }

    /// Appends `value`, doubling the capacity first if the array is full.
    pub fn push_back(&mut self, value: T)
    where
        T: Default,
    {
        if self.size == self.capacity() {
            self.reallocate(self.grown_capacity());
        }

        self.items[self.size] = value;
        self.size += 1;
    }

    /// Removes the last element from the live range.
    ///
    /// The slot keeps its value until it is reused.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn pop_back(&mut self) {
        if self.size == 0 {
            pop_back_on_empty();
        }

        self.size -= 1;
    }

    /// Inserts `value` at `index`, shifting later elements one slot right.
    ///
    /// `index == len()` appends. A full array grows to twice its capacity
    /// (or to 1 from empty) as part of the insert. Returns the inserted
    /// element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T
    where
        T: Default,
    {
        let len = self.size;
        if index > len {
            insert_out_of_bounds(index, len);
        }

        if len < self.capacity() {
            // Brings the spare slot at `len` down to `index`, everything
            // in between moves up by one.
            let slots = &mut self.items.as_mut_slice()[index..=len];
            slots.rotate_right(1);
            slots[0] = value;
        } else {
            self.reallocating_insert(index, value);
        }

        self.size += 1;
        &mut self.items[index]
    }

    /// Removes the element at `index`, shifting later elements one slot left.
    ///
    /// Returns `index`, which now names the element that followed the
    /// removed one, or equals `len()` if the last element was removed.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.size;
        if index >= len {
            erase_out_of_bounds(index, len);
        }

        // The erased value ends up in the now-dead slot at `len - 1`.
        self.items.as_mut_slice()[index..len].rotate_left(1);
        self.size -= 1;

        index
    }

    /// Exchanges storage, capacity and length with `other` in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        core::mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    ///
    /// No allocation and no element copies take place.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            items: self.items.take(),
            size: core::mem::take(&mut self.size),
        }
    }

    pub(crate) fn into_buffer(self) -> ArrayBuffer<T> {
        self.items
    }

    #[inline]
    fn grown_capacity(&self) -> usize {
        match self.capacity() {
            0 => 1,
            capacity => capacity
                .checked_mul(2)
                .unwrap_or_else(|| capacity_overflow()),
        }
    }

    /// Moves the live elements into a fresh buffer of `new_capacity` slots.
    #[cold]
    #[inline(never)]
    fn reallocate(&mut self, new_capacity: usize)
    where
        T: Default,
    {
        debug_assert!(new_capacity >= self.size);
        tracing::trace!(
            from = self.capacity(),
            to = new_capacity,
            len = self.size,
            "reallocating DynamicArray storage"
        );

        let len = self.size;
        let mut items = ArrayBuffer::allocate(new_capacity);
        items.as_mut_slice()[..len].swap_with_slice(&mut self.items.as_mut_slice()[..len]);

        self.items = items;
    }

    /// Grows a full array and inserts in one pass: prefix, `value`, suffix.
    #[cold]
    #[inline(never)]
    fn reallocating_insert(&mut self, index: usize, value: T)
    where
        T: Default,
    {
        let len = self.size;
        let new_capacity = self.grown_capacity();
        tracing::trace!(
            from = self.capacity(),
            to = new_capacity,
            len,
            index,
            "reallocating DynamicArray storage for insert"
        );

        let mut items = ArrayBuffer::allocate(new_capacity);
        let dst = items.as_mut_slice();
        let src = self.items.as_mut_slice();

        dst[..index].swap_with_slice(&mut src[..index]);
        dst[index] = value;
        dst[index + 1..=len].swap_with_slice(&mut src[index..len]);

        self.items = items;
    }
}

/// Exchanges the contents of two arrays. Same as [`DynamicArray::swap`].
#[inline]
pub fn swap<T>(lhs: &mut DynamicArray<T>, rhs: &mut DynamicArray<T>) {
    lhs.swap(rhs);
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Deep-copies the live elements into fresh storage sized to fit them.
    fn clone(&self) -> Self {
        Self::from(self.as_slice().to_vec())
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(vec: Vec<T>) -> Self {
        let size = vec.len();

        Self {
            items: ArrayBuffer::from(vec),
            size,
        }
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(slice: &[T]) -> Self {
        Self::from(slice.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(array: [T; N]) -> Self {
        Self::from(Vec::from(array))
    }
}

impl<T: Default> From<SizeHint> for DynamicArray<T> {
    fn from(hint: SizeHint) -> Self {
        Self::with_capacity(hint.value())
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(*value);
        }
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let len = self.size;
        match self.as_slice().get(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, len),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.size;
        match self.as_mut_slice().get_mut(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, len),
        }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for DynamicArray<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for DynamicArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
