// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::DynamicArray;

#[derive(Debug, Clone)]
enum Op {
    PushBack(i32),
    PopBack,
    Insert(usize, i32),
    Erase(usize),
    Resize(usize),
    Reserve(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::PushBack),
        1 => Just(Op::PopBack),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(seed, v)| Op::Insert(seed, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0..64usize).prop_map(Op::Resize),
        1 => (0..64usize).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn push_back_keeps_order_and_doubles(
        values in prop::collection::vec(any::<i32>(), 0..=200)
    ) {
        let mut array = DynamicArray::new();
        for value in &values {
            array.push_back(*value);
            prop_assert!(array.len() <= array.capacity());
        }

        prop_assert_eq!(array.len(), values.len());
        prop_assert_eq!(array.as_slice(), values.as_slice());

        let expected_capacity = if values.is_empty() { 0 } else { values.len().next_power_of_two() };
        prop_assert_eq!(array.capacity(), expected_capacity);
    }

    #[test]
    fn resize_twice_equals_resize_once(
        values in prop::collection::vec(any::<u8>(), 0..=50),
        a in any::<usize>(),
        b in any::<usize>()
    ) {
        let len = values.len();
        let n = if len == 0 { 0 } else { a % (len + 1) };
        let m = if n == 0 { 0 } else { b % (n + 1) };

        let mut twice = DynamicArray::from(values.clone());
        twice.resize(n);
        twice.resize(m);

        let mut once = DynamicArray::from(values);
        once.resize(m);

        prop_assert_eq!(twice, once);
    }

    #[test]
    fn insert_then_erase_restores(
        values in prop::collection::vec(any::<i16>(), 0..=50),
        spare in 0..8usize,
        seed in any::<usize>(),
        inserted in any::<i16>()
    ) {
        let k = seed % (values.len() + 1);

        let mut array: DynamicArray<i16> = DynamicArray::with_capacity(values.len() + spare);
        array.extend(values.iter());

        array.insert(k, inserted);
        prop_assert_eq!(array[k], inserted);

        let next = array.erase(k);
        prop_assert_eq!(next, k);
        prop_assert_eq!(array.as_slice(), values.as_slice());
    }

    #[test]
    fn clone_then_mutate_is_independent(
        values in prop::collection::vec(any::<i32>(), 1..=50),
        pushed in any::<i32>()
    ) {
        let original = DynamicArray::from(values.clone());

        let mut copy = original.clone();
        copy[0] = copy[0].wrapping_add(1);
        copy.push_back(pushed);
        prop_assert_eq!(original.as_slice(), values.as_slice());

        let mut original = original;
        let copy_before = copy.clone();
        original.clear();
        prop_assert_eq!(copy, copy_before);
    }

    #[test]
    fn matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..=100)) {
        let mut array: DynamicArray<i32> = DynamicArray::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            let capacity_before = array.capacity();

            match op {
                Op::PushBack(v) => {
                    array.push_back(v);
                    model.push(v);
                }
                Op::PopBack => {
                    if !model.is_empty() {
                        array.pop_back();
                        model.pop();
                    }
                }
                Op::Insert(seed, v) => {
                    let k = seed % (model.len() + 1);
                    array.insert(k, v);
                    model.insert(k, v);
                }
                Op::Erase(seed) => {
                    if !model.is_empty() {
                        let k = seed % model.len();
                        array.erase(k);
                        model.remove(k);
                    }
                }
                Op::Resize(n) => {
                    array.resize(n);
                    model.resize(n, 0);
                }
                Op::Reserve(n) => {
                    array.reserve(n);
                    prop_assert!(array.capacity() >= n);
                }
                Op::Clear => {
                    array.clear();
                    model.clear();
                }
            }

            prop_assert!(array.capacity() >= capacity_before);
            prop_assert!(array.len() <= array.capacity());
            prop_assert_eq!(array.as_slice(), model.as_slice());
        }
    }
}
