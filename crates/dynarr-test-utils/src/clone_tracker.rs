// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct CounterState {
    clones: Cell<usize>,
    drops: Cell<usize>,
}

/// Shared clone/drop counters for [`CloneTracker`] values.
///
/// Cloning a `Counters` handle shares the same underlying counts.
#[derive(Debug, Default, Clone)]
pub struct Counters {
    state: Rc<CounterState>,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracked value reporting to these counters.
    pub fn track(&self, value: u32) -> CloneTracker {
        CloneTracker {
            value,
            counters: Some(self.clone()),
        }
    }

    pub fn clones(&self) -> usize {
        self.state.clones.get()
    }

    pub fn drops(&self) -> usize {
        self.state.drops.get()
    }
}

/// Element type that records every clone and drop of a tracked value.
///
/// `CloneTracker::default()` is untracked, so default-filled slots never
/// show up in the counts. Equality and ordering look at `value` only.
#[derive(Debug, Default)]
pub struct CloneTracker {
    pub value: u32,
    counters: Option<Counters>,
}

impl CloneTracker {
    pub fn is_tracked(&self) -> bool {
        self.counters.is_some()
    }
}

impl Clone for CloneTracker {
    fn clone(&self) -> Self {
        if let Some(counters) = &self.counters {
            counters.state.clones.set(counters.clones() + 1);
        }

        Self {
            value: self.value,
            counters: self.counters.clone(),
        }
    }
}

impl Drop for CloneTracker {
    fn drop(&mut self) {
        if let Some(counters) = &self.counters {
            counters.state.drops.set(counters.drops() + 1);
        }
    }
}

impl PartialEq for CloneTracker {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for CloneTracker {}

impl PartialOrd for CloneTracker {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CloneTracker {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}
