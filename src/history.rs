/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Bounded undo/redo history over whole-value snapshots.
//!
//! `History<T>` holds `(past, present, future)` and knows nothing about what
//! `T` is; the store decides which state participates. The past stack is
//! bounded: once full, the oldest snapshot is evicted before a new checkpoint
//! is pushed. Any checkpoint clears the future stack.

use std::collections::VecDeque;

/// Past/present/future snapshot stacks with a fixed past bound.
#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    past: VecDeque<T>,
    present: T,
    future: Vec<T>,
    limit: usize,
}

impl<T: Clone> History<T> {
    pub fn new(present: T, limit: usize) -> Self {
        Self {
            past: VecDeque::with_capacity(limit),
            present,
            future: Vec::new(),
            limit,
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// Mutable access to the present value. Callers mutating the document
    /// must `checkpoint` first; the store enforces that ordering.
    pub fn present_mut(&mut self) -> &mut T {
        &mut self.present
    }

    /// Push a snapshot of the present onto the past stack (evicting the
    /// oldest entry when at the bound) and clear the future stack.
    pub fn checkpoint(&mut self) {
        if self.limit > 0 && self.past.len() == self.limit {
            self.past.pop_front();
        }
        self.past.push_back(self.present.clone());
        self.future.clear();
    }

    /// Step the present back to the most recent past snapshot. Returns false
    /// (without touching anything) when the past stack is empty.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push(current);
        true
    }

    /// Inverse of `undo` over the future stack.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        true
    }

    /// Replace the present outright and drop both stacks. Used at the
    /// import boundary.
    pub fn replace_present(&mut self, value: T) {
        self.present = value;
        self.past.clear();
        self.future.clear();
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}
