//! Cyclic Index
//!
//! An index over a fixed, non-empty sequence with wraparound stepping.

use crate::error::{Result, StateError};

/// Index into `0..len` that wraps in both directions.
///
/// `len` is fixed at construction and never zero, so `index` is always a
/// valid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleIndex {
    index: usize,
    len: usize,
}

impl CycleIndex {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(StateError::EmptyCycle);
        }
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Timer advance. Same arithmetic as [`CycleIndex::next`].
    pub fn tick(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
        tracing::trace!(index = self.index, "cycle next");
    }

    pub fn previous(&mut self) {
        self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        tracing::trace!(index = self.index, "cycle previous");
    }

    /// Jump straight to `index`. Out-of-range jumps leave the state alone.
    pub fn select_index(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "cycle select ignored: out of range");
            return Err(StateError::OutOfRange { index, len: self.len });
        }
        self.index = index;
        Ok(())
    }
}
