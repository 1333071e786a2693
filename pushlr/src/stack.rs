//! Transactional parse stack.
//!
//! The stack is split into a *committed* prefix and a *pending* suffix. A
//! transaction starts with [`Stack::rollback_tmp`]; every push lands in the
//! pending region and pops consume the pending region first, then lower the
//! `gap` that marks how much of the committed region is still visible. Only
//! [`Stack::commit_tmp`] makes the result durable. Discarding a failed
//! shift/reduce chain is therefore a matter of starting a new transaction.
//!
//! Frames below the gap are never written in place: [`Stack::top_mut`] and
//! [`Stack::swap_top_and_second`] first copy the affected committed frames
//! into the pending region.

use crate::error::StackError;
use log::trace;

#[derive(Debug, Clone)]
pub struct Stack<T> {
    committed: Vec<T>,
    pending: Vec<T>,
    gap: usize,
    capacity: Option<usize>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack, optionally bounded to `capacity` frames.
    ///
    /// A bounded stack reserves its storage up front so that later sessions
    /// never reallocate.
    pub fn new(capacity: Option<usize>) -> Self {
        let committed = match capacity {
            Some(n) => Vec::with_capacity(n),
            None => Vec::new(),
        };
        Self {
            committed,
            pending: Vec::new(),
            gap: 0,
            capacity,
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Begins a transaction: the whole committed region becomes visible again
    /// and the pending region is dropped.
    pub fn rollback_tmp(&mut self) {
        self.gap = self.committed.len();
        self.pending.clear();
    }

    /// Makes the current transaction durable: the committed region is cut at
    /// the gap and the pending region is appended to it.
    pub fn commit_tmp(&mut self) {
        self.committed.truncate(self.gap);
        self.committed.append(&mut self.pending);
        self.gap = self.committed.len();
    }

    /// Pushes a frame into the pending region.
    ///
    /// Fails with [`StackError::Overflow`] when the stack already holds
    /// `capacity` frames; the frame is dropped in that case.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if let Some(capacity) = self.capacity {
            if self.depth() >= capacity {
                return Err(StackError::Overflow { capacity });
            }
        }
        self.pending.push(value);
        Ok(())
    }

    /// Removes `count` frames, pending ones first, then lowers the gap.
    pub fn pop(&mut self, count: usize) -> Result<(), StackError> {
        let depth = self.depth();
        if count > depth {
            return Err(StackError::Underflow {
                requested: count,
                depth,
            });
        }
        if self.pending.len() < count {
            self.gap -= count - self.pending.len();
            self.pending.clear();
        } else {
            self.pending.truncate(self.pending.len() - count);
        }
        Ok(())
    }

    /// Most recent frame across both regions.
    pub fn top(&self) -> Option<&T> {
        match self.pending.last() {
            Some(frame) => Some(frame),
            None => self.gap.checked_sub(1).map(|i| &self.committed[i]),
        }
    }

    /// Frame at physical position `index`, counted from the bottom.
    ///
    /// Panics if `index` ≥ [`depth`](Stack::depth).
    pub fn nth(&self, index: usize) -> &T {
        if index < self.gap {
            &self.committed[index]
        } else {
            &self.pending[index - self.gap]
        }
    }

    /// Frame `base - index` positions below the top, where position 1 is the
    /// top itself. For a rule of length `base`, `at(base, 0)` is its leftmost
    /// symbol and `at(base, base - 1)` its rightmost.
    ///
    /// Panics unless `index < base ≤ depth`.
    pub fn at(&self, base: usize, index: usize) -> &T {
        assert!(index < base && base <= self.depth());
        self.nth(self.depth() - (base - index))
    }

    pub fn clear(&mut self) {
        self.committed.clear();
        self.pending.clear();
        self.gap = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.gap == 0
    }

    /// Number of visible frames.
    pub fn depth(&self) -> usize {
        self.gap + self.pending.len()
    }

    /// Number of frames pushed by the current transaction and not yet
    /// committed.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Visible frames from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.committed[..self.gap].iter().chain(self.pending.iter())
    }
}

impl<T: Clone> Stack<T> {
    /// Mutable access to the most recent frame.
    pub fn top_mut(&mut self) -> Option<&mut T> {
        let depth = self.depth();
        if depth == 0 {
            return None;
        }
        self.lift(depth - 1);
        self.pending.last_mut()
    }

    /// Exchanges the two most recent frames.
    pub fn swap_top_and_second(&mut self) -> Result<(), StackError> {
        let depth = self.depth();
        if depth < 2 {
            return Err(StackError::Underflow {
                requested: 2,
                depth,
            });
        }
        self.lift(depth - 2);
        let n = self.pending.len();
        self.pending.swap(n - 2, n - 1);
        Ok(())
    }

    /// Moves the committed frames at physical positions `from..gap` into the
    /// pending region so they can be modified without touching committed
    /// storage.
    fn lift(&mut self, from: usize) {
        if from < self.gap {
            trace!("lifting {} committed frame(s)", self.gap - from);
            let lifted = self.committed[from..self.gap].iter().cloned();
            self.pending.splice(0..0, lifted);
            self.gap = from;
        }
    }
}
