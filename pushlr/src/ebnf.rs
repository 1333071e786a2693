//! Lazy access to reduction arguments, including folded EBNF sequences.
//!
//! An accumulator frame (see [`Reduction::SeqHead`](crate::Reduction::SeqHead))
//! sits on top of the elements it has absorbed, and its `sequence_length`
//! counts them. One *logical* stack element is therefore `1 +
//! sequence_length` physical frames. The views in this module walk the
//! physical stack directly; nothing is copied out.

use crate::engine::StackFrame;
use crate::stack::Stack;
use std::iter::FusedIterator;
use std::ops::Range;

/// Physical positions of the elements folded under the logical element
/// `index` of a rule of length `base`.
///
/// The range is empty for a plain frame and for an accumulator that absorbed
/// nothing; telling those apart is the caller's business. Returns `None` when
/// the stack holds fewer than `base - index` logical elements.
pub(crate) fn seq_get_range<S, V>(
    stack: &Stack<StackFrame<S, V>>,
    base: usize,
    index: usize,
) -> Option<Range<usize>> {
    let n = base.checked_sub(index).filter(|&n| n > 0)?;
    let mut actual = stack.depth();
    let mut prev = actual;
    for _ in 0..n {
        actual = actual.checked_sub(1)?;
        prev = actual;
        actual = actual.checked_sub(stack.nth(actual).sequence_length)?;
    }
    Some(actual..prev)
}

/// Physical position of the frame heading the logical element `n` below the
/// top (0 = top).
pub(crate) fn nth_top<S, V>(stack: &Stack<StackFrame<S, V>>, n: usize) -> Option<usize> {
    seq_get_range(stack, n + 1, 0).map(|r| r.end)
}

/// Arguments of the reduction being performed, in left-to-right rule order.
///
/// Indices are positions in the rule's right-hand side: for `E -> E '+' E`,
/// `get(0)` and `get(2)` are the operands. The frames are still on the stack
/// while the semantic action runs; the engine pops them afterwards.
pub struct ReduceArgs<'a, S, V> {
    stack: &'a Stack<StackFrame<S, V>>,
    base: usize,
}

impl<'a, S, V> ReduceArgs<'a, S, V> {
    pub(crate) fn new(stack: &'a Stack<StackFrame<S, V>>, base: usize) -> Self {
        Self { stack, base }
    }

    /// Number of right-hand side symbols.
    pub fn len(&self) -> usize {
        self.base
    }

    pub fn is_empty(&self) -> bool {
        self.base == 0
    }

    /// Value of the `index`-th symbol. For an EBNF symbol this is the
    /// accumulator's own value; use [`sequence`](Self::sequence) or
    /// [`optional`](Self::optional) for its elements.
    ///
    /// Panics if `index` ≥ [`len`](Self::len).
    pub fn get(&self, index: usize) -> &'a V {
        &self.stack.nth(self.range(index).end).value
    }

    /// Physical positions of the elements folded under the `index`-th symbol.
    ///
    /// Panics if `index` ≥ [`len`](Self::len).
    pub fn range(&self, index: usize) -> Range<usize> {
        assert!(index < self.base, "argument {index} out of {}", self.base);
        match seq_get_range(self.stack, self.base, index) {
            Some(range) => range,
            None => panic!("stack shallower than a rule of length {}", self.base),
        }
    }

    /// The `index`-th symbol viewed as a repetition (`X*`, `X+`, `X / sep`).
    pub fn sequence(&self, index: usize) -> Sequence<'a, S, V> {
        Sequence {
            stack: self.stack,
            range: self.range(index),
        }
    }

    /// The `index`-th symbol viewed as an option (`X?`).
    pub fn optional(&self, index: usize) -> Optional<'a, V> {
        let range = self.range(index);
        Optional {
            value: (!range.is_empty()).then(|| &self.stack.nth(range.start).value),
        }
    }
}

/// Borrowed view of the elements of a folded repetition, oldest first.
pub struct Sequence<'a, S, V> {
    stack: &'a Stack<StackFrame<S, V>>,
    range: Range<usize>,
}

impl<'a, S, V> Sequence<'a, S, V> {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn iter(&self) -> SequenceIter<'a, S, V> {
        SequenceIter {
            stack: self.stack,
            range: self.range.clone(),
        }
    }
}

impl<'a, S, V> IntoIterator for Sequence<'a, S, V> {
    type Item = &'a V;
    type IntoIter = SequenceIter<'a, S, V>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIter {
            stack: self.stack,
            range: self.range,
        }
    }
}

impl<'a, S, V> IntoIterator for &Sequence<'a, S, V> {
    type Item = &'a V;
    type IntoIter = SequenceIter<'a, S, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct SequenceIter<'a, S, V> {
    stack: &'a Stack<StackFrame<S, V>>,
    range: Range<usize>,
}

impl<'a, S, V> Iterator for SequenceIter<'a, S, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|i| &self.stack.nth(i).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<S, V> DoubleEndedIterator for SequenceIter<'_, S, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(|i| &self.stack.nth(i).value)
    }
}

impl<S, V> ExactSizeIterator for SequenceIter<'_, S, V> {}

impl<S, V> FusedIterator for SequenceIter<'_, S, V> {}

/// Borrowed view of an optional element.
#[derive(Debug, Clone, Copy)]
pub struct Optional<'a, V> {
    value: Option<&'a V>,
}

impl<'a, V> Optional<'a, V> {
    pub fn get(&self) -> Option<&'a V> {
        self.value
    }

    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }
}
