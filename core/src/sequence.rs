//! The `Sequence` abstraction and its forEach primitive.
//!
//! A sequence is an ordered, finite, mutable collection owned by the caller.
//! Elements are read by value (a clone of the slot) and written in place
//! through [`Sequence::update`], so a callback can receive an element and a
//! mutable handle to the sequence at the same time.

use alloc::collections::VecDeque;
use core::convert::Infallible;
use core::ops::ControlFlow;

use smallvec::{Array as SmallArray, SmallVec};

use crate::Vec;

/// An ordered, indexable, mutable collection.
///
/// Implementors only provide indexed access. The iteration primitive,
/// [`try_for_each_indexed`](Sequence::try_for_each_indexed), has a default
/// implementation with forEach semantics (see [`for_each_snapshot`]) which
/// implementors may override, e.g. to observe or instrument it.
pub trait Sequence {
    type Item: Clone;

    /// Number of slots currently in the sequence.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the element at `index`, or `None` if out of range.
    fn element(&self, index: usize) -> Option<Self::Item>;

    /// Applies `f` to the slot at `index` in place.
    ///
    /// Returns `None` without calling `f` if `index` is out of range.
    fn update<R, F>(&mut self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut Self::Item) -> R;

    /// Visits every index present when the call starts, in ascending order,
    /// stopping early if `f` breaks.
    fn try_for_each_indexed<B, F>(&mut self, f: F) -> ControlFlow<B>
    where
        Self: Sized,
        F: FnMut(Self::Item, usize, &mut Self) -> ControlFlow<B>,
    {
        for_each_snapshot(self, f)
    }

    /// Visits every index present when the call starts, in ascending order.
    fn for_each_indexed<F>(&mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item, usize, &mut Self),
    {
        let flow = self.try_for_each_indexed::<Infallible, _>(|element, index, sequence| {
            f(element, index, sequence);
            ControlFlow::Continue(())
        });
        match flow {
            ControlFlow::Continue(()) => {}
            ControlFlow::Break(never) => match never {},
        }
    }
}

/// forEach over a sequence, with the length fixed when the call starts.
///
/// - Elements appended by `f` are not visited.
/// - Indices that no longer exist when reached (because `f` shrank the
///   sequence) are skipped without a call.
/// - Every other index is visited exactly once, in ascending order.
pub fn for_each_snapshot<S, B, F>(sequence: &mut S, mut f: F) -> ControlFlow<B>
where
    S: Sequence,
    F: FnMut(S::Item, usize, &mut S) -> ControlFlow<B>,
{
    let len = sequence.len();
    for index in 0..len {
        let Some(element) = sequence.element(index) else {
            continue;
        };
        if let ControlFlow::Break(value) = f(element, index, sequence) {
            return ControlFlow::Break(value);
        }
    }
    ControlFlow::Continue(())
}

// ============================================================================
// Implementations
// ============================================================================

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn element(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }

    fn update<R, F>(&mut self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.as_mut_slice().get_mut(index).map(f)
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn element(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }

    fn update<R, F>(&mut self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.as_mut_slice().get_mut(index).map(f)
    }
}

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn element(&self, index: usize) -> Option<T> {
        VecDeque::get(self, index).cloned()
    }

    fn update<R, F>(&mut self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        VecDeque::get_mut(self, index).map(f)
    }
}

impl<A> Sequence for SmallVec<A>
where
    A: SmallArray,
    A::Item: Clone,
{
    type Item = A::Item;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn element(&self, index: usize) -> Option<A::Item> {
        self.as_slice().get(index).cloned()
    }

    fn update<R, F>(&mut self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut A::Item) -> R,
    {
        self.as_mut_slice().get_mut(index).map(f)
    }
}
