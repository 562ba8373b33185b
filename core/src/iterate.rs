//! Applying a callback to every element of a sequence.

use core::ops::ControlFlow;

use crate::sequence::Sequence;

/// Calls `callback(element, index, sequence)` for every element, in order.
///
/// Delegates to the sequence's forEach primitive,
/// [`Sequence::for_each_indexed`]: the length is fixed when iteration starts,
/// so elements appended by the callback are not visited and indices removed
/// by it are skipped. Whatever the callback returns is discarded.
///
/// # Examples
///
/// ```
/// use eachwise_core::iterate;
///
/// let mut seen = Vec::new();
/// iterate(&mut vec!["a", "b"], |element, index, _| seen.push((index, element)));
/// assert_eq!(seen, [(0, "a"), (1, "b")]);
/// ```
pub fn iterate<S, F, R>(sequence: &mut S, mut callback: F)
where
    S: Sequence,
    F: FnMut(S::Item, usize, &mut S) -> R,
{
    tracing::trace!(len = sequence.len(), "iterating sequence");
    sequence.for_each_indexed(|element, index, sequence| {
        callback(element, index, sequence);
    });
}

/// Like [`iterate`], but stops at the first callback error and returns it.
///
/// # Examples
///
/// ```
/// use eachwise_core::{Error, mutate, try_iterate};
///
/// let mut flags = [true, false];
/// try_iterate(&mut flags, mutate)?;
/// assert_eq!(flags, [false, true]);
/// # Ok::<(), Error>(())
/// ```
pub fn try_iterate<S, F, E>(sequence: &mut S, mut callback: F) -> Result<(), E>
where
    S: Sequence,
    F: FnMut(S::Item, usize, &mut S) -> Result<(), E>,
{
    tracing::trace!(len = sequence.len(), "iterating sequence");
    let flow = sequence.try_for_each_indexed(|element, index, sequence| {
        match callback(element, index, sequence) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                tracing::debug!(index, "callback failed, stopping iteration");
                ControlFlow::Break(err)
            }
        }
    });
    match flow {
        ControlFlow::Continue(()) => Ok(()),
        ControlFlow::Break(err) => Err(err),
    }
}

#[cfg(test)]
#[path = "iterate_test.rs"]
mod iterate_test;
