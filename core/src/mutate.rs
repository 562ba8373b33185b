//! In-place replacement of a single sequence slot.

use crate::api::{Error, MutateOptions, OutOfRange};
use crate::sequence::Sequence;

/// A value-changing transformation.
///
/// `altered` must never return a value equal to `self`. Types with no
/// sensible replacement for some values return
/// [`Error::InvalidArgument`] for those values instead.
///
/// | type | replacement |
/// |------|-------------|
/// | integers | wrapping increment |
/// | `bool` | negation |
/// | `char` | next scalar value (skips surrogates, wraps `char::MAX` to `'\0'`) |
pub trait Alter: Sized {
    fn altered(&self) -> Result<Self, Error>;
}

macro_rules! alter_by_increment {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Alter for $ty {
                #[inline]
                fn altered(&self) -> Result<Self, Error> {
                    Ok(self.wrapping_add(1))
                }
            }
        )*
    };
}

alter_by_increment!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Alter for bool {
    #[inline]
    fn altered(&self) -> Result<Self, Error> {
        Ok(!*self)
    }
}

impl Alter for char {
    fn altered(&self) -> Result<Self, Error> {
        let next = match *self {
            '\u{D7FF}' => 0xE000,
            char::MAX => 0,
            c => c as u32 + 1,
        };
        char::from_u32(next)
            .ok_or_else(|| Error::invalid_argument("no scalar value follows this character"))
    }
}

/// Replaces the value at `index` with its [`Alter::altered`] form.
///
/// `element` is accepted so that `mutate` can be passed straight to
/// [`iterate`](crate::iterate); the replacement is always computed from the
/// value currently stored in the sequence. The length never changes.
///
/// Fails with [`Error::IndexOutOfRange`] if `index >= sequence.len()`.
/// Use [`mutate_with`] to ignore such indices instead.
///
/// # Examples
///
/// ```
/// use eachwise_core::{Error, mutate};
///
/// let mut numbers = vec![1, 2, 3];
/// mutate(0, 1, &mut numbers).unwrap();
/// assert_eq!(numbers, [1, 3, 3]);
///
/// let err = mutate(0, 5, &mut numbers).unwrap_err();
/// assert_eq!(err, Error::IndexOutOfRange { index: 5, len: 3 });
/// ```
pub fn mutate<S>(element: S::Item, index: usize, sequence: &mut S) -> Result<(), Error>
where
    S: Sequence,
    S::Item: Alter,
{
    mutate_with(&MutateOptions::default(), element, index, sequence)
}

/// [`mutate`] with explicit options.
pub fn mutate_with<S>(
    options: &MutateOptions,
    _element: S::Item,
    index: usize,
    sequence: &mut S,
) -> Result<(), Error>
where
    S: Sequence,
    S::Item: Alter,
{
    let len = sequence.len();
    let written = sequence.update(index, |slot| -> Result<(), Error> {
        let value = slot.altered()?;
        *slot = value;
        Ok(())
    });

    match (written, options.out_of_range) {
        (Some(result), _) => result,
        (None, OutOfRange::Error) => Err(Error::IndexOutOfRange { index, len }),
        (None, OutOfRange::Ignore) => {
            tracing::debug!(index, len, "ignoring out-of-range index");
            Ok(())
        }
    }
}

/// Returns a callback that runs [`mutate_with`] with `options`.
///
/// ```
/// use eachwise_core::{MutateOptions, iterate, mutator};
///
/// let mut letters = ['a', 'b'];
/// iterate(&mut letters, mutator::<[char; 2]>(MutateOptions::default()));
/// assert_eq!(letters, ['b', 'c']);
/// ```
pub fn mutator<S>(options: MutateOptions) -> impl FnMut(S::Item, usize, &mut S) -> Result<(), Error>
where
    S: Sequence,
    S::Item: Alter,
{
    move |element, index, sequence| mutate_with(&options, element, index, sequence)
}

#[cfg(test)]
#[path = "mutate_test.rs"]
mod mutate_test;
