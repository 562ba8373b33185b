//! Configuration for element mutation.

/// What to do when asked to write a slot that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfRange {
    /// Fail with [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange).
    #[default]
    Error,
    /// Leave the sequence untouched and succeed.
    Ignore,
}

/// Options for [`mutate_with`](crate::mutate_with) and [`mutator`](crate::mutator).
///
/// # Example
///
/// ```
/// use eachwise_core::{MutateOptions, OutOfRange, mutate_with};
///
/// let options = MutateOptions::default().with_out_of_range(OutOfRange::Ignore);
/// let mut numbers = vec![1, 2, 3];
/// mutate_with(&options, 0, 5, &mut numbers).unwrap();
/// assert_eq!(numbers, [1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutateOptions {
    pub out_of_range: OutOfRange,
}

impl MutateOptions {
    pub const fn with_out_of_range(mut self, out_of_range: OutOfRange) -> Self {
        self.out_of_range = out_of_range;
        self
    }
}
