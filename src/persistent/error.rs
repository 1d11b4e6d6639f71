//! Error type for list operations that require elements.

use thiserror::Error;

/// Raised when an operation needs more elements than the list holds.
///
/// `head`, `tail`, `init` and `set_head` report [`EmptyListError::Empty`]
/// when applied to an empty list; `drop` reports
/// [`EmptyListError::NotEnoughElements`] when asked to remove more
/// elements than exist.
///
/// # Examples
///
/// ```rust
/// use fplist::persistent::{EmptyListError, ImmutableList};
///
/// let empty: ImmutableList<i32> = ImmutableList::new();
/// assert_eq!(empty.head(), Err(EmptyListError::Empty { operation: "head" }));
/// assert_eq!(
///     format!("{}", empty.head().unwrap_err()),
///     "head: the list has no elements"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EmptyListError {
    /// The operation was applied to an empty list.
    #[error("{operation}: the list has no elements")]
    Empty {
        /// Name of the operation that failed.
        operation: &'static str,
    },
    /// `drop` was asked to remove more elements than the list holds.
    #[error("drop: cannot remove {requested} elements from a list of {available}")]
    NotEnoughElements {
        /// Number of elements the caller asked to remove.
        requested: usize,
        /// Number of elements the list actually holds.
        available: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(EmptyListError::Empty { operation: "tail" }, "tail: the list has no elements")]
    #[case(EmptyListError::Empty { operation: "init" }, "init: the list has no elements")]
    #[case(
        EmptyListError::NotEnoughElements { requested: 4, available: 3 },
        "drop: cannot remove 4 elements from a list of 3"
    )]
    fn test_display(#[case] error: EmptyListError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&EmptyListError::Empty { operation: "head" });
    }
}
