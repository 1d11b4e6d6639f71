//! Bridging lists of optionals into optional lists.
//!
//! [`sequence`] answers "did every element produce a value?". It folds the
//! list from the right, starting from `Present(Empty)`, and joins each
//! element onto the accumulator with [`Optional::combine`]. A single
//! `Absent` anywhere makes the whole result `Absent`.
//!
//! An input that unwraps to no values at all is also reported as `Absent`.
//! Callers that want the lawful behaviour (`Present` of an empty list)
//! should use [`Traversable::sequence_optional`](crate::typeclass::Traversable::sequence_optional).
//!
//! # Examples
//!
//! ```rust
//! use fplist::control::Optional;
//! use fplist::list;
//! use fplist::persistent::ImmutableList;
//! use fplist::sequence::sequence;
//!
//! let all = list![Optional::new(1), Optional::new(2), Optional::new(3)];
//! assert_eq!(sequence(&all), Optional::new(list![1, 2, 3]));
//!
//! let gap = list![Optional::new(1), Optional::Absent, Optional::new(3)];
//! assert_eq!(sequence(&gap), Optional::Absent);
//!
//! let nothing: ImmutableList<Optional<i32>> = ImmutableList::new();
//! assert_eq!(sequence(&nothing), Optional::Absent);
//! ```

use crate::control::Optional;
use crate::persistent::ImmutableList;

/// Turns a list of optionals into an optional list.
///
/// Returns `Present` only if every element is present and the list is not empty.
pub fn sequence<T: Clone>(list: &ImmutableList<Optional<T>>) -> Optional<ImmutableList<T>> {
    list.fold_right(
        Optional::new(ImmutableList::new()),
        |element, accumulator| {
            element
                .clone()
                .combine(accumulator, |head, tail: ImmutableList<T>| tail.prepend(head))
        },
    )
    .filter(|unwrapped| !unwrapped.is_empty())
}

/// Maps every element through `function` and sequences the results.
///
/// Follows the same policy as [`sequence`]: an empty input is `Absent`.
///
/// # Examples
///
/// ```rust
/// use fplist::control::Optional;
/// use fplist::list;
/// use fplist::sequence::traverse;
///
/// let parse = |s: &&str| Optional::from(s.parse::<i32>().ok());
/// assert_eq!(traverse(&list!["4", "2"], parse), Optional::new(list![4, 2]));
/// assert_eq!(traverse(&list!["4", "two"], parse), Optional::Absent);
/// ```
pub fn traverse<T, B, F>(list: &ImmutableList<T>, function: F) -> Optional<ImmutableList<B>>
where
    B: Clone,
    F: FnMut(&T) -> Optional<B>,
{
    sequence(&list.map(function))
}
