//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use fplist::list;
/// use fplist::persistent::ImmutableList;
/// use fplist::typeclass::{Monoid, Semigroup};
///
/// let list = list![1, 2];
/// assert_eq!(ImmutableList::empty().combine(list.clone()), list);
/// assert_eq!(list.clone().combine(ImmutableList::empty()), list);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use crate::persistent::ImmutableList;
    use rstest::rstest;

    #[rstest]
    fn test_list_identity_laws() {
        let list = list![1, 2, 3];
        assert_eq!(ImmutableList::empty().combine(list.clone()), list);
        assert_eq!(list.clone().combine(ImmutableList::empty()), list);
    }

    #[rstest]
    fn test_combine_all_of_nothing_is_empty() {
        let lists: Vec<ImmutableList<i32>> = Vec::new();
        assert!(ImmutableList::combine_all(lists).is_empty());
    }
}
