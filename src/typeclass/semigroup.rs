//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fplist::list;
//! use fplist::typeclass::Semigroup;
//!
//! // List concatenation
//! assert_eq!(list![1, 2].combine(list![3, 4]), list![1, 2, 3, 4]);
//! ```

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use fplist::list;
/// use fplist::typeclass::Semigroup;
///
/// let left = list!["foo"];
/// let right = list!["bar"];
/// assert_eq!(left.combine(right), list!["foo", "bar"]);
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns the identity for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::list;
    /// use fplist::persistent::ImmutableList;
    /// use fplist::typeclass::Semigroup;
    ///
    /// let lists = vec![list![1], list![2, 3]];
    /// assert_eq!(ImmutableList::reduce_all(lists), Some(list![1, 2, 3]));
    ///
    /// let none: Vec<ImmutableList<i32>> = vec![];
    /// assert_eq!(ImmutableList::reduce_all(none), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}
