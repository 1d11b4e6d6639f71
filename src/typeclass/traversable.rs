//! Traversable type class - mapping with effects and collecting results.
//!
//! The only effect supported here is [`Optional`]: every element is sent
//! through a function that may produce nothing, and the results are
//! gathered only if every element produced something.
//!
//! # Examples
//!
//! ```rust
//! use fplist::control::Optional;
//! use fplist::list;
//! use fplist::typeclass::Traversable;
//!
//! let parse = |s: &str| Optional::from(s.parse::<i32>().ok());
//!
//! assert_eq!(list!["1", "2", "3"].traverse_optional(parse), Optional::new(list![1, 2, 3]));
//! assert_eq!(list!["1", "x", "3"].traverse_optional(parse), Optional::Absent);
//! ```

use super::functor::Functor;
use super::higher::TypeConstructor;
use crate::control::Optional;

/// A type class for structures that can be traversed with an optional effect.
///
/// # Laws
///
/// ## Identity
///
/// ```text
/// fa.traverse_optional(Optional::new) == Optional::new(fa)
/// ```
///
/// ## Composition with map
///
/// ```text
/// fa.traverse_optional(|x| Optional::new(f(x))) == Optional::new(fa.fmap(f))
/// ```
///
/// Because of the identity law, traversing an empty structure yields a
/// present empty structure. The list-level [`sequence`](crate::sequence)
/// function applies a stricter policy on top of this.
pub trait Traversable: Functor {
    /// Applies a function returning [`Optional`] to each element and collects the results.
    ///
    /// The result is absent as soon as any application is absent. Every
    /// element is still visited; the visiting order is up to the
    /// implementation ([`ImmutableList`](crate::persistent::ImmutableList)
    /// visits from last to first).
    fn traverse_optional<B, F>(self, function: F) -> Optional<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Optional<B>;

    /// Turns a structure of optionals inside out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::control::Optional;
    /// use fplist::list;
    /// use fplist::typeclass::Traversable;
    ///
    /// let all = list![Optional::new(1), Optional::new(2)];
    /// assert_eq!(all.sequence_optional(), Optional::new(list![1, 2]));
    ///
    /// let gap = list![Optional::new(1), Optional::Absent];
    /// assert_eq!(gap.sequence_optional(), Optional::Absent);
    /// ```
    fn sequence_optional(self) -> Optional<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Optional<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_optional(Into::into)
    }
}
