//! Type class traits shared by the list and optional types.
//!
//! - [`TypeConstructor`]: Generic Associated Type emulation of higher-kinded types
//! - [`Functor`]: Mapping over container values
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Traversable`]: Traversing structures with an [`Optional`](crate::control::Optional) effect
//!
//! # Examples
//!
//! ```rust
//! use fplist::control::Optional;
//! use fplist::list;
//! use fplist::persistent::ImmutableList;
//! use fplist::typeclass::{Functor, Monoid, Semigroup, Traversable};
//!
//! let joined = ImmutableList::combine_all(vec![list![1], list![2, 3]]);
//! assert_eq!(joined, list![1, 2, 3]);
//!
//! let doubled = joined.fmap(|x| x * 2);
//! assert_eq!(doubled.traverse_optional(Optional::new), Optional::new(list![2, 4, 6]));
//! ```

mod functor;
mod higher;
mod monoid;
mod semigroup;
mod traversable;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
