//! # fplist
//!
//! A persistent singly-linked list and an optional value type, with the
//! functional combinators that connect them.
//!
//! ## Overview
//!
//! - **Persistent list**: [`ImmutableList`](persistent::ImmutableList), an
//!   immutable cons list whose versions share their tails
//! - **Optional values**: [`Optional`](control::Optional), presence or absence
//!   as an ordinary value
//! - **Sequence bridge**: [`sequence`](sequence::sequence) turns a list of
//!   optionals into an optional list
//! - **Statistics**: [`mean`](statistics::mean) and
//!   [`variance`](statistics::variance) that return `Absent` on empty input
//! - **Type classes**: Functor, Semigroup, Monoid, Traversable
//! - **Word frequency**: counters for query words (feature `frequency`)
//!
//! ## Feature Flags
//!
//! - `frequency` (default): Word frequency store, logs through `tracing`
//! - `arc`: Share list nodes through `Arc` so lists are `Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` for the list and optional types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fplist::prelude::*;
//!
//! let readings = list![Optional::new(1.0), Optional::new(2.0), Optional::new(3.0)];
//! let values = sequence(&readings).get_or_else(ImmutableList::new);
//! assert_eq!(mean(&values), Optional::new(2.0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use fplist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::list;
    pub use crate::persistent::*;
    pub use crate::sequence::{sequence, traverse};
    pub use crate::statistics::{mean, variance};
    pub use crate::typeclass::*;

    #[cfg(feature = "frequency")]
    pub use crate::frequency::*;
}

pub mod control;
pub mod persistent;
pub mod sequence;
pub mod statistics;
pub mod typeclass;

#[cfg(feature = "frequency")]
pub mod frequency;
