//! Persistent (immutable) data structures.
//!
//! - [`ImmutableList`]: persistent singly-linked list with structural sharing
//! - [`EmptyListError`]: raised by operations that need more elements than
//!   a list holds
//!
//! # Examples
//!
//! ```rust
//! use fplist::list;
//! use fplist::persistent::ImmutableList;
//!
//! let list: ImmutableList<i32> = list![1, 2, 3];
//! let tail = list.tail().unwrap();
//!
//! // The tail is shared, not copied
//! assert_eq!(tail, list![2, 3]);
//! assert_eq!(list.len(), 3);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer used for list nodes.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted smart pointer used for list nodes.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod list;

pub use error::EmptyListError;
pub use list::ImmutableList;
pub use list::ImmutableListIntoIterator;
pub use list::ImmutableListIterator;
pub use list::Link;

// =============================================================================
// Tests
// =============================================================================
