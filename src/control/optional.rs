//! Optional type - a value that may be present or absent.
//!
//! This module provides [`Optional<T>`], which is either `Present(T)` or
//! `Absent`. Absence is an ordinary value: no operation on `Optional`
//! fails, callers branch with [`Optional::get_or_else`],
//! [`Optional::map`] or [`Optional::flat_map`] instead.
//!
//! # Examples
//!
//! ```rust
//! use fplist::control::Optional;
//!
//! let some = Optional::new(3);
//! let none: Optional<i32> = Optional::empty();
//!
//! assert_eq!(some.map(|x| x + 1), Optional::new(4));
//! assert_eq!(none.map(|x| x + 1), Optional::Absent);
//!
//! assert_eq!(some.get_or_else(|| 0), 3);
//! assert_eq!(none.get_or_else(|| 0), 0);
//!
//! // Combining two optionals only succeeds when both are present
//! let product = Optional::new(1.8).combine(Optional::new(10_i32), |a, b| a * f64::from(b));
//! assert_eq!(product.map(|x| format!("{x:?}")), Optional::new("18.0".to_string()));
//! ```

use std::fmt;

use crate::persistent::ImmutableList;
use crate::typeclass::{Functor, TypeConstructor};

/// A value that is either present or absent.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use fplist::control::Optional;
///
/// let value = Optional::new(3);
/// assert_eq!(value.filter(|x| *x == 3), Optional::Present(3));
/// assert_eq!(value.filter(|x| *x != 3), Optional::Absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// A value.
    Present(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` as `Present(value)`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns `Absent`.
    #[inline]
    pub const fn empty() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Present`.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::control::Optional;
    ///
    /// assert_eq!(Optional::new(3).map(|x| x + 1), Optional::new(4));
    /// assert_eq!(Optional::<i32>::empty().map(|x| x + 1), Optional::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns the contained value, or computes one with `default`.
    ///
    /// `default` is only invoked when the value is absent.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Chains a computation that may itself produce an absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::control::Optional;
    ///
    /// let halve = |x: i32| if x % 2 == 0 { Optional::new(x / 2) } else { Optional::empty() };
    /// assert_eq!(Optional::new(8).flat_map(halve), Optional::new(4));
    /// assert_eq!(Optional::new(3).flat_map(halve), Optional::Absent);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.map(function).get_or_else(Optional::empty)
    }

    /// Returns `self` if present, otherwise the optional produced by `alternative`.
    ///
    /// Unlike [`Optional::get_or_else`], the result stays wrapped.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.map(Self::new).get_or_else(alternative)
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.flat_map(|value| {
            if predicate(&value) {
                Self::new(value)
            } else {
                Self::empty()
            }
        })
    }

    /// Combines two optionals with a binary function.
    ///
    /// The result is present only when both inputs are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::control::Optional;
    ///
    /// let sum = Optional::new(1).combine(Optional::new(2), |a, b| a + b);
    /// assert_eq!(sum, Optional::new(3));
    ///
    /// let missing = Optional::new(1).combine(Optional::<i32>::empty(), |a, b| a + b);
    /// assert_eq!(missing, Optional::Absent);
    /// ```
    #[inline]
    pub fn combine<U, C, F>(self, other: Optional<U>, function: F) -> Optional<C>
    where
        F: FnOnce(T, U) -> C,
    {
        self.flat_map(|left| other.map(|right| function(left, right)))
    }

    /// Converts into a list holding zero or one element.
    #[must_use]
    pub fn to_list(self) -> ImmutableList<T> {
        match self {
            Self::Present(value) => ImmutableList::singleton(value),
            Self::Absent => ImmutableList::new(),
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

impl<T> Functor for Optional<T> {
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}
