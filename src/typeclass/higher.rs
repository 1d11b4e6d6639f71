//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `ImmutableList<_>`
//! directly. [`TypeConstructor`] exposes the applied type (`Inner`) and the
//! same constructor applied to another type (`WithType<B>`), which is what
//! [`Functor`](super::Functor) and [`Traversable`](super::Traversable) need.
//!
//! # Example
//!
//! ```rust
//! use fplist::control::Optional;
//! use fplist::typeclass::TypeConstructor;
//!
//! fn rewrap<T: TypeConstructor>(_: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present = Optional::new(42);
//! let absent: Optional<String> = rewrap(&present);
//! assert_eq!(absent, Optional::Absent);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `ImmutableList<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result usable
    /// for further transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}
