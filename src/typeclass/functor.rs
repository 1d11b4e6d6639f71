//! Functor type class - mapping over the values inside a structure.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```

use super::higher::TypeConstructor;

/// A type class for structures whose elements can be transformed.
///
/// The function is `FnMut` because a list applies it once per element; an
/// [`Optional`](crate::control::Optional) calls it at most once.
///
/// # Examples
///
/// ```rust
/// use fplist::control::Optional;
/// use fplist::list;
/// use fplist::typeclass::Functor;
///
/// assert_eq!(Optional::new(5).fmap(|n| n.to_string()), Optional::new("5".to_string()));
/// assert_eq!(list![1, 2, 3].fmap(|n| n * 2), list![2, 4, 6]);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to every value inside the structure.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces every value inside the structure with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fplist::control::Optional;
    /// use fplist::typeclass::Functor;
    ///
    /// assert_eq!(Optional::new(5).replace("replaced"), Optional::new("replaced"));
    /// assert_eq!(Optional::<i32>::Absent.replace("replaced"), Optional::Absent);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(|_| value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Optional;
    use crate::list;
    use rstest::rstest;

    #[rstest]
    fn test_optional_identity_law() {
        let value = Optional::new(7);
        assert_eq!(value.fmap(|x| x), value);
    }

    #[rstest]
    fn test_list_composition_law() {
        let list = list![1, 2, 3];
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(
            list.clone().fmap(add_one).fmap(double),
            list.fmap(|x| double(add_one(x)))
        );
    }

    #[rstest]
    fn test_list_replace_keeps_shape() {
        assert_eq!(list![1, 2, 3].replace('x'), list!['x', 'x', 'x']);
    }
}
