//! Mean and variance over lists of floating point numbers.
//!
//! Both helpers return [`Optional::Absent`] for an empty list instead of
//! dividing by zero.

use num_traits::{Float, NumCast};

use crate::control::Optional;
use crate::persistent::ImmutableList;

/// Arithmetic mean of the elements.
///
/// # Examples
///
/// ```rust
/// use fplist::control::Optional;
/// use fplist::list;
/// use fplist::persistent::ImmutableList;
/// use fplist::statistics::mean;
///
/// assert_eq!(mean(&list![1.0, 2.0, 3.0]), Optional::new(2.0));
/// assert_eq!(mean(&ImmutableList::<f64>::new()), Optional::Absent);
/// ```
pub fn mean<T: Float>(list: &ImmutableList<T>) -> Optional<T> {
    if list.is_empty() {
        return Optional::empty();
    }
    Optional::from(<T as NumCast>::from(list.len())).map(|count| list.sum() / count)
}

/// Population variance: the mean of squared deviations from the mean.
///
/// # Examples
///
/// ```rust
/// use fplist::control::Optional;
/// use fplist::list;
/// use fplist::statistics::variance;
///
/// assert_eq!(variance(&list![1.0, 2.0, 3.0, 4.0, 5.0]), Optional::new(2.0));
/// ```
pub fn variance<T: Float>(list: &ImmutableList<T>) -> Optional<T> {
    mean(list).flat_map(|average| {
        mean(&list.map(|element| (*element - average).powi(2)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use rstest::rstest;

    #[rstest]
    #[case(list![4.0], 4.0)]
    #[case(list![1.0, 2.0, 3.0, 4.0], 2.5)]
    #[case(list![-2.0, 2.0], 0.0)]
    fn test_mean_of_non_empty_list(#[case] input: ImmutableList<f64>, #[case] expected: f64) {
        assert_eq!(mean(&input), Optional::new(expected));
    }

    #[rstest]
    fn test_variance_of_one_to_five() {
        assert_eq!(variance(&list![1.0, 2.0, 3.0, 4.0, 5.0]), Optional::new(2.0));
    }

    #[rstest]
    fn test_variance_of_empty_is_absent() {
        assert_eq!(variance(&ImmutableList::<f64>::new()), Optional::Absent);
    }

    #[rstest]
    fn test_variance_of_constant_list_is_zero() {
        assert_eq!(variance(&list![3.5_f32, 3.5, 3.5]), Optional::new(0.0));
    }
}
