//! Integration tests for mean and variance.

use fplist::control::Optional;
use fplist::list;
use fplist::persistent::ImmutableList;
use fplist::statistics::{mean, variance};
use rstest::rstest;

#[rstest]
fn test_variance_of_one_to_five() {
    let list = list![1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(variance(&list), Optional::new(2.0));
}

#[rstest]
fn test_variance_of_empty_list() {
    let list: ImmutableList<f64> = list![];
    assert_eq!(variance(&list), Optional::Absent);
}

#[rstest]
fn test_mean_of_empty_list() {
    let list: ImmutableList<f32> = ImmutableList::new();
    assert_eq!(mean(&list), Optional::Absent);
}

#[rstest]
#[case(list![2.0, 4.0, 6.0], 4.0)]
#[case(list![0.5], 0.5)]
fn test_mean(#[case] list: ImmutableList<f64>, #[case] expected: f64) {
    assert_eq!(mean(&list), Optional::new(expected));
}

#[rstest]
fn test_variance_composes_with_sequence() {
    let readings = list![Optional::new(2.0), Optional::new(4.0)];
    let spread = fplist::sequence::sequence(&readings).flat_map(|values| variance(&values));
    assert_eq!(spread, Optional::new(1.0));
}
