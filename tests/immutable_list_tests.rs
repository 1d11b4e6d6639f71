//! Unit tests for ImmutableList through the public API.

use fplist::list;
use fplist::persistent::{EmptyListError, ImmutableList};
use rstest::rstest;

// =============================================================================
// Construction and Access
// =============================================================================

#[rstest]
fn test_empty_macro_builds_empty_list() {
    let list: ImmutableList<i32> = list![];
    assert!(list.is_empty());
    assert_eq!(list, ImmutableList::Empty);
}

#[rstest]
fn test_head_and_tail_of_empty_list_fail() {
    let list: ImmutableList<i32> = ImmutableList::new();
    assert_eq!(list.head(), Err(EmptyListError::Empty { operation: "head" }));
    assert_eq!(list.tail(), Err(EmptyListError::Empty { operation: "tail" }));
    assert_eq!(list.init(), Err(EmptyListError::Empty { operation: "init" }));
    assert_eq!(
        list.set_head(1),
        Err(EmptyListError::Empty {
            operation: "set_head"
        })
    );
}

#[rstest]
fn test_set_head_replaces_only_first_element() {
    let list = list![1, 2, 3];
    assert_eq!(list.set_head(9), Ok(list![9, 2, 3]));
    assert_eq!(list, list![1, 2, 3]);
}

#[rstest]
fn test_uncons_splits_list() {
    let list = list!["a", "b"];
    let (head, tail) = list.uncons().unwrap();
    assert_eq!(*head, "a");
    assert_eq!(tail, list!["b"]);
    assert!(ImmutableList::<i32>::new().uncons().is_none());
}

// =============================================================================
// Drop
// =============================================================================

#[rstest]
#[case(0, Ok(list![1, 2, 3]))]
#[case(2, Ok(list![3]))]
#[case(3, Ok(list![]))]
#[case(5, Err(EmptyListError::NotEnoughElements { requested: 5, available: 3 }))]
fn test_drop(#[case] count: usize, #[case] expected: Result<ImmutableList<i32>, EmptyListError>) {
    assert_eq!(list![1, 2, 3].drop(count), expected);
}

#[rstest]
fn test_drop_zero_from_empty_is_ok() {
    let empty: ImmutableList<i32> = ImmutableList::new();
    assert_eq!(empty.drop(0), Ok(ImmutableList::new()));
}

#[rstest]
fn test_drop_while_stops_at_first_failure() {
    assert_eq!(list![1, 2, 5, 1].drop_while(|x| *x < 3), list![5, 1]);
    assert!(list![1, 2].drop_while(|_| true).is_empty());
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
#[case(list![1, 2, 3], list![4, 5, 6], list![5, 7, 9])]
#[case(list![1, 2], list![1, 2, 3], list![2, 4])]
#[case(list![], list![1], list![])]
fn test_zip_with_add(
    #[case] left: ImmutableList<i32>,
    #[case] right: ImmutableList<i32>,
    #[case] expected: ImmutableList<i32>,
) {
    assert_eq!(left.zip_with(&right, |a, b| a + b), expected);
}

#[rstest]
fn test_concat_flattens_in_order() {
    let nested = list![list![1, 2], list![], list![3]];
    assert_eq!(nested.concat(), list![1, 2, 3]);
}

#[rstest]
fn test_flat_map_expands_each_element() {
    assert_eq!(list![1, 2].flat_map(|x| list![*x, *x * 10]), list![1, 10, 2, 20]);
}

#[rstest]
fn test_snoc_appends_single_element() {
    assert_eq!(list![1, 2].snoc(3), list![1, 2, 3]);
    assert_eq!(ImmutableList::new().snoc("only"), list!["only"]);
}

#[rstest]
#[case(list![], 0, 1)]
#[case(list![4], 4, 4)]
#[case(list![1, 2, 3, 4], 10, 24)]
fn test_sum_and_product(
    #[case] list: ImmutableList<i64>,
    #[case] sum: i64,
    #[case] product: i64,
) {
    assert_eq!(list.sum(), sum);
    assert_eq!(list.product(), product);
}

#[rstest]
fn test_fold_left_and_fold_right_order() {
    let list = list!["a", "b", "c"];
    let left = list.fold_left(String::new(), |accumulator, x| accumulator + *x);
    let right = list.fold_right(String::new(), |x, accumulator| accumulator + *x);
    assert_eq!(left, "abc");
    assert_eq!(right, "cba");
}

// =============================================================================
// Structural Sharing
// =============================================================================

#[rstest]
fn test_versions_share_tail() {
    let base = list![2, 3];
    let first = base.cons(1);
    let second = base.cons(0);
    assert_eq!(first.tail(), Ok(base.clone()));
    assert_eq!(second.tail(), Ok(base));
    assert_eq!(first, list![1, 2, 3]);
    assert_eq!(second, list![0, 2, 3]);
}

// =============================================================================
// Iteration and Formatting
// =============================================================================

#[rstest]
fn test_into_iterator_by_reference_and_value() {
    let list = list![1, 2, 3];
    let borrowed: Vec<&i32> = (&list).into_iter().collect();
    assert_eq!(borrowed, vec![&1, &2, &3]);
    let owned: Vec<i32> = list.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3]);
}

#[rstest]
fn test_debug_and_display() {
    let list = list![1, 2, 3];
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    assert_eq!(format!("{list}"), "[1, 2, 3]");
    assert_eq!(format!("{}", ImmutableList::<i32>::new()), "[]");
}

// =============================================================================
// Long Lists
// =============================================================================

#[rstest]
fn test_long_list_operations_do_not_overflow_stack() {
    let list: ImmutableList<u64> = (0..500_000).collect();
    assert_eq!(list.len(), 500_000);
    assert_eq!(list.fold_right(0_u64, |x, total| total + x), 124_999_750_000);
    assert_eq!(list.reverse().head(), Ok(&499_999));
    assert_eq!(list.init().map(|init| init.len()), Ok(499_999));
    assert_eq!(list.drop(499_999).map(|rest| rest.len()), Ok(1));
    drop(list);
}
