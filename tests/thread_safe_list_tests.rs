//! Integration tests for sharing lists across threads.
//!
//! Only meaningful with the `arc` feature, which backs list nodes with `Arc`.

#![cfg(feature = "arc")]

use fplist::control::Optional;
use fplist::list;
use fplist::persistent::ImmutableList;
use fplist::sequence::sequence;
use rstest::rstest;
use std::thread;

#[rstest]
fn test_list_cross_thread_structural_sharing() {
    let original = list![1, 2, 3];

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let shared = original.clone();
            thread::spawn(move || {
                let extended = shared.cons(index * 10);
                assert_eq!(extended.head(), Ok(&(index * 10)));
                assert_eq!(extended.len(), 4);
                assert_eq!(shared.len(), 3);
                extended
            })
        })
        .collect();

    let results: Vec<ImmutableList<i32>> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    for (index, result) in results.iter().enumerate() {
        assert_eq!(result.tail(), Ok(original.clone()));
        assert_eq!(result.head(), Ok(&(i32::try_from(index).unwrap() * 10)));
    }
    assert_eq!(original, list![1, 2, 3]);
}

#[rstest]
fn test_sequence_result_sent_between_threads() {
    let readings = list![Optional::new(1), Optional::new(2)];
    let handle = thread::spawn(move || sequence(&readings));
    assert_eq!(handle.join().unwrap(), Optional::new(list![1, 2]));
}
