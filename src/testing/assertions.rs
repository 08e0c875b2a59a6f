//! Assertion functions for testing sequence outputs.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::grouping::Grouping;
use crate::sequence::{Pull, Sequence};

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use ironseq::testing::assert_collections_equal;
///
/// let actual = vec![1, 2, 3];
/// let expected = vec![1, 2, 3];
/// assert_collections_equal(&actual, &expected);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections contain the same elements, ignoring order.
///
/// # Panics
///
/// Panics if the collections differ in content (ignoring order).
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    let actual_set: HashSet<_> = actual.iter().collect();
    let expected_set: HashSet<_> = expected.iter().collect();
    if actual_set != expected_set {
        let missing: Vec<_> = expected_set.difference(&actual_set).collect();
        let extra: Vec<_> = actual_set.difference(&expected_set).collect();
        panic!(
            "Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

/// Drain `seq` and compare it with `expected`, element by element.
///
/// # Panics
///
/// Panics on the first difference, reporting the lineage of the chain.
///
/// # Example
///
/// ```
/// use ironseq::*;
/// use ironseq::testing::assert_sequence_eq;
///
/// assert_sequence_eq(from_iter(1..=3).map(|x| x * x), &[1, 4, 9]);
/// ```
pub fn assert_sequence_eq<T: Debug + PartialEq>(seq: Sequence<'_, T>, expected: &[T]) {
    let lineage = seq.explain();
    let actual = seq.to_vec();
    assert!(
        actual == expected,
        "Sequence `{lineage}` mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert that `seq` reports exhaustion now, and keeps doing so.
///
/// # Panics
///
/// Panics if any of `repeats` further pulls yields an element.
pub fn assert_exhausted<T: Debug>(seq: &mut Sequence<'_, T>, repeats: usize) {
    for attempt in 0..=repeats {
        let step = seq.pull();
        assert!(
            step.is_exhausted(),
            "Sequence `{}` emitted {step:?} on pull {attempt} after it should be exhausted",
            seq.explain()
        );
    }
    assert!(seq.is_exhausted());
}

/// Assert that two groupings hold the same keys (in the same first-encounter
/// order) with equal values.
///
/// # Panics
///
/// Panics if keys, key order, or any value differ.
pub fn assert_grouping_eq<K, V>(actual: &Grouping<K, V>, expected: &[(K, V)])
where
    K: Debug + PartialEq,
    V: Debug + PartialEq,
{
    let actual: Vec<(&K, &V)> = actual.iter().collect();
    let expected: Vec<(&K, &V)> = expected.iter().map(|(k, v)| (k, v)).collect();
    assert_collections_equal(&actual, &expected);
}

/// Assert that every element satisfies `predicate`.
///
/// # Panics
///
/// Panics naming the first failing element.
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    if let Some((i, item)) = collection.iter().enumerate().find(|(_, x)| !predicate(x)) {
        panic!("Element at index {i} does not satisfy predicate: {item:?}\n  Full collection: {collection:?}");
    }
}

/// Assert that `collection` contains `element`.
///
/// # Panics
///
/// Panics if the element is absent.
pub fn assert_contains<T: Debug + PartialEq>(collection: &[T], element: &T) {
    assert!(
        collection.contains(element),
        "Collection does not contain expected element:\n  Looking for: {element:?}\n  Collection: {collection:?}"
    );
}
