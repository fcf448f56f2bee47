//! Unit tests for HashedSet.
//!
//! These tests cover every operation of the set contract and its
//! edge cases.

use myset::{HashedSet, set};
use rstest::rstest;

fn sorted(set: &HashedSet<i32>) -> Vec<i32> {
    let mut values = set.values();
    values.sort_unstable();
    values
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: HashedSet<i32> = HashedSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[rstest]
fn test_default_creates_empty_set() {
    let set: HashedSet<i32> = HashedSet::default();
    assert!(set.is_empty());
}

#[rstest]
#[case::no_values(vec![], 0)]
#[case::distinct(vec![1, 2, 3], 3)]
#[case::all_duplicates(vec![7, 7, 7, 7], 1)]
#[case::some_duplicates(vec![1, 2, 1, 3, 2], 3)]
fn test_from_values_collapses_duplicates(#[case] values: Vec<i32>, #[case] expected: usize) {
    let set = HashedSet::from_values(values);
    assert_eq!(set.len(), expected);
}

#[rstest]
fn test_set_macro_matches_from_values() {
    let empty: HashedSet<i32> = set![];
    assert!(empty.is_empty());

    assert_eq!(set![1, 2, 2, 3,], HashedSet::from_values([1, 2, 3]));
}

#[rstest]
fn test_from_array_and_vec() {
    let from_array = HashedSet::from([1, 2, 3]);
    let from_vec = HashedSet::from(vec![3, 2, 1, 1]);
    assert_eq!(from_array, from_vec);
}

// =============================================================================
// Add / Has / Remove
// =============================================================================

#[rstest]
fn test_add_then_has() {
    let mut set = HashedSet::new();
    set.add("apple");

    assert!(set.has(&"apple"));
    assert!(!set.has(&"pear"));
}

#[rstest]
fn test_add_is_idempotent() {
    let mut set = HashedSet::new();
    set.add(42);
    set.add(42);

    assert_eq!(set.len(), 1);
}

#[rstest]
fn test_remove_existing_element() {
    let mut set = set![1, 2, 3];
    set.remove(&2);

    assert_eq!(sorted(&set), vec![1, 3]);
}

#[rstest]
fn test_remove_absent_element_is_noop() {
    let mut set = set![1, 2];
    set.remove(&3);

    assert_eq!(sorted(&set), vec![1, 2]);
}

#[rstest]
fn test_remove_from_empty_set_is_noop() {
    let mut set: HashedSet<i32> = HashedSet::new();
    set.remove(&1);
    assert!(set.is_empty());
}

#[rstest]
fn test_has_with_borrowed_form() {
    let set = HashedSet::from_values(["hello".to_string(), "world".to_string()]);

    assert!(set.has("hello"));
    assert!(set.has("world"));
    assert!(!set.has("other"));
}

#[rstest]
fn test_len_tracks_adds_and_removes() {
    let mut set = HashedSet::new();
    for value in 0..10 {
        set.add(value);
    }
    for value in 0..4 {
        set.remove(&value);
    }
    set.remove(&100);

    assert_eq!(set.len(), 6);
}

// =============================================================================
// Clear
// =============================================================================

#[rstest]
#[case::empty(vec![])]
#[case::single(vec![1])]
#[case::many((0..1000).collect())]
fn test_clear_empties_set(#[case] values: Vec<i32>) {
    let mut set = HashedSet::from_values(values);
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.capacity(), 0);
}

// =============================================================================
// Values / Iter
// =============================================================================

#[rstest]
fn test_values_returns_every_element_once() {
    let set = set![3, 1, 2];
    assert_eq!(sorted(&set), vec![1, 2, 3]);
}

#[rstest]
fn test_values_snapshot_is_unaffected_by_mutation() {
    let mut set = set![1, 2, 3];
    let snapshot = set.values();

    set.add(4);
    set.remove(&1);

    let mut snapshot = snapshot;
    snapshot.sort_unstable();
    assert_eq!(snapshot, vec![1, 2, 3]);
}

#[rstest]
fn test_iter_visits_every_element() {
    let set = set![1, 2, 3, 4];
    let sum: i32 = set.iter().sum();
    assert_eq!(sum, 10);
    assert_eq!(set.iter().count(), 4);
}

#[rstest]
fn test_iter_early_stop_leaves_set_intact() {
    let set = HashedSet::from_values(0..100);

    let taken: Vec<&i32> = set.iter().take(3).collect();
    assert_eq!(taken.len(), 3);

    // A fresh pass still sees everything
    assert_eq!(set.iter().count(), 100);
}

#[rstest]
fn test_iter_on_empty_set() {
    let set: HashedSet<i32> = HashedSet::new();
    assert_eq!(set.iter().next(), None);
}

#[rstest]
fn test_for_loop_over_reference() {
    let set = set![10, 20];
    let mut total = 0;
    for element in &set {
        total += element;
    }
    assert_eq!(total, 30);
}

// =============================================================================
// Deep Copy
// =============================================================================

#[rstest]
fn test_deep_copy_has_same_elements() {
    let set = set![1, 2, 3];
    let copy = set.deep_copy();

    assert_eq!(copy, set);
    assert_eq!(sorted(&copy), sorted(&set));
}

#[rstest]
fn test_deep_copy_is_independent() {
    let mut original = set![1, 2, 3];
    let mut copy = original.deep_copy();

    copy.add(4);
    copy.remove(&1);
    original.add(5);

    assert_eq!(sorted(&original), vec![1, 2, 3, 5]);
    assert_eq!(sorted(&copy), vec![2, 3, 4]);
}

// =============================================================================
// Set Algebra Scenarios
// =============================================================================

#[rstest]
fn test_overlapping_sets_scenario() {
    let s = set![1, 2, 3];
    let t = set![2, 3, 4];

    assert_eq!(sorted(&s.union(&t)), vec![1, 2, 3, 4]);
    assert_eq!(sorted(&s.intersection(&t)), vec![2, 3]);
    assert_eq!(sorted(&s.difference(&t)), vec![1, 4]);
    assert!(!s.is_subset(&t));
    assert!(!s.is_superset(&t));
}

#[rstest]
fn test_empty_and_non_empty_scenario() {
    let s: HashedSet<i32> = set![];
    let t = set![1, 2];

    assert!(s.is_subset(&t));
    assert!(!s.is_superset(&t));
    assert_eq!(sorted(&s.union(&t)), vec![1, 2]);
    assert!(s.intersection(&t).is_empty());
}

#[rstest]
fn test_empty_set_is_subset_and_superset_of_empty() {
    let empty: HashedSet<i32> = HashedSet::new();
    let other: HashedSet<i32> = HashedSet::new();

    assert!(empty.is_subset(&other));
    assert!(empty.is_superset(&other));
}

#[rstest]
#[case::identical(vec![1, 2], vec![1, 2], true, true)]
#[case::proper_subset(vec![1], vec![1, 2], true, false)]
#[case::proper_superset(vec![1, 2, 3], vec![2, 3], false, true)]
#[case::disjoint(vec![1], vec![2], false, false)]
fn test_subset_superset_table(
    #[case] left: Vec<i32>,
    #[case] right: Vec<i32>,
    #[case] subset: bool,
    #[case] superset: bool,
) {
    let left = HashedSet::from_values(left);
    let right = HashedSet::from_values(right);

    assert_eq!(left.is_subset(&right), subset);
    assert_eq!(left.is_superset(&right), superset);
}

#[rstest]
fn test_difference_is_symmetric_not_subtraction() {
    let s = set![1, 2, 3];
    let t = set![2, 3, 4];

    assert_eq!(s.difference(&t), t.difference(&s));
    assert!(s.difference(&t).has(&4));
    assert!(!s.relative_complement(&t).has(&4));
}

#[rstest]
fn test_difference_of_identical_sets_is_empty() {
    let s = set![1, 2, 3];
    assert!(s.difference(&s.deep_copy()).is_empty());
}

#[rstest]
fn test_algebra_leaves_operands_unchanged() {
    let s = set![1, 2, 3];
    let t = set![2, 3, 4];

    let _ = s.union(&t);
    let _ = s.intersection(&t);
    let _ = s.difference(&t);

    assert_eq!(sorted(&s), vec![1, 2, 3]);
    assert_eq!(sorted(&t), vec![2, 3, 4]);
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn test_equality_ignores_insertion_order() {
    let mut left = HashedSet::new();
    left.add(1);
    left.add(2);
    left.add(3);

    let mut right = HashedSet::new();
    right.add(3);
    right.add(1);
    right.add(2);

    assert_eq!(left, right);
}

#[rstest]
fn test_sets_of_different_length_are_not_equal() {
    assert_ne!(set![1, 2], set![1, 2, 3]);
}
