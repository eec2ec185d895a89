//! Assertion functions for primitive and transformer outputs.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics at the first differing index, or on a length mismatch.
///
/// # Example
///
/// ```
/// use daprs::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    if let Some((i, (a, e))) = actual
        .iter()
        .zip(expected)
        .enumerate()
        .find(|(_, (a, e))| a != e)
    {
        panic!(
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections hold the same elements with the same
/// multiplicities, ignoring order.
///
/// # Panics
///
/// Panics if any element occurs a different number of times.
///
/// # Example
///
/// ```
/// use daprs::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&[3, 1, 1, 2], &[1, 2, 1, 3]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    let actual_counts = counts(actual);
    let expected_counts = counts(expected);

    if actual_counts != expected_counts {
        let missing: Vec<_> = expected_counts
            .iter()
            .filter(|(k, n)| actual_counts.get(*k) < Some(*n))
            .map(|(k, _)| k)
            .collect();
        let extra: Vec<_> = actual_counts
            .iter()
            .filter(|(k, n)| expected_counts.get(*k) < Some(*n))
            .map(|(k, _)| k)
            .collect();
        panic!(
            "Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

fn counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut out = HashMap::new();
    for item in items {
        *out.entry(item).or_insert(0) += 1;
    }
    out
}

/// Assert that `split` output matches `expected` label by label.
///
/// `groups[i]` is taken to belong to `labels[i]`. Group order may differ
/// between the two sides, but items inside each group must keep their order.
///
/// # Panics
///
/// Panics if a label is missing, unexpected, or carries a different group.
///
/// # Example
///
/// ```
/// use daprs::testing::assert_groups_equal;
///
/// let groups = vec![vec![1, 3], vec![2]];
/// let labels = vec!["odd", "even"];
/// assert_groups_equal(&groups, &labels, &[("even", vec![2]), ("odd", vec![1, 3])]);
/// ```
pub fn assert_groups_equal<L, T>(groups: &[Vec<T>], labels: &[L], expected: &[(L, Vec<T>)])
where
    L: Debug + Eq + Hash,
    T: Debug + PartialEq,
{
    assert_eq!(
        groups.len(),
        labels.len(),
        "Every group needs a label:\n  Groups: {groups:?}\n  Labels: {labels:?}"
    );
    assert_eq!(
        groups.len(),
        expected.len(),
        "Group count mismatch:\n  Expected: {}\n  Actual: {}\n  Actual labels: {labels:?}",
        expected.len(),
        groups.len()
    );

    let actual: HashMap<&L, &Vec<T>> = labels.iter().zip(groups).collect();
    for (label, want) in expected {
        match actual.get(label) {
            Some(got) if *got == want => {}
            Some(got) => panic!(
                "Group mismatch for label {label:?}:\n  Expected: {want:?}\n  Actual: {got:?}"
            ),
            None => panic!("Missing group for label {label:?}:\n  Actual labels: {labels:?}"),
        }
    }
}

/// Assert that a primitive produced exactly `expected` items.
///
/// # Panics
///
/// Panics if the length differs.
///
/// # Example
///
/// ```
/// use daprs::testing::assert_collection_size;
///
/// assert_collection_size(&[1, 2, 3], 3);
/// ```
pub fn assert_collection_size<T: Debug>(collection: &[T], expected: usize) {
    assert_eq!(
        collection.len(),
        expected,
        "Collection size mismatch:\n  Expected: {expected}\n  Actual: {}\n  Collection: {collection:?}",
        collection.len()
    );
}

/// Assert that `actual` is `source` with some elements removed and the rest
/// in their original order, which is what a filter must produce.
///
/// # Panics
///
/// Panics at the first element of `actual` that cannot be matched in order.
///
/// # Example
///
/// ```
/// use daprs::testing::assert_subsequence;
///
/// assert_subsequence(&[2, 4], &[1, 2, 3, 4]);
/// ```
pub fn assert_subsequence<T: Debug + PartialEq>(actual: &[T], source: &[T]) {
    let mut rest = source.iter();
    for (i, item) in actual.iter().enumerate() {
        assert!(
            rest.any(|s| s == item),
            "Element at index {i} breaks source order:\n  Element: {item:?}\n  Actual: {actual:?}\n  Source: {source:?}"
        );
    }
}

/// Assert that all elements in a collection satisfy a predicate.
///
/// # Panics
///
/// Panics if any element does not satisfy the predicate.
///
/// # Example
///
/// ```
/// use daprs::testing::assert_all;
///
/// assert_all(&[2, 4, 6, 8], |x| x % 2 == 0);
/// ```
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that no elements in a collection satisfy a predicate.
///
/// # Panics
///
/// Panics if any element satisfies the predicate.
pub fn assert_none<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly succeeded for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that every window has `size` items and that consecutive windows
/// start `step` items apart in `source`.
///
/// # Panics
///
/// Panics if a window has the wrong length or content.
///
/// # Example
///
/// ```
/// use daprs::testing::assert_windows_of;
///
/// let windows = vec![vec![1, 2, 3], vec![3, 4, 5]];
/// assert_windows_of(&windows, &[1, 2, 3, 4, 5, 6], 3, 2);
/// ```
pub fn assert_windows_of<T: Debug + PartialEq>(
    windows: &[Vec<T>],
    source: &[T],
    size: usize,
    step: usize,
) {
    for (i, window) in windows.iter().enumerate() {
        let start = i * step;
        let want = source.get(start..start + size);
        assert!(
            want == Some(window.as_slice()),
            "Window {i} mismatch:\n  Expected: {want:?}\n  Actual: {window:?}"
        );
    }
}
