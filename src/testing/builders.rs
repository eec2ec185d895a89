//! Fluent builders for test inputs.

use std::ops::RangeInclusive;

/// A fluent builder for a single item collection.
///
/// # Example
///
/// ```
/// use daprs::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::new()
///     .add_range(1..=10)
///     .add_value(100)
///     .add_repeated(42, 5)
///     .build();
///
/// assert_eq!(data.len(), 16);
/// ```
#[derive(Default)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    #[must_use]
    pub fn add_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.data.extend(values);
        self
    }

    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    /// Add one value per integer in `range`, converted with `From<i32>`.
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self
    where
        T: From<i32>,
    {
        self.data.extend(range.map(T::from));
        self
    }

    /// Add `count` values produced from their index.
    ///
    /// ```
    /// use daprs::testing::TestDataBuilder;
    ///
    /// let words = TestDataBuilder::new().add_generated(3, |i| format!("w{i}")).build();
    /// assert_eq!(words, vec!["w0", "w1", "w2"]);
    /// ```
    #[must_use]
    pub fn add_generated(mut self, count: usize, generate: impl Fn(usize) -> T) -> Self {
        self.data.extend((0..count).map(generate));
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.data
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Builder for the list-of-collections inputs taken by
/// [`combine`](crate::combine), [`join`](crate::join) and [`Union`](crate::Union).
///
/// # Example
///
/// ```
/// use daprs::testing::CollectionsBuilder;
///
/// let inputs = CollectionsBuilder::new()
///     .add_collection(vec![1, 2])
///     .add_collection(vec![3, 4])
///     .build();
/// assert_eq!(inputs, vec![vec![1, 2], vec![3, 4]]);
/// ```
#[derive(Default)]
pub struct CollectionsBuilder<T> {
    collections: Vec<Vec<T>>,
}

impl<T> CollectionsBuilder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            collections: Vec::new(),
        }
    }

    #[must_use]
    pub fn add_collection(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.collections.push(items.into_iter().collect());
        self
    }

    /// Add `count` copies of the same collection.
    #[must_use]
    pub fn add_copies(mut self, items: &[T], count: usize) -> Self
    where
        T: Clone,
    {
        for _ in 0..count {
            self.collections.push(items.to_vec());
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<Vec<T>> {
        self.collections
    }

    /// Number of collections added so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.collections.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_concatenates_in_call_order() {
        let data = TestDataBuilder::<i64>::new()
            .add_range(1..=3)
            .add_repeated(0, 2)
            .add_values([7, 8])
            .build();
        assert_eq!(data, vec![1, 2, 3, 0, 0, 7, 8]);
    }

    #[test]
    fn collections_builder_copies() {
        let b = CollectionsBuilder::new().add_copies(&['x', 'y'], 3);
        assert_eq!(b.len(), 3);
        assert_eq!(b.build()[2], vec!['x', 'y']);
    }
}
