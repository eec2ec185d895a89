use itertools::Either;
use std::iter::Once;

/// Remove exactly one level of nesting, outer order then inner order.
///
/// ```
/// use daprs::flatten;
///
/// let nested = vec![vec![vec![1], vec![2]], vec![vec![3]]];
/// // only the outer level goes away
/// assert_eq!(flatten(nested), vec![vec![1], vec![2], vec![3]]);
/// ```
pub fn flatten<C: IntoIterator>(data: Vec<C>) -> Vec<C::Item> {
    data.into_iter().flatten().collect()
}

/// An item of a collection that mixes plain values and sub-collections.
///
/// Under [`flatten`], a `Leaf` passes through as-is and a `Seq` is spliced
/// into the output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    Seq(Vec<T>),
}

impl<T> From<Vec<T>> for Nested<T> {
    fn from(items: Vec<T>) -> Self {
        Nested::Seq(items)
    }
}

impl<T> IntoIterator for Nested<T> {
    type Item = T;
    type IntoIter = Either<Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Nested::Leaf(item) => Either::Left(std::iter::once(item)),
            Nested::Seq(items) => Either::Right(items.into_iter()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_leaves_and_sequences() {
        let data = vec![
            Nested::Leaf(1),
            Nested::from(vec![2, 3]),
            Nested::Seq(vec![]),
            Nested::Leaf(4),
        ];
        assert_eq!(flatten(data), vec![1, 2, 3, 4]);
    }

    #[test]
    fn leaf_only_collection_is_unchanged() {
        let data: Vec<Nested<char>> = "abc".chars().map(Nested::Leaf).collect();
        assert_eq!(flatten(data), vec!['a', 'b', 'c']);
    }

    #[test]
    fn empty_sub_collections_vanish() {
        assert_eq!(flatten(vec![Vec::<u8>::new(), vec![], vec![9]]), vec![9]);
    }
}
