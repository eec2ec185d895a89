use crate::call::{Fallible, ItemFn, Outcome, Plain};
use crate::options::ExecOptions;
use crate::primitives::split::split_with;
use crate::transformer::Transformer;
use anyhow::Result;
use std::hash::Hash;
use std::marker::PhantomData;

/// Result shape of a [`Splitter`]: bare groups or groups with their labels.
pub trait SplitShape {
    const RETURNS_LABELS: bool;
}

/// Output `Vec<Vec<T>>`.
pub struct Groups;

/// Output `(Vec<Vec<T>>, Vec<L>)`, groups and labels aligned by position.
pub struct Labeled;

impl SplitShape for Groups {
    const RETURNS_LABELS: bool = false;
}

impl SplitShape for Labeled {
    const RETURNS_LABELS: bool = true;
}

/// Transformer for [`split`](crate::split) and, after
/// [`with_labels`](Splitter::with_labels), [`split_labeled`](crate::split_labeled).
///
/// ```
/// use daprs::{Splitter, Transformer};
///
/// let by_parity = Splitter::new(|x: &i32| x % 2 == 0).with_labels();
/// let (groups, labels) = by_parity.transform(vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(groups, vec![vec![1, 3], vec![2, 4]]);
/// assert_eq!(labels, vec![false, true]);
/// ```
pub struct Splitter<F, M, K = Plain, S = Groups> {
    func: F,
    options: ExecOptions,
    _marker: PhantomData<fn() -> (M, K, S)>,
}

impl<F, M> Splitter<F, M, Plain, Groups> {
    pub fn new(func: F) -> Self {
        Self {
            func,
            options: ExecOptions::default(),
            _marker: PhantomData,
        }
    }
}

impl<F, M> Splitter<F, M, Fallible, Groups> {
    pub fn try_new(func: F) -> Self {
        Self {
            func,
            options: ExecOptions::default(),
            _marker: PhantomData,
        }
    }
}

impl<F, M, K> Splitter<F, M, K, Groups> {
    /// Also return the label of each group.
    #[must_use]
    pub fn with_labels(self) -> Splitter<F, M, K, Labeled> {
        Splitter {
            func: self.func,
            options: self.options,
            _marker: PhantomData,
        }
    }
}

impl<F, M, K, S: SplitShape> Splitter<F, M, K, S> {
    #[must_use]
    pub fn returns_labels(&self) -> bool {
        S::RETURNS_LABELS
    }
}

exec_builders!(Splitter<F, M, K, S>);

impl<T, M, K, F, L> Transformer<Vec<T>> for Splitter<F, M, K, Groups>
where
    T: Sync,
    F: ItemFn<T, M>,
    K: Outcome<F::Output, Value = L>,
    L: Eq + Hash + Clone + Send,
{
    type Output = Vec<Vec<T>>;

    fn transform(&self, data: Vec<T>) -> Result<Self::Output> {
        let (groups, _) = split_with::<T, M, K, F, L>(&self.func, data, &self.options)?;
        Ok(groups)
    }
}

impl<T, M, K, F, L> Transformer<Vec<T>> for Splitter<F, M, K, Labeled>
where
    T: Sync,
    F: ItemFn<T, M>,
    K: Outcome<F::Output, Value = L>,
    L: Eq + Hash + Clone + Send,
{
    type Output = (Vec<Vec<T>>, Vec<L>);

    fn transform(&self, data: Vec<T>) -> Result<Self::Output> {
        split_with::<T, M, K, F, L>(&self.func, data, &self.options)
    }
}
