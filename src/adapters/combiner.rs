use crate::call::{Fallible, ItemFn, Outcome, Plain};
use crate::options::ExecOptions;
use crate::primitives::combine::{Zip, combine_with};
use crate::transformer::Transformer;
use anyhow::Result;
use std::marker::PhantomData;

/// Transformer for [`combine`](crate::combine). Input is a tuple of `Vec`s
/// (or a `Vec<Vec<T>>`) of equal length.
///
/// ```
/// use daprs::{Combiner, Transformer};
///
/// let dot = Combiner::new(|a: &f64, b: &f64| a * b);
/// let products = dot.transform((vec![1.0, 2.0], vec![3.0, 4.0])).unwrap();
/// assert_eq!(products, vec![3.0, 8.0]);
/// ```
pub struct Combiner<F, M, K = Plain> {
    func: F,
    options: ExecOptions,
    _marker: PhantomData<fn() -> (M, K)>,
}

impl<F, M> Combiner<F, M, Plain> {
    pub fn new(func: F) -> Self {
        Self {
            func,
            options: ExecOptions::default(),
            _marker: PhantomData,
        }
    }
}

impl<F, M> Combiner<F, M, Fallible> {
    pub fn try_new(func: F) -> Self {
        Self {
            func,
            options: ExecOptions::default(),
            _marker: PhantomData,
        }
    }
}

exec_builders!(Combiner<F, M, K>);

impl<C, M, K, F> Transformer<C> for Combiner<F, M, K>
where
    C: Zip,
    C::Row: Sync,
    F: ItemFn<C::Row, M>,
    K: Outcome<F::Output>,
    K::Value: Send,
{
    type Output = Vec<K::Value>;

    fn transform(&self, data: C) -> Result<Self::Output> {
        combine_with::<C, M, K, F>(&self.func, data, &self.options)
    }
}
