use crate::call::{Fallible, ItemFn, Outcome, Plain};
use crate::options::ExecOptions;
use crate::primitives::filter::filter_with;
use crate::transformer::Transformer;
use anyhow::Result;
use std::marker::PhantomData;

/// Transformer for [`filter`](crate::filter).
pub struct Filter<F, M, K = Plain> {
    pred: F,
    options: ExecOptions,
    _marker: PhantomData<fn() -> (M, K)>,
}

impl<F, M> Filter<F, M, Plain> {
    pub fn new(pred: F) -> Self {
        Self {
            pred,
            options: ExecOptions::default(),
            _marker: PhantomData,
        }
    }
}

impl<F, M> Filter<F, M, Fallible> {
    pub fn try_new(pred: F) -> Self {
        Self {
            pred,
            options: ExecOptions::default(),
            _marker: PhantomData,
        }
    }
}

exec_builders!(Filter<F, M, K>);

impl<T, M, K, F> Transformer<Vec<T>> for Filter<F, M, K>
where
    T: Sync,
    F: ItemFn<T, M>,
    K: Outcome<F::Output, Value = bool>,
{
    type Output = Vec<T>;

    fn transform(&self, data: Vec<T>) -> Result<Vec<T>> {
        filter_with::<T, M, K, F>(&self.pred, data, &self.options)
    }
}
