use crate::call::{Fallible, ItemFn, Outcome, Plain};
use crate::options::ExecOptions;
use crate::primitives::join::{CrossProduct, join_with};
use crate::transformer::Transformer;
use anyhow::Result;
use std::marker::PhantomData;

/// Transformer for [`join`](crate::join). Input is a tuple of `Vec`s (or a
/// `Vec<Vec<T>>`); output is the matching combinations in cross-product order.
pub struct Joiner<F, M, K = Plain> {
    pred: F,
    options: ExecOptions,
    _marker: PhantomData<fn() -> (M, K)>,
}

impl<F, M> Joiner<F, M, Plain> {
    pub fn new(pred: F) -> Self {
        Self {
            pred,
            options: ExecOptions::default(),
            _marker: PhantomData,
        }
    }
}

impl<F, M> Joiner<F, M, Fallible> {
    pub fn try_new(pred: F) -> Self {
        Self {
            pred,
            options: ExecOptions::default(),
            _marker: PhantomData,
        }
    }
}

exec_builders!(Joiner<F, M, K>);

impl<C, M, K, F> Transformer<C> for Joiner<F, M, K>
where
    C: CrossProduct,
    C::Row: Sync,
    F: ItemFn<C::Row, M>,
    K: Outcome<F::Output, Value = bool>,
{
    type Output = Vec<C::Row>;

    fn transform(&self, data: C) -> Result<Self::Output> {
        join_with::<C, M, K, F>(&self.pred, data, &self.options)
    }
}
