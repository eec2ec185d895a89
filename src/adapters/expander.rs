use crate::call::{Fallible, ItemFn, Outcome, Plain};
use crate::options::ExecOptions;
use crate::primitives::expand::expand_with;
use crate::transformer::Transformer;
use anyhow::Result;
use std::marker::PhantomData;

/// Transformer for [`expand`](crate::expand). Its options, `n_jobs` included,
/// reach the primitive unchanged.
pub struct Expander<F, M, K = Plain> {
    func: F,
    options: ExecOptions,
    _marker: PhantomData<fn() -> (M, K)>,
}

impl<F, M> Expander<F, M, Plain> {
    pub fn new(func: F) -> Self {
        Self {
            func,
            options: ExecOptions::default(),
            _marker: PhantomData,
        }
    }
}

impl<F, M> Expander<F, M, Fallible> {
    pub fn try_new(func: F) -> Self {
        Self {
            func,
            options: ExecOptions::default(),
            _marker: PhantomData,
        }
    }
}

exec_builders!(Expander<F, M, K>);

impl<T, M, K, F, C> Transformer<Vec<T>> for Expander<F, M, K>
where
    T: Sync,
    F: ItemFn<T, M>,
    K: Outcome<F::Output, Value = C>,
    C: IntoIterator + Send,
{
    type Output = Vec<C::Item>;

    fn transform(&self, data: Vec<T>) -> Result<Self::Output> {
        expand_with::<T, M, K, F, C>(&self.func, &data, &self.options)
    }
}
