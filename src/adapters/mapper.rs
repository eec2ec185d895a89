use crate::call::{Fallible, ItemFn, Outcome, Plain};
use crate::options::ExecOptions;
use crate::primitives::map::map_with;
use crate::transformer::Transformer;
use anyhow::Result;
use std::marker::PhantomData;

/// Transformer for [`map`](crate::map).
pub struct Mapper<F, M, K = Plain> {
    func: F,
    options: ExecOptions,
    _marker: PhantomData<fn() -> (M, K)>,
}

impl<F, M> Mapper<F, M, Plain> {
    pub fn new(func: F) -> Self {
        Self {
            func,
            options: ExecOptions::default(),
            _marker: PhantomData,
        }
    }
}

impl<F, M> Mapper<F, M, Fallible> {
    pub fn try_new(func: F) -> Self {
        Self {
            func,
            options: ExecOptions::default(),
            _marker: PhantomData,
        }
    }
}

exec_builders!(Mapper<F, M, K>);

impl<T, M, K, F> Transformer<Vec<T>> for Mapper<F, M, K>
where
    T: Sync,
    F: ItemFn<T, M>,
    K: Outcome<F::Output>,
    K::Value: Send,
{
    type Output = Vec<K::Value>;

    fn transform(&self, data: Vec<T>) -> Result<Self::Output> {
        map_with::<T, M, K, F>(&self.func, &data, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::CallMode;

    #[test]
    fn reports_call_mode() {
        let whole = Mapper::new(|x: &(u8, u8)| x.0);
        let expanded = Mapper::new(|a: &u8, b: &u8| a + b);
        assert_eq!(whole.transform(vec![(1, 2)]).unwrap(), vec![1]);
        assert_eq!(expanded.transform(vec![(1, 2)]).unwrap(), vec![3]);
        assert_eq!(whole.call_mode(), CallMode::Whole);
        assert_eq!(expanded.call_mode(), CallMode::Expand { arity: 2 });
    }

    #[test]
    fn builders_touch_only_options() {
        let m = Mapper::new(|x: &i32| x + 1).n_jobs(3).verbose(2);
        assert_eq!(m.options().n_jobs, 3);
        assert_eq!(m.options().verbose, 2);
        assert_eq!(m.transform(vec![1, 2]).unwrap(), vec![2, 3]);
    }
}
