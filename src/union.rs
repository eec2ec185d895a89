use crate::error::Error;
use crate::options::ExecOptions;
use crate::runner::run_batch;
use crate::transformer::{BoxedTransformer, Transformer};
use anyhow::Result;
use tracing::debug;

/// Parallel fan-out: the i-th collection goes to the i-th branch.
///
/// Branches may be any transformer with matching input and output types,
/// including [`Pipeline`](crate::Pipeline)s and other `Union`s. With
/// `n_jobs > 1` the branches themselves run concurrently; each branch still
/// uses its own options internally.
///
/// ```
/// use daprs::{Filter, Mapper, Transformer, Union};
///
/// let u: Union<Vec<i32>, Vec<i32>> = Union::new()
///     .branch(Mapper::new(|x: &i32| x + 100))
///     .branch(Filter::new(|x: &i32| *x > 1))
///     .n_jobs(2);
///
/// let out = u.transform(vec![vec![1, 2], vec![1, 2, 3]]).unwrap();
/// assert_eq!(out, vec![vec![101, 102], vec![2, 3]]);
/// ```
pub struct Union<I, O> {
    branches: Vec<BoxedTransformer<I, O>>,
    options: ExecOptions,
}

impl<I: 'static, O: 'static> Union<I, O> {
    #[must_use]
    pub fn new() -> Self {
        Self::from_branches(Vec::new())
    }

    #[must_use]
    pub fn from_branches(branches: Vec<BoxedTransformer<I, O>>) -> Self {
        Self {
            branches,
            options: ExecOptions::default(),
        }
    }

    /// Append a branch; it will receive the collection at the same position.
    #[must_use]
    pub fn branch<T>(mut self, transformer: T) -> Self
    where
        T: Transformer<I, Output = O> + 'static,
    {
        self.branches.push(Box::new(transformer));
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ExecOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn n_jobs(mut self, n_jobs: usize) -> Self {
        self.options.n_jobs = n_jobs;
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: u8) -> Self {
        self.options.verbose = verbose;
        self
    }

    #[must_use]
    pub fn options(&self) -> &ExecOptions {
        &self.options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

impl<I: 'static, O: 'static> Default for Union<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Send, O: Send> Transformer<Vec<I>> for Union<I, O> {
    type Output = Vec<O>;

    fn transform(&self, data: Vec<I>) -> Result<Vec<O>> {
        if data.len() != self.branches.len() {
            return Err(Error::UnionArity {
                transformers: self.branches.len(),
                collections: data.len(),
            }
            .into());
        }
        debug!(
            branches = self.branches.len(),
            n_jobs = self.options.n_jobs,
            "fanning out union"
        );
        let pairs: Vec<_> = self.branches.iter().zip(data).collect();
        run_batch(
            "union",
            pairs,
            |(branch, items)| branch.transform(items),
            &self.options,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mapper, Pipeline};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn arity_mismatch_runs_no_branch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let u: Union<Vec<i32>, Vec<i32>> = Union::new()
            .branch(Mapper::new(move |x: &i32| {
                seen.fetch_add(1, Ordering::SeqCst);
                *x
            }))
            .branch(Mapper::new(|x: &i32| *x));

        let err = u.transform(vec![vec![1], vec![2], vec![3]]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnionArity {
                transformers: 2,
                collections: 3
            })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_union_on_empty_data() -> Result<()> {
        let u: Union<Vec<u8>, Vec<u8>> = Union::new();
        assert!(u.transform(Vec::new())?.is_empty());
        Ok(())
    }

    #[test]
    fn pipelines_nest_as_branches() -> Result<()> {
        let double_then_inc = Pipeline::<Vec<i32>>::new()
            .then(Mapper::new(|x: &i32| x * 2))
            .then(Mapper::new(|x: &i32| x + 1));
        let u: Union<Vec<i32>, Vec<i32>> = Union::new()
            .branch(double_then_inc)
            .branch(Pipeline::new())
            .n_jobs(2);
        assert_eq!(u.transform(vec![vec![1, 2], vec![5]])?, vec![vec![3, 5], vec![5]]);
        Ok(())
    }
}
