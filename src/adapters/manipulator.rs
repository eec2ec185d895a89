use crate::call::{Fallible, Outcome, Plain};
use crate::transformer::Transformer;
use anyhow::Result;
use std::marker::PhantomData;

/// No extra arguments are bound to a [`Manipulator`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NoArgs;

/// Extra arguments bound to a [`Manipulator`] at construction.
#[derive(Clone, Debug)]
pub struct Bound<A>(pub A);

/// Applies a function to the *whole* collection rather than item by item.
///
/// Useful for sorting, deduplicating, truncating and any other transform that
/// needs to see every item at once. Extra arguments can be bound up front with
/// [`with_args`](Manipulator::with_args):
///
/// ```
/// use daprs::{Manipulator, Transformer};
///
/// let top = Manipulator::with_args(
///     |mut v: Vec<i32>, n: &usize| {
///         v.sort_unstable_by(|a, b| b.cmp(a));
///         v.truncate(*n);
///         v
///     },
///     2,
/// );
/// assert_eq!(top.transform(vec![3, 9, 1, 7]).unwrap(), vec![9, 7]);
/// ```
pub struct Manipulator<F, A = NoArgs, K = Plain> {
    func: F,
    args: A,
    _marker: PhantomData<fn() -> K>,
}

impl<F> Manipulator<F, NoArgs, Plain> {
    pub fn new(func: F) -> Self {
        Self {
            func,
            args: NoArgs,
            _marker: PhantomData,
        }
    }
}

impl<F> Manipulator<F, NoArgs, Fallible> {
    pub fn try_new(func: F) -> Self {
        Self {
            func,
            args: NoArgs,
            _marker: PhantomData,
        }
    }
}

impl<F, A> Manipulator<F, Bound<A>, Plain> {
    pub fn with_args(func: F, args: A) -> Self {
        Self {
            func,
            args: Bound(args),
            _marker: PhantomData,
        }
    }
}

impl<F, A> Manipulator<F, Bound<A>, Fallible> {
    pub fn try_with_args(func: F, args: A) -> Self {
        Self {
            func,
            args: Bound(args),
            _marker: PhantomData,
        }
    }
}

impl<F, A, K> Manipulator<F, Bound<A>, K> {
    #[must_use]
    pub fn args(&self) -> &A {
        &self.args.0
    }
}

impl<I, O, F, K> Transformer<I> for Manipulator<F, NoArgs, K>
where
    F: Fn(I) -> O + Send + Sync,
    K: Outcome<O>,
{
    type Output = K::Value;

    fn transform(&self, data: I) -> Result<Self::Output> {
        K::lift((self.func)(data))
    }
}

impl<I, O, F, A, K> Transformer<I> for Manipulator<F, Bound<A>, K>
where
    F: Fn(I, &A) -> O + Send + Sync,
    A: Send + Sync,
    K: Outcome<O>,
{
    type Output = K::Value;

    fn transform(&self, data: I) -> Result<Self::Output> {
        K::lift((self.func)(data, &self.args.0))
    }
}
