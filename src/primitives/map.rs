use super::evaluate;
use crate::call::{Fallible, ItemFn, Outcome, Plain};
use crate::options::ExecOptions;
use anyhow::Result;

pub(crate) fn map_with<T, M, K, F>(f: &F, data: &[T], opts: &ExecOptions) -> Result<Vec<K::Value>>
where
    T: Sync,
    F: ItemFn<T, M>,
    K: Outcome<F::Output>,
    K::Value: Send,
{
    evaluate::<T, M, K, F>("map", f, data, opts)
}

/// Apply `f` to every item of `data`.
///
/// The output has the same length and order as `data` for every `n_jobs`.
///
/// ```
/// use daprs::{map, ExecOptions};
///
/// let out = map(|x: &i32| x * 2, &[1, 2, 3], &ExecOptions::parallel(2)).unwrap();
/// assert_eq!(out, vec![2, 4, 6]);
/// ```
pub fn map<T, M, F>(f: F, data: &[T], opts: &ExecOptions) -> Result<Vec<F::Output>>
where
    T: Sync,
    F: ItemFn<T, M>,
    F::Output: Send,
{
    map_with::<T, M, Plain, F>(&f, data, opts)
}

/// Like [`map`], but `f` returns a `Result`; the first error fails the call.
pub fn try_map<T, M, F, O, E>(f: F, data: &[T], opts: &ExecOptions) -> Result<Vec<O>>
where
    T: Sync,
    F: ItemFn<T, M, Output = std::result::Result<O, E>>,
    O: Send,
    E: Into<anyhow::Error>,
{
    map_with::<T, M, Fallible, F>(&f, data, opts)
}
