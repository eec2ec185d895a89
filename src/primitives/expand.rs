use super::evaluate;
use crate::call::{Fallible, ItemFn, Outcome, Plain};
use crate::options::ExecOptions;
use anyhow::Result;

pub(crate) fn expand_with<T, M, K, F, C>(
    f: &F,
    data: &[T],
    opts: &ExecOptions,
) -> Result<Vec<C::Item>>
where
    T: Sync,
    F: ItemFn<T, M>,
    K: Outcome<F::Output, Value = C>,
    C: IntoIterator + Send,
{
    let parts = evaluate::<T, M, K, F>("expand", f, data, opts)?;
    Ok(parts.into_iter().flatten().collect())
}

/// One-to-many map: `f` derives zero or more items from each input item and
/// the derived items are concatenated in input order. Only that one level is
/// flattened.
///
/// ```
/// use daprs::{expand, ExecOptions};
///
/// let out = expand(|n: &usize| vec![*n; *n], &[1, 0, 3], &ExecOptions::default()).unwrap();
/// assert_eq!(out, vec![1, 3, 3, 3]);
/// ```
pub fn expand<T, M, F>(
    f: F,
    data: &[T],
    opts: &ExecOptions,
) -> Result<Vec<<F::Output as IntoIterator>::Item>>
where
    T: Sync,
    F: ItemFn<T, M>,
    F::Output: IntoIterator + Send,
{
    expand_with::<T, M, Plain, F, F::Output>(&f, data, opts)
}

pub fn try_expand<T, M, F, C, E>(f: F, data: &[T], opts: &ExecOptions) -> Result<Vec<C::Item>>
where
    T: Sync,
    F: ItemFn<T, M, Output = std::result::Result<C, E>>,
    C: IntoIterator + Send,
    E: Into<anyhow::Error>,
{
    expand_with::<T, M, Fallible, F, C>(&f, data, opts)
}
