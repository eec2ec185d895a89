use super::evaluate;
use crate::call::{Fallible, ItemFn, Outcome, Plain};
use crate::options::ExecOptions;
use anyhow::Result;

pub(crate) fn filter_with<T, M, K, F>(pred: &F, data: Vec<T>, opts: &ExecOptions) -> Result<Vec<T>>
where
    T: Sync,
    F: ItemFn<T, M>,
    K: Outcome<F::Output, Value = bool>,
{
    // Every item is evaluated before any is dropped.
    let keep = evaluate::<T, M, K, F>("filter", pred, &data, opts)?;
    Ok(data
        .into_iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect())
}

/// Keep the items for which `pred` holds, in their original relative order.
///
/// ```
/// use daprs::{filter, ExecOptions};
///
/// let data: Vec<i32> = (0..10).collect();
/// let evens = filter(|x: &i32| x % 2 == 0, data, &ExecOptions::default()).unwrap();
/// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
/// ```
pub fn filter<T, M, F>(pred: F, data: Vec<T>, opts: &ExecOptions) -> Result<Vec<T>>
where
    T: Sync,
    F: ItemFn<T, M, Output = bool>,
{
    filter_with::<T, M, Plain, F>(&pred, data, opts)
}

pub fn try_filter<T, M, F, E>(pred: F, data: Vec<T>, opts: &ExecOptions) -> Result<Vec<T>>
where
    T: Sync,
    F: ItemFn<T, M, Output = std::result::Result<bool, E>>,
    E: Into<anyhow::Error>,
{
    filter_with::<T, M, Fallible, F>(&pred, data, opts)
}
