use super::evaluate;
use crate::call::{Fallible, ItemFn, Outcome, Plain};
use crate::options::ExecOptions;
use anyhow::Result;
use std::collections::HashMap;
use std::hash::Hash;

/// Group `data` by `labels`, keeping first-seen label order and insertion order
/// within each group.
pub(crate) fn group_by_label<T, L>(data: Vec<T>, labels: Vec<L>) -> (Vec<Vec<T>>, Vec<L>)
where
    L: Eq + Hash + Clone,
{
    let mut slots: HashMap<L, usize> = HashMap::new();
    let mut groups: Vec<Vec<T>> = Vec::new();
    let mut order: Vec<L> = Vec::new();

    for (item, label) in data.into_iter().zip(labels) {
        let slot = match slots.get(&label) {
            Some(&slot) => slot,
            None => {
                let slot = groups.len();
                slots.insert(label.clone(), slot);
                order.push(label);
                groups.push(Vec::new());
                slot
            }
        };
        groups[slot].push(item);
    }
    (groups, order)
}

pub(crate) fn split_with<T, M, K, F, L>(
    f: &F,
    data: Vec<T>,
    opts: &ExecOptions,
) -> Result<(Vec<Vec<T>>, Vec<L>)>
where
    T: Sync,
    F: ItemFn<T, M>,
    K: Outcome<F::Output, Value = L>,
    L: Eq + Hash + Clone + Send,
{
    let labels = evaluate::<T, M, K, F>("split", f, &data, opts)?;
    Ok(group_by_label(data, labels))
}

/// Partition `data` into groups of items sharing the same discriminator value.
///
/// Groups appear in the order their label was first seen.
///
/// ```
/// use daprs::{split, ExecOptions};
///
/// let groups = split(|x: &i32| x % 3, vec![1, 2, 3, 4, 5, 6], &ExecOptions::default()).unwrap();
/// assert_eq!(groups, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// ```
pub fn split<T, M, F>(discriminator: F, data: Vec<T>, opts: &ExecOptions) -> Result<Vec<Vec<T>>>
where
    T: Sync,
    F: ItemFn<T, M>,
    F::Output: Eq + Hash + Clone + Send,
{
    split_with::<T, M, Plain, F, F::Output>(&discriminator, data, opts).map(|(groups, _)| groups)
}

/// Like [`split`], also returning the label of each group at the same position.
pub fn split_labeled<T, M, F>(
    discriminator: F,
    data: Vec<T>,
    opts: &ExecOptions,
) -> Result<(Vec<Vec<T>>, Vec<F::Output>)>
where
    T: Sync,
    F: ItemFn<T, M>,
    F::Output: Eq + Hash + Clone + Send,
{
    split_with::<T, M, Plain, F, F::Output>(&discriminator, data, opts)
}

pub fn try_split<T, M, F, L, E>(
    discriminator: F,
    data: Vec<T>,
    opts: &ExecOptions,
) -> Result<Vec<Vec<T>>>
where
    T: Sync,
    F: ItemFn<T, M, Output = std::result::Result<L, E>>,
    L: Eq + Hash + Clone + Send,
    E: Into<anyhow::Error>,
{
    split_with::<T, M, Fallible, F, L>(&discriminator, data, opts).map(|(groups, _)| groups)
}

pub fn try_split_labeled<T, M, F, L, E>(
    discriminator: F,
    data: Vec<T>,
    opts: &ExecOptions,
) -> Result<(Vec<Vec<T>>, Vec<L>)>
where
    T: Sync,
    F: ItemFn<T, M, Output = std::result::Result<L, E>>,
    L: Eq + Hash + Clone + Send,
    E: Into<anyhow::Error>,
{
    split_with::<T, M, Fallible, F, L>(&discriminator, data, opts)
}
