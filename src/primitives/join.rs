use super::filter::filter_with;
use crate::call::{Fallible, ItemFn, Outcome, Plain};
use crate::options::ExecOptions;
use anyhow::Result;
use itertools::{Itertools, iproduct};

/// Several collections whose full cross product can be enumerated.
///
/// Combinations are produced in row-major order: the last collection varies
/// fastest. If any collection is empty the product is empty.
pub trait CrossProduct {
    type Row;

    fn cross(self) -> Vec<Self::Row>;
}

macro_rules! impl_cross {
    ($($name:ident),+) => {
        impl<$($name: Clone),+> CrossProduct for ($(Vec<$name>,)+) {
            type Row = ($($name,)+);

            #[allow(non_snake_case)]
            fn cross(self) -> Vec<Self::Row> {
                let ($($name,)+) = self;
                iproduct!($($name),+).collect()
            }
        }
    };
}

impl_cross!(A, B);
impl_cross!(A, B, C);
impl_cross!(A, B, C, D);
impl_cross!(A, B, C, D, E);
impl_cross!(A, B, C, D, E, G);
impl_cross!(A, B, C, D, E, G, H);
impl_cross!(A, B, C, D, E, G, H, J);

impl<T: Clone> CrossProduct for Vec<Vec<T>> {
    type Row = Vec<T>;

    fn cross(self) -> Vec<Vec<T>> {
        if self.is_empty() {
            return Vec::new();
        }
        self.into_iter().multi_cartesian_product().collect()
    }
}

pub(crate) fn join_with<C, M, K, F>(
    pred: &F,
    collections: C,
    opts: &ExecOptions,
) -> Result<Vec<C::Row>>
where
    C: CrossProduct,
    C::Row: Sync,
    F: ItemFn<C::Row, M>,
    K: Outcome<F::Output, Value = bool>,
{
    filter_with::<C::Row, M, K, F>(pred, collections.cross(), opts)
}

/// Join collections on a predicate: every combination of one item from each
/// collection is tested and the matching combinations are kept, in
/// cross-product order.
///
/// ```
/// use daprs::{join, ExecOptions};
///
/// let ids = vec!["1", "2", "3"];
/// let nums = vec![3, 1];
/// let same = |s: &&str, n: &i32| s.parse::<i32>().ok() == Some(*n);
/// let out = join(same, (ids, nums), &ExecOptions::default()).unwrap();
/// assert_eq!(out, vec![("1", 1), ("3", 3)]);
/// ```
pub fn join<C, M, F>(pred: F, collections: C, opts: &ExecOptions) -> Result<Vec<C::Row>>
where
    C: CrossProduct,
    C::Row: Sync,
    F: ItemFn<C::Row, M, Output = bool>,
{
    join_with::<C, M, Plain, F>(&pred, collections, opts)
}

pub fn try_join<C, M, F, E>(pred: F, collections: C, opts: &ExecOptions) -> Result<Vec<C::Row>>
where
    C: CrossProduct,
    C::Row: Sync,
    F: ItemFn<C::Row, M, Output = std::result::Result<bool, E>>,
    E: Into<anyhow::Error>,
{
    join_with::<C, M, Fallible, F>(&pred, collections, opts)
}
