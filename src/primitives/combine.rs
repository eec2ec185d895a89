use super::map::map_with;
use crate::call::{Fallible, ItemFn, Outcome, Plain};
use crate::error::Error;
use crate::options::ExecOptions;
use anyhow::Result;
use itertools::multizip;

/// Several collections that can be zipped into one collection of rows.
///
/// Implemented for tuples of two to eight `Vec`s (rows are tuples, so the
/// combining function may take one argument per collection) and for
/// `Vec<Vec<T>>` (rows are `Vec<T>`).
pub trait Zip {
    type Row;

    /// Zip positionally; every collection must have the same length.
    fn zip_aligned(self) -> std::result::Result<Vec<Self::Row>, Error>;
}

macro_rules! impl_zip {
    ($($name:ident $idx:tt),+) => {
        impl<$($name),+> Zip for ($(Vec<$name>,)+) {
            type Row = ($($name,)+);

            fn zip_aligned(self) -> std::result::Result<Vec<Self::Row>, Error> {
                let expected = self.0.len();
                $(
                    if self.$idx.len() != expected {
                        return Err(Error::Misaligned {
                            index: $idx,
                            expected,
                            found: self.$idx.len(),
                        });
                    }
                )+
                Ok(multizip(self).collect())
            }
        }
    };
}

impl_zip!(A 0, B 1);
impl_zip!(A 0, B 1, C 2);
impl_zip!(A 0, B 1, C 2, D 3);
impl_zip!(A 0, B 1, C 2, D 3, E 4);
impl_zip!(A 0, B 1, C 2, D 3, E 4, G 5);
impl_zip!(A 0, B 1, C 2, D 3, E 4, G 5, H 6);
impl_zip!(A 0, B 1, C 2, D 3, E 4, G 5, H 6, J 7);

impl<T> Zip for Vec<Vec<T>> {
    type Row = Vec<T>;

    fn zip_aligned(self) -> std::result::Result<Vec<Vec<T>>, Error> {
        let expected = self.first().map_or(0, Vec::len);
        if let Some((index, found)) = self
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(Error::Misaligned { index, expected, found });
        }

        let mut columns: Vec<_> = self.into_iter().map(Vec::into_iter).collect();
        Ok((0..expected)
            .map(|_| columns.iter_mut().filter_map(Iterator::next).collect())
            .collect())
    }
}

pub(crate) fn combine_with<C, M, K, F>(
    f: &F,
    collections: C,
    opts: &ExecOptions,
) -> Result<Vec<K::Value>>
where
    C: Zip,
    C::Row: Sync,
    F: ItemFn<C::Row, M>,
    K: Outcome<F::Output>,
    K::Value: Send,
{
    let rows = collections.zip_aligned()?;
    map_with::<C::Row, M, K, F>(f, &rows, opts)
}

/// Apply `f` across aligned collections, one output per position.
///
/// Lengths are checked before any task is dispatched; a mismatch is
/// [`Error::Misaligned`].
///
/// ```
/// use daprs::{combine, ExecOptions};
///
/// let names = vec!["ann", "bob"];
/// let ages = vec![31, 42];
/// let opts = ExecOptions::default();
/// let out = combine(|n: &&str, a: &i32| format!("{n}:{a}"), (names, ages), &opts).unwrap();
/// assert_eq!(out, vec!["ann:31", "bob:42"]);
/// ```
pub fn combine<C, M, F>(f: F, collections: C, opts: &ExecOptions) -> Result<Vec<F::Output>>
where
    C: Zip,
    C::Row: Sync,
    F: ItemFn<C::Row, M>,
    F::Output: Send,
{
    combine_with::<C, M, Plain, F>(&f, collections, opts)
}

pub fn try_combine<C, M, F, O, E>(f: F, collections: C, opts: &ExecOptions) -> Result<Vec<O>>
where
    C: Zip,
    C::Row: Sync,
    F: ItemFn<C::Row, M, Output = std::result::Result<O, E>>,
    O: Send,
    E: Into<anyhow::Error>,
{
    combine_with::<C, M, Fallible, F>(&f, collections, opts)
}
