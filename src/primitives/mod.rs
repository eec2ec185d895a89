//! Processing primitives.
//!
//! Each primitive decides *what* happens to a collection and leaves *how many
//! at once* to [`run_batch`](crate::runner::run_batch). Every primitive that
//! calls a user function comes in a plain form and a `try_` form whose function
//! returns a `Result`.
//!
//! All primitives are eager: they consume or borrow a fully materialized
//! collection and return a fully materialized one, in input order.

use crate::call::{ItemFn, Outcome, invoke};
use crate::options::ExecOptions;
use crate::runner::run_batch;
use anyhow::Result;

pub(crate) mod combine;
pub(crate) mod expand;
pub(crate) mod filter;
pub(crate) mod flatten;
pub(crate) mod join;
pub(crate) mod map;
pub(crate) mod split;
pub(crate) mod window;

pub use combine::{Zip, combine, try_combine};
pub use expand::{expand, try_expand};
pub use filter::{filter, try_filter};
pub use flatten::{Nested, flatten};
pub use join::{CrossProduct, join, try_join};
pub use map::{map, try_map};
pub use split::{split, split_labeled, try_split, try_split_labeled};
pub use window::windowed;

/// Apply `f` to every item, one task per item, results in input order.
pub(crate) fn evaluate<T, M, K, F>(
    label: &'static str,
    f: &F,
    data: &[T],
    opts: &ExecOptions,
) -> Result<Vec<K::Value>>
where
    T: Sync,
    F: ItemFn<T, M>,
    K: Outcome<F::Output>,
    K::Value: Send,
{
    run_batch(label, data.iter().collect(), |item: &T| invoke::<T, M, K, F>(f, item), opts)
}
