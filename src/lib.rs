//! # daprs
//!
//! A toolkit of **functional data-processing primitives** that can run on a
//! single thread or across a worker pool, plus two combinators for composing
//! them into larger workflows.
//!
//! ## Key Features
//!
//! - **Primitives** - map, filter, split, expand, combine, join, windowed, flatten
//! - **Parallel execution** - every primitive takes [`ExecOptions`]; `n_jobs > 1`
//!   fans items out to a rayon pool with results always in input order
//! - **Calling conventions** - a function taking `(&A, &B)` is applied to tuple
//!   items field by field, one taking `&(A, B)` sees the whole tuple
//! - **Fallible functions** - every primitive has a `try_` form; the first error
//!   aborts the batch and is returned verbatim
//! - **Transformers** - reusable adapters with one uniform [`Transformer`] trait
//! - **Composition** - [`Pipeline`] chains transformers, [`Union`] fans a list of
//!   collections out to parallel branches; both nest freely
//!
//! ## Quick Start
//!
//! ```
//! use daprs::{ExecOptions, filter, map, split_labeled};
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! let opts = ExecOptions::parallel(4);
//!
//! let words: Vec<String> = vec!["apple", "kiwi", "banana", "fig", "cherry"]
//!     .into_iter()
//!     .map(String::from)
//!     .collect();
//!
//! let long = filter(|w: &String| w.len() > 3, words, &opts)?;
//! let lengths = map(|w: &String| w.len(), &long, &opts)?;
//! assert_eq!(lengths, vec![5, 4, 6, 6]);
//!
//! let (groups, labels) = split_labeled(|w: &String| w.len() % 2 == 0, long, &opts)?;
//! assert_eq!(labels, vec![false, true]);
//! assert_eq!(groups[1], vec!["kiwi", "banana", "cherry"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Primitives
//!
//! Free functions in [`primitives`], re-exported at the crate root. Each one
//! takes the user function first, then the data, then the options:
//!
//! - [`map`] - one output per item
//! - [`filter`] - keep items whose predicate holds
//! - [`split`] / [`split_labeled`] - partition by a discriminator value
//! - [`expand`] - each item yields zero or more outputs, concatenated in order
//! - [`combine`] - apply a function across aligned collections
//! - [`join`] - keep the cross-product combinations a predicate accepts
//! - [`windowed`] - sliding windows with a size and a step
//! - [`flatten`] - remove one level of nesting
//!
//! ### Transformers
//!
//! The [`adapters`] bind a function and its options once and expose the
//! primitive as a [`Transformer`]:
//!
//! ```
//! use daprs::{Filter, Mapper, Pipeline, Transformer};
//!
//! let pipeline = Pipeline::<Vec<i32>>::new()
//!     .then(Filter::new(|x: &i32| *x > 0).n_jobs(2))
//!     .then(Mapper::new(|x: &i32| x * x));
//!
//! assert_eq!(pipeline.transform(vec![-2, 3, 0, 4]).unwrap(), vec![9, 16]);
//! ```
//!
//! ### Execution
//!
//! [`ExecOptions`] carries the worker count, verbosity, backend and batch size.
//! Everything is executed by [`runner::run_batch`]: sequentially on the calling
//! thread when `n_jobs == 1`, otherwise on a rayon pool. Progress is reported
//! through [`tracing`] events; call [`logging::init`] in a binary to see them.
//!
//! ### Errors
//!
//! All fallible operations return [`anyhow::Result`]. Failures detected by the
//! library itself are [`Error`] values and can be recovered with
//! `err.downcast_ref::<daprs::Error>()`; errors raised by user functions pass
//! through unchanged.
//!
//! ## Testing Utilities
//!
//! The [`testing`] module offers assertions and input builders tailored to
//! primitive outputs, such as [`testing::assert_groups_equal`] for split results.

pub mod adapters;
pub mod call;
pub mod error;
pub mod logging;
mod node;
pub mod options;
pub mod pipeline;
pub mod primitives;
pub mod progress;
pub mod runner;
pub mod testing;
pub mod transformer;
pub mod union;

pub use adapters::*;
pub use call::{CallMode, Convention, Expand, Fallible, ItemFn, Outcome, Plain, Whole, call_mode_of};
pub use error::Error;
pub use options::{Backend, ExecOptions};
pub use pipeline::Pipeline;
pub use primitives::*;
pub use transformer::{BoxedTransformer, Transformer};
pub use union::Union;
