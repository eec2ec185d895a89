//! Transformer adapters.
//!
//! Each adapter binds a function and its [`ExecOptions`] to one primitive and
//! exposes it through [`Transformer`](crate::Transformer). Adapters are built
//! once and can be applied any number of times:
//!
//! ```
//! use daprs::{Mapper, Transformer};
//!
//! let square = Mapper::new(|x: &u64| x * x).n_jobs(2);
//! assert_eq!(square.transform(vec![1, 2, 3]).unwrap(), vec![1, 4, 9]);
//! assert_eq!(square.transform(vec![4]).unwrap(), vec![16]);
//! ```
//!
//! Adapters over per-item functions have a `new` constructor for plain
//! functions and a `try_new` constructor for functions returning `Result`.
//!
//! [`ExecOptions`]: crate::ExecOptions

/// Execution-option builders shared by the per-item adapters.
macro_rules! exec_builders {
    ($ty:ident < $($g:ident),+ >) => {
        impl<$($g),+> $ty<$($g),+> {
            /// Replace all execution options at once.
            #[must_use]
            pub fn with_options(mut self, options: $crate::options::ExecOptions) -> Self {
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
            pub fn options(&self) -> &$crate::options::ExecOptions {
                &self.options
            }

            /// The calling convention the bound function is applied with.
            #[must_use]
            pub fn call_mode(&self) -> $crate::call::CallMode
            where
                M: $crate::call::Convention,
            {
                M::MODE
            }
        }
    };
}

mod combiner;
mod expander;
mod filter;
mod joiner;
mod manipulator;
mod mapper;
mod splitter;
mod window;

pub use combiner::Combiner;
pub use expander::Expander;
pub use filter::Filter;
pub use joiner::Joiner;
pub use manipulator::{Bound, Manipulator, NoArgs};
pub use mapper::Mapper;
pub use splitter::{Groups, Labeled, SplitShape, Splitter};
pub use window::{Flat, Window};
