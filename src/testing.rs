//! Helpers for testing code built on daprs.
//!
//! - **Assertions**: compare primitive and transformer outputs with detailed
//!   panic messages, including order-insensitive and grouped comparisons
//! - **Builders**: assemble item collections and multi-collection inputs for
//!   [`combine`](crate::combine), [`join`](crate::join) and [`Union`](crate::Union)
//!
//! # Quick Start
//!
//! ```
//! use daprs::testing::*;
//! use daprs::{map, ExecOptions};
//!
//! let data = TestDataBuilder::<i64>::new().add_range(1..=4).build();
//! let out = map(|x: &i64| x * 10, &data, &ExecOptions::parallel(2)).unwrap();
//! assert_collections_equal(&out, &[10, 20, 30, 40]);
//! ```

pub mod assertions;
pub mod builders;

pub use assertions::*;
pub use builders::*;
