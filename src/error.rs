//! Framework error taxonomy.
//!
//! Every public operation returns [`anyhow::Result`]. Failures raised by the
//! framework itself (as opposed to user functions) are values of [`Error`], so
//! callers can tell them apart with `err.downcast_ref::<daprs::Error>()`.
//! Errors returned by user functions pass through untouched.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A [`Union`](crate::Union) received a different number of collections than it has branches.
    #[error("union has {transformers} transformer(s) but received {collections} collection(s)")]
    UnionArity { transformers: usize, collections: usize },

    /// Collections handed to `combine` are not the same length.
    #[error("collection {index} has {found} item(s), expected {expected} to align with collection 0")]
    Misaligned {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("window size and step must be positive (size = {size}, step = {step})")]
    InvalidWindow { size: usize, step: usize },

    #[error("n_jobs must be at least 1")]
    InvalidJobs,

    /// The worker pool for a parallel batch could not be built.
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    /// A pipeline stage received a payload of the wrong type.
    #[error("pipeline stage {stage} expected a payload of type `{expected}`")]
    StageType { stage: usize, expected: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = Error::UnionArity {
            transformers: 2,
            collections: 3,
        };
        assert_eq!(
            e.to_string(),
            "union has 2 transformer(s) but received 3 collection(s)"
        );

        let e = Error::Misaligned {
            index: 1,
            expected: 4,
            found: 2,
        };
        assert!(e.to_string().contains("collection 1 has 2"));
    }

    #[test]
    fn round_trips_through_anyhow() {
        let err: anyhow::Error = Error::InvalidJobs.into();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::InvalidJobs)));
    }
}
