//! Type-erased pipeline stages.
//!
//! A [`Pipeline`](crate::Pipeline) chains transformers whose input and output
//! types differ from stage to stage. The builder checks the chain statically;
//! at run time each stage is a [`DynStage`] moving a boxed [`Payload`] from
//! one stage to the next.

use crate::error::Error;
use crate::transformer::Transformer;
use anyhow::Result;
use std::any::{Any, type_name};
use std::marker::PhantomData;

/// A value travelling between pipeline stages.
pub(crate) type Payload = Box<dyn Any + Send>;

pub(crate) trait DynStage: Send + Sync {
    /// Run the stage at position `index` on `input`.
    fn apply(&self, index: usize, input: Payload) -> Result<Payload>;

    fn name(&self) -> &'static str;
}

pub(crate) struct Stage<T, I> {
    inner: T,
    _input: PhantomData<fn(I)>,
}

impl<T, I> Stage<T, I> {
    pub(crate) fn new(inner: T) -> Self {
        Self {
            inner,
            _input: PhantomData,
        }
    }
}

impl<T, I> DynStage for Stage<T, I>
where
    T: Transformer<I>,
    I: Send + 'static,
    T::Output: Send + 'static,
{
    fn apply(&self, index: usize, input: Payload) -> Result<Payload> {
        let data = input.downcast::<I>().map_err(|_| Error::StageType {
            stage: index,
            expected: type_name::<I>(),
        })?;
        let out = self.inner.transform(*data)?;
        Ok(Box::new(out))
    }

    fn name(&self) -> &'static str {
        type_name::<T>()
    }
}
