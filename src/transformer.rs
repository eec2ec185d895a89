use anyhow::Result;
use std::sync::Arc;

/// The uniform contract shared by every adapter and combinator.
///
/// A transformer is immutable once built and keeps no state between calls, so
/// the same instance can be reused, shared across threads and nested inside
/// [`Pipeline`](crate::Pipeline)s and [`Union`](crate::Union)s.
pub trait Transformer<I>: Send + Sync {
    type Output;

    fn transform(&self, data: I) -> Result<Self::Output>;
}

/// A type-erased transformer, as stored by [`Union`](crate::Union).
pub type BoxedTransformer<I, O> = Box<dyn Transformer<I, Output = O>>;

impl<I, T> Transformer<I> for Box<T>
where
    T: Transformer<I> + ?Sized,
{
    type Output = T::Output;

    fn transform(&self, data: I) -> Result<Self::Output> {
        (**self).transform(data)
    }
}

impl<I, T> Transformer<I> for Arc<T>
where
    T: Transformer<I> + ?Sized,
{
    type Output = T::Output;

    fn transform(&self, data: I) -> Result<Self::Output> {
        (**self).transform(data)
    }
}
