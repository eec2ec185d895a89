use crate::primitives::{flatten, windowed};
use crate::transformer::Transformer;
use anyhow::Result;

/// Transformer for [`windowed`](crate::windowed). The step defaults to 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Window {
    size: usize,
    step: usize,
}

impl Window {
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size, step: 1 }
    }

    #[must_use]
    pub const fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }
}

impl<T: Clone> Transformer<Vec<T>> for Window {
    type Output = Vec<Vec<T>>;

    fn transform(&self, data: Vec<T>) -> Result<Self::Output> {
        windowed(&data, self.size, self.step)
    }
}

/// Transformer for [`flatten`](crate::flatten).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flat;

impl<C: IntoIterator> Transformer<Vec<C>> for Flat {
    type Output = Vec<C::Item>;

    fn transform(&self, data: Vec<C>) -> Result<Self::Output> {
        Ok(flatten(data))
    }
}
