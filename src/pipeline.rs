use crate::error::Error;
use crate::node::{DynStage, Payload, Stage};
use crate::progress;
use crate::transformer::Transformer;
use anyhow::Result;
use std::any::type_name;
use std::marker::PhantomData;
use tracing::debug;

/// Sequential composition: each stage's output feeds the next stage.
///
/// The builder tracks the type flowing out of the last stage, so a stage whose
/// input doesn't match is a compile error:
///
/// ```
/// use daprs::{Filter, Mapper, Pipeline, Transformer};
///
/// let p = Pipeline::<Vec<i32>>::new()
///     .then(Mapper::new(|x: &i32| x * 3))
///     .then(Filter::new(|x: &i32| x % 2 == 0))
///     .then(Mapper::new(|x: &i32| x.to_string()));
///
/// assert_eq!(p.transform(vec![1, 2, 3, 4]).unwrap(), vec!["6", "12"]);
/// ```
///
/// A pipeline with no stages returns its input unchanged.
pub struct Pipeline<I, O = I> {
    stages: Vec<Box<dyn DynStage>>,
    verbose: u8,
    _types: PhantomData<fn(I) -> O>,
}

impl<I: Send + 'static> Pipeline<I, I> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            verbose: 0,
            _types: PhantomData,
        }
    }
}

impl<I: Send + 'static> Default for Pipeline<I, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> Pipeline<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Append a stage consuming this pipeline's current output.
    #[must_use]
    pub fn then<T>(self, stage: T) -> Pipeline<I, T::Output>
    where
        T: Transformer<O> + 'static,
        T::Output: Send + 'static,
    {
        let mut stages = self.stages;
        stages.push(Box::new(Stage::<T, O>::new(stage)));
        Pipeline {
            stages,
            verbose: self.verbose,
            _types: PhantomData,
        }
    }

    /// `verbose >= 1` reports one progress tick per stage.
    #[must_use]
    pub fn verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Type names of the stages, in order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl<I, O> Transformer<I> for Pipeline<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    type Output = O;

    fn transform(&self, data: I) -> Result<O> {
        let mut payload: Payload = Box::new(data);
        let stages = progress::wrap(self.stages.iter().enumerate(), self.verbose >= 1, "pipeline");
        for (index, stage) in stages {
            debug!(stage = index, name = stage.name(), "running pipeline stage");
            payload = stage.apply(index, payload)?;
        }
        payload.downcast::<O>().map(|out| *out).map_err(|_| {
            Error::StageType {
                stage: self.stages.len(),
                expected: type_name::<O>(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Flat, Mapper, Window};

    #[test]
    fn empty_pipeline_is_identity() -> Result<()> {
        let p = Pipeline::<Vec<u8>>::new();
        assert!(p.is_empty());
        assert_eq!(p.transform(vec![1, 2, 3])?, vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn stages_change_the_element_type() -> Result<()> {
        let p = Pipeline::<Vec<u32>>::new()
            .then(Window::new(2).with_step(2))
            .then(Mapper::new(|w: &Vec<u32>| w.iter().sum::<u32>()))
            .verbose(1);
        assert_eq!(p.len(), 2);
        assert_eq!(p.transform((1..=6).collect())?, vec![3, 7, 11]);
        Ok(())
    }

    #[test]
    fn stage_names_follow_order() {
        let p = Pipeline::<Vec<Vec<u8>>>::new().then(Flat).then(Window::new(1));
        let names = p.stage_names();
        assert!(names[0].ends_with("Flat"));
        assert!(names[1].ends_with("Window"));
    }
}
