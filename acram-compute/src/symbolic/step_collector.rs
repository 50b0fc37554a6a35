use log::trace;
use std::fmt::Debug;

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you don't
/// want to know the steps taken by an algorithm.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// A collector that logs every step at the `trace` level before handing it to another collector.
pub struct Traced<'a, S>(pub &'a mut dyn StepCollector<S>);

impl<S: Debug> StepCollector<S> for Traced<'_, S> {
    fn push(&mut self, step: S) {
        trace!("applied {:?}", step);
        self.0.push(step);
    }
}
