//! Per-generation progress hook.
//!
//! Observers see each generation right after it has been sorted and its best
//! chromosome recorded. They receive shared references only and cannot change
//! the course of the search.

/// Snapshot of one evaluated generation.
#[derive(Debug)]
pub struct GenerationReport<'a, T> {
    /// Zero-based generation index.
    pub generation: usize,
    /// The population sorted ascending by fitness, best last.
    pub population: &'a [T],
    /// The generation's best chromosome, i.e. the last element of `population`.
    pub best: &'a T,
    pub best_score: f64,
}

/// Receives a [`GenerationReport`] once per generation.
///
/// Any `FnMut(&GenerationReport<T>)` closure is an observer.
pub trait SearchObserver<T> {
    fn on_generation(&mut self, report: &GenerationReport<'_, T>);
}

/// Observer that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<T> SearchObserver<T> for NoopObserver {
    fn on_generation(&mut self, _report: &GenerationReport<'_, T>) {}
}

impl<T, F> SearchObserver<T> for F
where
    F: FnMut(&GenerationReport<'_, T>),
{
    fn on_generation(&mut self, report: &GenerationReport<'_, T>) {
        self(report)
    }
}
