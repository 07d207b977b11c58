use polyroot_core::Observer;

use crate::traits::{EventKind, HasKind, HasRectangle};

/// Tallies the events of a search.
///
/// Pass `&mut stats` to a solver to read the counts after the solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Roots or feasible points reported.
    pub found: usize,
    /// Rectangles discarded.
    pub pruned: usize,
    /// Rectangles split into orthants.
    pub subdivided: usize,
    /// Rectangles abandoned at the minimum side length.
    pub exhausted: usize,
    /// Deepest subdivision level seen.
    pub max_depth: usize,
}

impl SearchStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of events seen.
    #[must_use]
    pub fn events(&self) -> usize {
        self.found + self.pruned + self.subdivided + self.exhausted
    }

    /// Records a single event.
    pub fn record(&mut self, kind: EventKind, depth: usize) {
        match kind {
            EventKind::Found => self.found += 1,
            EventKind::Pruned => self.pruned += 1,
            EventKind::Subdivided => self.subdivided += 1,
            EventKind::Exhausted => self.exhausted += 1,
        }
        self.max_depth = self.max_depth.max(depth);
    }
}

impl<E, A> Observer<E, A> for SearchStats
where
    E: HasKind + HasRectangle,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.kind(), event.depth());
        None
    }
}

/// Allows `&mut SearchStats` to be passed to solvers that take an observer by
/// value, so the counts can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut SearchStats
where
    E: HasKind + HasRectangle,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
