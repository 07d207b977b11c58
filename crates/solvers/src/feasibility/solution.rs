use ndarray::Array1;

/// The verdict of a feasibility search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A point satisfying every inequality was found.
    Feasible,

    /// Every rectangle was pruned: no point satisfies all inequalities.
    Infeasible,

    /// No point was found, but some rectangles reached the minimum side
    /// length without being pruned.
    Inconclusive,

    /// The configured number of rectangles was examined.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a feasibility search.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// A point satisfying every inequality, when the status is
    /// [`Status::Feasible`].
    pub point: Option<Array1<f64>>,

    /// Number of rectangles examined.
    pub iters: usize,

    /// Number of rectangles abandoned at the minimum side length.
    pub exhausted: usize,
}
