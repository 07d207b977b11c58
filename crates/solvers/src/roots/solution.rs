use ndarray::Array1;

/// Indicates why the root search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every rectangle was pruned, certified, or exhausted.
    Completed,

    /// The configured number of roots was found.
    RootCapReached,

    /// The configured number of rectangles was examined.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root search.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// Accepted roots, in the order they were found.
    pub roots: Vec<Array1<f64>>,

    /// Number of rectangles examined.
    pub iters: usize,

    /// Number of rectangles abandoned at the minimum side length.
    ///
    /// A nonzero count means some part of the region may hold roots that
    /// were not isolated, such as a singular root or a curve of roots.
    pub exhausted: usize,
}
