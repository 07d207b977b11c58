/// Errors that can occur during the feasibility search.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The search rectangle does not match the system's dimension.
    #[error("rectangle has dimension {found}, system has dimension {expected}")]
    DimensionMismatch { expected: usize, found: usize },
}
