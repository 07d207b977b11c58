use polyroot_core::AlgebraError;

use super::ConfigError;

/// Errors that can occur during the root search.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The system has fewer polynomials than variables.
    #[error("system has {equations} equation(s) for {dimension} variable(s)")]
    Underdetermined { equations: usize, dimension: usize },

    /// The search rectangle does not match the system's dimension.
    #[error("rectangle has dimension {found}, system has dimension {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("algebra error: {0}")]
    Algebra(#[from] AlgebraError),
}
