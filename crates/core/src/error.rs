use thiserror::Error;

/// Errors raised by polynomial arithmetic.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlgebraError {
    /// Division by the zero polynomial or by a zero scalar.
    #[error("division by zero")]
    ZeroDivide,

    /// Operands were built over different variable spaces.
    #[error("operands belong to different variable spaces")]
    SpaceMismatch,

    /// Monomials can only be added when their exponent vectors are equal.
    #[error("cannot add monomials {left} and {right} with different exponents")]
    MismatchedExponents { left: String, right: String },

    /// Exact division left a remainder that the divisor cannot reduce.
    #[error("polynomial is not divisible by the divisor")]
    NotDivisible,

    /// A point, vector, or matrix has the wrong length for the space.
    #[error("expected dimension {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}
