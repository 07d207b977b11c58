use std::{fmt, ops::Mul};

use ndarray::Array1;

use crate::{AlgebraError, ExponentVector, VariableSpace};

/// A coefficient paired with an exponent vector.
///
/// A zero coefficient always carries the zero exponent vector, so every zero
/// monomial of a space compares equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Monomial {
    coefficient: f64,
    exponents: ExponentVector,
}

impl Monomial {
    /// Creates a monomial, canonicalizing a zero coefficient.
    pub fn new(coefficient: f64, exponents: ExponentVector) -> Self {
        #[allow(clippy::float_cmp)]
        let exponents = if coefficient == 0.0 {
            ExponentVector::zero(exponents.space())
        } else {
            exponents
        };
        Self {
            coefficient,
            exponents,
        }
    }

    /// Creates the constant monomial `coefficient`.
    pub fn constant(space: &VariableSpace, coefficient: f64) -> Self {
        Self::new(coefficient, ExponentVector::zero(space))
    }

    /// Returns the coefficient.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Returns the exponent vector.
    pub fn exponents(&self) -> &ExponentVector {
        &self.exponents
    }

    /// Returns true if the coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.0
    }

    /// Returns the total degree.
    pub fn degree(&self) -> u32 {
        self.exponents.degree()
    }

    /// Adds a like term.
    ///
    /// A zero monomial is the identity for addition.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::MismatchedExponents`] if both monomials are
    /// nonzero and their exponent vectors differ.
    pub fn checked_add(&self, other: &Monomial) -> Result<Monomial, AlgebraError> {
        if other.is_zero() {
            return Ok(self.clone());
        }
        if self.is_zero() {
            return Ok(other.clone());
        }
        if self.exponents != other.exponents {
            return Err(AlgebraError::MismatchedExponents {
                left: self.exponents.to_string(),
                right: other.exponents.to_string(),
            });
        }
        Ok(Monomial::new(
            self.coefficient + other.coefficient,
            self.exponents.clone(),
        ))
    }

    /// Returns the monomial with its coefficient multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Monomial {
        Monomial::new(self.coefficient * factor, self.exponents.clone())
    }

    /// Evaluates the monomial at `point`.
    ///
    /// # Panics
    ///
    /// Panics if `point` does not have one entry per variable.
    pub fn evaluate(&self, point: &Array1<f64>) -> f64 {
        assert_eq!(
            point.len(),
            self.exponents.dimension(),
            "point dimension must match the variable space"
        );
        self.exponents
            .as_slice()
            .iter()
            .zip(point.iter())
            .filter(|&(&power, _)| power > 0)
            .fold(self.coefficient, |acc, (&power, &x)| acc * powu(x, power))
    }
}

impl Mul for &Monomial {
    type Output = Monomial;

    fn mul(self, rhs: &Monomial) -> Monomial {
        Monomial::new(
            self.coefficient * rhs.coefficient,
            &self.exponents + &rhs.exponents,
        )
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponents.is_zero() {
            write!(f, "{}", self.coefficient)
        } else {
            write!(f, "{}*{}", self.coefficient, self.exponents)
        }
    }
}

/// Raises `base` to a non-negative integer power by repeated squaring.
pub(crate) fn powu(base: f64, exponent: u32) -> f64 {
    let mut result = 1.0;
    let mut square = base;
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= square;
        }
        remaining >>= 1;
        if remaining > 0 {
            square *= square;
        }
    }
    result
}
