//! Sparse multivariate polynomials with `f64` coefficients.
//!
//! A [`Polynomial`] is kept in canonical form: monomials sorted by ascending
//! exponent vector, no two monomials sharing an exponent vector, and no zero
//! coefficients. The zero polynomial is the empty list. Every operation in
//! this module returns a canonical polynomial, so structural equality is
//! polynomial equality.

mod arithmetic;
mod calculus;
mod division;
mod substitution;

use std::fmt;

use ndarray::Array1;

use crate::{ExponentVector, Monomial, VariableSpace};

/// A polynomial over a [`VariableSpace`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    space: VariableSpace,
    terms: Vec<Monomial>,
}

impl Polynomial {
    /// Creates the zero polynomial.
    pub fn zero(space: &VariableSpace) -> Self {
        Self {
            space: space.clone(),
            terms: Vec::new(),
        }
    }

    /// Creates a constant polynomial.
    pub fn constant(space: &VariableSpace, value: f64) -> Self {
        Self::from_monomials(space, vec![Monomial::constant(space, value)])
    }

    /// Creates the polynomial consisting of the single variable `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` is outside the space.
    pub fn variable(space: &VariableSpace, var: usize) -> Self {
        Self::from_monomials(
            space,
            vec![Monomial::new(1.0, ExponentVector::unit(space, var, 1))],
        )
    }

    /// Creates a polynomial from `(coefficient, exponents)` pairs.
    ///
    /// This is a convenience for writing polynomials by hand:
    /// `from_terms(&space, &[(1.0, &[2, 1]), (3.0, &[0, 0])])` is `x1^2*x2 + 3`.
    ///
    /// # Panics
    ///
    /// Panics if an exponent slice does not have one entry per variable.
    pub fn from_terms(space: &VariableSpace, terms: &[(f64, &[u32])]) -> Self {
        let monomials = terms
            .iter()
            .map(|&(coefficient, exponents)| {
                Monomial::new(coefficient, ExponentVector::new(space, exponents.to_vec()))
            })
            .collect();
        Self::from_monomials(space, monomials)
    }

    /// Creates a polynomial from arbitrary monomials, restoring canonical form.
    ///
    /// Like terms are merged and zero terms are dropped.
    ///
    /// # Panics
    ///
    /// Panics if a monomial belongs to a different space.
    pub fn from_monomials(space: &VariableSpace, mut monomials: Vec<Monomial>) -> Self {
        for monomial in &monomials {
            assert!(
                monomial.exponents().space().same_as(space),
                "monomial belongs to a different variable space"
            );
        }

        monomials.retain(|m| !m.is_zero());
        monomials.sort_by(|a, b| a.exponents().cmp(b.exponents()));

        let mut terms: Vec<Monomial> = Vec::with_capacity(monomials.len());
        for monomial in monomials {
            match terms.last_mut() {
                Some(last) if last.exponents() == monomial.exponents() => {
                    let sum = last.coefficient() + monomial.coefficient();
                    *last = Monomial::new(sum, monomial.exponents().clone());
                }
                _ => terms.push(monomial),
            }
        }
        terms.retain(|m| !m.is_zero());

        Self {
            space: space.clone(),
            terms,
        }
    }

    /// Builds a polynomial from terms the caller guarantees are canonical.
    pub(crate) fn from_canonical(space: &VariableSpace, terms: Vec<Monomial>) -> Self {
        debug_assert!(
            terms
                .windows(2)
                .all(|w| w[0].exponents() < w[1].exponents())
        );
        debug_assert!(terms.iter().all(|m| !m.is_zero()));
        Self {
            space: space.clone(),
            terms,
        }
    }

    /// Returns the variable space.
    pub fn space(&self) -> &VariableSpace {
        &self.space
    }

    /// Returns the number of variables in the space.
    pub fn dimension(&self) -> usize {
        self.space.dimension()
    }

    /// Returns the monomials in ascending exponent order.
    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if the polynomial has no variable terms.
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|m| m.exponents().is_zero())
    }

    /// Returns the constant term.
    pub fn constant_term(&self) -> f64 {
        self.terms
            .first()
            .filter(|m| m.exponents().is_zero())
            .map_or(0.0, Monomial::coefficient)
    }

    /// Returns the total degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<u32> {
        self.terms.iter().map(Monomial::degree).max()
    }

    /// Returns true if no variable appears with exponent above one.
    ///
    /// Multiaffine polynomials attain their extremes over a rectangle at its
    /// vertices.
    pub fn is_multiaffine(&self) -> bool {
        self.terms.iter().all(|m| m.exponents().is_multiaffine())
    }

    /// Evaluates the polynomial at `point`.
    ///
    /// # Panics
    ///
    /// Panics if `point` does not have one entry per variable.
    pub fn evaluate(&self, point: &Array1<f64>) -> f64 {
        assert_eq!(
            point.len(),
            self.dimension(),
            "point dimension must match the variable space"
        );
        self.terms.iter().map(|m| m.evaluate(point)).sum()
    }

    /// Returns the largest coefficient magnitude, or zero for the zero polynomial.
    pub fn max_coefficient_magnitude(&self) -> f64 {
        self.terms
            .iter()
            .map(|m| m.coefficient().abs())
            .fold(0.0, f64::max)
    }

    /// Divides every coefficient by the largest coefficient magnitude.
    ///
    /// The result has a largest coefficient of `±1` and the same sign
    /// everywhere as the original, so inequalities keep their meaning.
    /// The zero polynomial is returned unchanged.
    pub fn normalize(&self) -> Polynomial {
        let scale = self.max_coefficient_magnitude();
        if scale == 0.0 {
            return self.clone();
        }
        let terms = self
            .terms
            .iter()
            .map(|m| Monomial::new(m.coefficient() / scale, m.exponents().clone()))
            .collect();
        Polynomial::from_monomials(&self.space, terms)
    }

    pub(crate) fn assert_same_space(&self, other: &Polynomial) {
        assert!(
            self.space.same_as(&other.space),
            "polynomials belong to different variable spaces"
        );
    }
}

impl fmt::Display for Polynomial {
    /// Writes the polynomial highest term first, e.g. `2*x1^2*x2 - x2 + 3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }

        for (i, monomial) in self.terms.iter().rev().enumerate() {
            let coefficient = monomial.coefficient();
            let magnitude = coefficient.abs();
            match (i, coefficient < 0.0) {
                (0, true) => f.write_str("-")?,
                (0, false) => {}
                (_, true) => f.write_str(" - ")?,
                (_, false) => f.write_str(" + ")?,
            }

            let exponents = monomial.exponents();
            #[allow(clippy::float_cmp)]
            if exponents.is_zero() {
                write!(f, "{magnitude}")?;
            } else if magnitude == 1.0 {
                write!(f, "{exponents}")?;
            } else {
                write!(f, "{magnitude}*{exponents}")?;
            }
        }
        Ok(())
    }
}
