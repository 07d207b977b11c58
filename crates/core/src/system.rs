use std::{fmt, ops::Index};

use ndarray::{Array1, Array2};

use crate::{AlgebraError, Polynomial, VariableSpace};

/// An ordered list of polynomials over one [`VariableSpace`].
///
/// The first `dimension` entries are equations (`p = 0`). Any further
/// entries are inequality constraints (`p >= 0`). A system may hold fewer
/// polynomials than its dimension, in which case it has no inequalities.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialSystem {
    space: VariableSpace,
    polynomials: Vec<Polynomial>,
}

impl PolynomialSystem {
    /// Creates a system from polynomials over `space`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::SpaceMismatch`] if any polynomial belongs to
    /// a different variable space.
    pub fn new(space: &VariableSpace, polynomials: Vec<Polynomial>) -> Result<Self, AlgebraError> {
        if polynomials.iter().any(|p| !p.space().same_as(space)) {
            return Err(AlgebraError::SpaceMismatch);
        }
        Ok(Self {
            space: space.clone(),
            polynomials,
        })
    }

    pub fn space(&self) -> &VariableSpace {
        &self.space
    }

    /// Returns the number of variables, which is also the number of equations.
    pub fn dimension(&self) -> usize {
        self.space.dimension()
    }

    pub fn len(&self) -> usize {
        self.polynomials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polynomials.is_empty()
    }

    pub fn polynomials(&self) -> &[Polynomial] {
        &self.polynomials
    }

    /// Returns the polynomials that must vanish.
    pub fn equations(&self) -> &[Polynomial] {
        &self.polynomials[..self.equation_count()]
    }

    /// Returns the polynomials that must be non-negative.
    pub fn inequalities(&self) -> &[Polynomial] {
        &self.polynomials[self.equation_count()..]
    }

    fn equation_count(&self) -> usize {
        self.dimension().min(self.polynomials.len())
    }

    /// Returns the system with every polynomial normalized.
    pub fn normalized(&self) -> Self {
        self.map(Polynomial::normalize)
    }

    /// Returns true if every polynomial is multiaffine.
    pub fn is_multiaffine(&self) -> bool {
        self.polynomials.iter().all(Polynomial::is_multiaffine)
    }

    /// Evaluates every polynomial at `point`.
    ///
    /// # Panics
    ///
    /// Panics if `point` does not have one entry per variable.
    pub fn evaluate(&self, point: &Array1<f64>) -> Array1<f64> {
        self.polynomials.iter().map(|p| p.evaluate(point)).collect()
    }

    /// Translates every polynomial; see [`Polynomial::translate`].
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if `origin` has the wrong length.
    pub fn translate(&self, origin: &Array1<f64>) -> Result<Self, AlgebraError> {
        self.try_map(|p| p.translate(origin))
    }

    /// Changes coordinates of every polynomial; see [`Polynomial::change_coordinates`].
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if `matrix` has the wrong shape.
    pub fn change_coordinates(&self, matrix: &Array2<f64>) -> Result<Self, AlgebraError> {
        self.try_map(|p| p.change_coordinates(matrix))
    }

    fn map(&self, f: impl Fn(&Polynomial) -> Polynomial) -> Self {
        Self {
            space: self.space.clone(),
            polynomials: self.polynomials.iter().map(f).collect(),
        }
    }

    fn try_map(
        &self,
        f: impl Fn(&Polynomial) -> Result<Polynomial, AlgebraError>,
    ) -> Result<Self, AlgebraError> {
        Ok(Self {
            space: self.space.clone(),
            polynomials: self.polynomials.iter().map(f).collect::<Result<_, _>>()?,
        })
    }
}

impl Index<usize> for PolynomialSystem {
    type Output = Polynomial;

    fn index(&self, index: usize) -> &Polynomial {
        &self.polynomials[index]
    }
}

impl<'a> IntoIterator for &'a PolynomialSystem {
    type Item = &'a Polynomial;
    type IntoIter = std::slice::Iter<'a, Polynomial>;

    fn into_iter(self) -> Self::IntoIter {
        self.polynomials.iter()
    }
}

impl fmt::Display for PolynomialSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.polynomials.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let relation = if i < self.dimension() { "=" } else { ">=" };
            write!(f, "{p} {relation} 0")?;
        }
        Ok(())
    }
}
