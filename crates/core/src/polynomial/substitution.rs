use ndarray::{Array1, Array2};

use crate::{AlgebraError, ExponentVector, Monomial};

use super::Polynomial;

impl Polynomial {
    /// Returns `q` with `q(x) = p(x + origin)`.
    ///
    /// After translation, the value of `q` at zero is the value of `p` at
    /// `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if `origin` does not have
    /// one entry per variable.
    pub fn translate(&self, origin: &Array1<f64>) -> Result<Polynomial, AlgebraError> {
        if origin.len() != self.dimension() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.dimension(),
                found: origin.len(),
            });
        }

        let shifted: Vec<Polynomial> = origin
            .iter()
            .enumerate()
            .map(|(var, &offset)| {
                &Polynomial::variable(&self.space, var) + &Polynomial::constant(&self.space, offset)
            })
            .collect();

        Ok(self.substitute(&shifted))
    }

    /// Returns `q` with `q(y) = p(M y)`.
    ///
    /// Each variable `x_i` is replaced by the linear form `sum_j M[i][j] y_j`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if `matrix` is not square
    /// with one row per variable.
    pub fn change_coordinates(&self, matrix: &Array2<f64>) -> Result<Polynomial, AlgebraError> {
        let n = self.dimension();
        if matrix.nrows() != n || matrix.ncols() != n {
            return Err(AlgebraError::DimensionMismatch {
                expected: n,
                found: if matrix.nrows() == n {
                    matrix.ncols()
                } else {
                    matrix.nrows()
                },
            });
        }

        let forms: Vec<Polynomial> = matrix
            .rows()
            .into_iter()
            .map(|row| {
                let terms = row
                    .iter()
                    .enumerate()
                    .map(|(var, &weight)| {
                        Monomial::new(weight, ExponentVector::unit(&self.space, var, 1))
                    })
                    .collect();
                Polynomial::from_monomials(&self.space, terms)
            })
            .collect();

        Ok(self.substitute(&forms))
    }

    /// Replaces every variable `x_i` by `replacements[i]` and expands.
    ///
    /// Powers of each replacement are computed once, up to the degree the
    /// variable reaches in `self`.
    fn substitute(&self, replacements: &[Polynomial]) -> Polynomial {
        debug_assert_eq!(replacements.len(), self.dimension());

        let powers: Vec<Vec<Polynomial>> = replacements
            .iter()
            .enumerate()
            .map(|(var, replacement)| {
                let top = self.degree_of(var);
                let mut table = Vec::with_capacity(top as usize + 1);
                table.push(Polynomial::constant(&self.space, 1.0));
                for k in 1..=top as usize {
                    let next = &table[k - 1] * replacement;
                    table.push(next);
                }
                table
            })
            .collect();

        self.terms
            .iter()
            .map(|monomial| {
                monomial
                    .exponents()
                    .as_slice()
                    .iter()
                    .enumerate()
                    .filter(|&(_, &power)| power > 0)
                    .fold(
                        Polynomial::constant(&self.space, monomial.coefficient()),
                        |acc, (var, &power)| &acc * &powers[var][power as usize],
                    )
            })
            .fold(Polynomial::zero(&self.space), |acc, expanded| &acc + &expanded)
    }
}
