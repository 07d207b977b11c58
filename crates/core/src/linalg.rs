//! Dense linear algebra for small systems.
//!
//! Newton steps only ever factor matrices whose size is the number of
//! variables, so plain Gaussian elimination with partial pivoting is enough.

use ndarray::Array2;
use thiserror::Error;

/// Errors raised by [`determinant`] and [`inverse`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// The matrix is not square.
    #[error("expected a square matrix, found {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// The determinant magnitude fell below the caller's threshold.
    #[error("matrix is singular (determinant {determinant:e})")]
    Singular { determinant: f64 },
}

/// Computes the determinant by elimination with partial pivoting.
///
/// The determinant of a `0x0` matrix is one.
///
/// # Errors
///
/// Returns [`LinalgError::NotSquare`] if `matrix` is not square.
pub fn determinant(matrix: &Array2<f64>) -> Result<f64, LinalgError> {
    check_square(matrix)?;
    let mut work = matrix.clone();
    Ok(eliminate(&mut work, None))
}

/// Inverts `matrix`, refusing matrices whose determinant magnitude is below
/// `tolerance`.
///
/// # Errors
///
/// Returns [`LinalgError::NotSquare`] if `matrix` is not square, or
/// [`LinalgError::Singular`] if `|det(matrix)| < tolerance`.
pub fn inverse(matrix: &Array2<f64>, tolerance: f64) -> Result<Array2<f64>, LinalgError> {
    check_square(matrix)?;
    let n = matrix.nrows();

    let mut work = matrix.clone();
    let mut inv = Array2::eye(n);
    let determinant = eliminate(&mut work, Some(&mut inv));

    if determinant.abs() < tolerance || !determinant.is_finite() {
        return Err(LinalgError::Singular { determinant });
    }

    // `work` is now upper triangular; back-substitute into `inv`.
    for col in (0..n).rev() {
        let pivot = work[[col, col]];
        for k in 0..n {
            inv[[col, k]] /= pivot;
        }
        for row in 0..col {
            let factor = work[[row, col]];
            if factor != 0.0 {
                for k in 0..n {
                    inv[[row, k]] -= factor * inv[[col, k]];
                }
            }
        }
    }

    Ok(inv)
}

fn check_square(matrix: &Array2<f64>) -> Result<(), LinalgError> {
    let (rows, cols) = matrix.dim();
    if rows == cols {
        Ok(())
    } else {
        Err(LinalgError::NotSquare { rows, cols })
    }
}

/// Reduces `work` to upper triangular form and returns the determinant.
///
/// Row operations are mirrored onto `companion` when one is given. A zero
/// pivot column ends elimination early with a zero determinant.
fn eliminate(work: &mut Array2<f64>, mut companion: Option<&mut Array2<f64>>) -> f64 {
    let n = work.nrows();
    let mut determinant = 1.0;

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| work[[a, col]].abs().total_cmp(&work[[b, col]].abs()))
            .unwrap_or(col);

        let pivot = work[[pivot_row, col]];
        if pivot == 0.0 {
            return 0.0;
        }

        if pivot_row != col {
            swap_rows(work, pivot_row, col);
            if let Some(other) = companion.as_deref_mut() {
                swap_rows(other, pivot_row, col);
            }
            determinant = -determinant;
        }
        determinant *= pivot;

        for row in col + 1..n {
            let factor = work[[row, col]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                work[[row, k]] -= factor * work[[col, k]];
            }
            if let Some(other) = companion.as_deref_mut() {
                for k in 0..other.ncols() {
                    other[[row, k]] -= factor * other[[col, k]];
                }
            }
        }
    }

    determinant
}

fn swap_rows(matrix: &mut Array2<f64>, a: usize, b: usize) {
    for k in 0..matrix.ncols() {
        matrix.swap([a, k], [b, k]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn determinant_with_pivoting() {
        let m = array![[0.0, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 1.0]];
        assert_relative_eq!(determinant(&m).unwrap(), -5.0, epsilon = 1e-12);
        assert_relative_eq!(determinant(&Array2::zeros((0, 0))).unwrap(), 1.0);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = array![[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]];
        let inv = inverse(&m, 1e-12).unwrap();
        let product = m.dot(&inv);

        for ((i, j), &value) in product.indexed_iter() {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(value, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn singular_matrices_are_rejected() {
        let m = array![[1.0, 2.0], [2.0, 4.0]];
        assert!(matches!(
            inverse(&m, 1e-12),
            Err(LinalgError::Singular { .. })
        ));

        let tiny = array![[1e-7, 0.0], [0.0, 1e-7]];
        assert!(inverse(&tiny, 1e-12).is_err());
        assert!(inverse(&tiny, 1e-15).is_ok());
    }

    #[test]
    fn non_square_is_an_error() {
        let m = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            determinant(&m),
            Err(LinalgError::NotSquare { rows: 2, cols: 3 })
        );
    }
}
