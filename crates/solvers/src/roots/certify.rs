use ndarray::{Array1, Array2};
use polyroot_core::{AlgebraError, Interval, Polynomial, PolynomialSystem, Rectangle, linalg};
use tracing::debug;

use crate::{derivatives::PolynomialDerivatives, tolerance::SINGULAR_DETERMINANT};

/// Proves that `root` is the only root of `equations` in the rectangle.
///
/// With `J` the Jacobian at the root, `G(y) = F(root + J⁻¹ y)` has Jacobian
/// `I + E(y)` with `E(0) = 0`. The rectangle maps into the box `B` enclosing
/// `J (rectangle - root)`. If every row of `|E|` sums to less than one over
/// `B`, then `G` is injective on `B`, so `F` has at most one root in the
/// rectangle.
///
/// A `false` result is inconclusive.
pub(super) fn has_no_other_roots_in(
    equations: &PolynomialSystem,
    root: &Array1<f64>,
    jacobian: &Array2<f64>,
    rectangle: &Rectangle,
) -> Result<bool, AlgebraError> {
    let inverse = match linalg::inverse(jacobian, SINGULAR_DETERMINANT) {
        Ok(inverse) => inverse,
        Err(error) => {
            debug!(%error, ?root, "cannot certify root with singular Jacobian");
            return Ok(false);
        }
    };

    let local = equations.translate(root)?.change_coordinates(&inverse)?;
    let Some(image) = image_box(jacobian, root, rectangle) else {
        return Ok(false);
    };

    let identity = Polynomial::constant(equations.space(), 1.0);
    for (row, g) in local.polynomials().iter().enumerate() {
        let mut sum = 0.0;
        for var in 0..g.dimension() {
            let partial = g.partial_derivative(var);
            let deviation = if var == row {
                &partial - &identity
            } else {
                partial
            };
            sum += PolynomialDerivatives::new(&deviation).magnitude_bound(&image);
            if sum >= 1.0 {
                debug!(row, ?root, "uniqueness bound not met");
                return Ok(false);
            }
        }
    }

    Ok(true)
}

/// Encloses the image of `rectangle - root` under `jacobian`.
fn image_box(jacobian: &Array2<f64>, root: &Array1<f64>, rectangle: &Rectangle) -> Option<Rectangle> {
    let center = jacobian.dot(&(rectangle.center() - root));
    let half = rectangle.side_lengths() * 0.5;
    let reach = jacobian.mapv(f64::abs).dot(&half);

    center
        .iter()
        .zip(reach.iter())
        .map(|(&c, &r)| Interval::new(c - r, c + r).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;
    use polyroot_core::VariableSpace;

    fn interval(lo: f64, hi: f64) -> Interval {
        Interval::new(lo, hi).unwrap()
    }

    fn square_minus_one(space: &VariableSpace) -> PolynomialSystem {
        let p = Polynomial::from_terms(space, &[(1.0, &[2]), (-1.0, &[0])]);
        PolynomialSystem::new(space, vec![p]).unwrap()
    }

    #[test]
    fn certifies_in_small_rectangle() {
        // Around x = -1, E(y) = y / 2 and the image box is [0, 1].
        let space = VariableSpace::new(1);
        let system = square_minus_one(&space);
        let rectangle = Rectangle::new(vec![interval(-1.5, -1.0)]);

        let certified =
            has_no_other_roots_in(&system, &array![-1.0], &array![[-2.0]], &rectangle).unwrap();
        assert!(certified);
    }

    #[test]
    fn refuses_rectangle_holding_both_roots() {
        let space = VariableSpace::new(1);
        let system = square_minus_one(&space);
        let rectangle = Rectangle::new(vec![interval(-2.0, 2.0)]);

        let certified =
            has_no_other_roots_in(&system, &array![1.0], &array![[2.0]], &rectangle).unwrap();
        assert!(!certified);
    }

    #[test]
    fn linear_systems_are_always_certified() {
        let space = VariableSpace::new(2);
        let system = PolynomialSystem::new(
            &space,
            vec![
                Polynomial::from_terms(&space, &[(1.0, &[1, 0]), (1.0, &[0, 1]), (-1.0, &[0, 0])]),
                Polynomial::from_terms(&space, &[(1.0, &[1, 0]), (-1.0, &[0, 1])]),
            ],
        )
        .unwrap();
        let rectangle = Rectangle::unit_cube(2);

        let certified = has_no_other_roots_in(
            &system,
            &array![0.5, 0.5],
            &array![[1.0, 1.0], [1.0, -1.0]],
            &rectangle,
        )
        .unwrap();
        assert!(certified);
    }

    #[test]
    fn singular_jacobian_is_inconclusive() {
        let space = VariableSpace::new(1);
        let system = square_minus_one(&space);
        let rectangle = Rectangle::new(vec![interval(-0.5, 0.5)]);

        let certified =
            has_no_other_roots_in(&system, &array![0.0], &array![[0.0]], &rectangle).unwrap();
        assert!(!certified);
    }
}
