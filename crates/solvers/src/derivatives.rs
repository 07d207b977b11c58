//! Taylor bounds for polynomials over rectangles.
//!
//! A polynomial equals its own Taylor expansion about any point, so over a
//! rectangle with center `c` and half side lengths `h`,
//!
//! ```text
//! |p(c + d) - p(c)| <= sum over a != 0 of |D^a p(c)| * h^a / a!
//! ```
//!
//! [`PolynomialDerivatives`] stores every nonzero mixed partial `D^a p` in a
//! tree whose paths differentiate in non-decreasing variable order, so each
//! multi-index `a` appears exactly once. Evaluating the tree at a rectangle's
//! center gives the bound above, which is what lets the searches prove that a
//! rectangle holds no root or no feasible point.

use ndarray::{Array1, Array2};
use polyroot_core::{Polynomial, PolynomialSystem, Rectangle};

/// Vertex enumeration is used for multiaffine polynomials up to this dimension.
const VERTEX_ENUMERATION_LIMIT: usize = 16;

#[derive(Debug, Clone)]
struct Node {
    var: usize,
    derivative: Polynomial,
    children: Vec<Node>,
}

/// Builds the nodes for the nonzero partials of `p` by variables `from..`.
fn children_of(p: &Polynomial, from: usize) -> Vec<Node> {
    (from..p.dimension())
        .filter_map(|var| {
            let derivative = p.partial_derivative(var);
            if derivative.is_zero() {
                return None;
            }
            Some(Node {
                var,
                children: children_of(&derivative, var),
                derivative,
            })
        })
        .collect()
}

/// Sums `|D^a p(center)| * half^a / a!` over the subtree.
///
/// `run` is the variable of the parent node and how many times in a row it
/// has been differentiated, which supplies the factorial one factor at a time.
fn variation(
    nodes: &[Node],
    center: &Array1<f64>,
    half: &Array1<f64>,
    weight: f64,
    run: Option<(usize, u32)>,
) -> f64 {
    nodes
        .iter()
        .map(|node| {
            let count = match run {
                Some((var, count)) if var == node.var => count + 1,
                _ => 1,
            };
            let weight = weight * half[node.var] / f64::from(count);
            if weight == 0.0 {
                return 0.0;
            }
            node.derivative.evaluate(center).abs() * weight
                + variation(&node.children, center, half, weight, Some((node.var, count)))
        })
        .sum()
}

fn count_nodes(nodes: &[Node]) -> usize {
    nodes.iter().map(|n| 1 + count_nodes(&n.children)).sum()
}

/// A polynomial together with all of its nonzero mixed partial derivatives.
#[derive(Debug, Clone)]
pub struct PolynomialDerivatives {
    polynomial: Polynomial,
    multiaffine: bool,
    children: Vec<Node>,
}

impl PolynomialDerivatives {
    /// Builds the derivative tree of `polynomial`.
    pub fn new(polynomial: &Polynomial) -> Self {
        Self {
            multiaffine: polynomial.is_multiaffine(),
            children: children_of(polynomial, 0),
            polynomial: polynomial.clone(),
        }
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// Returns the first partial derivative by `var`, or `None` if it is zero.
    pub fn partial(&self, var: usize) -> Option<&Polynomial> {
        self.children
            .iter()
            .find(|node| node.var == var)
            .map(|node| &node.derivative)
    }

    /// Returns the number of nonzero derivatives stored, excluding the
    /// polynomial itself.
    pub fn derivative_count(&self) -> usize {
        count_nodes(&self.children)
    }

    /// Bounds `|p(x) - p(center)|` over the rectangle.
    ///
    /// # Panics
    ///
    /// Panics if the rectangle's dimension differs from the polynomial's.
    pub fn variation_bound(&self, rectangle: &Rectangle) -> f64 {
        let center = rectangle.center();
        let half = rectangle.side_lengths() * 0.5;
        variation(&self.children, &center, &half, 1.0, None)
    }

    /// Bounds `|p(x)|` over the rectangle.
    ///
    /// Multiaffine polynomials attain their extremes at vertices, so for them
    /// the bound is exact.
    ///
    /// # Panics
    ///
    /// Panics if the rectangle's dimension differs from the polynomial's.
    pub fn magnitude_bound(&self, rectangle: &Rectangle) -> f64 {
        if self.uses_vertices(rectangle) {
            return rectangle
                .vertices()
                .map(|v| self.polynomial.evaluate(&v).abs())
                .fold(0.0, f64::max);
        }
        self.polynomial.evaluate(&rectangle.center()).abs() + self.variation_bound(rectangle)
    }

    /// Returns true if the polynomial provably has no zero in the rectangle.
    ///
    /// A `false` result is inconclusive.
    ///
    /// # Panics
    ///
    /// Panics if the rectangle's dimension differs from the polynomial's.
    pub fn poly_has_no_roots_in(&self, rectangle: &Rectangle) -> bool {
        if self.uses_vertices(rectangle) {
            let values: Vec<f64> = rectangle
                .vertices()
                .map(|v| self.polynomial.evaluate(&v))
                .collect();
            return values.iter().all(|&value| value > 0.0)
                || values.iter().all(|&value| value < 0.0);
        }
        let value = self.polynomial.evaluate(&rectangle.center());
        value.abs() > self.variation_bound(rectangle)
    }

    /// Returns true if the polynomial is provably negative throughout the
    /// rectangle.
    ///
    /// A `false` result is inconclusive.
    ///
    /// # Panics
    ///
    /// Panics if the rectangle's dimension differs from the polynomial's.
    pub fn poly_everywhere_negative_in(&self, rectangle: &Rectangle) -> bool {
        if self.uses_vertices(rectangle) {
            return rectangle
                .vertices()
                .all(|v| self.polynomial.evaluate(&v) < 0.0);
        }
        let value = self.polynomial.evaluate(&rectangle.center());
        value < 0.0 && value + self.variation_bound(rectangle) < 0.0
    }

    fn uses_vertices(&self, rectangle: &Rectangle) -> bool {
        self.multiaffine && rectangle.dimension() <= VERTEX_ENUMERATION_LIMIT
    }
}

/// Derivative trees for every polynomial of a [`PolynomialSystem`].
///
/// Entries keep the system's order, so the first `dimension` trees belong to
/// equations and the rest to inequalities.
#[derive(Debug, Clone)]
pub struct PolynomialSystemDerivatives {
    trees: Vec<PolynomialDerivatives>,
    dimension: usize,
}

impl PolynomialSystemDerivatives {
    pub fn new(system: &PolynomialSystem) -> Self {
        Self {
            trees: system.polynomials().iter().map(PolynomialDerivatives::new).collect(),
            dimension: system.dimension(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn trees(&self) -> &[PolynomialDerivatives] {
        &self.trees
    }

    pub fn equations(&self) -> &[PolynomialDerivatives] {
        &self.trees[..self.equation_count()]
    }

    pub fn inequalities(&self) -> &[PolynomialDerivatives] {
        &self.trees[self.equation_count()..]
    }

    fn equation_count(&self) -> usize {
        self.dimension.min(self.trees.len())
    }

    /// Evaluates the equations at `point`.
    pub fn equation_values(&self, point: &Array1<f64>) -> Array1<f64> {
        self.equations()
            .iter()
            .map(|tree| tree.polynomial.evaluate(point))
            .collect()
    }

    /// Evaluates the Jacobian of the equations at `point`.
    ///
    /// Row `i` holds the gradient of equation `i`.
    pub fn jacobian(&self, point: &Array1<f64>) -> Array2<f64> {
        let equations = self.equations();
        Array2::from_shape_fn((equations.len(), self.dimension), |(i, j)| {
            equations[i]
                .partial(j)
                .map_or(0.0, |partial| partial.evaluate(point))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;
    use polyroot_core::{Interval, VariableSpace};

    fn rect(bounds: &[(f64, f64)]) -> Rectangle {
        bounds
            .iter()
            .map(|&(lo, hi)| Interval::new(lo, hi).unwrap())
            .collect()
    }

    #[test]
    fn tree_holds_each_multi_index_once() {
        // x1^2 x2
        let space = VariableSpace::new(2);
        let p = Polynomial::from_terms(&space, &[(1.0, &[2, 1])]);
        let tree = PolynomialDerivatives::new(&p);

        // Multi-indices (1,0) (2,0) (1,1) (2,1) (0,1).
        assert_eq!(tree.derivative_count(), 5);
        assert!(tree.partial(0).is_some());
        assert!(tree.partial(1).is_some());
    }

    #[test]
    fn variation_bound_is_exact_taylor_sum() {
        // p = x^2 on [-1, 3]: center 1, half width 2.
        // |p'(1)| * 2 + |p''(1)| * 4 / 2 = 4 + 4 = 8.
        let space = VariableSpace::new(1);
        let p = Polynomial::from_terms(&space, &[(1.0, &[2])]);
        let tree = PolynomialDerivatives::new(&p);

        assert_relative_eq!(tree.variation_bound(&rect(&[(-1.0, 3.0)])), 8.0);
        assert_relative_eq!(tree.magnitude_bound(&rect(&[(-1.0, 3.0)])), 9.0);
    }

    #[test]
    fn bound_encloses_sampled_values() {
        let space = VariableSpace::new(2);
        let p = Polynomial::from_terms(
            &space,
            &[(1.0, &[3, 0]), (-2.0, &[1, 2]), (0.5, &[0, 1]), (-0.25, &[0, 0])],
        );
        let tree = PolynomialDerivatives::new(&p);
        let r = rect(&[(-0.5, 1.0), (0.25, 0.75)]);

        let center_value = p.evaluate(&r.center());
        let bound = tree.variation_bound(&r);
        for i in 0..=10 {
            for j in 0..=10 {
                let x = -0.5 + 1.5 * f64::from(i) / 10.0;
                let y = 0.25 + 0.5 * f64::from(j) / 10.0;
                let value = p.evaluate(&array![x, y]);
                assert!((value - center_value).abs() <= bound + 1e-12);
            }
        }
    }

    #[test]
    fn proves_absence_of_roots_away_from_zero_set() {
        // x^2 - 1 has roots at +-1.
        let space = VariableSpace::new(1);
        let p = Polynomial::from_terms(&space, &[(1.0, &[2]), (-1.0, &[0])]);
        let tree = PolynomialDerivatives::new(&p);

        assert!(tree.poly_has_no_roots_in(&rect(&[(-0.25, 0.25)])));
        assert!(tree.poly_has_no_roots_in(&rect(&[(1.5, 2.0)])));
        assert!(!tree.poly_has_no_roots_in(&rect(&[(0.5, 1.5)])));

        assert!(tree.poly_everywhere_negative_in(&rect(&[(-0.25, 0.25)])));
        assert!(!tree.poly_everywhere_negative_in(&rect(&[(1.5, 2.0)])));
    }

    #[test]
    fn multiaffine_polynomials_use_vertices() {
        // x1 x2 - 0.5 on [0.8, 1]^2 is positive: smallest vertex value 0.14.
        let space = VariableSpace::new(2);
        let p = Polynomial::from_terms(&space, &[(1.0, &[1, 1]), (-0.5, &[0, 0])]);
        let tree = PolynomialDerivatives::new(&p);

        assert!(tree.poly_has_no_roots_in(&rect(&[(0.8, 1.0), (0.8, 1.0)])));
        assert!(!tree.poly_has_no_roots_in(&rect(&[(0.0, 1.0), (0.0, 1.0)])));
        assert!(tree.poly_everywhere_negative_in(&rect(&[(0.0, 0.5), (0.0, 0.5)])));
        assert_relative_eq!(tree.magnitude_bound(&rect(&[(0.0, 1.0), (0.0, 1.0)])), 0.5);
    }

    #[test]
    fn constants_in_dimension_zero() {
        let space = VariableSpace::new(0);
        let negative = PolynomialDerivatives::new(&Polynomial::constant(&space, -1.0));
        let zero = PolynomialDerivatives::new(&Polynomial::zero(&space));
        let point = Rectangle::unit_cube(0);

        assert!(negative.poly_has_no_roots_in(&point));
        assert!(negative.poly_everywhere_negative_in(&point));
        assert!(!zero.poly_has_no_roots_in(&point));
        assert!(!zero.poly_everywhere_negative_in(&point));
    }

    #[test]
    fn jacobian_rows_are_gradients() {
        let space = VariableSpace::new(2);
        let system = PolynomialSystem::new(
            &space,
            vec![
                Polynomial::from_terms(&space, &[(1.0, &[2, 0]), (1.0, &[0, 1])]),
                Polynomial::from_terms(&space, &[(3.0, &[1, 1])]),
                Polynomial::variable(&space, 0),
            ],
        )
        .unwrap();
        let derivatives = PolynomialSystemDerivatives::new(&system);

        assert_eq!(derivatives.equations().len(), 2);
        assert_eq!(derivatives.inequalities().len(), 1);

        let jacobian = derivatives.jacobian(&array![2.0, -1.0]);
        assert_eq!(jacobian, array![[4.0, 1.0], [-3.0, 6.0]]);
        assert_eq!(
            derivatives.equation_values(&array![2.0, -1.0]),
            array![3.0, -6.0]
        );
    }
}
