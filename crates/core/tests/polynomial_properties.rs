//! Property-based tests for polynomial arithmetic.
//!
//! Coefficients and translation offsets are small integers, so every
//! operation below is exact in `f64` and results can be compared
//! structurally.

use approx::relative_eq;
use ndarray::Array1;
use polyroot_core::{Polynomial, VariableSpace};
use proptest::prelude::*;

type Terms = Vec<(i32, [u32; 2])>;

// Strategy for generating up to four terms with exponents at most 2.
fn small_terms() -> impl Strategy<Value = Terms> {
    proptest::collection::vec((-5i32..=5, [0u32..=2, 0u32..=2]), 0..=4)
}

fn build(space: &VariableSpace, terms: &Terms) -> Polynomial {
    let pairs: Vec<(f64, &[u32])> = terms
        .iter()
        .map(|(c, e)| (f64::from(*c), e.as_slice()))
        .collect();
    Polynomial::from_terms(space, &pairs)
}

fn small_point() -> impl Strategy<Value = [f64; 2]> {
    [-2.0f64..2.0, -2.0f64..2.0]
}

proptest! {
    #[test]
    fn add_and_mul_commute(a in small_terms(), b in small_terms()) {
        let space = VariableSpace::new(2);
        let (p, q) = (build(&space, &a), build(&space, &b));

        prop_assert_eq!(&p + &q, &q + &p);
        prop_assert_eq!(&p * &q, &q * &p);
    }

    #[test]
    fn multiplication_distributes(a in small_terms(), b in small_terms(), c in small_terms()) {
        let space = VariableSpace::new(2);
        let (p, q, r) = (build(&space, &a), build(&space, &b), build(&space, &c));

        prop_assert_eq!(&p * &(&q + &r), &(&p * &q) + &(&p * &r));
    }

    #[test]
    fn additive_inverse_is_zero(a in small_terms()) {
        let space = VariableSpace::new(2);
        let p = build(&space, &a);

        prop_assert!((&p + &(-&p)).is_zero());
        prop_assert!((&p - &p).is_zero());
    }

    #[test]
    fn evaluation_respects_products(a in small_terms(), b in small_terms(), x in small_point()) {
        let space = VariableSpace::new(2);
        let (p, q) = (build(&space, &a), build(&space, &b));
        let point = Array1::from(x.to_vec());

        let product = (&p * &q).evaluate(&point);
        let expected = p.evaluate(&point) * q.evaluate(&point);
        prop_assert!(relative_eq!(product, expected, epsilon = 1e-9, max_relative = 1e-9));
    }

    #[test]
    fn division_recovers_factor(a in small_terms(), b in small_terms()) {
        let space = VariableSpace::new(2);
        let (p, q) = (build(&space, &a), build(&space, &b));
        prop_assume!(!q.is_zero());

        let product = &p * &q;
        prop_assert_eq!(product.divide_exact(&q).unwrap(), p);
    }

    #[test]
    fn derivative_obeys_product_rule(a in small_terms(), b in small_terms(), var in 0usize..2) {
        let space = VariableSpace::new(2);
        let (p, q) = (build(&space, &a), build(&space, &b));

        let left = (&p * &q).partial_derivative(var);
        let right = &(&p.partial_derivative(var) * &q) + &(&p * &q.partial_derivative(var));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn normalize_is_idempotent(a in small_terms()) {
        let space = VariableSpace::new(2);
        let n = build(&space, &a).normalize();

        prop_assert_eq!(n.normalize(), n.clone());
        if !n.is_zero() {
            prop_assert_eq!(n.max_coefficient_magnitude(), 1.0);
        }
    }

    #[test]
    fn translation_round_trips(a in small_terms(), o in [-2i32..=2, -2i32..=2]) {
        let space = VariableSpace::new(2);
        let p = build(&space, &a);
        let origin = Array1::from(vec![f64::from(o[0]), f64::from(o[1])]);

        let there = p.translate(&origin).unwrap();
        let back = there.translate(&-&origin).unwrap();
        prop_assert_eq!(back, p);
    }
}
