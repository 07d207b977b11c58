use std::{
    cmp::Ordering,
    ops::{Add, Mul, Neg, Sub},
};

use crate::{AlgebraError, Monomial};

use super::Polynomial;

impl Polynomial {
    /// Merges two canonical term lists into `self + sign * other`.
    fn merge(&self, other: &Polynomial, sign: f64) -> Polynomial {
        self.assert_same_space(other);

        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        let mut left = self.terms.iter().peekable();
        let mut right = other.terms.iter().peekable();

        loop {
            let ordering = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => l.exponents().cmp(r.exponents()),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => break,
            };

            match ordering {
                Ordering::Less => terms.extend(left.next().cloned()),
                Ordering::Greater => terms.extend(right.next().map(|r| r.scaled(sign))),
                Ordering::Equal => {
                    if let (Some(l), Some(r)) = (left.next(), right.next()) {
                        let sum = l.coefficient() + sign * r.coefficient();
                        if sum != 0.0 {
                            terms.push(Monomial::new(sum, l.exponents().clone()));
                        }
                    }
                }
            }
        }

        Polynomial::from_canonical(&self.space, terms)
    }

    /// Multiplies every coefficient by `factor`.
    pub fn scale(&self, factor: f64) -> Polynomial {
        if factor == 0.0 {
            return Polynomial::zero(&self.space);
        }
        let terms = self.terms.iter().map(|m| m.scaled(factor)).collect();
        Polynomial::from_monomials(&self.space, terms)
    }

    /// Divides every coefficient by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ZeroDivide`] if `divisor` is zero.
    pub fn div_scalar(&self, divisor: f64) -> Result<Polynomial, AlgebraError> {
        if divisor == 0.0 {
            return Err(AlgebraError::ZeroDivide);
        }
        let terms = self
            .terms
            .iter()
            .map(|m| Monomial::new(m.coefficient() / divisor, m.exponents().clone()))
            .collect();
        Ok(Polynomial::from_monomials(&self.space, terms))
    }

    /// Multiplies by a single monomial.
    pub fn mul_monomial(&self, monomial: &Monomial) -> Polynomial {
        let terms = self.terms.iter().map(|m| m * monomial).collect();
        Polynomial::from_monomials(&self.space, terms)
    }

    /// Raises the polynomial to a non-negative integer power.
    pub fn pow(&self, exponent: u32) -> Polynomial {
        let mut result = Polynomial::constant(&self.space, 1.0);
        let mut square = self.clone();
        let mut remaining = exponent;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = &result * &square;
            }
            remaining >>= 1;
            if remaining > 0 {
                square = &square * &square;
            }
        }
        result
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        self.merge(rhs, 1.0)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self.merge(rhs, -1.0)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    /// Forms every pairwise product, then sorts and merges like terms.
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.assert_same_space(rhs);
        let mut products = Vec::with_capacity(self.terms.len() * rhs.terms.len());
        for l in &self.terms {
            for r in &rhs.terms {
                products.push(l * r);
            }
        }
        Polynomial::from_monomials(&self.space, products)
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Polynomial {
        self.scale(rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        let terms = self.terms.iter().map(|m| m.scaled(-1.0)).collect();
        Polynomial::from_canonical(&self.space, terms)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

macro_rules! forward_owned_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                (&self).$method(rhs)
            }
        }

        impl $trait<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                self.$method(&rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    use crate::VariableSpace;

    fn sample(space: &VariableSpace) -> (Polynomial, Polynomial) {
        let p = Polynomial::from_terms(space, &[(1.0, &[2, 0]), (-2.0, &[0, 1]), (1.0, &[0, 0])]);
        let q = Polynomial::from_terms(space, &[(3.0, &[1, 1]), (2.0, &[0, 1])]);
        (p, q)
    }

    #[test]
    fn addition_merges_and_cancels() {
        let space = VariableSpace::new(2);
        let (p, q) = sample(&space);

        let sum = &p + &q;
        assert_eq!(sum.terms().len(), 3);
        assert_eq!(&sum - &q, p);
        assert!((&p - &p).is_zero());
    }

    #[test]
    fn multiplication_matches_evaluation() {
        let space = VariableSpace::new(2);
        let (p, q) = sample(&space);
        let product = &p * &q;

        for point in [array![0.5, -1.0], array![2.0, 3.0], array![-1.5, 0.25]] {
            assert_relative_eq!(
                product.evaluate(&point),
                p.evaluate(&point) * q.evaluate(&point),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn power_by_squaring() {
        let space = VariableSpace::new(1);
        let x_plus_one = Polynomial::from_terms(&space, &[(1.0, &[1]), (1.0, &[0])]);
        let cube = x_plus_one.pow(3);

        let expected = Polynomial::from_terms(
            &space,
            &[(1.0, &[3]), (3.0, &[2]), (3.0, &[1]), (1.0, &[0])],
        );
        assert_eq!(cube, expected);
        assert_eq!(x_plus_one.pow(0), Polynomial::constant(&space, 1.0));
    }

    #[test]
    fn scalar_operations() {
        let space = VariableSpace::new(2);
        let (p, _) = sample(&space);

        assert!(p.scale(0.0).is_zero());
        assert_eq!(p.div_scalar(0.0), Err(AlgebraError::ZeroDivide));
        assert_eq!(p.div_scalar(2.0).unwrap().scale(2.0), p);
        assert_eq!(-(-&p), p);
    }
}
