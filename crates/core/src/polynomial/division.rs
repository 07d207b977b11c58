use crate::{AlgebraError, ExponentVector, Monomial};

use super::Polynomial;

impl Polynomial {
    /// Divides by a polynomial that is known to divide `self` exactly.
    ///
    /// Leading terms are divided with respect to the last variable that
    /// occurs in `divisor`; their leading coefficients are divided recursively
    /// in the remaining variables. The terms a step is meant to cancel are
    /// removed outright, so rounding in the coefficients cannot stall the loop.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ZeroDivide`] if `divisor` is the zero polynomial,
    /// or [`AlgebraError::NotDivisible`] if a remainder of lower degree than
    /// the divisor is left over.
    ///
    /// # Panics
    ///
    /// Panics if the polynomials belong to different spaces.
    pub fn divide_exact(&self, divisor: &Polynomial) -> Result<Polynomial, AlgebraError> {
        self.assert_same_space(divisor);

        if divisor.is_zero() {
            return Err(AlgebraError::ZeroDivide);
        }

        let Some(var) = (0..self.dimension())
            .rev()
            .find(|&var| divisor.degree_of(var) > 0)
        else {
            return self.div_scalar(divisor.constant_term());
        };

        let divisor_degree = divisor.degree_of(var);
        let divisor_lead = divisor.leading_coefficient(var);

        let mut quotient = Polynomial::zero(&self.space);
        let mut remainder = self.clone();

        while !remainder.is_zero() {
            let degree = remainder.degree_of(var);
            if degree < divisor_degree {
                return Err(AlgebraError::NotDivisible);
            }

            let lead = remainder
                .leading_coefficient(var)
                .divide_exact(&divisor_lead)?;
            let shift = Monomial::new(
                1.0,
                ExponentVector::unit(&self.space, var, degree - divisor_degree),
            );
            let step = lead.mul_monomial(&shift);

            remainder = (&remainder - &(&step * divisor)).without_power(var, degree);
            quotient = &quotient + &step;
        }

        Ok(quotient)
    }

    /// Drops every monomial in which `var` has exponent `power`.
    fn without_power(&self, var: usize, power: u32) -> Polynomial {
        let terms = self
            .terms
            .iter()
            .filter(|m| m.exponents()[var] != power)
            .cloned()
            .collect();
        Polynomial::from_canonical(&self.space, terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::VariableSpace;

    #[test]
    fn recovers_factor_of_product() {
        let space = VariableSpace::new(3);
        let q = Polynomial::from_terms(&space, &[(1.0, &[1, 0, 1]), (-2.0, &[0, 1, 0]), (1.0, &[0, 0, 0])]);
        let r = Polynomial::from_terms(&space, &[(3.0, &[2, 0, 0]), (1.0, &[0, 1, 1]), (-5.0, &[0, 0, 0])]);

        let p = &q * &r;
        assert_eq!(p.divide_exact(&q).unwrap(), r);
        assert_eq!(p.divide_exact(&r).unwrap(), q);
    }

    #[test]
    fn divides_by_constant() {
        let space = VariableSpace::new(2);
        let p = Polynomial::from_terms(&space, &[(4.0, &[1, 1]), (2.0, &[0, 0])]);
        let two = Polynomial::constant(&space, 2.0);

        let expected = Polynomial::from_terms(&space, &[(2.0, &[1, 1]), (1.0, &[0, 0])]);
        assert_eq!(p.divide_exact(&two).unwrap(), expected);
    }

    #[test]
    fn zero_divisor_is_an_error() {
        let space = VariableSpace::new(2);
        let p = Polynomial::variable(&space, 0);

        assert_eq!(
            p.divide_exact(&Polynomial::zero(&space)),
            Err(AlgebraError::ZeroDivide)
        );
    }

    #[test]
    fn detects_non_divisible_input() {
        let space = VariableSpace::new(1);
        let x_squared_plus_one = Polynomial::from_terms(&space, &[(1.0, &[2]), (1.0, &[0])]);
        let x_minus_one = Polynomial::from_terms(&space, &[(1.0, &[1]), (-1.0, &[0])]);

        assert_eq!(
            x_squared_plus_one.divide_exact(&x_minus_one),
            Err(AlgebraError::NotDivisible)
        );
    }

    #[test]
    fn zero_dividend_gives_zero_quotient() {
        let space = VariableSpace::new(2);
        let q = Polynomial::variable(&space, 1);
        assert!(Polynomial::zero(&space).divide_exact(&q).unwrap().is_zero());
    }
}
