use crate::Monomial;

use super::Polynomial;

impl Polynomial {
    /// Returns the highest exponent of `var`, or zero for the zero polynomial.
    pub fn degree_of(&self, var: usize) -> u32 {
        self.terms
            .iter()
            .map(|m| m.exponents()[var])
            .max()
            .unwrap_or(0)
    }

    /// Returns the partial derivative with respect to `var`.
    ///
    /// Monomials not involving `var` vanish; the others become
    /// `coefficient * exponent` with the exponent of `var` lowered by one.
    pub fn partial_derivative(&self, var: usize) -> Polynomial {
        // Lowering the same exponent in every surviving term keeps them sorted.
        let terms = self
            .terms
            .iter()
            .filter(|m| m.exponents()[var] > 0)
            .map(|m| {
                let power = m.exponents()[var];
                Monomial::new(
                    m.coefficient() * f64::from(power),
                    m.exponents().decremented(var),
                )
            })
            .collect();
        Polynomial::from_canonical(&self.space, terms)
    }

    /// Returns all first partial derivatives, in variable order.
    pub fn gradient(&self) -> Vec<Polynomial> {
        (0..self.dimension())
            .map(|var| self.partial_derivative(var))
            .collect()
    }

    /// Returns the coefficient of the highest power of `var`.
    ///
    /// The result is formed from the monomials attaining the maximum exponent
    /// of `var`, with that exponent set to zero. The zero polynomial has a
    /// zero leading coefficient.
    pub fn leading_coefficient(&self, var: usize) -> Polynomial {
        let degree = self.degree_of(var);
        let terms = self
            .terms
            .iter()
            .filter(|m| m.exponents()[var] == degree)
            .map(|m| Monomial::new(m.coefficient(), m.exponents().without(var)))
            .collect();
        Polynomial::from_canonical(&self.space, terms)
    }
}
