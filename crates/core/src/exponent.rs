use std::{cmp::Ordering, fmt, ops::Add, ops::Index};

use crate::VariableSpace;

/// The exponents of a monomial, one entry per variable of a space.
///
/// Exponent vectors are ordered lexicographically, first variable most
/// significant. Comparing vectors from different spaces is a programming
/// error and panics.
///
/// Derived operations return new vectors; an exponent vector is never
/// modified once built.
#[derive(Clone)]
pub struct ExponentVector {
    space: VariableSpace,
    exponents: Box<[u32]>,
}

impl ExponentVector {
    /// Creates an exponent vector over `space`.
    ///
    /// # Panics
    ///
    /// Panics if `exponents` does not have one entry per variable.
    pub fn new(space: &VariableSpace, exponents: Vec<u32>) -> Self {
        assert_eq!(
            exponents.len(),
            space.dimension(),
            "exponent vector length must match the variable space"
        );
        Self {
            space: space.clone(),
            exponents: exponents.into_boxed_slice(),
        }
    }

    /// Creates the all-zero exponent vector (the monomial `1`).
    pub fn zero(space: &VariableSpace) -> Self {
        Self::new(space, vec![0; space.dimension()])
    }

    /// Creates the exponent vector of a single variable raised to `power`.
    ///
    /// # Panics
    ///
    /// Panics if `var` is outside the space.
    pub fn unit(space: &VariableSpace, var: usize, power: u32) -> Self {
        let mut exponents = vec![0; space.dimension()];
        exponents[var] = power;
        Self::new(space, exponents)
    }

    /// Returns the space this vector belongs to.
    pub fn space(&self) -> &VariableSpace {
        &self.space
    }

    /// Returns the number of variables.
    pub fn dimension(&self) -> usize {
        self.exponents.len()
    }

    /// Returns the exponents as a slice.
    pub fn as_slice(&self) -> &[u32] {
        &self.exponents
    }

    /// Returns the total degree.
    pub fn degree(&self) -> u32 {
        self.exponents.iter().sum()
    }

    /// Returns true if every exponent is zero.
    pub fn is_zero(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Returns true if no exponent exceeds one.
    pub fn is_multiaffine(&self) -> bool {
        self.exponents.iter().all(|&e| e <= 1)
    }

    /// Returns a copy with the exponent of `var` set to zero.
    pub fn without(&self, var: usize) -> Self {
        let mut exponents = self.exponents.clone();
        exponents[var] = 0;
        Self {
            space: self.space.clone(),
            exponents,
        }
    }

    /// Returns a copy with the exponent of `var` lowered by one.
    ///
    /// # Panics
    ///
    /// Panics if the exponent of `var` is already zero.
    pub fn decremented(&self, var: usize) -> Self {
        let mut exponents = self.exponents.clone();
        assert!(exponents[var] > 0, "cannot decrement a zero exponent");
        exponents[var] -= 1;
        Self {
            space: self.space.clone(),
            exponents,
        }
    }

    fn assert_same_space(&self, other: &Self) {
        assert!(
            self.space.same_as(&other.space),
            "exponent vectors belong to different variable spaces"
        );
    }
}

impl Index<usize> for ExponentVector {
    type Output = u32;

    fn index(&self, var: usize) -> &u32 {
        &self.exponents[var]
    }
}

impl Add for &ExponentVector {
    type Output = ExponentVector;

    fn add(self, rhs: &ExponentVector) -> ExponentVector {
        self.assert_same_space(rhs);
        let exponents = self
            .exponents
            .iter()
            .zip(rhs.exponents.iter())
            .map(|(a, b)| a + b)
            .collect();
        ExponentVector {
            space: self.space.clone(),
            exponents,
        }
    }
}

impl PartialEq for ExponentVector {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ExponentVector {}

impl PartialOrd for ExponentVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExponentVector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.assert_same_space(other);
        self.exponents.cmp(&other.exponents)
    }
}

impl fmt::Debug for ExponentVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &self.exponents)
    }
}

impl fmt::Display for ExponentVector {
    /// Writes the variable part of a monomial, e.g. `x1^2*x3`, or `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (var, &power) in self.exponents.iter().enumerate() {
            if power == 0 {
                continue;
            }
            if !first {
                f.write_str("*")?;
            }
            first = false;
            f.write_str(self.space.name(var))?;
            if power > 1 {
                write!(f, "^{power}")?;
            }
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic_order() {
        let space = VariableSpace::new(3);
        let a = ExponentVector::new(&space, vec![1, 0, 5]);
        let b = ExponentVector::new(&space, vec![1, 2, 0]);
        let c = ExponentVector::new(&space, vec![2, 0, 0]);

        assert!(a < b);
        assert!(b < c);
        assert!(ExponentVector::zero(&space) < a);
    }

    #[test]
    fn derived_vectors_leave_original_untouched() {
        let space = VariableSpace::new(2);
        let e = ExponentVector::new(&space, vec![3, 1]);

        assert_eq!(e.without(0).as_slice(), &[0, 1]);
        assert_eq!(e.decremented(0).as_slice(), &[2, 1]);
        assert_eq!((&e + &e).as_slice(), &[6, 2]);
        assert_eq!(e.as_slice(), &[3, 1]);
        assert_eq!(e.degree(), 4);
    }

    #[test]
    fn displays_variable_part() {
        let space = VariableSpace::new(3);
        assert_eq!(ExponentVector::new(&space, vec![2, 0, 1]).to_string(), "x1^2*x3");
        assert_eq!(ExponentVector::zero(&space).to_string(), "1");
    }

    #[test]
    #[should_panic(expected = "different variable spaces")]
    fn comparing_across_spaces_panics() {
        let a = ExponentVector::zero(&VariableSpace::new(2));
        let b = ExponentVector::zero(&VariableSpace::new(2));
        let _ = a < b;
    }
}
