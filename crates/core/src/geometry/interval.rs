use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when creating an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    /// One or both bounds are non-finite.
    #[error("non-finite bound(s)")]
    NonFinite,
    /// The lower bound exceeds the upper bound.
    #[error("lower bound exceeds upper bound")]
    Inverted,
}

/// A closed interval `[lower, upper]` with finite bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Creates the interval `[lower, upper]`.
    ///
    /// A degenerate interval with `lower == upper` is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonFinite`] if either bound is NaN or
    /// infinite, or [`IntervalError::Inverted`] if `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(IntervalError::NonFinite);
        }
        if lower > upper {
            return Err(IntervalError::Inverted);
        }
        Ok(Self { lower, upper })
    }

    /// The unit interval `[0, 1]`.
    #[must_use]
    pub const fn unit() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
        }
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Returns `[lower, midpoint]`.
    #[must_use]
    pub fn lower_half(&self) -> Self {
        Self {
            lower: self.lower,
            upper: self.midpoint(),
        }
    }

    /// Returns `[midpoint, upper]`.
    #[must_use]
    pub fn upper_half(&self) -> Self {
        Self {
            lower: self.midpoint(),
            upper: self.upper,
        }
    }

    /// Returns the interval with the same midpoint and twice the length.
    #[must_use]
    pub fn doubled(&self) -> Self {
        let reach = self.length();
        let mid = self.midpoint();
        Self {
            lower: mid - reach,
            upper: mid + reach,
        }
    }

    /// Returns true if `lower - epsilon <= x <= upper + epsilon`.
    #[must_use]
    pub fn contains(&self, x: f64, epsilon: f64) -> bool {
        self.lower - epsilon <= x && x <= self.upper + epsilon
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from([lower, upper]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(lower, upper)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.lower, interval.upper]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_bad_bounds() {
        assert_eq!(Interval::new(1.0, 0.0), Err(IntervalError::Inverted));
        assert_eq!(Interval::new(f64::NAN, 1.0), Err(IntervalError::NonFinite));
        assert_eq!(
            Interval::new(0.0, f64::INFINITY),
            Err(IntervalError::NonFinite)
        );
        assert!(Interval::new(2.0, 2.0).is_ok());
    }

    #[test]
    fn halves_share_the_midpoint() {
        let i = Interval::new(-1.0, 3.0).unwrap();

        assert_relative_eq!(i.length(), 4.0);
        assert_relative_eq!(i.midpoint(), 1.0);
        assert_eq!(i.lower_half(), Interval::new(-1.0, 1.0).unwrap());
        assert_eq!(i.upper_half(), Interval::new(1.0, 3.0).unwrap());
        assert_eq!(i.doubled(), Interval::new(-3.0, 5.0).unwrap());
    }

    #[test]
    fn containment_honours_epsilon() {
        let i = Interval::unit();

        assert!(i.contains(0.0, 0.0));
        assert!(i.contains(1.0, 0.0));
        assert!(!i.contains(1.0 + 1e-9, 0.0));
        assert!(i.contains(1.0 + 1e-9, 1e-8));
        assert!(i.contains(-1e-9, 1e-8));
    }
}
