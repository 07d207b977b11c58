//! Feasibility search for systems of polynomial inequalities.
//!
//! Every polynomial `p` of the system is read as the constraint `p >= 0`.
//! The search looks for a point of the rectangle that satisfies them all:
//!
//! 1. If the rectangle's center satisfies every constraint, it is returned.
//! 2. If some constraint is provably negative throughout the rectangle, the
//!    rectangle is discarded. The constraint that succeeds is tried first
//!    next time.
//! 3. Otherwise the rectangle is split into its `2^n` orthants, searched in
//!    order until one yields a point. Rectangles whose longest side is below
//!    [`MIN_SIDE_LENGTH`] are abandoned instead.
//!
//! A search that ends without a point reports [`Status::Infeasible`] only if
//! no rectangle was abandoned; otherwise the answer is
//! [`Status::Inconclusive`].
//!
//! [`MIN_SIDE_LENGTH`]: crate::tolerance::MIN_SIDE_LENGTH

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use ndarray::Array1;
use polyroot_core::{Observer, PolynomialSystem, Rectangle};
use tracing::debug;

use crate::derivatives::PolynomialDerivatives;

use search::Search;

/// Decides whether a set of polynomial inequalities has a common solution in
/// a rectangle.
#[derive(Debug, Clone)]
pub struct PolynomialFeasibilitySolver {
    dimension: usize,
    trees: Vec<PolynomialDerivatives>,
}

impl PolynomialFeasibilitySolver {
    /// Prepares a solver treating every polynomial of `system` as `p >= 0`.
    pub fn new(system: &PolynomialSystem) -> Self {
        Self {
            dimension: system.dimension(),
            trees: system
                .normalized()
                .polynomials()
                .iter()
                .map(PolynomialDerivatives::new)
                .collect(),
        }
    }

    /// Returns the number of variables.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the derivative trees of the normalized inequalities.
    pub fn trees(&self) -> &[PolynomialDerivatives] {
        &self.trees
    }

    /// Returns true if every inequality holds at `point`.
    ///
    /// # Panics
    ///
    /// Panics if `point` has the wrong length.
    pub fn is_satisfied_at(&self, point: &Array1<f64>) -> bool {
        self.trees
            .iter()
            .all(|tree| tree.polynomial().evaluate(point) >= 0.0)
    }

    /// Searches `rectangle` for a point satisfying every inequality.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the rectangle's dimension
    /// differs from the system's.
    pub fn solve<Obs>(
        &self,
        rectangle: &Rectangle,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        if rectangle.dimension() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                found: rectangle.dimension(),
            });
        }

        let solution = Search::run(self, rectangle, config, observer);
        debug!(
            status = ?solution.status,
            iters = solution.iters,
            exhausted = solution.exhausted,
            "feasibility search finished"
        );
        Ok(solution)
    }

    /// Searches `rectangle` without observer support.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`solve`](Self::solve).
    pub fn solve_unobserved(
        &self,
        rectangle: &Rectangle,
        config: &Config,
    ) -> Result<Solution, Error> {
        self.solve(rectangle, config, ())
    }

    /// Returns a point of `rectangle` satisfying every inequality, if the
    /// search finds one.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`solve`](Self::solve).
    pub fn find_point(&self, rectangle: &Rectangle) -> Result<Option<Array1<f64>>, Error> {
        Ok(self.solve_unobserved(rectangle, &Config::default())?.point)
    }

    /// Returns true if the search finds a feasible point in `rectangle`.
    ///
    /// Searches that run into the minimum side length without a point are
    /// answered `false`.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`solve`](Self::solve).
    pub fn has_solution(&self, rectangle: &Rectangle) -> Result<bool, Error> {
        Ok(self.find_point(rectangle)?.is_some())
    }
}
