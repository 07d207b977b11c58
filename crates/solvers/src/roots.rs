//! Root finding for square polynomial systems by Newton iteration and
//! subdivision.
//!
//! # Algorithm
//!
//! The search examines one rectangle at a time, starting from the caller's:
//!
//! 1. **Prune.** If an equation provably has no zero in the rectangle, or an
//!    inequality is provably negative throughout it, the rectangle is
//!    discarded. The polynomial that succeeds is tried first next time.
//! 2. **Newton.** Newton's method runs from the rectangle's center. A
//!    singular Jacobian is handled by nudging the start point toward a side
//!    of the rectangle, one axis at a time. Iteration fails if it leaves the
//!    rectangle doubled about its center or the residual stops shrinking.
//! 3. **Accept.** A converged point is refined by two damped steps and must
//!    then be proven the only root in the rectangle. A proven root is kept if
//!    it satisfies every inequality and differs from the roots found so far,
//!    and the rectangle is done. Unproven points are discarded.
//! 4. **Subdivide.** Otherwise the rectangle is split into its `2^n`
//!    orthants, which are searched in order, unless its longest side is
//!    already below [`MIN_SIDE_LENGTH`]. Such rectangles are counted as
//!    exhausted; they typically hold a singular root or a curve of roots.
//!
//! The search stops early when the root cap or the rectangle budget in
//! [`Config`] is reached. Which roots are returned under a cap depends only
//! on the order of the search, which visits lower orthants first.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per rectangle examined (pruned, subdivided,
//! or exhausted) and one per accepted root. Observers can return
//! [`Action::StopEarly`] to halt immediately.
//!
//! [`MIN_SIDE_LENGTH`]: crate::tolerance::MIN_SIDE_LENGTH

mod action;
mod certify;
mod config;
mod error;
mod event;
mod newton;
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

use crate::derivatives::PolynomialSystemDerivatives;

use search::Search;

/// Finds the roots of a polynomial system inside rectangles.
///
/// The system is normalized and its derivative trees are built once, on
/// construction; every search reuses them.
#[derive(Debug, Clone)]
pub struct PolynomialSystemSolver {
    system: PolynomialSystem,
    equations: PolynomialSystem,
    derivatives: PolynomialSystemDerivatives,
}

impl PolynomialSystemSolver {
    /// Prepares a solver for `system`.
    ///
    /// The first `dimension` polynomials are equations, the rest are
    /// constraints of the form `p >= 0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Underdetermined`] if the system has fewer
    /// polynomials than variables.
    pub fn new(system: &PolynomialSystem) -> Result<Self, Error> {
        if system.len() < system.dimension() {
            return Err(Error::Underdetermined {
                equations: system.len(),
                dimension: system.dimension(),
            });
        }

        let system = system.normalized();
        let equations = PolynomialSystem::new(system.space(), system.equations().to_vec())?;
        let derivatives = PolynomialSystemDerivatives::new(&system);

        Ok(Self {
            system,
            equations,
            derivatives,
        })
    }

    /// Returns the normalized system being solved.
    pub fn system(&self) -> &PolynomialSystem {
        &self.system
    }

    /// Returns the derivative trees of the normalized system.
    pub fn derivatives(&self) -> &PolynomialSystemDerivatives {
        &self.derivatives
    }

    /// Searches `rectangle` for roots.
    ///
    /// A system with no variables has exactly one candidate, the empty
    /// point, which is returned without searching.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the rectangle's dimension
    /// differs from the system's, or [`Error::Algebra`] if transforming the
    /// system around a root fails.
    pub fn solve<Obs>(
        &self,
        rectangle: &Rectangle,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        self.check_dimension(rectangle)?;

        if self.system.dimension() == 0 {
            return Ok(Solution {
                status: Status::Completed,
                roots: vec![Array1::zeros(0)],
                iters: 0,
                exhausted: 0,
            });
        }

        let solution = Search::run(self, rectangle, config, observer)?;
        debug!(
            status = ?solution.status,
            roots = solution.roots.len(),
            iters = solution.iters,
            exhausted = solution.exhausted,
            "root search finished"
        );
        Ok(solution)
    }

    /// Searches `rectangle` for roots without observer support.
    ///
    /// This is a convenience wrapper around [`solve`](Self::solve) that uses
    /// a no-op observer.
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

    /// Returns up to `max_roots` roots in `rectangle`, in search order.
    ///
    /// A cap of zero returns no roots without searching.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`solve`](Self::solve).
    pub fn find_roots(
        &self,
        rectangle: &Rectangle,
        max_roots: usize,
    ) -> Result<Vec<Array1<f64>>, Error> {
        self.check_dimension(rectangle)?;
        if max_roots == 0 {
            return Ok(Vec::new());
        }

        let config = Config::new(Some(max_roots), None)?;
        Ok(self.solve_unobserved(rectangle, &config)?.roots)
    }

    fn check_dimension(&self, rectangle: &Rectangle) -> Result<(), Error> {
        let expected = self.system.dimension();
        if rectangle.dimension() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: rectangle.dimension(),
            });
        }
        Ok(())
    }
}
