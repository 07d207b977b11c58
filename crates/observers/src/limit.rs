use polyroot_core::Observer;

use crate::traits::{CanStopEarly, HasRectangle};

/// Stops a search once it reaches rectangles deeper than `max_depth`.
///
/// The minimum side length bounds how deep a search can go, but for wide
/// rectangles that floor lies dozens of levels down. A depth limit cuts the
/// search off much earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimit {
    max_depth: usize,
    reached: bool,
}

impl DepthLimit {
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            reached: false,
        }
    }

    /// Returns true if the limit stopped the search.
    #[must_use]
    pub fn reached(&self) -> bool {
        self.reached
    }
}

impl<E, A> Observer<E, A> for DepthLimit
where
    E: HasRectangle,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.depth() > self.max_depth {
            self.reached = true;
            return Some(A::stop_early());
        }
        None
    }
}

impl<E, A> Observer<E, A> for &mut DepthLimit
where
    E: HasRectangle,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use polyroot_core::{Polynomial, PolynomialSystem, Rectangle, VariableSpace};
    use polyroot_solvers::feasibility::{Config, PolynomialFeasibilitySolver, Status};

    #[test]
    fn stops_deep_feasibility_search() {
        // x - 0.999 >= 0 is only satisfied near the upper end.
        let space = VariableSpace::new(1);
        let p = Polynomial::from_terms(&space, &[(1.0, &[1]), (-0.999, &[0])]);
        let system = PolynomialSystem::new(&space, vec![p]).unwrap();
        let solver = PolynomialFeasibilitySolver::new(&system);

        let mut limit = DepthLimit::new(2);
        let solution = solver
            .solve(&Rectangle::unit_cube(1), &Config::default(), &mut limit)
            .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(limit.reached());
    }

    #[test]
    fn shallow_search_is_untouched() {
        let space = VariableSpace::new(1);
        let system = PolynomialSystem::new(&space, vec![Polynomial::constant(&space, 1.0)]).unwrap();
        let solver = PolynomialFeasibilitySolver::new(&system);

        let mut limit = DepthLimit::new(0);
        let solution = solver
            .solve(&Rectangle::unit_cube(1), &Config::default(), &mut limit)
            .unwrap();

        assert_eq!(solution.status, Status::Feasible);
        assert!(!limit.reached());
    }
}
