use ndarray::Array1;
use polyroot_core::{Observer, Rectangle};

use crate::{precedence::Precedence, tolerance::MIN_SIDE_LENGTH};

use super::{Action, Config, Event, PolynomialFeasibilitySolver, Solution, Status};

/// How a rectangle's search ended.
enum Outcome {
    Found(Array1<f64>),
    NotFound,
    Stop(Status),
}

/// State of one top-level feasibility search.
pub(super) struct Search<'a, Obs> {
    solver: &'a PolynomialFeasibilitySolver,
    config: &'a Config,
    observer: Obs,
    precedence: Precedence,
    iters: usize,
    exhausted: usize,
}

impl<'a, Obs> Search<'a, Obs>
where
    Obs: for<'e> Observer<Event<'e>, Action>,
{
    pub(super) fn run(
        solver: &'a PolynomialFeasibilitySolver,
        rectangle: &Rectangle,
        config: &'a Config,
        observer: Obs,
    ) -> Solution {
        let mut search = Self {
            solver,
            config,
            observer,
            precedence: Precedence::new(solver.trees.len()),
            iters: 0,
            exhausted: 0,
        };

        let (status, point) = match search.visit(rectangle, 0) {
            Outcome::Found(point) => (Status::Feasible, Some(point)),
            Outcome::NotFound if search.exhausted > 0 => (Status::Inconclusive, None),
            Outcome::NotFound => (Status::Infeasible, None),
            Outcome::Stop(status) => (status, None),
        };

        Solution {
            status,
            point,
            iters: search.iters,
            exhausted: search.exhausted,
        }
    }

    fn visit(&mut self, rectangle: &Rectangle, depth: usize) -> Outcome {
        if self.config.max_iters().is_some_and(|max| self.iters >= max) {
            return Outcome::Stop(Status::MaxIters);
        }
        self.iters += 1;

        let center = rectangle.center();
        if self.solver.is_satisfied_at(&center) {
            // Nothing is left to stop once a point is found.
            let _ = self.observer.observe(&Event::Satisfied {
                rectangle,
                depth,
                point: &center,
            });
            return Outcome::Found(center);
        }

        if let Some(polynomial) = self.prune(rectangle) {
            return self.emit(&Event::Pruned {
                rectangle,
                depth,
                polynomial,
            });
        }

        if rectangle.max_side_length() < MIN_SIDE_LENGTH {
            self.exhausted += 1;
            return self.emit(&Event::Exhausted { rectangle, depth });
        }

        if let Outcome::Stop(status) = self.emit(&Event::Subdivided { rectangle, depth }) {
            return Outcome::Stop(status);
        }
        for orthant in rectangle.orthants() {
            match self.visit(&orthant, depth + 1) {
                Outcome::NotFound => {}
                outcome => return outcome,
            }
        }

        Outcome::NotFound
    }

    /// Returns the index of an inequality that is negative throughout the
    /// rectangle.
    fn prune(&mut self, rectangle: &Rectangle) -> Option<usize> {
        let trees = &self.solver.trees;
        self.precedence
            .find(|index| trees[index].poly_everywhere_negative_in(rectangle))
    }

    fn emit(&mut self, event: &Event<'_>) -> Outcome {
        match self.observer.observe(event) {
            Some(Action::StopEarly) => Outcome::Stop(Status::StoppedByObserver),
            None => Outcome::NotFound,
        }
    }
}
