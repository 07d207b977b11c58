use approx::relative_eq;
use ndarray::Array1;
use polyroot_core::{Observer, Rectangle};

use crate::{
    precedence::Precedence,
    tolerance::{MIN_SIDE_LENGTH, ROOT_EQUALITY_TOLERANCE, ZERO_RESIDUAL},
};

use super::{
    Action, Config, Error, Event, PolynomialSystemSolver, Solution, Status, certify, newton,
};

/// Whether the recursion should keep going.
enum Flow {
    Continue,
    Stop(Status),
}

/// State of one top-level root search.
pub(super) struct Search<'a, Obs> {
    solver: &'a PolynomialSystemSolver,
    config: &'a Config,
    observer: Obs,
    precedence: Precedence,
    roots: Vec<Array1<f64>>,
    iters: usize,
    exhausted: usize,
}

impl<'a, Obs> Search<'a, Obs>
where
    Obs: for<'e> Observer<Event<'e>, Action>,
{
    pub(super) fn run(
        solver: &'a PolynomialSystemSolver,
        rectangle: &Rectangle,
        config: &'a Config,
        observer: Obs,
    ) -> Result<Solution, Error> {
        let mut search = Self {
            solver,
            config,
            observer,
            precedence: Precedence::new(solver.derivatives.len()),
            roots: Vec::new(),
            iters: 0,
            exhausted: 0,
        };

        let status = match search.visit(rectangle, 0)? {
            Flow::Continue => Status::Completed,
            Flow::Stop(status) => status,
        };

        Ok(Solution {
            status,
            roots: search.roots,
            iters: search.iters,
            exhausted: search.exhausted,
        })
    }

    fn visit(&mut self, rectangle: &Rectangle, depth: usize) -> Result<Flow, Error> {
        if self.config.max_iters().is_some_and(|max| self.iters >= max) {
            return Ok(Flow::Stop(Status::MaxIters));
        }
        self.iters += 1;

        if let Some(polynomial) = self.prune(rectangle) {
            return Ok(self.emit(&Event::Pruned {
                rectangle,
                depth,
                polynomial,
            }));
        }

        let solver = self.solver;
        let derivatives = &solver.derivatives;
        if let Some(root) = newton::root_in_rectangle(derivatives, rectangle) {
            let root = newton::improve(derivatives, root);
            let certified = certify::has_no_other_roots_in(
                &solver.equations,
                &root,
                &derivatives.jacobian(&root),
                rectangle,
            )?;

            // An uncertified root may have neighbours; the orthants decide.
            if certified {
                return Ok(self.accept(rectangle, depth, root));
            }
        }

        if rectangle.max_side_length() < MIN_SIDE_LENGTH {
            self.exhausted += 1;
            return Ok(self.emit(&Event::Exhausted { rectangle, depth }));
        }

        if let Flow::Stop(status) = self.emit(&Event::Subdivided { rectangle, depth }) {
            return Ok(Flow::Stop(status));
        }
        for orthant in rectangle.orthants() {
            if let Flow::Stop(status) = self.visit(&orthant, depth + 1)? {
                return Ok(Flow::Stop(status));
            }
        }

        Ok(Flow::Continue)
    }

    /// Returns the index of a polynomial that rules out roots in the
    /// rectangle: an equation without zeros or an inequality that is
    /// negative throughout.
    fn prune(&mut self, rectangle: &Rectangle) -> Option<usize> {
        let solver = self.solver;
        let derivatives = &solver.derivatives;
        let equations = derivatives.equations().len();
        self.precedence.find(|index| {
            let tree = &derivatives.trees()[index];
            if index < equations {
                tree.poly_has_no_roots_in(rectangle)
            } else {
                tree.poly_everywhere_negative_in(rectangle)
            }
        })
    }

    /// Records a certified root if it is feasible and new.
    fn accept(&mut self, rectangle: &Rectangle, depth: usize, root: Array1<f64>) -> Flow {
        if !self.is_feasible_and_new(&root) {
            return Flow::Continue;
        }

        let action = self.observer.observe(&Event::RootFound {
            rectangle,
            depth,
            root: &root,
        });
        self.roots.push(root);

        if action == Some(Action::StopEarly) {
            return Flow::Stop(Status::StoppedByObserver);
        }
        if self
            .config
            .max_roots()
            .is_some_and(|max| self.roots.len() >= max)
        {
            return Flow::Stop(Status::RootCapReached);
        }
        Flow::Continue
    }

    /// Returns true if `root` satisfies every inequality and is new.
    fn is_feasible_and_new(&self, root: &Array1<f64>) -> bool {
        let feasible = self
            .solver
            .derivatives
            .inequalities()
            .iter()
            .all(|tree| tree.polynomial().evaluate(root) >= -ZERO_RESIDUAL);

        feasible && !self.roots.iter().any(|known| same_root(known, root))
    }

    fn emit(&mut self, event: &Event<'_>) -> Flow {
        match self.observer.observe(event) {
            Some(Action::StopEarly) => Flow::Stop(Status::StoppedByObserver),
            None => Flow::Continue,
        }
    }
}

/// Compares roots component-wise with a relative tolerance.
fn same_root(a: &Array1<f64>, b: &Array1<f64>) -> bool {
    a.iter().zip(b.iter()).all(|(&x, &y)| {
        relative_eq!(
            x,
            y,
            epsilon = ROOT_EQUALITY_TOLERANCE,
            max_relative = ROOT_EQUALITY_TOLERANCE
        )
    })
}
