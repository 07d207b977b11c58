//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across the searches.
//!
//! # Event traits
//!
//! - [`HasRectangle`] — events that refer to a rectangle of the search
//! - [`HasKind`] — events that can be classified by [`EventKind`]
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use polyroot_core::Observer;
//! use polyroot_observers::traits::{CanStopEarly, HasRectangle};
//!
//! struct SmallEnough {
//!     side: f64,
//! }
//!
//! impl<E: HasRectangle, A: CanStopEarly> Observer<E, A> for SmallEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.rectangle().max_side_length() < self.side).then(A::stop_early)
//!     }
//! }
//! ```

use polyroot_core::Rectangle;
use polyroot_solvers::{feasibility, roots};

/// The outcome a search event reports for its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A root or feasible point was found.
    Found,
    /// The rectangle was discarded.
    Pruned,
    /// The rectangle was split into orthants.
    Subdivided,
    /// The rectangle was abandoned at the minimum side length.
    Exhausted,
}

/// An event that refers to a rectangle of the search.
pub trait HasRectangle {
    /// Returns the rectangle the event refers to.
    fn rectangle(&self) -> &Rectangle;

    /// Returns the subdivision depth of the rectangle.
    fn depth(&self) -> usize;
}

/// An event that can be classified by kind.
pub trait HasKind {
    /// Returns the kind of this event.
    fn kind(&self) -> EventKind;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- roots ---

impl HasRectangle for roots::Event<'_> {
    fn rectangle(&self) -> &Rectangle {
        roots::Event::rectangle(self)
    }

    fn depth(&self) -> usize {
        roots::Event::depth(self)
    }
}

impl HasKind for roots::Event<'_> {
    fn kind(&self) -> EventKind {
        match self {
            roots::Event::RootFound { .. } => EventKind::Found,
            roots::Event::Pruned { .. } => EventKind::Pruned,
            roots::Event::Subdivided { .. } => EventKind::Subdivided,
            roots::Event::Exhausted { .. } => EventKind::Exhausted,
        }
    }
}

impl CanStopEarly for roots::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- feasibility ---

impl HasRectangle for feasibility::Event<'_> {
    fn rectangle(&self) -> &Rectangle {
        feasibility::Event::rectangle(self)
    }

    fn depth(&self) -> usize {
        feasibility::Event::depth(self)
    }
}

impl HasKind for feasibility::Event<'_> {
    fn kind(&self) -> EventKind {
        match self {
            feasibility::Event::Satisfied { .. } => EventKind::Found,
            feasibility::Event::Pruned { .. } => EventKind::Pruned,
            feasibility::Event::Subdivided { .. } => EventKind::Subdivided,
            feasibility::Event::Exhausted { .. } => EventKind::Exhausted,
        }
    }
}

impl CanStopEarly for feasibility::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
