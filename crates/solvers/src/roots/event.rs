use ndarray::Array1;
use polyroot_core::Rectangle;

/// Events emitted by the root search, one per rectangle examined plus one per
/// accepted root.
///
/// `depth` counts subdivisions from the starting rectangle, which has depth 0.
#[derive(Debug)]
pub enum Event<'a> {
    /// The rectangle was proven to hold no root.
    Pruned {
        rectangle: &'a Rectangle,
        depth: usize,

        /// Index in the system of the polynomial that gave the proof.
        polynomial: usize,
    },

    /// A root proven to be the only one in the rectangle was accepted.
    RootFound {
        rectangle: &'a Rectangle,
        depth: usize,
        root: &'a Array1<f64>,
    },

    /// The rectangle is about to be split into orthants.
    Subdivided { rectangle: &'a Rectangle, depth: usize },

    /// The rectangle is too small to split and was abandoned.
    Exhausted { rectangle: &'a Rectangle, depth: usize },
}

impl Event<'_> {
    /// Returns the rectangle the event refers to.
    #[must_use]
    pub fn rectangle(&self) -> &Rectangle {
        match self {
            Self::Pruned { rectangle, .. }
            | Self::RootFound { rectangle, .. }
            | Self::Subdivided { rectangle, .. }
            | Self::Exhausted { rectangle, .. } => rectangle,
        }
    }

    /// Returns the subdivision depth of the rectangle.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Pruned { depth, .. }
            | Self::RootFound { depth, .. }
            | Self::Subdivided { depth, .. }
            | Self::Exhausted { depth, .. } => *depth,
        }
    }
}
