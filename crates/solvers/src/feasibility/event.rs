use ndarray::Array1;
use polyroot_core::Rectangle;

/// Events emitted by the feasibility search, one per rectangle examined.
#[derive(Debug)]
pub enum Event<'a> {
    /// Every inequality holds at the rectangle's center.
    Satisfied {
        rectangle: &'a Rectangle,
        depth: usize,
        point: &'a Array1<f64>,
    },

    /// An inequality is negative throughout the rectangle.
    Pruned {
        rectangle: &'a Rectangle,
        depth: usize,

        /// Index in the system of the violated inequality.
        polynomial: usize,
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
            Self::Satisfied { rectangle, .. }
            | Self::Pruned { rectangle, .. }
            | Self::Subdivided { rectangle, .. }
            | Self::Exhausted { rectangle, .. } => rectangle,
        }
    }

    /// Returns the subdivision depth of the rectangle.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Satisfied { depth, .. }
            | Self::Pruned { depth, .. }
            | Self::Subdivided { depth, .. }
            | Self::Exhausted { depth, .. } => *depth,
        }
    }
}
