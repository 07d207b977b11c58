//! Fixed numerical tolerances.
//!
//! These are algorithm parameters, not run configuration; search results are
//! only reproducible with these exact values.

/// Rectangles whose longest side is shorter than this are not subdivided.
pub const MIN_SIDE_LENGTH: f64 = 1e-8;

/// A Newton system `J Jᵀ` with a determinant smaller than this in magnitude
/// is treated as singular.
pub const SINGULAR_DETERMINANT: f64 = 1e-12;

/// A residual component no larger than this in magnitude counts as zero.
pub const ZERO_RESIDUAL: f64 = 1e-12;

/// Component-wise relative tolerance under which two roots are the same.
pub const ROOT_EQUALITY_TOLERANCE: f64 = 1e-6;

/// Slack allowed when checking that a converged point lies in its rectangle.
pub const CONTAINMENT_TOLERANCE: f64 = 1e-10;

/// Fraction of the distance to a rectangle side by which a point is moved
/// when the Jacobian is singular there.
pub const PERTURBATION_FRACTION: f64 = 0.1;

/// Newton iterations allowed before a start point is abandoned.
pub const MAX_NEWTON_STEPS: usize = 100;

/// Step halvings tried by each improving step before giving up on it.
pub const MAX_STEP_HALVINGS: usize = 30;
