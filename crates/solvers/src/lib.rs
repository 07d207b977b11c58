//! Solvers for systems of polynomial equations and inequalities over
//! axis-aligned rectangles.
//!
//! # Solvers
//!
//! - [`roots`] — finds the isolated roots of a square system of equations,
//!   subject to non-negativity constraints, by Newton iteration and
//!   subdivision
//! - [`feasibility`] — decides whether a set of inequalities can be satisfied
//!   together somewhere in a rectangle
//!
//! Both searches prune rectangles with the Taylor bounds in [`derivatives`].
//! The numerical tolerances they share are fixed constants in [`tolerance`].

pub mod derivatives;
pub mod feasibility;
pub mod roots;
pub mod tolerance;

mod precedence;
