//! Core types for polynomial root finding over bounded regions.
//!
//! This crate defines the algebra and geometry that the solvers build on:
//!
//! - [`VariableSpace`] — a shared, immutable set of indexed variables
//! - [`ExponentVector`], [`Monomial`], [`Polynomial`] — canonical sparse
//!   polynomials with exact symbolic manipulation and `f64` evaluation
//! - [`PolynomialSystem`] — equations followed by non-negativity constraints
//! - [`Interval`], [`Rectangle`] — axis-aligned search boxes and their
//!   subdivision into orthants
//! - [`linalg`] — the small dense linear algebra needed by Newton steps
//! - [`Observer`] — receives solver events and optionally returns control actions

mod error;
mod exponent;
mod geometry;
pub mod linalg;
mod monomial;
mod observer;
mod polynomial;
mod space;
mod system;

pub use error::AlgebraError;
pub use exponent::ExponentVector;
pub use geometry::{Interval, IntervalError, Rectangle};
pub use monomial::Monomial;
pub use observer::Observer;
pub use polynomial::Polynomial;
pub use space::VariableSpace;
pub use system::PolynomialSystem;
