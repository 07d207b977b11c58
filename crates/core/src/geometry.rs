//! Axis-aligned search regions.
//!
//! A [`Rectangle`] is a product of closed [`Interval`]s, one per variable.
//! Searches never mutate a rectangle; they derive new ones from it (halves,
//! orthants, and the doubled-length escape region used by Newton's method).

mod interval;
mod rectangle;

pub use interval::{Interval, IntervalError};
pub use rectangle::Rectangle;
