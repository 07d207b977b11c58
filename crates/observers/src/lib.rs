//! Reusable observers for the polyroot solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the root and feasibility searches.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasRectangle`], [`HasKind`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`SearchStats`] — counts events by kind and records the deepest level
//! - [`DepthLimit`] — stops a search once it subdivides past a given depth
//! - [`TracingObserver`] — reports every event through `tracing`
//!
//! [`Observer`]: polyroot_core::Observer
//! [`HasRectangle`]: traits::HasRectangle
//! [`HasKind`]: traits::HasKind
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod limit;
mod stats;
mod trace;

pub use limit::DepthLimit;
pub use stats::SearchStats;
pub use trace::TracingObserver;
