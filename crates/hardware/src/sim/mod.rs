//! Simulation plumbing used at configuration time.
//!
//! Provides the simulation object tree, the global clock context, and the
//! driver that assembles a board and processor from configuration.

/// Global simulation frequency and quantum.
pub mod clock;

/// Simulation object tree and event-queue assignment.
pub mod object;

/// Configuration driver: build, incorporate, pre-instantiate.
pub mod setup;

pub use clock::SimClock;
pub use object::SimObject;
pub use setup::{ConfiguredSystem, configure};
