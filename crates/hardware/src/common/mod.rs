//! Common types used throughout the configuration layer.
//!
//! This module provides the building blocks shared by every other module. It includes:
//! 1. **Constants:** Clock resolution, quantum length, and the shared event queue.
//! 2. **Error Handling:** The `ConfigError` taxonomy, non-fatal `ConfigWarning`s, and the `Result` alias.

/// Common constants and scalar type aliases.
pub mod constants;

/// Error types for configuration failures.
pub mod error;

pub use constants::{EventQueueIndex, SHARED_EVENT_QUEUE, Tick};
pub use error::{ConfigError, ConfigWarning, Result};
