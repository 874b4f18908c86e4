//! Simulated cores.
//!
//! This module contains the configuration-side view of a CPU core: its
//! declared execution-model capability and the simulation object it owns.

/// Execution-model capability tags.
pub mod capability;

/// Core type pairing a capability with its simulation object tree.
pub mod cpu;

pub use self::capability::CpuCapability;
pub use self::cpu::Core;
