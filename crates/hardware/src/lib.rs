//! Processor assembly and execution-mode selection for a cycle-level board simulator.
//!
//! This crate implements the configuration step that puts a processor onto a board:
//! 1. **Cores:** Capability-tagged cores owning their simulation object trees.
//! 2. **Processor:** Fixed or switchable core layouts, memory mode selection, and acceleration wiring.
//! 3. **Board:** Cache hierarchy capability, write-once memory mode, and the acceleration slot.
//! 4. **Simulation:** Object tree, explicit global clock context, and the configuration driver.
//! 5. **Configuration:** JSON-deserializable board, processor, and clock settings.

/// Common types and constants (errors, warnings, ticks, event queues).
pub mod common;
/// Configuration structures (board, processor, cores, clock).
pub mod config;
/// Simulated cores and their capabilities.
pub mod core;
/// Processor assembly, mode selection, acceleration, calibration, switching.
pub mod processor;
/// Simulation object tree, clock, and configuration driver.
pub mod sim;
/// Board, cache hierarchy capability, and memory mode.
pub mod soc;

/// Root configuration type; use `Config::default()` or `Config::from_json_str`.
pub use crate::config::Config;
/// Core type and capability tag.
pub use crate::core::{Core, CpuCapability};
/// Processor type; build with `ProcessorAssembly::new` or `ProcessorAssembly::switchable`.
pub use crate::processor::ProcessorAssembly;
/// Board type the processor is incorporated into.
pub use crate::soc::{Board, MemMode};
