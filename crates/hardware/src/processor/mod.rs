//! Processor assembly and execution-mode selection.
//!
//! This module turns a list of cores into a processor a board can run. It performs:
//! 1. **Mode selection:** Picks the board memory mode from the core capabilities.
//! 2. **Acceleration wiring:** Shares a VM context with the board and partitions event queues.
//! 3. **Calibration:** Fixes the global frequency and quantum when accelerated cores exist.
//! 4. **Switching:** Holds several named core sets of which one is active.

/// Acceleration context, host backends, and event-queue partitioning.
pub mod accel;

/// `ProcessorAssembly` and its core layouts.
pub mod assembly;

/// Simulation clock calibration for accelerated cores.
pub mod calibrate;

/// Board memory mode decision.
pub mod mode_select;

/// Switchable core sets.
pub mod switchable;

pub use accel::{AccelerationBackend, AccelerationContext, HostKvm};
pub use assembly::{CoreLayout, ProcessorAssembly};
pub use calibrate::Calibration;
pub use mode_select::{ModeSelection, select_memory_mode};
pub use switchable::SwitchableCores;
