//! Global Configuration Constants.
//!
//! This module defines constants shared by the clock, the acceleration wiring, and the loader. It includes:
//! 1. **Clock Constants:** Default tick resolution and conversion tolerance.
//! 2. **Scheduling Constants:** The shared event queue and the accelerated quantum.
//! 3. **Host Constants:** Default virtualization device node.

/// Simulated ticks per second before the frequency is fixed (1 tick = 1 ps).
pub const DEFAULT_TICKS_PER_SECOND: u64 = 1_000_000_000_000;

/// Relative rounding error above which a seconds-to-ticks conversion warns.
pub const FREQUENCY_TOLERANCE: f64 = 0.001;

/// Simulated time, in seconds, that accelerated and non-accelerated segments may diverge.
pub const SIM_QUANTUM_SECONDS: f64 = 0.001;

/// Event queue shared by all non-accelerated activity.
pub const SHARED_EVENT_QUEUE: EventQueueIndex = 0;

/// Device node probed by the host KVM backend.
pub const DEFAULT_KVM_DEVICE: &str = "/dev/kvm";

/// Simulated time in ticks.
pub type Tick = u64;

/// Index of an event queue; `0` is the shared queue.
pub type EventQueueIndex = u32;
