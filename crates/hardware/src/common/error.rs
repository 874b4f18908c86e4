//! Configuration error definitions.
//!
//! This module defines the error type returned by every fallible configuration step. It provides:
//! 1. **Processor Errors:** Unsupported core capabilities, empty processors, and core-set misuse.
//! 2. **Board Errors:** Conflicting writes to the write-once board fields.
//! 3. **Acceleration Errors:** Host virtualization support that cannot be reached.
//! 4. **Clock Errors:** Frequency and tick-conversion ordering violations.
//! 5. **Loader Errors:** JSON and I/O failures while reading a configuration file.
//!
//! None of these are retried; they abort configuration and propagate to the driver unchanged.

use thiserror::Error;

use crate::core::CpuCapability;
use crate::soc::MemMode;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while assembling a processor onto a board.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The first core's capability has no memory-mode branch.
    #[error("unsupported configuration: no memory mode for {capability} cores")]
    UnsupportedConfiguration {
        /// Capability that failed to match.
        capability: CpuCapability,
    },

    /// The host cannot provide a virtual-machine execution context.
    #[error("acceleration backend `{backend}` unavailable: {reason}")]
    AccelerationUnavailable {
        /// Backend that was probed (e.g. `"kvm"`).
        backend: String,
        /// Human-readable cause reported by the backend.
        reason: String,
    },

    /// A processor (or one of its core sets) was built without cores.
    #[error("processor must contain at least one core")]
    EmptyProcessor,

    /// A switchable processor was asked for a core set it does not hold.
    #[error("unknown core set `{0}`")]
    UnknownCoreSet(String),

    /// Two core sets of a switchable processor share a name.
    #[error("duplicate core set `{0}`")]
    DuplicateCoreSet(String),

    /// Core sets of a switchable processor must be swappable one-for-one.
    #[error("core set `{name}` has {found} cores, expected {expected}")]
    MismatchedCoreCount {
        /// Offending core set.
        name: String,
        /// Core count of the first set.
        expected: usize,
        /// Core count of the offending set.
        found: usize,
    },

    /// The board memory mode is write-once per configuration.
    #[error("memory mode already set to {current}, refusing {requested}")]
    MemoryModeConflict {
        /// Mode already present on the board.
        current: MemMode,
        /// Mode that was requested afterwards.
        requested: MemMode,
    },

    /// A different acceleration context is already attached to the board.
    #[error("board already holds a different acceleration context")]
    AccelerationContextConflict,

    /// Tick conversions need a fixed global frequency.
    #[error("global frequency must be fixed before converting to ticks")]
    FrequencyNotFixed,

    /// The global frequency can no longer change once fixed.
    #[error("global frequency already fixed at {0} ticks per second")]
    FrequencyAlreadyFixed(u64),

    /// Zero ticks per second.
    #[error("invalid global frequency: {0} ticks per second")]
    InvalidFrequency(u64),

    /// Negative or non-finite duration passed to a tick conversion.
    #[error("invalid duration: {0} seconds")]
    InvalidDuration(f64),

    /// Malformed configuration document.
    #[error("invalid configuration json: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Non-fatal findings recorded while configuring a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigWarning {
    /// An atomic core was paired with a Ruby hierarchy; the board falls back
    /// to `atomic_noncaching` and skips the caches completely.
    AtomicCoreWithRuby,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomicCoreWithRuby => f.write_str(
                "using an atomic core with Ruby results in 'atomic_noncaching' memory mode; caching is skipped completely",
            ),
        }
    }
}
