//! Execution-model capability of a simulated core.
//!
//! Every core declares exactly one capability when it is built. The processor
//! assembly dispatches on it to pick the board memory mode and to decide
//! whether the acceleration wiring has to run.

use std::fmt;

use serde::Deserialize;

/// Execution model a core was built with.
///
/// Capabilities are fixed for the lifetime of a core; the assembly only
/// ever reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CpuCapability {
    /// Strict atomic core: each memory access completes in a single call and
    /// goes through the caches.
    AtomicStrict,
    /// Atomic core that bypasses the caches entirely.
    AtomicNonCaching,
    /// Timing-accurate single-issue in-order core.
    TimingInOrder,
    /// Timing-accurate out-of-order core.
    #[serde(alias = "O3")]
    TimingOutOfOrder,
    /// Timing-accurate pipelined in-order core with a four-stage model.
    TimingMinor,
    /// Core that executes on the host through hardware virtualization.
    #[serde(alias = "Kvm")]
    Accelerated,
    /// Trace-driven replay core. It has no memory-mode branch and cannot be
    /// incorporated onto a board.
    TraceReplay,
}

impl CpuCapability {
    /// Returns `true` for cores that run through host virtualization.
    #[inline]
    pub const fn is_accelerated(self) -> bool {
        matches!(self, Self::Accelerated)
    }
}

impl fmt::Display for CpuCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AtomicStrict => "atomic",
            Self::AtomicNonCaching => "atomic non-caching",
            Self::TimingInOrder => "timing in-order",
            Self::TimingOutOfOrder => "timing out-of-order",
            Self::TimingMinor => "minor",
            Self::Accelerated => "accelerated",
            Self::TraceReplay => "trace replay",
        };
        f.write_str(name)
    }
}
