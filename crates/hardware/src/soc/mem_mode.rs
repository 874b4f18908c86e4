//! Board-wide memory access mode.

use std::fmt;

/// How memory accesses are timed across the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemMode {
    /// Cycle-accurate timing requests.
    Timing,
    /// Single-call atomic accesses through the caches.
    Atomic,
    /// Single-call atomic accesses that bypass the caches.
    AtomicNonCaching,
}

impl fmt::Display for MemMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Timing => "timing",
            Self::Atomic => "atomic",
            Self::AtomicNonCaching => "atomic_noncaching",
        })
    }
}
