//! Cache hierarchy capability trait.
//!
//! The cache hierarchy itself is simulated elsewhere. The processor assembly
//! only needs to know whether it is a Ruby (multi-node coherence) hierarchy,
//! since atomic cores cannot issue cached accesses into one.

use std::fmt::Debug;

/// Capability queries on the board's cache hierarchy.
///
/// All implementors must be `Send + Sync` so a finished board can be moved to
/// the simulation thread.
pub trait CacheHierarchy: Debug + Send + Sync {
    /// Short name for diagnostics (e.g., `"classic"`, `"ruby"`).
    fn name(&self) -> &str;
    /// Returns `true` if the hierarchy is built on the Ruby coherence substrate.
    fn is_ruby(&self) -> bool;
}

/// No caches; the cores talk straight to memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl CacheHierarchy for NoCache {
    fn name(&self) -> &str {
        "no_cache"
    }

    fn is_ruby(&self) -> bool {
        false
    }
}

/// Classic (non-Ruby) packet-based cache hierarchy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicCache;

impl CacheHierarchy for ClassicCache {
    fn name(&self) -> &str {
        "classic"
    }

    fn is_ruby(&self) -> bool {
        false
    }
}

/// Ruby hierarchy running a named coherence protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubyCache {
    protocol: String,
}

impl RubyCache {
    /// Creates a Ruby hierarchy for `protocol` (e.g., `"MESI_Two_Level"`).
    pub fn new(protocol: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
        }
    }

    /// Coherence protocol name.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }
}

impl CacheHierarchy for RubyCache {
    fn name(&self) -> &str {
        "ruby"
    }

    fn is_ruby(&self) -> bool {
        true
    }
}
