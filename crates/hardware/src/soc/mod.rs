//! Board-level components.
//!
//! This module organizes the parts of the simulated board the processor
//! assembly interacts with: the board itself, its cache hierarchy capability,
//! and the board-wide memory mode.

/// Board type and its processor-writable fields.
pub mod board;

/// Cache hierarchy capability trait and hierarchy kinds.
pub mod cache;

/// Board-wide memory access mode.
pub mod mem_mode;

pub use board::Board;
pub use cache::{CacheHierarchy, ClassicCache, NoCache, RubyCache};
pub use mem_mode::MemMode;
