//! Configuration system for board and processor assembly.
//!
//! This module defines the configuration structures consumed by the setup driver. It provides:
//! 1. **Defaults:** Baseline clock resolution, core sub-objects, and board objects.
//! 2. **Structures:** Board, processor (simple or switchable), core, and clock sections.
//! 3. **Loading:** JSON from a string or a file.
//!
//! # Example
//!
//! ```
//! use boardsim_core::config::{Config, ProcessorConfig};
//!
//! let json = r#"{
//!     "board": { "cache_hierarchy": "Ruby" },
//!     "processor": {
//!         "kind": "simple",
//!         "cores": [{ "capability": "TimingOutOfOrder" }, { "capability": "TimingOutOfOrder" }]
//!     }
//! }"#;
//! let config = Config::from_json_str(json).unwrap();
//! assert!(matches!(config.processor, ProcessorConfig::Simple { ref cores } if cores.len() == 2));
//! assert_eq!(config.clock.ticks_per_second, 1_000_000_000_000);
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::Result;
use crate::core::CpuCapability;

/// Default configuration values.
mod defaults {
    /// Global frequency before it is fixed (1 ps per tick).
    pub const TICKS_PER_SECOND: u64 = crate::common::constants::DEFAULT_TICKS_PER_SECOND;

    /// Coherence protocol for Ruby hierarchies.
    pub const RUBY_PROTOCOL: &str = "MESI_Two_Level";

    /// Sub-objects built beneath every core.
    pub const CORE_CHILDREN: &[&str] = &["mmu", "interrupts", "isa", "decoder"];

    /// Board-level objects besides the processor.
    pub const BOARD_OBJECTS: &[&str] = &["memory", "iobus"];
}

/// Cache hierarchy kinds the board can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CacheHierarchyKind {
    /// No caches.
    #[default]
    NoCache,
    /// Classic packet-based caches.
    Classic,
    /// Ruby coherence substrate.
    Ruby,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Board settings.
    #[serde(default)]
    pub board: BoardConfig,
    /// Processor definition.
    #[serde(default)]
    pub processor: ProcessorConfig,
    /// Global clock settings.
    #[serde(default)]
    pub clock: ClockConfig,
}

impl Config {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// `Json` for malformed documents or unknown capability names.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `Json` if it does not parse.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Board settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Cache hierarchy kind.
    #[serde(default)]
    pub cache_hierarchy: CacheHierarchyKind,
    /// Coherence protocol, used only with a Ruby hierarchy.
    #[serde(default = "BoardConfig::default_ruby_protocol")]
    pub ruby_protocol: String,
    /// Names of board-level simulation objects.
    #[serde(default = "BoardConfig::default_objects")]
    pub objects: Vec<String>,
}

impl BoardConfig {
    fn default_ruby_protocol() -> String {
        defaults::RUBY_PROTOCOL.to_owned()
    }

    fn default_objects() -> Vec<String> {
        defaults::BOARD_OBJECTS.iter().map(|&s| s.to_owned()).collect()
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cache_hierarchy: CacheHierarchyKind::default(),
            ruby_protocol: Self::default_ruby_protocol(),
            objects: Self::default_objects(),
        }
    }
}

/// Processor definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProcessorConfig {
    /// A fixed list of cores.
    Simple {
        /// Cores in definition order.
        cores: Vec<CoreConfig>,
    },
    /// Several named core sets, one active at a time.
    Switchable {
        /// Set active at simulation start.
        starting_set: String,
        /// Sets in definition order.
        sets: Vec<CoreSetConfig>,
    },
}

impl Default for ProcessorConfig {
    /// A single strict atomic core.
    fn default() -> Self {
        Self::Simple {
            cores: vec![CoreConfig::new(CpuCapability::AtomicStrict)],
        }
    }
}

/// One named set of a switchable processor.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreSetConfig {
    /// Set name.
    pub name: String,
    /// Cores in definition order.
    pub cores: Vec<CoreConfig>,
}

/// One core.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    /// Object name; derived from the core's position when omitted.
    #[serde(default)]
    pub name: Option<String>,
    /// Execution model.
    pub capability: CpuCapability,
    /// Names of the sub-objects built beneath the core.
    #[serde(default = "CoreConfig::default_children")]
    pub children: Vec<String>,
}

impl CoreConfig {
    /// Core of `capability` with default name and sub-objects.
    pub fn new(capability: CpuCapability) -> Self {
        Self {
            name: None,
            capability,
            children: Self::default_children(),
        }
    }

    fn default_children() -> Vec<String> {
        defaults::CORE_CHILDREN.iter().map(|&s| s.to_owned()).collect()
    }
}

/// Global clock settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    /// Ticks per simulated second.
    #[serde(default = "ClockConfig::default_ticks_per_second")]
    pub ticks_per_second: u64,
}

impl ClockConfig {
    const fn default_ticks_per_second() -> u64 {
        defaults::TICKS_PER_SECOND
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: Self::default_ticks_per_second(),
        }
    }
}
