//! Configuration driver.
//!
//! Turns a `Config` into a wired board and processor, in the order a
//! simulation driver must follow:
//! 1. **Build:** Board (with cache hierarchy and objects), processor, and clock.
//! 2. **Incorporate:** The board asks the processor to wire itself in.
//! 3. **Pre-instantiate:** The processor calibrates the global clock.

use tracing::info;

use crate::common::Result;
use crate::config::{
    BoardConfig, CacheHierarchyKind, ClockConfig, Config, CoreConfig, ProcessorConfig,
};
use crate::core::Core;
use crate::processor::{AccelerationBackend, Calibration, ProcessorAssembly, SwitchableCores};
use crate::sim::{SimClock, SimObject};
use crate::soc::{Board, CacheHierarchy, ClassicCache, NoCache, RubyCache};

/// A board and processor ready for instantiation.
#[derive(Debug)]
pub struct ConfiguredSystem {
    /// Board with memory mode (and acceleration context) set.
    pub board: Board,
    /// Incorporated processor.
    pub processor: ProcessorAssembly,
    /// Global clock after pre-instantiation.
    pub clock: SimClock,
    /// What pre-instantiation did to the clock.
    pub calibration: Calibration,
}

/// Builds and wires everything described by `config`.
///
/// # Errors
///
/// Any construction, incorporation, or calibration error, unchanged.
pub fn configure(config: &Config, backend: &dyn AccelerationBackend) -> Result<ConfiguredSystem> {
    let mut board = build_board(&config.board);
    let mut processor = build_processor(&config.processor, backend)?;
    let mut clock = build_clock(&config.clock)?;

    processor.incorporate_processor(&mut board)?;
    let calibration = processor.pre_instantiate(&mut clock)?;

    info!(
        cores = processor.num_cores(),
        hierarchy = board.cache_hierarchy().name(),
        "system configured"
    );

    Ok(ConfiguredSystem {
        board,
        processor,
        clock,
        calibration,
    })
}

/// Builds a board from its configuration section.
pub fn build_board(config: &BoardConfig) -> Board {
    let hierarchy: Box<dyn CacheHierarchy> = match config.cache_hierarchy {
        CacheHierarchyKind::NoCache => Box::new(NoCache),
        CacheHierarchyKind::Classic => Box::new(ClassicCache),
        CacheHierarchyKind::Ruby => Box::new(RubyCache::new(config.ruby_protocol.as_str())),
    };
    config
        .objects
        .iter()
        .fold(Board::new(hierarchy), |board, name| {
            board.with_object(SimObject::new(name.as_str()))
        })
}

/// Builds a processor from its configuration section.
///
/// # Errors
///
/// Core-set validation errors and `AccelerationUnavailable`.
pub fn build_processor(
    config: &ProcessorConfig,
    backend: &dyn AccelerationBackend,
) -> Result<ProcessorAssembly> {
    match config {
        ProcessorConfig::Simple { cores } => {
            let cores = build_cores(cores, "cpu");
            ProcessorAssembly::new(cores, backend)
        }
        ProcessorConfig::Switchable { starting_set, sets } => {
            let sets = sets
                .iter()
                .map(|set| {
                    let prefix = format!("{}_cpu", set.name);
                    (set.name.clone(), build_cores(&set.cores, &prefix))
                })
                .collect();
            let sets = SwitchableCores::new(sets, starting_set)?;
            ProcessorAssembly::switchable(sets, backend)
        }
    }
}

/// Builds the global clock from its configuration section.
///
/// # Errors
///
/// `InvalidFrequency` for zero ticks per second.
pub fn build_clock(config: &ClockConfig) -> Result<SimClock> {
    SimClock::new(config.ticks_per_second)
}

fn build_cores(configs: &[CoreConfig], prefix: &str) -> Vec<Core> {
    configs
        .iter()
        .enumerate()
        .map(|(i, core)| {
            let name = core
                .name
                .clone()
                .unwrap_or_else(|| format!("{prefix}{i}"));
            let handle = core
                .children
                .iter()
                .fold(SimObject::new(name), |obj, child| obj.with_leaf(child.as_str()));
            Core::new(core.capability, handle)
        })
        .collect()
}
