//! Clock calibration for accelerated execution.
//!
//! Accelerated cores need a non-zero simulation quantum, and the quantum has
//! to be expressed in ticks of a frozen global frequency. Setting a quantum
//! shifts the scheduling of simulation exits by up to one quantum, so it is
//! only done when an accelerated core can actually run.
//!
//! Known limitation: a switchable processor that moves between accelerated
//! and non-accelerated core sets keeps the quantum for the whole run, so exit
//! scheduling for the non-accelerated sets is off by up to one quantum. This
//! is reported through `Calibration::Calibrated::skewed_exits`, not corrected.

use tracing::{info, warn};

use crate::common::constants::SIM_QUANTUM_SECONDS;
use crate::common::{Result, Tick};
use crate::processor::CoreLayout;
use crate::sim::SimClock;

/// What the calibration step did to the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calibration {
    /// No accelerated core is reachable; the clock was not touched.
    Unchanged,
    /// Frequency fixed and quantum set.
    Calibrated {
        /// Quantum written to the clock, in ticks.
        quantum: Tick,
        /// Some core set can run without acceleration under this quantum, so
        /// its exit events will be scheduled late.
        skewed_exits: bool,
    },
}

/// Fixes the frequency and sets the quantum if any core in `layout`,
/// active or not, is accelerated.
///
/// # Errors
///
/// Propagates tick-conversion failures from `clock`.
pub fn calibrate_clock(layout: &CoreLayout, clock: &mut SimClock) -> Result<Calibration> {
    if !layout.all_cores().any(|core| core.is_accelerated()) {
        return Ok(Calibration::Unchanged);
    }

    clock.fix_global_frequency();
    let quantum = clock.ticks_from_seconds(SIM_QUANTUM_SECONDS)?;
    clock.set_sim_quantum(quantum);
    info!(quantum, "simulation quantum set for accelerated cores");

    let skewed_exits = layout.has_unaccelerated_set();
    if skewed_exits {
        warn!(
            quantum,
            "switchable processor mixes accelerated and non-accelerated core sets; \
             exit events for the non-accelerated sets will be scheduled late"
        );
    }

    Ok(Calibration::Calibrated {
        quantum,
        skewed_exits,
    })
}
