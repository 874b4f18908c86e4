//! Global simulation clock.
//!
//! The simulation frequency and quantum are process-wide settings in a running
//! simulator. Here they live in an explicit `SimClock` that the driver owns and
//! passes to the pre-instantiation step. It provides:
//! 1. **Frequency:** Ticks per second, adjustable until it is fixed.
//! 2. **Conversion:** Seconds to ticks, valid only once the frequency is fixed.
//! 3. **Quantum:** The slack allowed between accelerated and simulated segments.

use tracing::{info, warn};

use crate::common::constants::{DEFAULT_TICKS_PER_SECOND, FREQUENCY_TOLERANCE};
use crate::common::{ConfigError, Result, Tick};

/// Global simulation frequency and quantum.
#[derive(Debug, Clone, PartialEq)]
pub struct SimClock {
    ticks_per_second: u64,
    frequency_fixed: bool,
    sim_quantum: Option<Tick>,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            frequency_fixed: false,
            sim_quantum: None,
        }
    }
}

impl SimClock {
    /// Creates a clock running at `ticks_per_second`, not yet fixed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFrequency` for a zero frequency.
    pub fn new(ticks_per_second: u64) -> Result<Self> {
        let mut clock = Self::default();
        clock.set_ticks_per_second(ticks_per_second)?;
        Ok(clock)
    }

    /// Changes the global frequency.
    ///
    /// # Errors
    ///
    /// Returns `FrequencyAlreadyFixed` once `fix_global_frequency` has run, and
    /// `InvalidFrequency` for zero.
    pub fn set_ticks_per_second(&mut self, ticks_per_second: u64) -> Result<()> {
        if self.frequency_fixed {
            return Err(ConfigError::FrequencyAlreadyFixed(self.ticks_per_second));
        }
        if ticks_per_second == 0 {
            return Err(ConfigError::InvalidFrequency(ticks_per_second));
        }
        self.ticks_per_second = ticks_per_second;
        Ok(())
    }

    /// Freezes the global frequency. Calling it again is a no-op.
    pub fn fix_global_frequency(&mut self) {
        if self.frequency_fixed {
            return;
        }
        self.frequency_fixed = true;
        info!(
            ticks_per_second = self.ticks_per_second,
            "global frequency set"
        );
    }

    /// Whether the frequency has been fixed.
    pub const fn is_frequency_fixed(&self) -> bool {
        self.frequency_fixed
    }

    /// Current ticks per second.
    pub const fn ticks_per_second(&self) -> u64 {
        self.ticks_per_second
    }

    /// Converts simulated seconds to ticks, rounding half up.
    ///
    /// # Arguments
    ///
    /// * `seconds` - Non-negative, finite duration.
    ///
    /// # Returns
    ///
    /// The duration in ticks. A conversion that loses more than
    /// `FREQUENCY_TOLERANCE` relative precision is logged but still returned.
    ///
    /// # Errors
    ///
    /// `FrequencyNotFixed` before `fix_global_frequency`, `InvalidDuration` for
    /// negative or non-finite input.
    pub fn ticks_from_seconds(&self, seconds: f64) -> Result<Tick> {
        if !self.frequency_fixed {
            return Err(ConfigError::FrequencyNotFixed);
        }
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ConfigError::InvalidDuration(seconds));
        }
        if seconds == 0.0 {
            return Ok(0);
        }

        let exact = seconds * self.ticks_per_second as f64;
        let ticks = (exact + 0.5).floor();
        let err = (exact - ticks).abs() / exact;
        if err > FREQUENCY_TOLERANCE {
            warn!(
                seconds,
                ticks, "tick conversion error exceeds tolerance; frequency too low?"
            );
        }
        Ok(ticks as Tick)
    }

    /// Sets the simulation quantum.
    pub const fn set_sim_quantum(&mut self, ticks: Tick) {
        self.sim_quantum = Some(ticks);
    }

    /// The simulation quantum, if one has been set.
    pub const fn sim_quantum(&self) -> Option<Tick> {
        self.sim_quantum
    }
}
