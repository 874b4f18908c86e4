//! Memory mode selection.
//!
//! Maps the cores of a processor, together with the board's cache hierarchy,
//! to the single memory mode the whole board runs under. Rules, first match wins:
//! 1. **Acceleration:** Any accelerated core forces `atomic_noncaching`.
//! 2. **First core:** Otherwise only `cores[0]` is inspected. Processors mixing
//!    core models are not supported, and later cores are never consulted.

use tracing::{debug, warn};

use crate::common::{ConfigError, ConfigWarning, Result};
use crate::core::{Core, CpuCapability};
use crate::soc::MemMode;

/// Outcome of memory mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSelection {
    /// Mode the board must run under.
    pub mode: MemMode,
    /// Warning emitted while selecting, if any.
    pub warning: Option<ConfigWarning>,
}

impl ModeSelection {
    const fn plain(mode: MemMode) -> Self {
        Self {
            mode,
            warning: None,
        }
    }
}

/// Picks the board memory mode for `cores`.
///
/// Performs no mutation. The only side effect is a logged warning when an
/// atomic core meets a Ruby hierarchy.
///
/// # Errors
///
/// `EmptyProcessor` for an empty slice; `UnsupportedConfiguration` when no
/// core is accelerated and the first core has no memory-mode branch.
pub fn select_memory_mode(cores: &[Core], is_ruby: bool) -> Result<ModeSelection> {
    let first = cores.first().ok_or(ConfigError::EmptyProcessor)?;

    if cores.iter().any(Core::is_accelerated) {
        debug!("accelerated core present; selecting atomic_noncaching");
        return Ok(ModeSelection::plain(MemMode::AtomicNonCaching));
    }

    let selection = mode_for_capability(first.capability(), is_ruby)?;
    if let Some(warning) = selection.warning {
        warn!(core = first.name(), "{warning}");
    }
    debug!(core = first.name(), mode = %selection.mode, "memory mode selected");
    Ok(selection)
}

/// Non-accelerated branch of the decision, for a single capability.
///
/// # Errors
///
/// `UnsupportedConfiguration` for capabilities with no memory-mode branch.
pub fn mode_for_capability(capability: CpuCapability, is_ruby: bool) -> Result<ModeSelection> {
    match capability {
        CpuCapability::TimingInOrder
        | CpuCapability::TimingOutOfOrder
        | CpuCapability::TimingMinor => Ok(ModeSelection::plain(MemMode::Timing)),
        CpuCapability::AtomicNonCaching => Ok(ModeSelection::plain(MemMode::AtomicNonCaching)),
        CpuCapability::AtomicStrict if is_ruby => Ok(ModeSelection {
            mode: MemMode::AtomicNonCaching,
            warning: Some(ConfigWarning::AtomicCoreWithRuby),
        }),
        CpuCapability::AtomicStrict => Ok(ModeSelection::plain(MemMode::Atomic)),
        CpuCapability::Accelerated | CpuCapability::TraceReplay => {
            Err(ConfigError::UnsupportedConfiguration { capability })
        }
    }
}
