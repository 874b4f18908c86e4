//! Hardware-virtualization acceleration.
//!
//! Accelerated cores execute guest code directly on the host. Supporting them
//! needs three pieces of wiring:
//! 1. **Context:** One virtual-machine execution context shared by the processor and the board.
//! 2. **Event queues:** Each core's dispatch loop gets its own queue so it can run
//!    on its own host thread; everything beneath the core stays on the shared queue.
//! 3. **Memory mode:** The board must run `atomic_noncaching`.
//!
//! Clock calibration is the fourth piece and runs later; see `calibrate`.

use std::fmt::Debug;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::common::constants::DEFAULT_KVM_DEVICE;
use crate::common::{ConfigError, EventQueueIndex, Result, SHARED_EVENT_QUEUE};
use crate::core::Core;
use crate::soc::{Board, MemMode};

/// Shared virtual-machine execution context.
///
/// Created once per processor and attached to the board; read-only afterwards.
#[derive(Debug, PartialEq, Eq)]
pub struct AccelerationContext {
    backend: String,
}

impl AccelerationContext {
    /// Creates a context provided by `backend`.
    pub fn new(backend: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
        }
    }

    /// Name of the backend that created this context.
    pub fn backend(&self) -> &str {
        &self.backend
    }
}

/// Source of acceleration contexts on the host.
pub trait AccelerationBackend: Debug {
    /// Backend name used in diagnostics.
    fn name(&self) -> &str;

    /// Builds a new virtual-machine context.
    ///
    /// # Errors
    ///
    /// `AccelerationUnavailable` when the host lacks virtualization support.
    fn create_context(&self) -> Result<AccelerationContext>;
}

/// KVM on the local host, detected through its device node.
#[derive(Debug, Clone)]
pub struct HostKvm {
    device: PathBuf,
}

impl Default for HostKvm {
    fn default() -> Self {
        Self::new(DEFAULT_KVM_DEVICE)
    }
}

impl HostKvm {
    /// Probes `device` instead of the default `/dev/kvm`.
    pub fn new(device: impl AsRef<Path>) -> Self {
        Self {
            device: device.as_ref().to_path_buf(),
        }
    }

    /// Device node this backend probes.
    pub fn device(&self) -> &Path {
        &self.device
    }
}

impl AccelerationBackend for HostKvm {
    fn name(&self) -> &str {
        "kvm"
    }

    fn create_context(&self) -> Result<AccelerationContext> {
        let opened = OpenOptions::new().read(true).write(true).open(&self.device);
        if let Err(err) = opened {
            let reason = if err.kind() == io::ErrorKind::NotFound {
                format!("{} not present", self.device.display())
            } else {
                format!("cannot open {}: {err}", self.device.display())
            };
            return Err(ConfigError::AccelerationUnavailable {
                backend: self.name().to_owned(),
                reason,
            });
        }
        Ok(AccelerationContext::new(self.name()))
    }
}

/// Wires accelerated execution onto `board`.
///
/// Attaches `context`, then walks `cores` in order giving core `i` the
/// top-level queue `i + 1` and everything beneath it the shared queue, and
/// finally sets `atomic_noncaching`. Every core in the slice is renumbered,
/// accelerated or not.
///
/// A board already committed to another memory mode is rejected before
/// anything is touched.
///
/// # Errors
///
/// Propagates board conflicts (`AccelerationContextConflict`,
/// `MemoryModeConflict`).
pub fn coordinate_accelerated_execution(
    cores: &mut [Core],
    context: &Arc<AccelerationContext>,
    board: &mut Board,
) -> Result<()> {
    if let Some(current) = board.mem_mode().filter(|&m| m != MemMode::AtomicNonCaching) {
        return Err(ConfigError::MemoryModeConflict {
            current,
            requested: MemMode::AtomicNonCaching,
        });
    }
    board.attach_acceleration_context(Arc::clone(context))?;

    let first_queue: EventQueueIndex = SHARED_EVENT_QUEUE + 1;
    for (queue, core) in (first_queue..).zip(cores.iter_mut()) {
        core.assign_event_queues(queue, SHARED_EVENT_QUEUE);
        debug!(core = core.name(), queue, "event queue assigned");
    }

    board.set_mem_mode(MemMode::AtomicNonCaching)
}
