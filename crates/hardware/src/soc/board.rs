//! Simulated board as seen by the processor assembly.
//!
//! The board is constructed elsewhere and handed to the processor by mutable
//! reference. The processor may write exactly these fields:
//! 1. **Memory mode:** Write-once per configuration.
//! 2. **Acceleration slot:** The shared virtual-machine context, attached once.
//! 3. **Warnings:** Non-fatal findings, deduplicated.
//!
//! Everything else (cache hierarchy, board-level objects) is read-only here.

use std::sync::Arc;

use tracing::debug;

use crate::common::{ConfigError, ConfigWarning, Result};
use crate::processor::AccelerationContext;
use crate::sim::SimObject;
use crate::soc::cache::CacheHierarchy;
use crate::soc::MemMode;

/// Top-level board: cache hierarchy, board-level simulation objects, and the
/// fields the processor configures.
#[derive(Debug)]
pub struct Board {
    cache_hierarchy: Box<dyn CacheHierarchy>,
    objects: Vec<SimObject>,
    mem_mode: Option<MemMode>,
    acceleration_context: Option<Arc<AccelerationContext>>,
    warnings: Vec<ConfigWarning>,
}

impl Board {
    /// Creates a board around `cache_hierarchy` with no objects and no memory mode.
    pub fn new(cache_hierarchy: Box<dyn CacheHierarchy>) -> Self {
        Self {
            cache_hierarchy,
            objects: Vec::new(),
            mem_mode: None,
            acceleration_context: None,
            warnings: Vec::new(),
        }
    }

    /// Adds a board-level simulation object (memory controller, I/O bridge, ...).
    #[must_use]
    pub fn with_object(mut self, object: SimObject) -> Self {
        self.objects.push(object);
        self
    }

    /// The board's cache hierarchy.
    pub fn cache_hierarchy(&self) -> &dyn CacheHierarchy {
        self.cache_hierarchy.as_ref()
    }

    /// Board-level simulation objects, not including the processor.
    pub fn objects(&self) -> &[SimObject] {
        &self.objects
    }

    /// Current memory mode, `None` until the processor is incorporated.
    pub const fn mem_mode(&self) -> Option<MemMode> {
        self.mem_mode
    }

    /// Sets the memory mode.
    ///
    /// Writing the mode that is already set is accepted, so a processor may
    /// re-apply its decision.
    ///
    /// # Errors
    ///
    /// Returns `MemoryModeConflict` if a different mode was set before.
    pub fn set_mem_mode(&mut self, mode: MemMode) -> Result<()> {
        match self.mem_mode {
            Some(current) if current != mode => Err(ConfigError::MemoryModeConflict {
                current,
                requested: mode,
            }),
            Some(_) => Ok(()),
            None => {
                debug!(%mode, "board memory mode set");
                self.mem_mode = Some(mode);
                Ok(())
            }
        }
    }

    /// Shared acceleration context, if an accelerated processor was incorporated.
    pub const fn acceleration_context(&self) -> Option<&Arc<AccelerationContext>> {
        self.acceleration_context.as_ref()
    }

    /// Attaches the shared acceleration context.
    ///
    /// # Errors
    ///
    /// Returns `AccelerationContextConflict` if another context is already
    /// attached. Re-attaching the same context is a no-op.
    pub fn attach_acceleration_context(&mut self, context: Arc<AccelerationContext>) -> Result<()> {
        match &self.acceleration_context {
            Some(existing) if Arc::ptr_eq(existing, &context) => Ok(()),
            Some(_) => Err(ConfigError::AccelerationContextConflict),
            None => {
                self.acceleration_context = Some(context);
                Ok(())
            }
        }
    }

    /// Records a non-fatal warning once.
    pub fn record_warning(&mut self, warning: ConfigWarning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// Warnings recorded so far, in first-seen order.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}
