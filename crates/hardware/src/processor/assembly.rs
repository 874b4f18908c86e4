//! Processor assembly.
//!
//! Aggregates cores into a single logical processor and finalizes their wiring
//! onto a board. A board calls `incorporate_processor` once during setup; the
//! driver calls `pre_instantiate` once before the object graph is finalized.

use std::sync::Arc;

use tracing::{debug, info};

use crate::common::{ConfigError, Result};
use crate::core::Core;
use crate::processor::accel::{
    AccelerationBackend, AccelerationContext, coordinate_accelerated_execution,
};
use crate::processor::calibrate::{Calibration, calibrate_clock};
use crate::processor::mode_select::select_memory_mode;
use crate::processor::switchable::SwitchableCores;
use crate::sim::SimClock;
use crate::soc::Board;

/// How a processor holds its cores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreLayout {
    /// One fixed list of cores.
    Fixed(Vec<Core>),
    /// Named sets, one of them active.
    Switchable(SwitchableCores),
}

impl CoreLayout {
    /// Cores currently driving the simulation.
    pub fn active_cores(&self) -> &[Core] {
        match self {
            Self::Fixed(cores) => cores,
            Self::Switchable(sets) => sets.active_cores(),
        }
    }

    fn active_cores_mut(&mut self) -> &mut [Core] {
        match self {
            Self::Fixed(cores) => cores,
            Self::Switchable(sets) => sets.active_cores_mut(),
        }
    }

    /// Every core, including inactive switchable sets.
    pub fn all_cores(&self) -> Box<dyn Iterator<Item = &Core> + '_> {
        match self {
            Self::Fixed(cores) => Box::new(cores.iter()),
            Self::Switchable(sets) => Box::new(sets.all_cores()),
        }
    }

    /// Whether the processor can end up running a set with no accelerated core.
    ///
    /// Always `false` for a fixed layout, which never switches.
    pub fn has_unaccelerated_set(&self) -> bool {
        match self {
            Self::Fixed(_) => false,
            Self::Switchable(sets) => sets.has_unaccelerated_set(),
        }
    }
}

/// A processor built from an ordered list of cores.
///
/// Core order is definition order and decides the event queue each
/// accelerated core runs on. The acceleration context exists exactly when
/// some core (in any set) is accelerated.
///
/// Processors mixing different core models have not been tested and are not
/// supported.
#[derive(Debug)]
pub struct ProcessorAssembly {
    layout: CoreLayout,
    acceleration_context: Option<Arc<AccelerationContext>>,
}

impl ProcessorAssembly {
    /// Builds a processor from a fixed core list.
    ///
    /// # Arguments
    ///
    /// * `cores` - Cores in definition order.
    /// * `backend` - Consulted only if some core is accelerated.
    ///
    /// # Errors
    ///
    /// `EmptyProcessor` for an empty list, `AccelerationUnavailable` if an
    /// accelerated core is present and the host cannot provide a context.
    pub fn new(cores: Vec<Core>, backend: &dyn AccelerationBackend) -> Result<Self> {
        if cores.is_empty() {
            return Err(ConfigError::EmptyProcessor);
        }
        Self::from_layout(CoreLayout::Fixed(cores), backend)
    }

    /// Builds a switchable processor.
    ///
    /// # Errors
    ///
    /// `AccelerationUnavailable` if any set holds an accelerated core and the
    /// host cannot provide a context.
    pub fn switchable(sets: SwitchableCores, backend: &dyn AccelerationBackend) -> Result<Self> {
        Self::from_layout(CoreLayout::Switchable(sets), backend)
    }

    fn from_layout(layout: CoreLayout, backend: &dyn AccelerationBackend) -> Result<Self> {
        let acceleration_context = if layout.all_cores().any(Core::is_accelerated) {
            let context = backend.create_context()?;
            info!(backend = backend.name(), "acceleration context created");
            Some(Arc::new(context))
        } else {
            None
        };

        Ok(Self {
            layout,
            acceleration_context,
        })
    }

    /// Active cores.
    pub fn active_cores(&self) -> &[Core] {
        self.layout.active_cores()
    }

    /// Every core, including inactive switchable sets.
    pub fn all_cores(&self) -> impl Iterator<Item = &Core> {
        self.layout.all_cores()
    }

    /// Number of active cores. Switchable sets all share this count.
    pub fn num_cores(&self) -> usize {
        self.active_cores().len()
    }

    /// How the cores are held.
    pub const fn layout(&self) -> &CoreLayout {
        &self.layout
    }

    /// Shared acceleration context, present iff some core is accelerated.
    pub const fn acceleration_context(&self) -> Option<&Arc<AccelerationContext>> {
        self.acceleration_context.as_ref()
    }

    /// Makes core set `name` active and returns the previously active name.
    ///
    /// # Errors
    ///
    /// `UnknownCoreSet` for a fixed processor or an unknown name.
    pub fn switch_to(&mut self, name: &str) -> Result<String> {
        match &mut self.layout {
            CoreLayout::Switchable(sets) => sets.switch_to(name),
            CoreLayout::Fixed(_) => Err(ConfigError::UnknownCoreSet(name.to_owned())),
        }
    }

    /// Finalizes the processor's wiring onto `board`.
    ///
    /// Selects the memory mode from the active cores. With an accelerated core
    /// present the acceleration wiring runs; otherwise the selected mode is
    /// written to the board, which rejects it if it disagrees with an earlier
    /// write.
    ///
    /// # Errors
    ///
    /// `UnsupportedConfiguration` if the first core has no memory-mode
    /// branch (the board is left untouched), plus board conflicts.
    pub fn incorporate_processor(&mut self, board: &mut Board) -> Result<()> {
        let is_ruby = board.cache_hierarchy().is_ruby();
        let selection = select_memory_mode(self.layout.active_cores(), is_ruby)?;

        let context = self
            .acceleration_context
            .as_ref()
            .filter(|_| self.layout.active_cores().iter().any(Core::is_accelerated));

        match context {
            Some(context) => {
                coordinate_accelerated_execution(self.layout.active_cores_mut(), context, board)?;
            }
            None => {
                board.set_mem_mode(selection.mode)?;
                if let Some(warning) = selection.warning {
                    board.record_warning(warning);
                }
            }
        }

        debug!(
            cores = self.num_cores(),
            mode = %selection.mode,
            accelerated = context.is_some(),
            "processor incorporated"
        );
        Ok(())
    }

    /// Pre-instantiation step: calibrates `clock` if any core, active or
    /// not, is accelerated.
    ///
    /// # Errors
    ///
    /// Propagates tick-conversion failures from `clock`.
    pub fn pre_instantiate(&self, clock: &mut SimClock) -> Result<Calibration> {
        calibrate_clock(&self.layout, clock)
    }
}
