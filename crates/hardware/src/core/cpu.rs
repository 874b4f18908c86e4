//! A single simulated core as seen by the configuration layer.
//!
//! The configuration layer never looks inside the execution model. It only
//! needs the capability tag and the simulation object tree rooted at the
//! core, which it walks to assign event queues.

use crate::common::EventQueueIndex;
use crate::core::CpuCapability;
use crate::sim::SimObject;

/// Simulated CPU core: a capability plus the object tree that implements it.
///
/// The core owns its simulation object exclusively; processors hand out
/// borrows only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Core {
    capability: CpuCapability,
    handle: SimObject,
}

impl Core {
    /// Creates a core from its capability and root simulation object.
    pub const fn new(capability: CpuCapability, handle: SimObject) -> Self {
        Self { capability, handle }
    }

    /// Declared execution-model capability.
    #[inline]
    pub const fn capability(&self) -> CpuCapability {
        self.capability
    }

    /// Returns `true` if this core runs through host virtualization.
    #[inline]
    pub const fn is_accelerated(&self) -> bool {
        self.capability.is_accelerated()
    }

    /// Name of the core's root simulation object.
    pub fn name(&self) -> &str {
        self.handle.name()
    }

    /// Root simulation object of the core.
    pub const fn handle(&self) -> &SimObject {
        &self.handle
    }

    /// Event queue of the core's top-level object.
    pub const fn event_queue_index(&self) -> EventQueueIndex {
        self.handle.event_queue_index()
    }

    /// Moves every object strictly beneath the core onto `descendants`, then
    /// puts the core itself on `top_level`.
    pub fn assign_event_queues(&mut self, top_level: EventQueueIndex, descendants: EventQueueIndex) {
        self.handle
            .for_each_descendant_mut(|obj| obj.set_event_queue_index(descendants));
        self.handle.set_event_queue_index(top_level);
    }
}
