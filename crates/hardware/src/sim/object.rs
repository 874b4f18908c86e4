//! Simulation object tree.
//!
//! Cores and boards are built from named simulation objects arranged in a
//! tree. The configuration layer only cares about one parameter on each of
//! them: the event queue the scheduler will run the object's events on.

use crate::common::{EventQueueIndex, SHARED_EVENT_QUEUE};

/// Node of the simulation object graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimObject {
    name: String,
    event_queue_index: EventQueueIndex,
    children: Vec<SimObject>,
}

impl SimObject {
    /// Creates a childless object on the shared event queue.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            event_queue_index: SHARED_EVENT_QUEUE,
            children: Vec::new(),
        }
    }

    /// Adds `child` beneath this object.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Adds a childless object named `name` beneath this object.
    #[must_use]
    pub fn with_leaf(self, name: impl Into<String>) -> Self {
        self.with_child(Self::new(name))
    }

    /// Object name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Event queue this object is scheduled on.
    pub const fn event_queue_index(&self) -> EventQueueIndex {
        self.event_queue_index
    }

    /// Moves this object (and only this object) onto `index`.
    pub const fn set_event_queue_index(&mut self, index: EventQueueIndex) {
        self.event_queue_index = index;
    }

    /// Direct children.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Every object strictly beneath this one, depth-first, parents before children.
    pub fn descendants(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        let mut stack: Vec<&Self> = self.children.iter().rev().collect();
        while let Some(obj) = stack.pop() {
            out.push(obj);
            stack.extend(obj.children.iter().rev());
        }
        out
    }

    /// Applies `f` to every object strictly beneath this one.
    pub fn for_each_descendant_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Self),
    {
        let mut stack: Vec<&mut Self> = self.children.iter_mut().collect();
        while let Some(obj) = stack.pop() {
            f(obj);
            stack.extend(obj.children.iter_mut());
        }
    }

    /// Finds this object or a descendant by name.
    pub fn find(&self, name: &str) -> Option<&Self> {
        if self.name == name {
            return Some(self);
        }
        self.descendants().into_iter().find(|obj| obj.name == name)
    }
}
