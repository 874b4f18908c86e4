//! Named core sets with one active set.
//!
//! A switchable processor carries several complete sets of cores (for
//! example a fast-forward set and a detailed set) and swaps them one-for-one
//! at runtime. Only the active set is visible as "the cores" of the
//! processor; the inactive sets are still part of the simulation graph.

use std::collections::HashSet;

use tracing::info;

use crate::common::{ConfigError, Result};
use crate::core::Core;

/// Core sets of a switchable processor, in definition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchableCores {
    sets: Vec<(String, Vec<Core>)>,
    active: usize,
}

impl SwitchableCores {
    /// Builds the sets and activates `starting`.
    ///
    /// # Arguments
    ///
    /// * `sets` - `(name, cores)` pairs in definition order.
    /// * `starting` - Name of the set active at simulation start.
    ///
    /// # Errors
    ///
    /// `EmptyProcessor` if there are no sets or a set has no cores,
    /// `DuplicateCoreSet` for repeated names, `MismatchedCoreCount` when sets
    /// differ in size, and `UnknownCoreSet` if `starting` is not among them.
    pub fn new(sets: Vec<(String, Vec<Core>)>, starting: &str) -> Result<Self> {
        let expected = match sets.first() {
            Some((_, cores)) => cores.len(),
            None => return Err(ConfigError::EmptyProcessor),
        };

        let mut seen = HashSet::new();
        for (name, cores) in &sets {
            if cores.is_empty() {
                return Err(ConfigError::EmptyProcessor);
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateCoreSet(name.clone()));
            }
            if cores.len() != expected {
                return Err(ConfigError::MismatchedCoreCount {
                    name: name.clone(),
                    expected,
                    found: cores.len(),
                });
            }
        }

        let active = sets
            .iter()
            .position(|(name, _)| name == starting)
            .ok_or_else(|| ConfigError::UnknownCoreSet(starting.to_owned()))?;

        Ok(Self { sets, active })
    }

    /// Name of the active set.
    pub fn active_name(&self) -> &str {
        &self.sets[self.active].0
    }

    /// Cores of the active set.
    pub fn active_cores(&self) -> &[Core] {
        &self.sets[self.active].1
    }

    pub(crate) fn active_cores_mut(&mut self) -> &mut [Core] {
        &mut self.sets[self.active].1
    }

    /// Cores of every set, active set included, in definition order.
    pub fn all_cores(&self) -> impl Iterator<Item = &Core> {
        self.sets.iter().flat_map(|(_, cores)| cores.iter())
    }

    /// Set names in definition order.
    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|(name, _)| name.as_str())
    }

    /// Cores of the set called `name`.
    pub fn set(&self, name: &str) -> Option<&[Core]> {
        self.sets
            .iter()
            .find(|(set_name, _)| set_name == name)
            .map(|(_, cores)| cores.as_slice())
    }

    /// Whether some set contains no accelerated core.
    pub fn has_unaccelerated_set(&self) -> bool {
        self.sets
            .iter()
            .any(|(_, cores)| !cores.iter().any(Core::is_accelerated))
    }

    /// Makes `name` the active set and returns the previously active name.
    ///
    /// # Errors
    ///
    /// `UnknownCoreSet` if no set is called `name`.
    pub fn switch_to(&mut self, name: &str) -> Result<String> {
        let next = self
            .sets
            .iter()
            .position(|(set_name, _)| set_name == name)
            .ok_or_else(|| ConfigError::UnknownCoreSet(name.to_owned()))?;
        let previous = self.active_name().to_owned();
        self.active = next;
        info!(from = %previous, to = name, "switched core set");
        Ok(previous)
    }
}
