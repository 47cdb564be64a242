//! Application state for the Roster Generation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::store::InMemoryRosterStore;

/// Shared application state.
///
/// Contains the loaded engine configuration, the roster store, and the
/// set of generation targets currently in flight (one run per
/// (month, year) target at a time).
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// The saved-roster store.
    rosters: Arc<InMemoryRosterStore>,
    /// (month, year) targets with a generation run in flight.
    active_generations: Arc<Mutex<HashSet<(u32, i32)>>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            rosters: Arc::new(InMemoryRosterStore::new()),
            active_generations: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the roster store.
    pub fn rosters(&self) -> &InMemoryRosterStore {
        &self.rosters
    }

    /// Claims the (month, year) generation target, serializing runs per
    /// target. The claim is released when the returned guard drops.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::GenerationInProgress`] when a run for the
    /// same target is already in flight.
    pub fn begin_generation(&self, month: u32, year: i32) -> EngineResult<GenerationGuard> {
        let mut targets = self
            .active_generations
            .lock()
            .expect("generation target lock poisoned");
        if !targets.insert((month, year)) {
            return Err(EngineError::GenerationInProgress { month, year });
        }
        Ok(GenerationGuard {
            targets: Arc::clone(&self.active_generations),
            target: (month, year),
        })
    }
}

/// Releases a claimed generation target when dropped.
#[derive(Debug)]
pub struct GenerationGuard {
    targets: Arc<Mutex<HashSet<(u32, i32)>>>,
    target: (u32, i32),
}

impl Drop for GenerationGuard {
    fn drop(&mut self) {
        self.targets
            .lock()
            .expect("generation target lock poisoned")
            .remove(&self.target);
    }
}
