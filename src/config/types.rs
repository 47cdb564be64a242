//! Configuration file structures.
//!
//! This module contains the typed structures deserialized from the YAML
//! configuration files.

use serde::Deserialize;

use crate::models::{Rule, ShiftDefinition};

/// Structure of `shifts.yaml`: the ordered shift catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsConfig {
    /// The shift definitions in catalog (fallback) order.
    pub shifts: Vec<ShiftDefinition>,
}

/// Structure of `rules.yaml`: the stored rule set.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// The stored rules, enabled or not.
    pub rules: Vec<Rule>,
}
