//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shift
//! catalog and rule definitions from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Rule, ShiftCatalog};

use super::types::{RulesConfig, ShiftsConfig};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the shift catalog and the stored rule set.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/roster/
/// ├── shifts.yaml   # Shift catalog (codes, times, skill requirements)
/// └── rules.yaml    # Stored rule definitions
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster").unwrap();
///
/// let catalog = loader.catalog();
/// println!("First shift: {}", catalog.shifts()[0].code);
///
/// for rule in loader.rules() {
///     println!("Rule {} enabled: {}", rule.name, rule.enabled);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: ShiftCatalog,
    rules: Vec<Rule>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/roster")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let shifts_path = path.join("shifts.yaml");
        let shifts_config = Self::load_yaml::<ShiftsConfig>(&shifts_path)?;

        let rules_path = path.join("rules.yaml");
        let rules_config = Self::load_yaml::<RulesConfig>(&rules_path)?;

        Ok(Self {
            catalog: ShiftCatalog::new(shifts_config.shifts),
            rules: rules_config.rules,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the shift catalog.
    pub fn catalog(&self) -> &ShiftCatalog {
        &self.catalog
    }

    /// Returns the stored rule set.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
