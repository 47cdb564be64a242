//! Configuration loading for the Roster Generation Engine.
//!
//! This module loads the shift catalog and the stored rule set from YAML
//! files. It is the engine's view of the rule configuration store: rule
//! CRUD happens elsewhere, the engine only reads a snapshot at the start
//! of a generation run.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/roster").unwrap();
//! println!("Loaded {} shifts", config.catalog().shifts().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RulesConfig, ShiftsConfig};
