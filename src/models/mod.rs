//! Core data models for the Roster Generation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod generation;
mod holiday;
mod leave;
mod roster;
mod rule;
mod shift;

pub use employee::{Employee, EmployeeStatus, SkillLevel};
pub use generation::GenerationConfig;
pub use holiday::{Holiday, HolidayType};
pub use leave::{Leave, LeaveStatus, LeaveType};
pub use roster::{Roster, RosterEntry, RosterStatus, Severity, Violation};
pub use rule::{Rule, RuleCondition, RuleConstraints, RuleType, ViolationAction};
pub use shift::{ShiftAssignment, ShiftCatalog, ShiftDefinition};
