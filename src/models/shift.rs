//! Shift catalog and assignment types.
//!
//! This module defines the catalog of work shifts (codes, start/end times,
//! skill requirements) and the [`ShiftAssignment`] type representing the
//! value held by a single roster cell, including the reserved pseudo-shift
//! codes that are never rule-evaluated as work.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// Definition of a work shift in the shift catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// The shift code (e.g., "S1").
    pub code: String,
    /// Human-readable shift name (e.g., "Morning").
    pub name: String,
    /// The time of day the shift starts.
    pub start_time: NaiveTime,
    /// The time of day the shift ends. An end time at or before the start
    /// time means the shift ends on the following day.
    pub end_time: NaiveTime,
    /// Skill tags an employee must hold to work this shift.
    #[serde(default)]
    pub required_skills: Vec<String>,
}

impl ShiftDefinition {
    /// Returns true if the shift crosses midnight.
    pub fn is_overnight(&self) -> bool {
        self.end_time <= self.start_time
    }

    /// Returns the datetime at which the shift starts on the given date.
    pub fn start_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start_time)
    }

    /// Returns the datetime at which the shift ends when worked on the
    /// given date. Overnight shifts end on the following day.
    pub fn end_on(&self, date: NaiveDate) -> NaiveDateTime {
        if self.is_overnight() {
            (date + chrono::Duration::days(1)).and_time(self.end_time)
        } else {
            date.and_time(self.end_time)
        }
    }
}

/// The ordered catalog of work shifts available to the assignment engine.
///
/// The catalog order is the deterministic fallback order used when an
/// employee's fixed shift is blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCatalog {
    shifts: Vec<ShiftDefinition>,
}

impl ShiftCatalog {
    /// Creates a catalog from an ordered list of shift definitions.
    pub fn new(shifts: Vec<ShiftDefinition>) -> Self {
        Self { shifts }
    }

    /// Looks up a shift definition by code.
    pub fn get(&self, code: &str) -> Option<&ShiftDefinition> {
        self.shifts.iter().find(|s| s.code == code)
    }

    /// Looks up a shift definition by code, failing with
    /// [`EngineError::UnknownShift`] when absent.
    pub fn require(&self, code: &str) -> EngineResult<&ShiftDefinition> {
        self.get(code).ok_or_else(|| EngineError::UnknownShift {
            code: code.to_string(),
        })
    }

    /// Returns the shift definitions in catalog order.
    pub fn shifts(&self) -> &[ShiftDefinition] {
        &self.shifts
    }

    /// Returns the shift codes in catalog order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.shifts.iter().map(|s| s.code.as_str())
    }
}

/// The value held by a single roster cell.
///
/// Work assignments carry a catalog shift code. The reserved pseudo-codes
/// `WO` (week-off), `HOL` (holiday) and `LEAVE` (approved leave) are never
/// subject to rule evaluation; `UNRESOLVED` marks a slot for which no
/// compliant shift could be found.
///
/// Serializes to the wire codes used by the roster grids:
///
/// ```
/// use roster_engine::models::ShiftAssignment;
///
/// let assignment = ShiftAssignment::Work("S1".to_string());
/// assert_eq!(serde_json::to_string(&assignment).unwrap(), "\"S1\"");
///
/// let off: ShiftAssignment = serde_json::from_str("\"WO\"").unwrap();
/// assert_eq!(off, ShiftAssignment::WeekOff);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShiftAssignment {
    /// A work assignment referencing a catalog shift code.
    Work(String),
    /// The employee's weekly off day.
    WeekOff,
    /// A recognized holiday.
    Holiday,
    /// Approved leave.
    Leave,
    /// No compliant shift could be found for the slot.
    Unresolved,
}

impl ShiftAssignment {
    /// Parses a wire code into an assignment. Any code that is not a
    /// reserved pseudo-shift becomes a work assignment.
    pub fn from_code(code: &str) -> Self {
        match code {
            "WO" => ShiftAssignment::WeekOff,
            "HOL" => ShiftAssignment::Holiday,
            "LEAVE" => ShiftAssignment::Leave,
            "UNRESOLVED" => ShiftAssignment::Unresolved,
            work => ShiftAssignment::Work(work.to_string()),
        }
    }

    /// Returns true if this is a work assignment (subject to rule
    /// evaluation and coverage counting).
    pub fn is_working(&self) -> bool {
        matches!(self, ShiftAssignment::Work(_))
    }

    /// Returns the catalog shift code for work assignments.
    pub fn work_code(&self) -> Option<&str> {
        match self {
            ShiftAssignment::Work(code) => Some(code),
            _ => None,
        }
    }

    /// Returns the wire code for this assignment.
    pub fn code(&self) -> &str {
        match self {
            ShiftAssignment::Work(code) => code,
            ShiftAssignment::WeekOff => "WO",
            ShiftAssignment::Holiday => "HOL",
            ShiftAssignment::Leave => "LEAVE",
            ShiftAssignment::Unresolved => "UNRESOLVED",
        }
    }
}

impl std::fmt::Display for ShiftAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for ShiftAssignment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ShiftAssignment::from_code(s))
    }
}

impl Serialize for ShiftAssignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ShiftAssignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(ShiftAssignment::from_code(&code))
    }
}
