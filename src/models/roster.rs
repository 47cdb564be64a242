//! Roster, roster entry, and violation models.
//!
//! A [`Roster`] exclusively owns its [`RosterEntry`] set: exactly one entry
//! per (employee, date) pair for the covered month.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{GenerationConfig, RuleType, ShiftAssignment};

/// The severity of a recorded violation, derived from the rule's
/// violation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The violating candidate had to be rejected (or was forced through
    /// an override).
    Block,
    /// The assignment stands but the violation is reported.
    Warn,
}

/// A rule failure recorded against a roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The identifier of the violated rule.
    pub rule_id: String,
    /// The display name of the violated rule.
    pub rule_name: String,
    /// The class of the violated rule.
    pub rule_type: RuleType,
    /// The severity derived from the rule's violation action.
    pub severity: Severity,
    /// A human-readable description of the failure.
    pub message: String,
}

impl Violation {
    /// Returns true if this violation carries block severity.
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Block
    }
}

/// One (employee, date) assignment unit within a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// The employee the entry belongs to.
    pub employee_id: String,
    /// The employee's display name, denormalized for grid rendering.
    pub employee_name: String,
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// The assigned shift (or pseudo-shift).
    pub shift: ShiftAssignment,
    /// Rule violations recorded against this entry.
    #[serde(default)]
    pub violations: Vec<Violation>,
    /// Whether the date is a recognized holiday.
    #[serde(default)]
    pub is_holiday: bool,
    /// Whether the date falls within an approved leave for the employee.
    #[serde(default)]
    pub is_leave: bool,
    /// Whether the cell is locked. Locked entries are immutable to the
    /// assignment engine and to bulk regeneration.
    #[serde(default)]
    pub is_locked: bool,
    /// Optimistic-lock counter, bumped on every accepted mutation of this
    /// entry. Guards against lost updates between concurrent editors.
    #[serde(default)]
    pub revision: u32,
    /// When the entry was last manually modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    /// Who last manually modified the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
}

impl RosterEntry {
    /// Returns true if any recorded violation carries block severity.
    pub fn has_blocking_violation(&self) -> bool {
        self.violations.iter().any(Violation::is_blocking)
    }
}

/// The lifecycle status of a roster.
///
/// Transitions follow `Draft -> Published -> Archived`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterStatus {
    /// Freshly generated, still editable and regenerable.
    Draft,
    /// Published to employees.
    Published,
    /// Retired; kept for history.
    Archived,
}

impl RosterStatus {
    /// Returns true if a transition from `self` to `next` is allowed.
    pub fn can_transition_to(self, next: RosterStatus) -> bool {
        matches!(
            (self, next),
            (RosterStatus::Draft, RosterStatus::Published)
                | (RosterStatus::Published, RosterStatus::Archived)
        )
    }
}

impl std::fmt::Display for RosterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterStatus::Draft => write!(f, "draft"),
            RosterStatus::Published => write!(f, "published"),
            RosterStatus::Archived => write!(f, "archived"),
        }
    }
}

/// A named collection of roster entries for one (month, year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Unique identifier for the roster.
    pub id: Uuid,
    /// The roster's display name (e.g., "December 2024 Roster").
    pub name: String,
    /// The covered month (1-based).
    pub month: u32,
    /// The covered year.
    pub year: i32,
    /// The lifecycle status.
    pub status: RosterStatus,
    /// Version counter, incremented on every saved mutation.
    pub version: u32,
    /// When the roster was generated.
    pub created_date: DateTime<Utc>,
    /// Who requested the generation.
    pub created_by: String,
    /// When the roster was last saved.
    pub last_modified: DateTime<Utc>,
    /// The generation configuration the roster was produced with. Kept
    /// with the roster so manual edits evaluate under the same toggles.
    pub config: GenerationConfig,
    /// The entries owned by this roster, one per (employee, date).
    pub entries: Vec<RosterEntry>,
}

impl Roster {
    /// Looks up the entry for the given employee and date.
    pub fn entry(&self, employee_id: &str, date: NaiveDate) -> Option<&RosterEntry> {
        self.entries
            .iter()
            .find(|e| e.employee_id == employee_id && e.date == date)
    }

    /// Looks up the entry for the given employee and date, mutably.
    pub fn entry_mut(&mut self, employee_id: &str, date: NaiveDate) -> Option<&mut RosterEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.employee_id == employee_id && e.date == date)
    }

    /// Returns all entries on the given date.
    pub fn entries_on(&self, date: NaiveDate) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter().filter(move |e| e.date == date)
    }

    /// Moves the roster to the given lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTransition`] when the transition is
    /// not allowed by the `Draft -> Published -> Archived` lifecycle.
    pub fn transition_to(&mut self, next: RosterStatus) -> EngineResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(EngineError::InvalidTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }

    /// Sums the violations recorded across all entries.
    pub fn violation_count(&self) -> usize {
        self.entries.iter().map(|e| e.violations.len()).sum()
    }
}
