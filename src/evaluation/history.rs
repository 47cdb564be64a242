//! Accumulated assignment state consulted by the evaluator.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::{RosterEntry, ShiftAssignment};

/// The per-employee assignment state built up during a generation run (or
/// reconstructed from a saved roster during an edit).
///
/// Rest and consecutive-day checks scan this history backward from the
/// candidate date. Seeding it with a trailing window of prior-month
/// entries lets those checks span the month boundary.
#[derive(Debug, Clone, Default)]
pub struct AssignmentHistory {
    assignments: HashMap<(String, NaiveDate), ShiftAssignment>,
}

impl AssignmentHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an assignment for an employee on a date, replacing any
    /// previous value.
    pub fn record(&mut self, employee_id: &str, date: NaiveDate, assignment: ShiftAssignment) {
        self.assignments
            .insert((employee_id.to_string(), date), assignment);
    }

    /// Seeds the history from existing roster entries.
    pub fn seed(&mut self, entries: &[RosterEntry]) {
        for entry in entries {
            self.record(&entry.employee_id, entry.date, entry.shift.clone());
        }
    }

    /// Returns the recorded assignment for an employee on a date, if any.
    pub fn assignment_for(&self, employee_id: &str, date: NaiveDate) -> Option<&ShiftAssignment> {
        self.assignments.get(&(employee_id.to_string(), date))
    }
}
