//! Leave model and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Sick leave.
    Sick,
    /// Planned vacation.
    Vacation,
    /// Personal leave.
    Personal,
    /// Emergency leave.
    Emergency,
}

/// The approval status of a leave request.
///
/// Only approved leaves suppress shift assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved; suppresses shift assignment for the covered dates.
    Approved,
    /// Rejected; has no effect on assignment.
    Rejected,
}

/// A leave request for an employee over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    /// Unique identifier for the leave record.
    pub id: String,
    /// The employee the leave belongs to.
    pub employee_id: String,
    /// First day of leave (inclusive). Must be on or before `end_date`.
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-text reason supplied by the employee.
    pub reason: String,
    /// The category of the leave.
    pub leave_type: LeaveType,
    /// The approval status.
    pub status: LeaveStatus,
    /// The date the request was submitted.
    pub applied_date: NaiveDate,
    /// Who approved (or rejected) the request, when decided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}

impl Leave {
    /// Returns true if this leave is approved and covers the given date.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.status == LeaveStatus::Approved && self.start_date <= date && date <= self.end_date
    }
}
