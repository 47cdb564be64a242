//! Request types for the Roster Generation Engine API.
//!
//! This module defines the JSON request structures for the roster
//! endpoints.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    Employee, EmployeeStatus, GenerationConfig, Holiday, HolidayType, Leave, LeaveStatus,
    LeaveType, RosterEntry, RosterStatus, ShiftAssignment, SkillLevel,
};

/// Request body for the `POST /generate` endpoint.
///
/// Carries the generation configuration plus one immutable snapshot of
/// the reference data the run consumes: the employee directory, the
/// holiday and leave sets, and (optionally) a trailing window of
/// prior-month entries and a saved roster whose locked cells must be
/// respected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The target period and toggles.
    pub config: GenerationConfig,
    /// The active employee directory.
    pub employees: Vec<EmployeeRequest>,
    /// Holidays for the target month.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
    /// Leaves for the target month.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
    /// Trailing window of prior-month entries for rest/consecutive-day
    /// checks at the month boundary.
    #[serde(default)]
    pub prior_entries: Vec<PriorEntryRequest>,
    /// A saved roster whose locked cells are copied verbatim.
    #[serde(default)]
    pub existing_roster_id: Option<Uuid>,
    /// Who requested the generation.
    #[serde(default = "default_requested_by")]
    pub requested_by: String,
}

fn default_requested_by() -> String {
    "system".to_string()
}

/// Employee information in a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's badge code (e.g., "EMP001").
    pub emp_id: String,
    /// The employee's display name.
    pub name: String,
    /// The department the employee belongs to.
    #[serde(default)]
    pub department: String,
    /// Skill tags held by the employee.
    #[serde(default)]
    pub skills: Vec<String>,
    /// The employee's proficiency level.
    #[serde(default)]
    pub skill_level: SkillLevel,
    /// Weekdays on which the employee is off.
    #[serde(default)]
    pub week_offs: Vec<Weekday>,
    /// The employee's preferred shift code.
    pub fixed_shift: String,
    /// Whether the employee participates in generation.
    pub status: EmployeeStatus,
}

/// Holiday information in a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// Unique identifier for the holiday record.
    pub id: String,
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// The holiday's display name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// The category of the holiday.
    pub holiday_type: HolidayType,
    /// Whether the holiday recurs yearly on the same month/day.
    #[serde(default)]
    pub recurring: bool,
}

/// Leave information in a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the leave record.
    pub id: String,
    /// The employee the leave belongs to.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-text reason.
    #[serde(default)]
    pub reason: String,
    /// The category of the leave.
    pub leave_type: LeaveType,
    /// The approval status; only approved leaves suppress assignment.
    pub status: LeaveStatus,
    /// The date the request was submitted.
    pub applied_date: NaiveDate,
    /// Who decided the request.
    #[serde(default)]
    pub approved_by: Option<String>,
}

/// A prior-month entry supplied for month-boundary evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorEntryRequest {
    /// The employee the entry belongs to.
    pub employee_id: String,
    /// The employee's display name.
    #[serde(default)]
    pub employee_name: String,
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// The assignment held on that date.
    pub shift: ShiftAssignment,
}

/// Request body for the `POST /rosters/{id}/cells` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditCellRequest {
    /// The employee whose cell is edited; skill rules evaluate against
    /// this record.
    pub employee: EmployeeRequest,
    /// The date of the targeted cell.
    pub date: NaiveDate,
    /// The shift code to place in the cell (catalog code or pseudo-shift).
    pub new_shift: String,
    /// The entry revision the caller read before editing.
    pub expected_revision: u32,
    /// Who is making the edit.
    pub modified_by: String,
    /// Apply an override when blocked by override-allowed rules.
    #[serde(default)]
    pub force_override: bool,
}

/// Request body for the `POST /rosters/{id}/locks` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLockRequest {
    /// The employee whose cell is targeted.
    pub employee_id: String,
    /// The date of the targeted cell.
    pub date: NaiveDate,
    /// The lock state to set.
    pub locked: bool,
    /// Who is changing the lock.
    pub modified_by: String,
}

/// Request body for the `POST /rosters/{id}/status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRequest {
    /// The lifecycle status to transition to.
    pub status: RosterStatus,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            emp_id: req.emp_id,
            name: req.name,
            department: req.department,
            skills: req.skills,
            skill_level: req.skill_level,
            week_offs: req.week_offs,
            fixed_shift: req.fixed_shift,
            status: req.status,
        }
    }
}

impl From<HolidayRequest> for Holiday {
    fn from(req: HolidayRequest) -> Self {
        Holiday {
            id: req.id,
            date: req.date,
            name: req.name,
            description: req.description,
            holiday_type: req.holiday_type,
            recurring: req.recurring,
        }
    }
}

impl From<LeaveRequest> for Leave {
    fn from(req: LeaveRequest) -> Self {
        Leave {
            id: req.id,
            employee_id: req.employee_id,
            start_date: req.start_date,
            end_date: req.end_date,
            reason: req.reason,
            leave_type: req.leave_type,
            status: req.status,
            applied_date: req.applied_date,
            approved_by: req.approved_by,
        }
    }
}

impl From<PriorEntryRequest> for RosterEntry {
    fn from(req: PriorEntryRequest) -> Self {
        RosterEntry {
            employee_id: req.employee_id,
            employee_name: req.employee_name,
            date: req.date,
            shift: req.shift,
            violations: vec![],
            is_holiday: false,
            is_leave: false,
            is_locked: false,
            revision: 0,
            last_modified: None,
            modified_by: None,
        }
    }
}
