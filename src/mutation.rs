//! Manual roster mutation.
//!
//! Applies single-cell edits and lock toggles to a generated roster,
//! re-running constraint evaluation only on the affected neighborhood:
//! the edited cell itself, the same employee's adjacent days (whose rest
//! and consecutive-day results the edit can invalidate), and the edited
//! date's roster-wide coverage.

use chrono::{Duration, NaiveDate, Utc};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::evaluation::{
    AssignmentHistory, coverage_shortfalls, coverage_violation, evaluate_candidate,
};
use crate::models::{
    Employee, Roster, RosterEntry, RuleCondition, RuleType, ShiftAssignment, ShiftCatalog,
    Violation,
};
use crate::registry::RuleSnapshot;

/// A single-cell edit request.
#[derive(Debug, Clone)]
pub struct CellEdit {
    /// The date of the targeted cell.
    pub date: NaiveDate,
    /// The shift to place in the cell.
    pub new_shift: ShiftAssignment,
    /// The entry revision the caller read before editing. A mismatch
    /// means the entry changed under the caller and the edit is refused.
    pub expected_revision: u32,
    /// Who is making the edit.
    pub modified_by: String,
    /// Apply an override when the new shift is blocked by rules that
    /// permit one.
    pub force_override: bool,
}

/// Applies a single-cell edit to a roster.
///
/// The edit is evaluated under the roster's own generation config. On
/// success the entry's shift, violations, audit fields, and revision are
/// updated; the same employee's adjacent days get their rest and
/// consecutive-day violations refreshed; and coverage is recomputed
/// roster-wide for the edited date only.
///
/// # Errors
///
/// - [`EngineError::EntryNotFound`]: no cell for the employee and date.
/// - [`EngineError::CellLocked`]: the cell is locked; no state change.
/// - [`EngineError::WriteConflict`]: the entry's revision no longer
///   matches `expected_revision`; re-fetch and retry.
/// - [`EngineError::UnknownShift`]: the new shift is not in the catalog.
/// - [`EngineError::AssignmentBlocked`]: a block-severity rule rejected
///   the shift and no permitted override applies.
pub fn edit_cell(
    roster: &mut Roster,
    catalog: &ShiftCatalog,
    rules: &RuleSnapshot,
    employee: &Employee,
    edit: &CellEdit,
) -> EngineResult<RosterEntry> {
    let entry = roster.entry(&employee.id, edit.date).ok_or_else(|| {
        EngineError::EntryNotFound {
            employee_id: employee.id.clone(),
            date: edit.date,
        }
    })?;

    if entry.is_locked {
        return Err(EngineError::CellLocked {
            employee_id: employee.id.clone(),
            date: edit.date,
        });
    }
    if entry.revision != edit.expected_revision {
        return Err(EngineError::WriteConflict {
            employee_id: employee.id.clone(),
            date: edit.date,
        });
    }

    let violations = match &edit.new_shift {
        ShiftAssignment::Work(code) => {
            let definition = catalog.require(code)?;
            let mut history = AssignmentHistory::new();
            history.seed(&roster.entries);
            let violations = evaluate_candidate(
                employee,
                edit.date,
                definition,
                &history,
                catalog,
                rules,
                &roster.config,
            );
            enforce_blocking(&violations, rules, &roster.config, edit)?;
            violations
        }
        // Pseudo-shifts are never rule-evaluated as work assignments.
        _ => Vec::new(),
    };

    let now = Utc::now();
    let entry = roster
        .entry_mut(&employee.id, edit.date)
        .expect("entry existence checked above");
    entry.shift = edit.new_shift.clone();
    entry.violations = violations;
    entry.last_modified = Some(now);
    entry.modified_by = Some(edit.modified_by.clone());
    entry.revision += 1;

    refresh_neighbor(roster, catalog, rules, employee, edit.date - Duration::days(1));
    refresh_neighbor(roster, catalog, rules, employee, edit.date + Duration::days(1));
    refresh_coverage(roster, rules, edit.date);

    // Re-read after the coverage pass so the returned entry carries any
    // shortfall recorded against the new shift.
    let updated = roster
        .entry(&employee.id, edit.date)
        .expect("entry existence checked above")
        .clone();

    info!(
        employee_id = %employee.id,
        date = %edit.date,
        shift = %updated.shift,
        modified_by = %edit.modified_by,
        "Roster cell edited"
    );

    Ok(updated)
}

/// Sets or clears the lock flag on a cell.
///
/// Locking is idempotent and unlocking is the explicit path by which a
/// locked cell becomes editable again.
///
/// # Errors
///
/// Returns [`EngineError::EntryNotFound`] when no cell exists for the
/// employee and date.
pub fn set_lock(
    roster: &mut Roster,
    employee_id: &str,
    date: NaiveDate,
    locked: bool,
    modified_by: &str,
) -> EngineResult<RosterEntry> {
    let entry =
        roster
            .entry_mut(employee_id, date)
            .ok_or_else(|| EngineError::EntryNotFound {
                employee_id: employee_id.to_string(),
                date,
            })?;

    entry.is_locked = locked;
    entry.last_modified = Some(Utc::now());
    entry.modified_by = Some(modified_by.to_string());
    entry.revision += 1;

    info!(employee_id, %date, locked, "Roster cell lock changed");
    Ok(entry.clone())
}

/// Rejects the edit when a block-severity violation comes from a rule
/// with overrides disallowed, or when no permitted override was applied.
fn enforce_blocking(
    violations: &[Violation],
    rules: &RuleSnapshot,
    config: &crate::models::GenerationConfig,
    edit: &CellEdit,
) -> EngineResult<()> {
    let blocking: Vec<&Violation> = violations.iter().filter(|v| v.is_blocking()).collect();
    let Some(first) = blocking.first() else {
        return Ok(());
    };

    for violation in &blocking {
        let overridable = rules
            .rules()
            .iter()
            .find(|r| r.id == violation.rule_id)
            .map(|r| r.constraints.allow_override)
            .unwrap_or(false);
        if !overridable {
            return Err(EngineError::AssignmentBlocked {
                rule_name: violation.rule_name.clone(),
                message: violation.message.clone(),
            });
        }
    }

    if config.allow_overrides && edit.force_override {
        return Ok(());
    }
    Err(EngineError::AssignmentBlocked {
        rule_name: first.rule_name.clone(),
        message: first.message.clone(),
    })
}

fn is_sequence_violation(violation: &Violation) -> bool {
    matches!(
        violation.rule_type,
        RuleType::Rest | RuleType::ConsecutiveShift
    )
}

/// Refreshes the rest and consecutive-day violations of the employee's
/// entry on the given date, leaving its other violations untouched.
fn refresh_neighbor(
    roster: &mut Roster,
    catalog: &ShiftCatalog,
    rules: &RuleSnapshot,
    employee: &Employee,
    date: NaiveDate,
) {
    let Some(entry) = roster.entry(&employee.id, date) else {
        return;
    };
    if entry.is_locked {
        return;
    }

    let fresh = match entry.shift.work_code().and_then(|code| catalog.get(code)) {
        Some(definition) => {
            let mut history = AssignmentHistory::new();
            history.seed(&roster.entries);
            evaluate_candidate(
                employee,
                date,
                definition,
                &history,
                catalog,
                rules,
                &roster.config,
            )
            .into_iter()
            .filter(is_sequence_violation)
            .collect()
        }
        // Non-working cells cannot violate sequence rules.
        None => Vec::new(),
    };

    let entry = roster
        .entry_mut(&employee.id, date)
        .expect("entry presence checked above");
    entry.violations.retain(|v| !is_sequence_violation(v));
    entry.violations.extend(fresh);
}

/// Recomputes coverage violations for every unlocked entry on one date.
fn refresh_coverage(roster: &mut Roster, rules: &RuleSnapshot, date: NaiveDate) {
    let indices: Vec<usize> = roster
        .entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.date == date)
        .map(|(i, _)| i)
        .collect();

    for &i in &indices {
        if !roster.entries[i].is_locked {
            roster.entries[i]
                .violations
                .retain(|v| v.rule_type != RuleType::Coverage);
        }
    }

    for rule in rules.of_type(RuleType::Coverage) {
        let RuleCondition::Coverage {
            min_employees_per_shift,
        } = &rule.condition
        else {
            continue;
        };

        let shortfalls = coverage_shortfalls(
            date,
            indices.iter().map(|&i| &roster.entries[i]),
            min_employees_per_shift,
        );
        for shortfall in shortfalls {
            if let Some(violation) = coverage_violation(rule, &shortfall) {
                for &i in &indices {
                    let entry = &mut roster.entries[i];
                    if !entry.is_locked
                        && entry.shift.work_code() == Some(shortfall.shift_code.as_str())
                    {
                        entry.violations.push(violation.clone());
                    }
                }
            }
        }
    }
}
