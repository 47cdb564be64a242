//! The slot assignment loop.

use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

use super::result::{GenerationResult, UnresolvedSlot};
use super::snapshot::GenerationSnapshot;
use crate::calendar::{DayContext, MonthPeriod, month_name, resolve_period};
use crate::error::{EngineError, EngineResult};
use crate::evaluation::{
    AssignmentHistory, CoverageShortfall, coverage_shortfalls, coverage_violation,
    evaluate_candidate,
};
use crate::models::{
    Employee, GenerationConfig, Roster, RosterEntry, RosterStatus, RuleCondition, RuleType,
    ShiftAssignment, ShiftDefinition, Violation,
};
use crate::registry::RuleSnapshot;

/// Per-employee, per-shift-code assignment counts, used by the
/// workload-balancing candidate order.
type WorkloadCounts = HashMap<(String, String), u32>;

/// Generates a full-month roster from an immutable input snapshot.
///
/// For each date in chronological order and each active employee (in
/// ascending id order, for reproducibility), the slot is decided as:
///
/// 1. Approved leave -> `LEAVE`, no rule evaluation.
/// 2. Recognized holiday (with `include_holidays`) -> `HOL`.
/// 3. Employee week-off (with `respect_week_offs`) -> `WO`.
/// 4. Otherwise candidates are tried in deterministic order (the
///    employee's fixed shift first, then the remaining catalog shifts)
///    and the first candidate with no block-severity violation is
///    accepted, keeping its warnings. If every candidate blocks, the
///    slot is left `UNRESOLVED`.
///
/// After all employees are processed for a date, coverage rules run
/// roster-wide for that date and annotate the entries of under-covered
/// shifts. Locked entries inherited from an existing roster are copied
/// verbatim and never revisited.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfig`] for an out-of-range month, an
/// empty active-employee set, or an employee referencing a fixed shift
/// missing from the catalog. No partial roster is produced on failure.
pub fn generate(snapshot: &GenerationSnapshot) -> EngineResult<GenerationResult> {
    let config = &snapshot.config;
    let period = resolve_period(
        config.year,
        config.month,
        &snapshot.holidays,
        &snapshot.leaves,
    )?;

    let mut employees: Vec<&Employee> = snapshot
        .employees
        .iter()
        .filter(|e| e.is_active())
        .collect();
    if employees.is_empty() {
        return Err(EngineError::InvalidConfig {
            message: "no active employees".to_string(),
        });
    }
    employees.sort_by(|a, b| a.id.cmp(&b.id));

    for employee in &employees {
        if snapshot.catalog.get(&employee.fixed_shift).is_none() {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "employee '{}' references unknown fixed shift '{}'",
                    employee.id, employee.fixed_shift
                ),
            });
        }
    }

    let rules = RuleSnapshot::build(&snapshot.rules, &snapshot.catalog);
    info!(
        month = config.month,
        year = config.year,
        employees = employees.len(),
        rules = rules.rules().len(),
        rule_errors = rules.errors().len(),
        "Starting roster generation"
    );

    let locked: HashMap<(String, NaiveDate), RosterEntry> = snapshot
        .existing_roster
        .iter()
        .flat_map(|r| r.entries.iter())
        .filter(|e| e.is_locked)
        .map(|e| ((e.employee_id.clone(), e.date), e.clone()))
        .collect();

    let mut history = AssignmentHistory::new();
    history.seed(&snapshot.prior_entries);

    let mut workload = WorkloadCounts::new();
    let mut entries: Vec<RosterEntry> = Vec::with_capacity(period.days().len() * employees.len());
    let mut unresolved = Vec::new();
    let mut shortfalls = Vec::new();

    for day in period.days() {
        let day_start = entries.len();

        for employee in &employees {
            let key = (employee.id.clone(), day.date);
            let entry = match locked.get(&key) {
                Some(locked_entry) => locked_entry.clone(),
                None => assign_slot(
                    employee, day, &period, &history, &workload, &rules, snapshot,
                ),
            };

            history.record(&entry.employee_id, entry.date, entry.shift.clone());
            if let Some(code) = entry.shift.work_code() {
                *workload
                    .entry((employee.id.clone(), code.to_string()))
                    .or_insert(0) += 1;
            }
            if entry.shift == ShiftAssignment::Unresolved {
                unresolved.push(UnresolvedSlot {
                    employee_id: entry.employee_id.clone(),
                    employee_name: entry.employee_name.clone(),
                    date: entry.date,
                });
            }
            entries.push(entry);
        }

        apply_coverage(day.date, &mut entries[day_start..], &rules, &mut shortfalls);
    }

    let now = Utc::now();
    let roster = Roster {
        id: Uuid::new_v4(),
        name: format!("{} {} Roster", month_name(config.month), config.year),
        month: config.month,
        year: config.year,
        status: RosterStatus::Draft,
        version: 1,
        created_date: now,
        created_by: snapshot.requested_by.clone(),
        last_modified: now,
        config: *config,
        entries,
    };

    let stats = GenerationResult::stats_for(&roster, &unresolved, &shortfalls);
    info!(
        total_assignments = stats.total_assignments,
        violations = stats.violation_count,
        unresolved = stats.unresolved_count,
        "Roster generation completed"
    );

    Ok(GenerationResult {
        roster,
        stats,
        unresolved,
        coverage_shortfalls: shortfalls,
        rule_errors: rules.errors().to_vec(),
    })
}

/// Decides one unlocked (employee, date) slot.
fn assign_slot(
    employee: &Employee,
    day: &DayContext,
    period: &MonthPeriod,
    history: &AssignmentHistory,
    workload: &WorkloadCounts,
    rules: &RuleSnapshot,
    snapshot: &GenerationSnapshot,
) -> RosterEntry {
    let config = &snapshot.config;
    let is_holiday = period.is_holiday(day.date);
    let is_leave = period.is_on_leave(&employee.id, day.date);

    let (shift, violations) = if is_leave {
        (ShiftAssignment::Leave, Vec::new())
    } else if is_holiday && config.include_holidays {
        (ShiftAssignment::Holiday, Vec::new())
    } else if config.respect_week_offs && employee.has_week_off(day.weekday) {
        (ShiftAssignment::WeekOff, Vec::new())
    } else {
        propose_candidates(employee, day.date, history, workload, rules, snapshot)
    };

    RosterEntry {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        date: day.date,
        shift,
        violations,
        is_holiday,
        is_leave,
        is_locked: false,
        revision: 0,
        last_modified: None,
        modified_by: None,
    }
}

/// Tries candidate shifts in deterministic order and returns the first
/// acceptable assignment, or `UNRESOLVED` with the preferred candidate's
/// violations when every candidate blocks.
fn propose_candidates(
    employee: &Employee,
    date: NaiveDate,
    history: &AssignmentHistory,
    workload: &WorkloadCounts,
    rules: &RuleSnapshot,
    snapshot: &GenerationSnapshot,
) -> (ShiftAssignment, Vec<Violation>) {
    let config = &snapshot.config;
    let mut preferred_violations: Option<Vec<Violation>> = None;

    for candidate in candidate_order(employee, workload, snapshot) {
        let violations = evaluate_candidate(
            employee,
            date,
            candidate,
            history,
            &snapshot.catalog,
            rules,
            config,
        );

        if violations.iter().any(Violation::is_blocking) {
            if preferred_violations.is_none() {
                preferred_violations = Some(violations);
            }
            continue;
        }

        return (ShiftAssignment::Work(candidate.code.clone()), violations);
    }

    debug!(
        employee_id = %employee.id,
        date = %date,
        "No compliant shift found, leaving slot unresolved"
    );
    (
        ShiftAssignment::Unresolved,
        preferred_violations.unwrap_or_default(),
    )
}

/// Builds the deterministic candidate order for an employee: the fixed
/// shift first, then the remaining catalog shifts. With workload
/// balancing on, the fallbacks are reordered by the employee's ascending
/// assignment count per shift code (catalog order breaks ties).
fn candidate_order<'a>(
    employee: &Employee,
    workload: &WorkloadCounts,
    snapshot: &'a GenerationSnapshot,
) -> Vec<&'a ShiftDefinition> {
    let catalog = &snapshot.catalog;
    let mut candidates = Vec::with_capacity(catalog.shifts().len());

    // Validated against the catalog before the run started.
    if let Some(fixed) = catalog.get(&employee.fixed_shift) {
        candidates.push(fixed);
    }

    let mut fallbacks: Vec<&ShiftDefinition> = catalog
        .shifts()
        .iter()
        .filter(|s| s.code != employee.fixed_shift)
        .collect();
    if snapshot.config.balance_workload {
        // Stable sort: catalog order is preserved among equal counts.
        fallbacks.sort_by_key(|s| {
            workload
                .get(&(employee.id.clone(), s.code.clone()))
                .copied()
                .unwrap_or(0)
        });
    }
    candidates.extend(fallbacks);

    candidates
}

/// Runs coverage rules roster-wide for one date, annotating the entries
/// of under-covered shifts and recording every shortfall.
fn apply_coverage(
    date: NaiveDate,
    day_entries: &mut [RosterEntry],
    rules: &RuleSnapshot,
    shortfalls: &mut Vec<CoverageShortfall>,
) {
    for rule in rules.of_type(RuleType::Coverage) {
        let RuleCondition::Coverage {
            min_employees_per_shift,
        } = &rule.condition
        else {
            continue;
        };

        for shortfall in coverage_shortfalls(date, day_entries.iter(), min_employees_per_shift) {
            if let Some(violation) = coverage_violation(rule, &shortfall) {
                for entry in day_entries.iter_mut() {
                    // Locked entries are copied verbatim, so they keep
                    // whatever violations they were saved with.
                    if !entry.is_locked
                        && entry.shift.work_code() == Some(shortfall.shift_code.as_str())
                    {
                        entry.violations.push(violation.clone());
                    }
                }
            }
            shortfalls.push(shortfall);
        }
    }
}
