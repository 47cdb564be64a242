//! Rest-period checking between consecutive working days.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use super::AssignmentHistory;
use crate::models::{ShiftCatalog, ShiftDefinition};

/// Computes the rest gap in hours between the end of a shift worked on
/// `previous_date` and the start of a shift worked on `candidate_date`.
///
/// Overnight shifts end on the day after they start, which shortens the
/// gap accordingly.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use roster_engine::evaluation::rest_gap_hours;
/// use roster_engine::models::ShiftDefinition;
///
/// let time = |s: &str| NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap();
/// let evening = ShiftDefinition {
///     code: "S2".to_string(),
///     name: "Evening".to_string(),
///     start_time: time("14:00:00"),
///     end_time: time("22:00:00"),
///     required_skills: vec![],
/// };
/// let morning = ShiftDefinition {
///     code: "S1".to_string(),
///     name: "Morning".to_string(),
///     start_time: time("06:00:00"),
///     end_time: time("14:00:00"),
///     required_skills: vec![],
/// };
///
/// let gap = rest_gap_hours(
///     &evening,
///     NaiveDate::from_ymd_opt(2024, 12, 2).unwrap(),
///     &morning,
///     NaiveDate::from_ymd_opt(2024, 12, 3).unwrap(),
/// );
/// assert_eq!(gap, Decimal::from(8)); // 22:00 -> 06:00
/// ```
pub fn rest_gap_hours(
    previous: &ShiftDefinition,
    previous_date: NaiveDate,
    candidate: &ShiftDefinition,
    candidate_date: NaiveDate,
) -> Decimal {
    let end = previous.end_on(previous_date);
    let start = candidate.start_on(candidate_date);
    let minutes = (start - end).num_minutes();
    Decimal::from(minutes) / Decimal::from(60)
}

/// Checks the rest gap between the employee's previous day's shift and a
/// candidate shift.
///
/// Returns a violation message when the gap is below `min_rest_hours`.
/// There is nothing to check when the previous day holds no work
/// assignment, and when `apply_to_all_shifts` is false the check is
/// limited to transitions between different shift codes.
pub fn check_rest(
    employee_id: &str,
    date: NaiveDate,
    candidate: &ShiftDefinition,
    history: &AssignmentHistory,
    catalog: &ShiftCatalog,
    min_rest_hours: Decimal,
    apply_to_all_shifts: bool,
) -> Option<String> {
    let previous_date = date - Duration::days(1);
    let previous_code = history
        .assignment_for(employee_id, previous_date)?
        .work_code()?;

    if !apply_to_all_shifts && previous_code == candidate.code {
        return None;
    }

    let previous = catalog.get(previous_code)?;
    let gap = rest_gap_hours(previous, previous_date, candidate, date);
    if gap < min_rest_hours {
        Some(format!(
            "Insufficient rest period: {} hours after {} on {}, minimum is {}",
            gap.normalize(),
            previous_code,
            previous_date,
            min_rest_hours.normalize()
        ))
    } else {
        None
    }
}
