//! Calendar period resolution.
//!
//! The Period Resolver enumerates the days of a target month and
//! precomputes holiday matches (recurring-aware) and approved-leave
//! coverage for fast lookup during generation.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::{HashMap, HashSet};

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, Leave};

/// English month names, indexed by 1-based month number.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the English name of a 1-based month number.
///
/// # Panics
///
/// Panics if `month` is outside `1..=12`. Callers obtain validated months
/// from [`resolve_period`].
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Returns the full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One calendar day within a resolved period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayContext {
    /// The calendar date.
    pub date: NaiveDate,
    /// The day of the week.
    pub weekday: Weekday,
}

impl DayContext {
    /// Returns the full English weekday name for this day.
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

/// A resolved month: its ordered day list plus holiday and leave lookups.
#[derive(Debug, Clone)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
    days: Vec<DayContext>,
    holidays_by_date: HashMap<NaiveDate, Vec<Holiday>>,
    leave_days: HashSet<(String, NaiveDate)>,
}

impl MonthPeriod {
    /// The resolved year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The resolved month (1-based).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The ordered day descriptors covering the full month.
    pub fn days(&self) -> &[DayContext] {
        &self.days
    }

    /// The holidays falling on the given date, recurring holidays
    /// included.
    pub fn holidays_on(&self, date: NaiveDate) -> &[Holiday] {
        self.holidays_by_date
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if any holiday falls on the given date.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays_by_date.contains_key(&date)
    }

    /// Returns true if the given date falls within an approved leave for
    /// the employee.
    pub fn is_on_leave(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.leave_days
            .contains(&(employee_id.to_string(), date))
    }
}

/// Resolves a (year, month) target into a [`MonthPeriod`].
///
/// # Arguments
///
/// * `year` - The target year
/// * `month` - The target month, 1-based (1..=12)
/// * `holidays` - The holiday set; recurring holidays are matched by
///   month/day
/// * `leaves` - The leave set; only approved leaves contribute coverage
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfig`] when the month is out of range
/// or the (year, month) pair does not denote a valid calendar month.
///
/// # Examples
///
/// ```
/// use roster_engine::calendar::resolve_period;
///
/// let period = resolve_period(2024, 12, &[], &[]).unwrap();
/// assert_eq!(period.days().len(), 31);
/// assert!(resolve_period(2024, 13, &[], &[]).is_err());
/// ```
pub fn resolve_period(
    year: i32,
    month: u32,
    holidays: &[Holiday],
    leaves: &[Leave],
) -> EngineResult<MonthPeriod> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidConfig {
            message: format!("month must be between 1 and 12, got {}", month),
        });
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        EngineError::InvalidConfig {
            message: format!("invalid year/month: {}/{}", year, month),
        }
    })?;

    let mut days = Vec::with_capacity(31);
    let mut current = first;
    while current.month() == month {
        days.push(DayContext {
            date: current,
            weekday: current.weekday(),
        });
        current += Duration::days(1);
    }

    let mut holidays_by_date: HashMap<NaiveDate, Vec<Holiday>> = HashMap::new();
    for day in &days {
        for holiday in holidays {
            if holiday.falls_on(day.date) {
                holidays_by_date
                    .entry(day.date)
                    .or_default()
                    .push(holiday.clone());
            }
        }
    }

    let mut leave_days = HashSet::new();
    for leave in leaves {
        for day in &days {
            if leave.covers(day.date) {
                leave_days.insert((leave.employee_id.clone(), day.date));
            }
        }
    }

    Ok(MonthPeriod {
        year,
        month,
        days,
        holidays_by_date,
        leave_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HolidayType, LeaveStatus, LeaveType};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn holiday(day: &str, recurring: bool) -> Holiday {
        Holiday {
            id: "1".to_string(),
            date: date(day),
            name: "Christmas Day".to_string(),
            description: None,
            holiday_type: HolidayType::Public,
            recurring,
        }
    }

    fn approved_leave(employee_id: &str, start: &str, end: &str) -> Leave {
        Leave {
            id: "1".to_string(),
            employee_id: employee_id.to_string(),
            start_date: date(start),
            end_date: date(end),
            reason: "Vacation".to_string(),
            leave_type: LeaveType::Vacation,
            status: LeaveStatus::Approved,
            applied_date: date("2024-11-01"),
            approved_by: None,
        }
    }

    #[test]
    fn test_december_has_31_days() {
        let period = resolve_period(2024, 12, &[], &[]).unwrap();
        assert_eq!(period.days().len(), 31);
        assert_eq!(period.days()[0].date, date("2024-12-01"));
        assert_eq!(period.days()[30].date, date("2024-12-31"));
    }

    #[test]
    fn test_february_leap_year() {
        let period = resolve_period(2024, 2, &[], &[]).unwrap();
        assert_eq!(period.days().len(), 29);
    }

    #[test]
    fn test_february_non_leap_year() {
        let period = resolve_period(2025, 2, &[], &[]).unwrap();
        assert_eq!(period.days().len(), 28);
    }

    #[test]
    fn test_weekdays_are_correct() {
        let period = resolve_period(2024, 12, &[], &[]).unwrap();
        // 2024-12-01 is a Sunday
        assert_eq!(period.days()[0].weekday, Weekday::Sun);
        assert_eq!(period.days()[0].weekday_name(), "Sunday");
        // 2024-12-02 is a Monday
        assert_eq!(period.days()[1].weekday, Weekday::Mon);
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        assert!(matches!(
            resolve_period(2024, 0, &[], &[]),
            Err(EngineError::InvalidConfig { .. })
        ));
        assert!(matches!(
            resolve_period(2024, 13, &[], &[]),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_exact_holiday_match() {
        let holidays = vec![holiday("2024-12-25", false)];
        let period = resolve_period(2024, 12, &holidays, &[]).unwrap();
        assert!(period.is_holiday(date("2024-12-25")));
        assert!(!period.is_holiday(date("2024-12-24")));
        assert_eq!(period.holidays_on(date("2024-12-25")).len(), 1);
    }

    #[test]
    fn test_recurring_holiday_matches_other_years() {
        // Holiday recorded for 2023 recurs into the resolved 2024 period.
        let holidays = vec![holiday("2023-12-25", true)];
        let period = resolve_period(2024, 12, &holidays, &[]).unwrap();
        assert!(period.is_holiday(date("2024-12-25")));
    }

    #[test]
    fn test_non_recurring_holiday_does_not_leak_across_years() {
        let holidays = vec![holiday("2023-12-25", false)];
        let period = resolve_period(2024, 12, &holidays, &[]).unwrap();
        assert!(!period.is_holiday(date("2024-12-25")));
    }

    #[test]
    fn test_leave_coverage_inclusive_range() {
        let leaves = vec![approved_leave("emp_001", "2024-12-10", "2024-12-12")];
        let period = resolve_period(2024, 12, &[], &leaves).unwrap();
        assert!(period.is_on_leave("emp_001", date("2024-12-10")));
        assert!(period.is_on_leave("emp_001", date("2024-12-12")));
        assert!(!period.is_on_leave("emp_001", date("2024-12-13")));
        assert!(!period.is_on_leave("emp_002", date("2024-12-10")));
    }

    #[test]
    fn test_pending_leave_does_not_cover() {
        let mut leave = approved_leave("emp_001", "2024-12-10", "2024-12-12");
        leave.status = LeaveStatus::Pending;
        let period = resolve_period(2024, 12, &[], &[leave]).unwrap();
        assert!(!period.is_on_leave("emp_001", date("2024-12-11")));
    }

    #[test]
    fn test_leave_spanning_month_boundary_is_clipped() {
        let leaves = vec![approved_leave("emp_001", "2024-11-28", "2024-12-02")];
        let period = resolve_period(2024, 12, &[], &leaves).unwrap();
        assert!(period.is_on_leave("emp_001", date("2024-12-01")));
        assert!(period.is_on_leave("emp_001", date("2024-12-02")));
        assert!(!period.is_on_leave("emp_001", date("2024-12-03")));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
    }
}
