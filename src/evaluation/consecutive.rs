//! Consecutive working-day checking.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::AssignmentHistory;

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the consecutive working days an employee held immediately
/// before `date`, scanning the history backward.
///
/// A day with no recorded assignment, or with a non-working assignment
/// (week-off, holiday, leave, unresolved), ends the run. When
/// `include_weekends` is false, Saturday/Sunday working days are skipped:
/// they neither extend nor break the run.
pub fn working_streak_before(
    employee_id: &str,
    date: NaiveDate,
    history: &AssignmentHistory,
    include_weekends: bool,
) -> u32 {
    let mut count = 0;
    let mut current = date - Duration::days(1);

    loop {
        match history.assignment_for(employee_id, current) {
            Some(assignment) if assignment.is_working() => {
                if include_weekends || !is_weekend(current) {
                    count += 1;
                }
                current -= Duration::days(1);
            }
            _ => break,
        }
    }

    count
}

/// Checks whether assigning a working shift on `date` would exceed the
/// maximum run of consecutive working days.
///
/// Returns a violation message when the prior streak plus the candidate
/// day exceeds `max_consecutive_days`.
pub fn check_consecutive(
    employee_id: &str,
    date: NaiveDate,
    history: &AssignmentHistory,
    max_consecutive_days: u32,
    include_weekends: bool,
) -> Option<String> {
    let streak = working_streak_before(employee_id, date, history, include_weekends);
    let candidate_counts = include_weekends || !is_weekend(date);
    let total = streak + u32::from(candidate_counts);

    if total > max_consecutive_days {
        Some(format!(
            "Consecutive days limit exceeded: {} consecutive working days, maximum is {}",
            total, max_consecutive_days
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftAssignment;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn work() -> ShiftAssignment {
        ShiftAssignment::Work("S1".to_string())
    }

    /// Records work for `employee` on every date in the inclusive range.
    fn record_work(history: &mut AssignmentHistory, employee: &str, from: &str, to: &str) {
        let mut current = date(from);
        let end = date(to);
        while current <= end {
            history.record(employee, current, work());
            current += Duration::days(1);
        }
    }

    #[test]
    fn test_streak_counts_backward_run() {
        let mut history = AssignmentHistory::new();
        // Mon 2024-12-02 .. Fri 2024-12-06
        record_work(&mut history, "1", "2024-12-02", "2024-12-06");

        assert_eq!(
            working_streak_before("1", date("2024-12-07"), &history, true),
            5
        );
    }

    #[test]
    fn test_streak_broken_by_week_off() {
        let mut history = AssignmentHistory::new();
        record_work(&mut history, "1", "2024-12-02", "2024-12-03");
        history.record("1", date("2024-12-04"), ShiftAssignment::WeekOff);
        record_work(&mut history, "1", "2024-12-05", "2024-12-06");

        // Only the 5th and 6th count; the week-off on the 4th breaks the run.
        assert_eq!(
            working_streak_before("1", date("2024-12-07"), &history, true),
            2
        );
    }

    #[test]
    fn test_streak_broken_by_missing_history() {
        let history = AssignmentHistory::new();
        assert_eq!(
            working_streak_before("1", date("2024-12-07"), &history, true),
            0
        );
    }

    #[test]
    fn test_weekend_work_skipped_when_excluded() {
        let mut history = AssignmentHistory::new();
        // Thu 2024-12-05 .. Mon 2024-12-09, working straight through the
        // weekend of the 7th/8th.
        record_work(&mut history, "1", "2024-12-05", "2024-12-09");

        assert_eq!(
            working_streak_before("1", date("2024-12-10"), &history, true),
            5
        );
        // Excluding weekends drops Saturday the 7th and Sunday the 8th
        // from the count without breaking the run.
        assert_eq!(
            working_streak_before("1", date("2024-12-10"), &history, false),
            3
        );
    }

    #[test]
    fn test_violation_when_limit_exceeded() {
        let mut history = AssignmentHistory::new();
        // Six working days before the candidate.
        record_work(&mut history, "1", "2024-12-02", "2024-12-07");

        let message = check_consecutive("1", date("2024-12-08"), &history, 6, true);
        let message = message.expect("expected a consecutive-days violation");
        assert!(message.contains("Consecutive days limit exceeded"));
        assert!(message.contains("7"));
    }

    #[test]
    fn test_no_violation_at_limit() {
        let mut history = AssignmentHistory::new();
        record_work(&mut history, "1", "2024-12-02", "2024-12-06");

        // Five prior days plus the candidate is exactly six.
        assert!(check_consecutive("1", date("2024-12-07"), &history, 6, true).is_none());
    }

    #[test]
    fn test_weekend_candidate_does_not_count_when_excluded() {
        let mut history = AssignmentHistory::new();
        // Mon 2024-12-02 .. Fri 2024-12-06
        record_work(&mut history, "1", "2024-12-02", "2024-12-06");

        // Candidate on Saturday the 7th with weekends excluded: streak of
        // 5 and the candidate does not count, so a limit of 5 holds.
        assert!(check_consecutive("1", date("2024-12-07"), &history, 5, false).is_none());
        // With weekends included the same candidate makes 6.
        assert!(check_consecutive("1", date("2024-12-07"), &history, 5, true).is_some());
    }
}
