//! Holiday model and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category of a holiday record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    /// A public holiday observed by everyone.
    Public,
    /// A company-declared holiday.
    Company,
    /// An optional holiday employees may choose to observe.
    Optional,
}

/// A holiday on the calendar.
///
/// At most one holiday record per date per type is meaningful. Recurring
/// holidays recur on the same month/day every year; recurrence resolution
/// is the Period Resolver's job, not stored per-instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    /// Unique identifier for the holiday record.
    pub id: String,
    /// The calendar date of the holiday (the original year for recurring
    /// holidays).
    pub date: NaiveDate,
    /// The holiday's display name (e.g., "Christmas Day").
    pub name: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The category of the holiday.
    pub holiday_type: HolidayType,
    /// Whether the holiday recurs on the same month/day every year.
    #[serde(default)]
    pub recurring: bool,
}

impl Holiday {
    /// Returns true if this holiday falls on the given date, accounting
    /// for yearly recurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use roster_engine::models::{Holiday, HolidayType};
    ///
    /// let christmas = Holiday {
    ///     id: "1".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
    ///     name: "Christmas Day".to_string(),
    ///     description: None,
    ///     holiday_type: HolidayType::Public,
    ///     recurring: true,
    /// };
    /// assert!(christmas.falls_on(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()));
    /// assert!(!christmas.falls_on(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()));
    /// ```
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        use chrono::Datelike;
        if self.recurring {
            self.date.month() == date.month() && self.date.day() == date.day()
        } else {
            self.date == date
        }
    }
}
