//! Roster-wide coverage checking.
//!
//! Unlike the other rule classes, coverage is evaluated per date across
//! all entries after every employee's slot for that date has been
//! decided.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::RosterEntry;

/// A staffing shortfall for one shift code on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageShortfall {
    /// The date the shortfall occurred on.
    pub date: NaiveDate,
    /// The under-covered shift code.
    pub shift_code: String,
    /// The minimum number of employees required on the shift.
    pub required: u32,
    /// The number of employees actually assigned.
    pub assigned: u32,
}

/// Computes the staffing shortfalls for one date.
///
/// Counts the entries holding each shift code and compares the counts
/// against `min_employees_per_shift`. Shortfalls are returned in shift
/// code order for deterministic reporting.
pub fn coverage_shortfalls<'a>(
    date: NaiveDate,
    entries: impl IntoIterator<Item = &'a RosterEntry>,
    min_employees_per_shift: &HashMap<String, u32>,
) -> Vec<CoverageShortfall> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for entry in entries {
        if let Some(code) = entry.shift.work_code() {
            *counts.entry(code).or_insert(0) += 1;
        }
    }

    let mut shortfalls: Vec<CoverageShortfall> = min_employees_per_shift
        .iter()
        .filter_map(|(code, required)| {
            let assigned = counts.get(code.as_str()).copied().unwrap_or(0);
            (assigned < *required).then(|| CoverageShortfall {
                date,
                shift_code: code.clone(),
                required: *required,
                assigned,
            })
        })
        .collect();

    shortfalls.sort_by(|a, b| a.shift_code.cmp(&b.shift_code));
    shortfalls
}
