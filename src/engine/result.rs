//! Generation result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::evaluation::CoverageShortfall;
use crate::models::Roster;
use crate::registry::RuleConfigError;

/// A slot for which no candidate shift satisfied all blocking rules.
///
/// Not an error: unresolved slots are surfaced for human resolution
/// rather than silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedSlot {
    /// The employee the slot belongs to.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The date of the slot.
    pub date: NaiveDate,
}

/// Summary counters for a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Entries holding a work shift (pseudo-shifts excluded).
    pub total_assignments: usize,
    /// Violations recorded across all entries.
    pub violation_count: usize,
    /// Slots left unresolved.
    pub unresolved_count: usize,
    /// Coverage shortfalls detected across all dates.
    pub coverage_shortfall_count: usize,
}

/// The outcome of a completed generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// The generated roster.
    pub roster: Roster,
    /// Summary counters.
    pub stats: GenerationStats,
    /// The slots no compliant shift could be found for.
    pub unresolved: Vec<UnresolvedSlot>,
    /// Every coverage shortfall, including those from `ignore`-action
    /// rules that never surface as entry violations.
    pub coverage_shortfalls: Vec<CoverageShortfall>,
    /// Malformed rules dropped from the run.
    pub rule_errors: Vec<RuleConfigError>,
}

impl GenerationResult {
    /// Recomputes summary counters from the roster and result lists.
    pub(crate) fn stats_for(
        roster: &Roster,
        unresolved: &[UnresolvedSlot],
        coverage_shortfalls: &[CoverageShortfall],
    ) -> GenerationStats {
        GenerationStats {
            total_assignments: roster
                .entries
                .iter()
                .filter(|e| e.shift.is_working())
                .count(),
            violation_count: roster.violation_count(),
            unresolved_count: unresolved.len(),
            coverage_shortfall_count: coverage_shortfalls.len(),
        }
    }
}
