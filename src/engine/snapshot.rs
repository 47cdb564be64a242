//! The immutable input snapshot for one generation run.

use crate::models::{
    Employee, GenerationConfig, Holiday, Leave, Roster, RosterEntry, Rule, ShiftCatalog,
};

/// One generation run's copy-on-read view of all reference data.
///
/// A run is one logical transaction: the engine reads this snapshot only,
/// so concurrent edits to the underlying employee/holiday/leave/rule
/// stores cannot be observed mid-run.
#[derive(Debug, Clone)]
pub struct GenerationSnapshot {
    /// The target period and toggles.
    pub config: GenerationConfig,
    /// The employee directory as of the start of the run.
    pub employees: Vec<Employee>,
    /// The holiday set for the target month.
    pub holidays: Vec<Holiday>,
    /// The leave set for the target month.
    pub leaves: Vec<Leave>,
    /// The stored rule set; a priority-ordered snapshot of the enabled
    /// rules is built once at the start of the run.
    pub rules: Vec<Rule>,
    /// The shift catalog.
    pub catalog: ShiftCatalog,
    /// A previously saved roster whose locked cells must be copied
    /// verbatim (the regeneration-over-existing-roster case).
    pub existing_roster: Option<Roster>,
    /// A trailing window of prior-month entries so rest and
    /// consecutive-day checks evaluate correctly across the month
    /// boundary.
    pub prior_entries: Vec<RosterEntry>,
    /// Who requested the generation; recorded on the produced roster.
    pub requested_by: String,
}
