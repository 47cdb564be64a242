//! Error types for the Roster Generation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during roster generation and
//! mutation.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Roster Generation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::InvalidConfig {
///     message: "month must be between 1 and 12, got 13".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid generation config: month must be between 1 and 12, got 13"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The generation configuration was invalid (bad month/year, no active
    /// employees, or an employee referencing an unknown fixed shift). Fails
    /// the whole run before any partial roster is produced.
    #[error("Invalid generation config: {message}")]
    InvalidConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// An edit targeted a locked roster cell. Local and recoverable; the
    /// entry is left unchanged.
    #[error("Cell for employee '{employee_id}' on {date} is locked")]
    CellLocked {
        /// The employee whose cell was targeted.
        employee_id: String,
        /// The date of the locked cell.
        date: NaiveDate,
    },

    /// The entry changed since the caller read it. The caller must re-fetch
    /// the entry and retry the edit.
    #[error("Cell for employee '{employee_id}' on {date} was modified since it was read")]
    WriteConflict {
        /// The employee whose cell was targeted.
        employee_id: String,
        /// The date of the conflicting cell.
        date: NaiveDate,
    },

    /// A manual edit was rejected by a block-severity rule that does not
    /// permit (or was not asked to apply) an override.
    #[error("Assignment blocked by rule '{rule_name}': {message}")]
    AssignmentBlocked {
        /// The name of the blocking rule.
        rule_name: String,
        /// A description of the violation.
        message: String,
    },

    /// No roster entry exists for the given employee and date.
    #[error("No roster entry for employee '{employee_id}' on {date}")]
    EntryNotFound {
        /// The employee that was looked up.
        employee_id: String,
        /// The date that was looked up.
        date: NaiveDate,
    },

    /// No saved roster exists with the given identifier.
    #[error("Roster not found: {id}")]
    RosterNotFound {
        /// The roster identifier that was not found.
        id: Uuid,
    },

    /// A generation run is already in flight for the same target period.
    #[error("A generation run is already in progress for {month}/{year}")]
    GenerationInProgress {
        /// The target month (1-based).
        month: u32,
        /// The target year.
        year: i32,
    },

    /// A shift code does not exist in the shift catalog.
    #[error("Unknown shift code: {code}")]
    UnknownShift {
        /// The unrecognized shift code.
        code: String,
    },

    /// A roster lifecycle transition was not allowed.
    #[error("Cannot transition roster from '{from}' to '{to}'")]
    InvalidTransition {
        /// The current lifecycle status.
        from: String,
        /// The requested lifecycle status.
        to: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = EngineError::InvalidConfig {
            message: "no active employees".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid generation config: no active employees"
        );
    }

    #[test]
    fn test_cell_locked_displays_employee_and_date() {
        let error = EngineError::CellLocked {
            employee_id: "emp_001".to_string(),
            date: date("2024-12-05"),
        };
        assert_eq!(
            error.to_string(),
            "Cell for employee 'emp_001' on 2024-12-05 is locked"
        );
    }

    #[test]
    fn test_write_conflict_displays_employee_and_date() {
        let error = EngineError::WriteConflict {
            employee_id: "emp_002".to_string(),
            date: date("2024-12-10"),
        };
        assert_eq!(
            error.to_string(),
            "Cell for employee 'emp_002' on 2024-12-10 was modified since it was read"
        );
    }

    #[test]
    fn test_assignment_blocked_displays_rule_and_message() {
        let error = EngineError::AssignmentBlocked {
            rule_name: "Minimum Rest Period".to_string(),
            message: "rest gap of 8 hours is below the 12 hour minimum".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Assignment blocked by rule 'Minimum Rest Period': rest gap of 8 hours is below the 12 hour minimum"
        );
    }

    #[test]
    fn test_generation_in_progress_displays_period() {
        let error = EngineError::GenerationInProgress {
            month: 12,
            year: 2024,
        };
        assert_eq!(
            error.to_string(),
            "A generation run is already in progress for 12/2024"
        );
    }

    #[test]
    fn test_unknown_shift_displays_code() {
        let error = EngineError::UnknownShift {
            code: "S9".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown shift code: S9");
    }

    #[test]
    fn test_invalid_transition_displays_statuses() {
        let error = EngineError::InvalidTransition {
            from: "archived".to_string(),
            to: "draft".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot transition roster from 'archived' to 'draft'"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_shift() -> EngineResult<()> {
            Err(EngineError::UnknownShift {
                code: "S7".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_shift()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
