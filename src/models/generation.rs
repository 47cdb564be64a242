//! Generation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for one roster generation run.
///
/// Carries the target period and the boolean toggles exposed by the
/// generation screen. The toggle defaults match that screen's initial
/// state: everything on except overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// The target month (1-based, 1..=12).
    pub month: u32,
    /// The target year.
    pub year: i32,
    /// Assign `HOL` on recognized holidays.
    #[serde(default = "default_true")]
    pub include_holidays: bool,
    /// Assign `WO` on each employee's week-off days.
    #[serde(default = "default_true")]
    pub respect_week_offs: bool,
    /// Allow skill rules to block candidates. When off, the skill rule
    /// class can only warn.
    #[serde(default = "default_true")]
    pub enforce_skill_matching: bool,
    /// Evaluate rest-period rules. When off, the rest rule class is
    /// skipped entirely.
    #[serde(default = "default_true")]
    pub minimum_rest_period: bool,
    /// Order fallback candidates by the employee's ascending assignment
    /// count per shift code, spreading work across shift types.
    #[serde(default = "default_true")]
    pub balance_workload: bool,
    /// Permit manual edits to force assignments blocked by
    /// override-allowed rules.
    #[serde(default)]
    pub allow_overrides: bool,
}

fn default_true() -> bool {
    true
}

impl GenerationConfig {
    /// Creates a configuration for the given period with default toggles.
    pub fn new(month: u32, year: i32) -> Self {
        Self {
            month,
            year,
            include_holidays: true,
            respect_week_offs: true,
            enforce_skill_matching: true,
            minimum_rest_period: true,
            balance_workload: true,
            allow_overrides: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toggles() {
        let config = GenerationConfig::new(12, 2024);
        assert!(config.include_holidays);
        assert!(config.respect_week_offs);
        assert!(config.enforce_skill_matching);
        assert!(config.minimum_rest_period);
        assert!(config.balance_workload);
        assert!(!config.allow_overrides);
    }

    #[test]
    fn test_deserialize_with_omitted_toggles() {
        let json = r#"{ "month": 12, "year": 2024, "allow_overrides": true }"#;
        let config: GenerationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.month, 12);
        assert_eq!(config.year, 2024);
        assert!(config.include_holidays);
        assert!(config.allow_overrides);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut config = GenerationConfig::new(7, 2025);
        config.balance_workload = false;
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GenerationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
