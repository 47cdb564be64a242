//! Rule registry snapshot.
//!
//! The engine never reads rule storage directly during a run. Instead it
//! builds a [`RuleSnapshot`] once at the start of generation: an immutable,
//! priority-ordered view of the enabled rules with malformed condition
//! payloads filtered out and reported as [`RuleConfigError`]s.

use serde::{Deserialize, Serialize};

use crate::models::{Rule, RuleCondition, RuleType, ShiftCatalog};

/// A malformed rule detected while building a snapshot.
///
/// A bad rule invalidates only itself: generation proceeds with the
/// remaining valid rules and reports the error in the generation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfigError {
    /// The identifier of the invalid rule.
    pub rule_id: String,
    /// The display name of the invalid rule.
    pub rule_name: String,
    /// What made the rule's condition payload invalid.
    pub message: String,
}

/// An immutable, priority-ordered view of the enabled rules for one run.
///
/// Rules are ordered by ascending priority (lower = enforced first), with
/// the rule id as a deterministic tie-break.
#[derive(Debug, Clone)]
pub struct RuleSnapshot {
    rules: Vec<Rule>,
    errors: Vec<RuleConfigError>,
}

impl RuleSnapshot {
    /// Builds a snapshot from the stored rule set.
    ///
    /// Disabled rules are dropped silently. Enabled rules with malformed
    /// condition payloads (non-positive thresholds, empty or unknown-shift
    /// coverage maps) are dropped and reported via [`RuleSnapshot::errors`].
    pub fn build(rules: &[Rule], catalog: &ShiftCatalog) -> Self {
        let mut valid = Vec::new();
        let mut errors = Vec::new();

        for rule in rules.iter().filter(|r| r.enabled) {
            match validate_condition(rule, catalog) {
                Ok(()) => valid.push(rule.clone()),
                Err(message) => errors.push(RuleConfigError {
                    rule_id: rule.id.clone(),
                    rule_name: rule.name.clone(),
                    message,
                }),
            }
        }

        valid.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.id.cmp(&b.id)));

        Self {
            rules: valid,
            errors,
        }
    }

    /// The enabled, valid rules in ascending priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The enabled, valid rules of the given class, in priority order.
    pub fn of_type(&self, rule_type: RuleType) -> impl Iterator<Item = &Rule> {
        self.rules
            .iter()
            .filter(move |r| r.rule_type() == rule_type)
    }

    /// The malformed rules dropped from this snapshot.
    pub fn errors(&self) -> &[RuleConfigError] {
        &self.errors
    }
}

fn validate_condition(rule: &Rule, catalog: &ShiftCatalog) -> Result<(), String> {
    match &rule.condition {
        RuleCondition::Rest { min_rest_hours, .. } => {
            if *min_rest_hours <= rust_decimal::Decimal::ZERO {
                return Err(format!(
                    "min_rest_hours must be positive, got {}",
                    min_rest_hours
                ));
            }
            Ok(())
        }
        RuleCondition::ConsecutiveShift {
            max_consecutive_days,
            ..
        } => {
            if *max_consecutive_days == 0 {
                return Err("max_consecutive_days must be at least 1".to_string());
            }
            Ok(())
        }
        RuleCondition::Skill { .. } => Ok(()),
        RuleCondition::Coverage {
            min_employees_per_shift,
        } => {
            if min_employees_per_shift.is_empty() {
                return Err("min_employees_per_shift must not be empty".to_string());
            }
            for (code, min) in min_employees_per_shift {
                if *min == 0 {
                    return Err(format!("minimum for shift '{}' must be at least 1", code));
                }
                if catalog.get(code).is_none() {
                    return Err(format!("unknown shift code '{}' in coverage map", code));
                }
            }
            Ok(())
        }
        // Custom rules have no evaluator but are structurally valid.
        RuleCondition::Custom(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RuleConstraints, ShiftDefinition, ViolationAction};
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn catalog() -> ShiftCatalog {
        let time = |s: &str| NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap();
        ShiftCatalog::new(vec![
            ShiftDefinition {
                code: "S1".to_string(),
                name: "Morning".to_string(),
                start_time: time("06:00:00"),
                end_time: time("14:00:00"),
                required_skills: vec![],
            },
            ShiftDefinition {
                code: "S2".to_string(),
                name: "Afternoon".to_string(),
                start_time: time("14:00:00"),
                end_time: time("22:00:00"),
                required_skills: vec![],
            },
        ])
    }

    fn rule(id: &str, priority: i32, enabled: bool, condition: RuleCondition) -> Rule {
        Rule {
            id: id.to_string(),
            name: format!("Rule {}", id),
            description: String::new(),
            enabled,
            priority,
            condition,
            constraints: RuleConstraints {
                violation_action: ViolationAction::Block,
                allow_override: false,
            },
        }
    }

    fn rest_rule(id: &str, priority: i32, hours: i64) -> Rule {
        rule(
            id,
            priority,
            true,
            RuleCondition::Rest {
                min_rest_hours: Decimal::from(hours),
                apply_to_all_shifts: true,
            },
        )
    }

    #[test]
    fn test_rules_sorted_by_priority_then_id() {
        let rules = vec![
            rest_rule("b-rule", 5, 12),
            rest_rule("a-rule", 5, 10),
            rest_rule("c-rule", 1, 8),
        ];
        let snapshot = RuleSnapshot::build(&rules, &catalog());
        let ids: Vec<&str> = snapshot.rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c-rule", "a-rule", "b-rule"]);
    }

    #[test]
    fn test_disabled_rules_dropped_silently() {
        let rules = vec![
            rest_rule("enabled", 1, 12),
            rule(
                "disabled",
                2,
                false,
                RuleCondition::Rest {
                    min_rest_hours: Decimal::from(12),
                    apply_to_all_shifts: true,
                },
            ),
        ];
        let snapshot = RuleSnapshot::build(&rules, &catalog());
        assert_eq!(snapshot.rules().len(), 1);
        assert!(snapshot.errors().is_empty());
    }

    #[test]
    fn test_non_positive_rest_hours_reported() {
        let rules = vec![rest_rule("zero-rest", 1, 0)];
        let snapshot = RuleSnapshot::build(&rules, &catalog());
        assert!(snapshot.rules().is_empty());
        assert_eq!(snapshot.errors().len(), 1);
        assert_eq!(snapshot.errors()[0].rule_id, "zero-rest");
        assert!(snapshot.errors()[0].message.contains("min_rest_hours"));
    }

    #[test]
    fn test_zero_consecutive_days_reported() {
        let rules = vec![rule(
            "zero-days",
            1,
            true,
            RuleCondition::ConsecutiveShift {
                max_consecutive_days: 0,
                include_weekends: true,
            },
        )];
        let snapshot = RuleSnapshot::build(&rules, &catalog());
        assert!(snapshot.rules().is_empty());
        assert_eq!(snapshot.errors().len(), 1);
    }

    #[test]
    fn test_empty_coverage_map_reported() {
        let rules = vec![rule(
            "empty-coverage",
            1,
            true,
            RuleCondition::Coverage {
                min_employees_per_shift: HashMap::new(),
            },
        )];
        let snapshot = RuleSnapshot::build(&rules, &catalog());
        assert_eq!(snapshot.errors().len(), 1);
    }

    #[test]
    fn test_unknown_shift_in_coverage_map_reported() {
        let mut map = HashMap::new();
        map.insert("S9".to_string(), 2);
        let rules = vec![rule(
            "bad-shift",
            1,
            true,
            RuleCondition::Coverage {
                min_employees_per_shift: map,
            },
        )];
        let snapshot = RuleSnapshot::build(&rules, &catalog());
        assert_eq!(snapshot.errors().len(), 1);
        assert!(snapshot.errors()[0].message.contains("S9"));
    }

    #[test]
    fn test_bad_rule_does_not_invalidate_others() {
        let mut map = HashMap::new();
        map.insert("S1".to_string(), 2);
        let rules = vec![
            rest_rule("zero-rest", 1, 0),
            rest_rule("good-rest", 2, 12),
            rule(
                "good-coverage",
                3,
                true,
                RuleCondition::Coverage {
                    min_employees_per_shift: map,
                },
            ),
        ];
        let snapshot = RuleSnapshot::build(&rules, &catalog());
        assert_eq!(snapshot.rules().len(), 2);
        assert_eq!(snapshot.errors().len(), 1);
    }

    #[test]
    fn test_of_type_filters_by_class() {
        let mut map = HashMap::new();
        map.insert("S1".to_string(), 2);
        let rules = vec![
            rest_rule("rest", 1, 12),
            rule(
                "coverage",
                2,
                true,
                RuleCondition::Coverage {
                    min_employees_per_shift: map,
                },
            ),
        ];
        let snapshot = RuleSnapshot::build(&rules, &catalog());
        assert_eq!(snapshot.of_type(RuleType::Rest).count(), 1);
        assert_eq!(snapshot.of_type(RuleType::Coverage).count(), 1);
        assert_eq!(snapshot.of_type(RuleType::Skill).count(), 0);
    }

    #[test]
    fn test_custom_rules_are_structurally_valid() {
        let rules = vec![rule(
            "custom",
            1,
            true,
            RuleCondition::Custom(serde_json::json!({ "max_night_shifts_per_week": 3 })),
        )];
        let snapshot = RuleSnapshot::build(&rules, &catalog());
        assert_eq!(snapshot.rules().len(), 1);
        assert!(snapshot.errors().is_empty());
    }
}
