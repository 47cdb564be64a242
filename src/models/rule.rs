//! Rule model and related types.
//!
//! This module defines scheduling rules as a tagged condition variant per
//! rule type with a strongly-typed payload per case, plus the constraint
//! policy (violation action and override flag) attached to every rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::SkillLevel;

/// What happens when a rule is violated by a candidate assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationAction {
    /// The candidate is rejected and another must be tried.
    Block,
    /// The candidate is accepted but the violation is recorded.
    Warn,
    /// The rule is evaluated but never surfaces a violation.
    Ignore,
}

/// The constraint policy attached to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConstraints {
    /// The action taken on violation.
    pub violation_action: ViolationAction,
    /// Whether a human may force a blocked assignment through a manual
    /// edit.
    #[serde(default)]
    pub allow_override: bool,
}

/// The rule classes known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// Minimum rest between consecutive working days.
    Rest,
    /// Maximum consecutive working days.
    #[serde(rename = "shift")]
    ConsecutiveShift,
    /// Skill-based assignment matching.
    Skill,
    /// Minimum staffing per shift per date.
    Coverage,
    /// A user-defined rule with no built-in evaluator.
    Custom,
}

/// The type-specific condition payload of a rule.
///
/// Serializes with the rule's `type` tag and `conditions` payload side by
/// side, matching the stored rule records:
///
/// ```
/// use roster_engine::models::{Rule, RuleCondition};
///
/// let json = r#"{
///     "id": "min-rest",
///     "name": "Minimum Rest Period",
///     "description": "Ensure employees have adequate rest between shifts",
///     "enabled": true,
///     "priority": 1,
///     "type": "rest",
///     "conditions": { "min_rest_hours": 12 },
///     "constraints": { "violation_action": "block", "allow_override": false }
/// }"#;
/// let rule: Rule = serde_json::from_str(json).unwrap();
/// assert!(matches!(rule.condition, RuleCondition::Rest { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "conditions", rename_all = "snake_case")]
pub enum RuleCondition {
    /// Minimum rest gap between the end of one working day and the start
    /// of the next.
    Rest {
        /// The minimum rest gap in hours.
        min_rest_hours: Decimal,
        /// When false, the check applies only to transitions between
        /// different shift codes.
        #[serde(default = "default_true")]
        apply_to_all_shifts: bool,
    },
    /// Limit on consecutive working days.
    #[serde(rename = "shift")]
    ConsecutiveShift {
        /// The maximum allowed run of consecutive working days.
        max_consecutive_days: u32,
        /// When false, Saturday/Sunday working days neither extend nor
        /// break the run.
        #[serde(default = "default_true")]
        include_weekends: bool,
    },
    /// Skill-based assignment matching.
    Skill {
        /// When true, the employee's skill level must also meet
        /// `minimum_skill_level`.
        #[serde(default)]
        require_exact_match: bool,
        /// The minimum skill level compared when `require_exact_match` is
        /// set.
        #[serde(default)]
        minimum_skill_level: SkillLevel,
    },
    /// Minimum staffing per shift code per date.
    Coverage {
        /// Map of shift code to the minimum number of employees that must
        /// hold it on every date.
        min_employees_per_shift: HashMap<String, u32>,
    },
    /// A user-defined condition bag. Accepted and kept visible, but the
    /// engine has no evaluator for it.
    Custom(serde_json::Value),
}

impl RuleCondition {
    /// Returns the rule class of this condition.
    pub fn rule_type(&self) -> RuleType {
        match self {
            RuleCondition::Rest { .. } => RuleType::Rest,
            RuleCondition::ConsecutiveShift { .. } => RuleType::ConsecutiveShift,
            RuleCondition::Skill { .. } => RuleType::Skill,
            RuleCondition::Coverage { .. } => RuleType::Coverage,
            RuleCondition::Custom(_) => RuleType::Custom,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A scheduling rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier for the rule.
    pub id: String,
    /// The rule's display name.
    pub name: String,
    /// Free-text description of the rule's intent.
    #[serde(default)]
    pub description: String,
    /// Whether the rule participates in evaluation.
    pub enabled: bool,
    /// Evaluation priority; lower values are enforced first on conflict.
    pub priority: i32,
    /// The type-specific condition payload.
    #[serde(flatten)]
    pub condition: RuleCondition,
    /// The constraint policy.
    pub constraints: RuleConstraints,
}

impl Rule {
    /// Returns the rule class.
    pub fn rule_type(&self) -> RuleType {
        self.condition.rule_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_rest_rule() {
        let json = r#"{
            "id": "min-rest",
            "name": "Minimum Rest Period",
            "description": "Ensure employees have adequate rest between shifts",
            "enabled": true,
            "priority": 1,
            "type": "rest",
            "conditions": { "min_rest_hours": 12, "apply_to_all_shifts": true },
            "constraints": { "violation_action": "block", "allow_override": false }
        }"#;

        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.rule_type(), RuleType::Rest);
        assert_eq!(rule.priority, 1);
        assert_eq!(rule.constraints.violation_action, ViolationAction::Block);
        assert!(!rule.constraints.allow_override);
        match rule.condition {
            RuleCondition::Rest {
                min_rest_hours,
                apply_to_all_shifts,
            } => {
                assert_eq!(min_rest_hours, Decimal::from_str("12").unwrap());
                assert!(apply_to_all_shifts);
            }
            other => panic!("expected rest condition, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_consecutive_rule_uses_shift_tag() {
        let json = r#"{
            "id": "max-consecutive",
            "name": "Maximum Consecutive Days",
            "enabled": true,
            "priority": 2,
            "type": "shift",
            "conditions": { "max_consecutive_days": 6 },
            "constraints": { "violation_action": "warn", "allow_override": true }
        }"#;

        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.rule_type(), RuleType::ConsecutiveShift);
        match rule.condition {
            RuleCondition::ConsecutiveShift {
                max_consecutive_days,
                include_weekends,
            } => {
                assert_eq!(max_consecutive_days, 6);
                // defaults to true when omitted
                assert!(include_weekends);
            }
            other => panic!("expected consecutive condition, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_skill_rule() {
        let json = r#"{
            "id": "skill-match",
            "name": "Skill-Based Assignment",
            "enabled": true,
            "priority": 3,
            "type": "skill",
            "conditions": { "require_exact_match": true, "minimum_skill_level": "advanced" },
            "constraints": { "violation_action": "block", "allow_override": true }
        }"#;

        let rule: Rule = serde_json::from_str(json).unwrap();
        match rule.condition {
            RuleCondition::Skill {
                require_exact_match,
                minimum_skill_level,
            } => {
                assert!(require_exact_match);
                assert_eq!(minimum_skill_level, SkillLevel::Advanced);
            }
            other => panic!("expected skill condition, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_coverage_rule() {
        let json = r#"{
            "id": "min-coverage",
            "name": "Minimum Coverage",
            "enabled": true,
            "priority": 4,
            "type": "coverage",
            "conditions": { "min_employees_per_shift": { "S1": 3, "S2": 2 } },
            "constraints": { "violation_action": "warn", "allow_override": true }
        }"#;

        let rule: Rule = serde_json::from_str(json).unwrap();
        match &rule.condition {
            RuleCondition::Coverage {
                min_employees_per_shift,
            } => {
                assert_eq!(min_employees_per_shift.get("S1"), Some(&3));
                assert_eq!(min_employees_per_shift.get("S2"), Some(&2));
            }
            other => panic!("expected coverage condition, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_custom_rule() {
        let json = r#"{
            "id": "night-cap",
            "name": "Night Shift Cap",
            "enabled": false,
            "priority": 5,
            "type": "custom",
            "conditions": { "max_night_shifts_per_week": 3 },
            "constraints": { "violation_action": "ignore" }
        }"#;

        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.rule_type(), RuleType::Custom);
        assert_eq!(rule.constraints.violation_action, ViolationAction::Ignore);
        // allow_override defaults to false when omitted
        assert!(!rule.constraints.allow_override);
    }

    #[test]
    fn test_rule_serialization_round_trip() {
        let rule = Rule {
            id: "min-rest".to_string(),
            name: "Minimum Rest Period".to_string(),
            description: String::new(),
            enabled: true,
            priority: 1,
            condition: RuleCondition::Rest {
                min_rest_hours: Decimal::from(12),
                apply_to_all_shifts: true,
            },
            constraints: RuleConstraints {
                violation_action: ViolationAction::Block,
                allow_override: false,
            },
        };

        let json = serde_json::to_string(&rule).unwrap();
        let deserialized: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, deserialized);
    }

    #[test]
    fn test_rule_type_serialization() {
        assert_eq!(serde_json::to_string(&RuleType::Rest).unwrap(), "\"rest\"");
        assert_eq!(
            serde_json::to_string(&RuleType::ConsecutiveShift).unwrap(),
            "\"shift\""
        );
        assert_eq!(
            serde_json::to_string(&RuleType::Coverage).unwrap(),
            "\"coverage\""
        );
    }
}
