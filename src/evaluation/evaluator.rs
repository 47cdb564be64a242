//! The evaluator entry point applying every enabled rule to a candidate.

use chrono::NaiveDate;

use super::{AssignmentHistory, CoverageShortfall, check_consecutive, check_rest, check_skill};
use crate::models::{
    Employee, GenerationConfig, Rule, RuleCondition, Severity, ShiftCatalog, ShiftDefinition,
    Violation, ViolationAction,
};
use crate::registry::RuleSnapshot;

/// Evaluates every applicable enabled rule against a proposed
/// (employee, day, shift) assignment and the roster state built so far.
///
/// Rules are visited in ascending priority order and all triggered rules
/// report: one blocking violation is enough for the assignment engine to
/// reject a candidate, but lower-priority violations are not suppressed.
/// Rules whose action is `ignore` are computed and discarded. Coverage
/// rules are roster-wide and not evaluated here (see
/// [`coverage_violation`]); custom rules have no evaluator.
///
/// Toggle gating:
/// - `minimum_rest_period` off skips the rest class entirely.
/// - `enforce_skill_matching` off downgrades skill blocks to warnings.
pub fn evaluate_candidate(
    employee: &Employee,
    date: NaiveDate,
    candidate: &ShiftDefinition,
    history: &AssignmentHistory,
    catalog: &ShiftCatalog,
    rules: &RuleSnapshot,
    config: &GenerationConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for rule in rules.rules() {
        let message = match &rule.condition {
            RuleCondition::Rest {
                min_rest_hours,
                apply_to_all_shifts,
            } => {
                if !config.minimum_rest_period {
                    None
                } else {
                    check_rest(
                        &employee.id,
                        date,
                        candidate,
                        history,
                        catalog,
                        *min_rest_hours,
                        *apply_to_all_shifts,
                    )
                }
            }
            RuleCondition::ConsecutiveShift {
                max_consecutive_days,
                include_weekends,
            } => check_consecutive(
                &employee.id,
                date,
                history,
                *max_consecutive_days,
                *include_weekends,
            ),
            RuleCondition::Skill {
                require_exact_match,
                minimum_skill_level,
            } => check_skill(
                employee,
                candidate,
                *require_exact_match,
                *minimum_skill_level,
            ),
            RuleCondition::Coverage { .. } | RuleCondition::Custom(_) => None,
        };

        let Some(message) = message else {
            continue;
        };

        let mut severity = match rule.constraints.violation_action {
            ViolationAction::Block => Severity::Block,
            ViolationAction::Warn => Severity::Warn,
            ViolationAction::Ignore => continue,
        };

        if severity == Severity::Block
            && matches!(rule.condition, RuleCondition::Skill { .. })
            && !config.enforce_skill_matching
        {
            severity = Severity::Warn;
        }

        violations.push(Violation {
            rule_id: rule.id.clone(),
            rule_name: rule.name.clone(),
            rule_type: rule.rule_type(),
            severity,
            message,
        });
    }

    violations
}

/// Builds the violation recorded against entries contributing to a
/// coverage shortfall, honoring the rule's violation action.
///
/// Returns `None` for `ignore`-action rules: the shortfall is still
/// reported in the generation result, but never surfaces as an entry
/// violation.
pub fn coverage_violation(rule: &Rule, shortfall: &CoverageShortfall) -> Option<Violation> {
    let severity = match rule.constraints.violation_action {
        ViolationAction::Block => Severity::Block,
        ViolationAction::Warn => Severity::Warn,
        ViolationAction::Ignore => return None,
    };

    Some(Violation {
        rule_id: rule.id.clone(),
        rule_name: rule.name.clone(),
        rule_type: rule.rule_type(),
        severity,
        message: format!(
            "Minimum coverage not met: {} of {} required employees on {} for {}",
            shortfall.assigned, shortfall.required, shortfall.shift_code, shortfall.date
        ),
    })
}
