//! Skill-matching checks.

use crate::models::{Employee, ShiftDefinition, SkillLevel};

/// Returns the shift's required skills that the employee does not hold,
/// in catalog order.
pub fn missing_skills<'a>(employee: &Employee, shift: &'a ShiftDefinition) -> Vec<&'a str> {
    shift
        .required_skills
        .iter()
        .filter(|skill| !employee.has_skill(skill))
        .map(String::as_str)
        .collect()
}

/// Checks an employee against a shift's skill requirements.
///
/// Returns a violation message when a required skill is missing, or,
/// with `require_exact_match` set, when the employee's skill level is
/// below `minimum_skill_level`.
pub fn check_skill(
    employee: &Employee,
    shift: &ShiftDefinition,
    require_exact_match: bool,
    minimum_skill_level: SkillLevel,
) -> Option<String> {
    let missing = missing_skills(employee, shift);
    if !missing.is_empty() {
        return Some(format!(
            "Skill mismatch: {} requires [{}], employee is missing [{}]",
            shift.code,
            shift.required_skills.join(", "),
            missing.join(", ")
        ));
    }

    if require_exact_match && employee.skill_level < minimum_skill_level {
        return Some(format!(
            "Skill mismatch: employee level {:?} is below the required {:?}",
            employee.skill_level, minimum_skill_level
        ));
    }

    None
}
