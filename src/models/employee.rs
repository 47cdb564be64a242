//! Employee model and related types.
//!
//! This module defines the Employee struct along with the skill level and
//! status enums used by the assignment engine and the skill rule class.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Represents an employee's proficiency level for skill-matching rules.
///
/// Levels are ordered: `Beginner < Intermediate < Advanced < Expert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    /// Entry-level proficiency.
    Beginner,
    /// Working proficiency (the default).
    Intermediate,
    /// Above-average proficiency.
    Advanced,
    /// Highest proficiency.
    Expert,
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel::Intermediate
    }
}

/// Whether an employee currently participates in roster generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// The employee is scheduled by the assignment engine.
    Active,
    /// The employee is skipped by the assignment engine.
    Inactive,
}

/// Represents an employee subject to roster generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's badge code (e.g., "EMP001").
    pub emp_id: String,
    /// The employee's display name.
    pub name: String,
    /// The department the employee belongs to.
    pub department: String,
    /// Ordered skill tags held by the employee (e.g., "React", "Python").
    #[serde(default)]
    pub skills: Vec<String>,
    /// The employee's proficiency level, compared against skill rules.
    #[serde(default)]
    pub skill_level: SkillLevel,
    /// Weekdays on which the employee is off (subset of the 7 weekdays).
    #[serde(default)]
    pub week_offs: Vec<Weekday>,
    /// The shift code the employee is preferentially assigned. Must
    /// reference a shift defined in the shift catalog.
    pub fixed_shift: String,
    /// Whether the employee participates in generation.
    pub status: EmployeeStatus,
}

impl Employee {
    /// Returns true if the employee participates in roster generation.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Returns true if the given weekday is one of the employee's week-offs.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Weekday;
    /// use roster_engine::models::{Employee, EmployeeStatus, SkillLevel};
    ///
    /// let employee = Employee {
    ///     id: "1".to_string(),
    ///     emp_id: "EMP001".to_string(),
    ///     name: "John Smith".to_string(),
    ///     department: "Engineering".to_string(),
    ///     skills: vec!["React".to_string(), "Node.js".to_string()],
    ///     skill_level: SkillLevel::Intermediate,
    ///     week_offs: vec![Weekday::Sat, Weekday::Sun],
    ///     fixed_shift: "S1".to_string(),
    ///     status: EmployeeStatus::Active,
    /// };
    /// assert!(employee.has_week_off(Weekday::Sat));
    /// assert!(!employee.has_week_off(Weekday::Wed));
    /// ```
    pub fn has_week_off(&self, weekday: Weekday) -> bool {
        self.week_offs.contains(&weekday)
    }

    /// Returns true if the employee holds the given skill tag.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(status: EmployeeStatus) -> Employee {
        Employee {
            id: "1".to_string(),
            emp_id: "EMP001".to_string(),
            name: "John Smith".to_string(),
            department: "Engineering".to_string(),
            skills: vec!["React".to_string(), "Node.js".to_string()],
            skill_level: SkillLevel::Intermediate,
            week_offs: vec![Weekday::Sat, Weekday::Sun],
            fixed_shift: "S1".to_string(),
            status,
        }
    }

    #[test]
    fn test_deserialize_active_employee() {
        let json = r#"{
            "id": "1",
            "emp_id": "EMP001",
            "name": "John Smith",
            "department": "Engineering",
            "skills": ["React", "Node.js"],
            "week_offs": ["Saturday", "Sunday"],
            "fixed_shift": "S1",
            "status": "active"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "1");
        assert_eq!(employee.emp_id, "EMP001");
        assert_eq!(employee.week_offs, vec![Weekday::Sat, Weekday::Sun]);
        assert_eq!(employee.fixed_shift, "S1");
        assert_eq!(employee.status, EmployeeStatus::Active);
        // skill_level defaults to intermediate when omitted
        assert_eq!(employee.skill_level, SkillLevel::Intermediate);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee(EmployeeStatus::Active);
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_is_active() {
        assert!(create_test_employee(EmployeeStatus::Active).is_active());
        assert!(!create_test_employee(EmployeeStatus::Inactive).is_active());
    }

    #[test]
    fn test_has_week_off() {
        let employee = create_test_employee(EmployeeStatus::Active);
        assert!(employee.has_week_off(Weekday::Sat));
        assert!(employee.has_week_off(Weekday::Sun));
        assert!(!employee.has_week_off(Weekday::Mon));
    }

    #[test]
    fn test_has_skill() {
        let employee = create_test_employee(EmployeeStatus::Active);
        assert!(employee.has_skill("React"));
        assert!(!employee.has_skill("Python"));
    }

    #[test]
    fn test_skill_level_ordering() {
        assert!(SkillLevel::Beginner < SkillLevel::Intermediate);
        assert!(SkillLevel::Intermediate < SkillLevel::Advanced);
        assert!(SkillLevel::Advanced < SkillLevel::Expert);
    }

    #[test]
    fn test_skill_level_serialization() {
        assert_eq!(
            serde_json::to_string(&SkillLevel::Beginner).unwrap(),
            "\"beginner\""
        );
        assert_eq!(
            serde_json::to_string(&SkillLevel::Expert).unwrap(),
            "\"expert\""
        );
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }
}
