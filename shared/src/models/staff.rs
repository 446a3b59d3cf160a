//! Staff Model (trainers and other employees)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{Normalize, aliases, aliases::staff as alias, fields};

/// Staff entity - directory entry and payroll input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub branch: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    /// Monthly base salary
    pub base_salary: f64,
    pub monthly_target: f64,
    pub allowances: f64,
    pub deductions: f64,
    pub overtime_hours: f64,
    /// Pay per overtime hour
    pub ot_rate: f64,
    /// Days present in the payroll period, `None` means full attendance
    pub present_days: Option<f64>,
    /// Per-staff override of the standard working days
    pub working_days: Option<f64>,
}

impl Normalize for Staff {
    fn normalize(raw: &Value) -> Self {
        Self {
            id: fields::text_or(raw, alias::ID, ""),
            name: fields::person_name(
                raw,
                alias::FULL_NAME,
                aliases::FIRST_NAME,
                aliases::LAST_NAME,
                alias::FALLBACK_NAME,
                alias::UNKNOWN,
            ),
            role: fields::text_or(raw, alias::ROLE, "Staff"),
            department: fields::text_or(raw, alias::DEPARTMENT, "General"),
            branch: fields::text_or(raw, alias::BRANCH, "Main"),
            email: fields::text_or(raw, aliases::EMAIL, ""),
            phone: fields::text_or(raw, aliases::PHONE, ""),
            status: fields::text_or(raw, aliases::STATUS, "active"),
            base_salary: fields::amount_or_zero(raw, alias::BASE_SALARY),
            monthly_target: fields::amount_or_zero(raw, alias::MONTHLY_TARGET),
            allowances: fields::amount_or_zero(raw, alias::ALLOWANCES),
            deductions: fields::amount_or_zero(raw, alias::DEDUCTIONS),
            overtime_hours: fields::amount_or_zero(raw, alias::OVERTIME_HOURS),
            ot_rate: fields::amount_or_zero(raw, alias::OT_RATE),
            present_days: fields::first_amount(raw, alias::PRESENT_DAYS),
            working_days: fields::first_amount(raw, alias::WORKING_DAYS).filter(|d| *d > 0.0),
        }
    }
}

impl Staff {
    /// Whether a booking's trainer reference points at this staff member
    pub fn matches_trainer(&self, trainer_id: Option<&str>, trainer_name: Option<&str>) -> bool {
        let by_id = !self.id.is_empty() && trainer_id == Some(self.id.as_str());
        let by_name = trainer_name.is_some_and(|n| n.eq_ignore_ascii_case(&self.name));
        by_id || by_name
    }
}

/// Create staff payload (`POST /api/trainers`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreate {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub department: Option<String>,
    pub branch: Option<String>,
    pub base_salary: Option<f64>,
    pub monthly_target: Option<f64>,
}

/// Update staff payload (`PUT /api/trainers/:id`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_salary_alias_order() {
        let s = Staff::normalize(&json!({"salary": "AED 4,500", "monthlyTarget": 20000}));
        assert_eq!(s.base_salary, 4500.0);
        assert_eq!(s.monthly_target, 20000.0);

        let s = Staff::normalize(&json!({"baseSalary": 3000, "salary": 9999}));
        assert_eq!(s.base_salary, 3000.0);
    }

    #[test]
    fn test_defaults() {
        let s = Staff::normalize(&json!({"id": 4}));
        assert_eq!(s.id, "4");
        assert_eq!(s.name, "Unknown Staff");
        assert_eq!(s.role, "Staff");
        assert_eq!(s.present_days, None);
        assert_eq!(s.working_days, None);
        assert_eq!(s.allowances, 0.0);
    }

    #[test]
    fn test_matches_trainer() {
        let s = Staff::normalize(&json!({"_id": "t1", "name": "Karim"}));
        assert!(s.matches_trainer(Some("t1"), None));
        assert!(s.matches_trainer(None, Some("karim")));
        assert!(!s.matches_trainer(Some("t2"), Some("Omar")));
    }
}
