//! Payroll wire models
//!
//! The per-staff calculation lives in the `gymdesk` crate; this module only
//! holds what crosses the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::record_id;
use crate::normalize::{Normalize, aliases, fields};

/// Stored payroll cycle as listed by `GET /payroll` and `/payroll/history`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub id: String,
    pub month: u32,
    pub year: i32,
    pub status: String,
    pub staff_count: u32,
    pub total_gross: f64,
    pub total_net: f64,
}

impl Normalize for PayrollRecord {
    fn normalize(raw: &Value) -> Self {
        Self {
            id: record_id(raw),
            month: fields::amount_or_zero(raw, &["month"]).clamp(0.0, 12.0) as u32,
            year: fields::amount_or_zero(raw, &["year"]) as i32,
            status: fields::text_or(raw, aliases::STATUS, "draft"),
            staff_count: fields::amount_or_zero(raw, &["staffCount", "staff_count", "employeeCount"]).max(0.0)
                as u32,
            total_gross: fields::amount_or_zero(raw, &["totalGross", "total_gross", "grossTotal"]),
            total_net: fields::amount_or_zero(raw, &["totalNet", "total_net", "netTotal", "total"]),
        }
    }
}

/// One staff row of the generate payload, amounts already rounded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollGenerateRow {
    pub staff_id: String,
    pub staff_name: String,
    pub base_salary: i64,
    pub present_days: f64,
    pub working_days: f64,
    pub prorated_base: i64,
    pub allowances: i64,
    pub overtime_hours: f64,
    pub overtime_amount: i64,
    pub deductions: i64,
    pub gross_salary: i64,
    pub net_salary: i64,
}

/// `POST /payroll/generate` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollGenerate {
    pub month: u32,
    pub year: i32,
    pub working_days: f64,
    pub staff: Vec<PayrollGenerateRow>,
    pub total_gross: i64,
    pub total_deductions: i64,
    pub total_net: i64,
}

/// `POST /payroll/:id/approve` body
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PayrollApprove {
    pub approved_by: Option<String>,
    pub notes: Option<String>,
}
