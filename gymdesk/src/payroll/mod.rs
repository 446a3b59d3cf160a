//! Payroll calculation
//!
//! Per staff member:
//!
//! ```text
//! proratedBase   = base / workingDays * presentDays
//! overtimeAmount = overtimeHours * otRate
//! gross          = proratedBase + allowances + overtimeAmount
//! net            = gross - deductions
//! ```
//!
//! `presentDays` defaults to `workingDays`. Rows keep full `Decimal`
//! precision; only the outbound generate payload is rounded to whole
//! units. Out-of-range inputs count as zero instead of aborting the cycle.

use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::{PayrollGenerate, PayrollGenerateRow, Staff};
use shared::money::{add, div, mul, round_half_up, sub, to_decimal, to_f64};
use thiserror::Error;

pub const DEFAULT_WORKING_DAYS: u32 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayrollError {
    /// Refused before any request is made
    #[error("No staff records found to generate payroll")]
    NoStaff,

    #[error("Invalid payroll month: {0}")]
    InvalidMonth(u32),

    #[error("Working days must be greater than zero")]
    ZeroWorkingDays,
}

/// One computed row; amounts are unrounded
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRow {
    pub staff_id: String,
    pub staff_name: String,
    pub role: String,
    pub base_salary: Decimal,
    pub present_days: Decimal,
    pub working_days: Decimal,
    pub prorated_base: Decimal,
    pub allowances: Decimal,
    pub overtime_hours: Decimal,
    pub ot_rate: Decimal,
    pub overtime_amount: Decimal,
    pub deductions: Decimal,
    pub gross: Decimal,
    pub net: Decimal,
}

/// Compute one staff member's row
///
/// A positive per-staff `working_days` overrides the cycle value. The
/// zero `working_days` prorates to zero.
pub fn calculate_row(staff: &Staff, working_days: Decimal) -> PayrollRow {
    let working_days = staff
        .working_days
        .filter(|d| *d > 0.0)
        .map(to_decimal)
        .unwrap_or(working_days);
    let present_days = staff.present_days.map(to_decimal).unwrap_or(working_days);

    let base = to_decimal(staff.base_salary);
    let prorated_base = mul(div(base, working_days), present_days);
    let allowances = to_decimal(staff.allowances);
    let overtime_hours = to_decimal(staff.overtime_hours);
    let ot_rate = to_decimal(staff.ot_rate);
    let overtime_amount = mul(overtime_hours, ot_rate);
    let deductions = to_decimal(staff.deductions);
    let gross = add(add(prorated_base, allowances), overtime_amount);

    PayrollRow {
        staff_id: staff.id.clone(),
        staff_name: staff.name.clone(),
        role: staff.role.clone(),
        base_salary: base,
        present_days,
        working_days,
        prorated_base,
        allowances,
        overtime_hours,
        ot_rate,
        overtime_amount,
        deductions,
        gross,
        net: sub(gross, deductions),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollTotals {
    pub base: Decimal,
    pub allowances: Decimal,
    pub overtime: Decimal,
    pub deductions: Decimal,
    pub gross: Decimal,
    pub net: Decimal,
}

impl PayrollTotals {
    fn add(&mut self, row: &PayrollRow) {
        self.base = add(self.base, row.prorated_base);
        self.allowances = add(self.allowances, row.allowances);
        self.overtime = add(self.overtime, row.overtime_amount);
        self.deductions = add(self.deductions, row.deductions);
        self.gross = add(self.gross, row.gross);
        self.net = add(self.net, row.net);
    }
}

/// A generated (not yet submitted) payroll cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollCycle {
    pub month: u32,
    pub year: i32,
    pub working_days: u32,
    pub rows: Vec<PayrollRow>,
    pub totals: PayrollTotals,
}

impl PayrollCycle {
    pub fn generate(
        month: u32,
        year: i32,
        working_days: u32,
        staff: &[Staff],
    ) -> Result<Self, PayrollError> {
        if !(1..=12).contains(&month) {
            return Err(PayrollError::InvalidMonth(month));
        }
        if working_days == 0 {
            return Err(PayrollError::ZeroWorkingDays);
        }
        if staff.is_empty() {
            return Err(PayrollError::NoStaff);
        }

        let days = Decimal::from(working_days);
        let rows: Vec<PayrollRow> = staff.iter().map(|s| calculate_row(s, days)).collect();
        let mut totals = PayrollTotals::default();
        for row in &rows {
            totals.add(row);
        }

        tracing::debug!(month, year, staff = rows.len(), net = %totals.net, "Payroll cycle computed");

        Ok(Self {
            month,
            year,
            working_days,
            rows,
            totals,
        })
    }

    /// Outbound `POST /payroll/generate` body, amounts rounded half toward +∞
    pub fn to_payload(&self) -> PayrollGenerate {
        PayrollGenerate {
            month: self.month,
            year: self.year,
            working_days: f64::from(self.working_days),
            staff: self.rows.iter().map(payload_row).collect(),
            total_gross: whole(self.totals.gross),
            total_deductions: whole(self.totals.deductions),
            total_net: whole(self.totals.net),
        }
    }

    /// `YYYY-MM`, used as the audit resource key
    pub fn period(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

fn whole(value: Decimal) -> i64 {
    round_half_up(value).to_i64().unwrap_or(0)
}

fn payload_row(row: &PayrollRow) -> PayrollGenerateRow {
    PayrollGenerateRow {
        staff_id: row.staff_id.clone(),
        staff_name: row.staff_name.clone(),
        base_salary: whole(row.base_salary),
        present_days: to_f64(row.present_days),
        working_days: to_f64(row.working_days),
        prorated_base: whole(row.prorated_base),
        allowances: whole(row.allowances),
        overtime_hours: to_f64(row.overtime_hours),
        overtime_amount: whole(row.overtime_amount),
        deductions: whole(row.deductions),
        gross_salary: whole(row.gross),
        net_salary: whole(row.net),
    }
}
