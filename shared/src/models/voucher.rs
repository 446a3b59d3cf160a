//! Payment / Receipt Voucher Model
//!
//! Payment vouchers are money out, receipt vouchers money in. Both share
//! one shape; the endpoint decides which is which.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::record_id;
use crate::money::{sum_amounts, to_f64};
use crate::normalize::{Normalize, aliases, aliases::voucher as alias, fields};

/// Voucher lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VoucherStatus {
    #[default]
    Draft,
    Pending,
    Paid,
    Overdue,
}

impl VoucherStatus {
    pub const ALL: [VoucherStatus; 4] = [Self::Draft, Self::Pending, Self::Paid, Self::Overdue];

    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim().to_ascii_lowercase();
        if lower.contains("overdue") {
            Self::Overdue
        } else if lower.contains("partial") || lower.contains("pending") || lower.contains("unpaid") {
            Self::Pending
        } else if lower.contains("paid") || lower.contains("completed") {
            Self::Paid
        } else {
            Self::Draft
        }
    }
}

/// One partial payment recorded against a voucher
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoucherPayment {
    pub amount: f64,
    pub date: Option<String>,
    pub method: Option<String>,
    pub reference: Option<String>,
}

impl Normalize for VoucherPayment {
    fn normalize(raw: &Value) -> Self {
        Self {
            amount: fields::amount_or_zero(raw, &["amount"]),
            date: fields::first_text(raw, alias::DATE),
            method: fields::first_text(raw, alias::METHOD),
            reference: fields::first_text(raw, alias::REFERENCE),
        }
    }
}

/// Voucher entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: String,
    pub number: Option<String>,
    pub party: String,
    pub amount: f64,
    /// Explicit `paidAmount`, otherwise the sum of nested payments
    pub paid_amount: f64,
    pub date: Option<String>,
    pub method: Option<String>,
    pub status: VoucherStatus,
    pub payments: Vec<VoucherPayment>,
}

impl Normalize for Voucher {
    fn normalize(raw: &Value) -> Self {
        let payments = VoucherPayment::normalize_all(fields::first_array(raw, alias::PAYMENTS));
        let paid_amount = fields::first_amount(raw, alias::PAID_AMOUNT)
            .unwrap_or_else(|| to_f64(sum_amounts(payments.iter().map(|p| p.amount))));

        Self {
            id: record_id(raw),
            number: fields::first_text(raw, alias::NUMBER),
            party: fields::text_or(raw, alias::PARTY, "Unknown"),
            amount: fields::amount_or_zero(raw, alias::AMOUNT),
            paid_amount,
            date: fields::first_text(raw, alias::DATE),
            method: fields::first_text(raw, alias::METHOD),
            status: VoucherStatus::parse(&fields::text_or(raw, aliases::STATUS, "")),
            payments,
        }
    }
}

impl Voucher {
    /// Amount still owed. Overpayment is not rejected, so this can be negative.
    pub fn outstanding(&self) -> f64 {
        self.amount - self.paid_amount
    }

    /// Record a payment locally (mirrors the accumulate-only server rule)
    pub fn record_payment(&mut self, payment: VoucherPayment) {
        self.paid_amount = to_f64(sum_amounts([self.paid_amount, payment.amount]));
        self.payments.push(payment);
    }
}

/// Create / update voucher payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherPayload {
    pub party: String,
    pub amount: f64,
    pub date: String,
    pub method: Option<String>,
    pub status: VoucherStatus,
    pub description: Option<String>,
}

/// Add-payment payload (`POST /api/payment-vouchers/:id/payments`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherPaymentCreate {
    pub amount: f64,
    pub date: String,
    pub method: String,
    pub reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paid_amount_from_nested_payments() {
        let v = Voucher::normalize(&json!({
            "amount": "AED 1,000",
            "status": "Partially Paid",
            "payments": [{"amount": 250.1}, {"amount": "AED 100.2"}]
        }));
        assert_eq!(v.paid_amount, 350.3);
        assert_eq!(v.status, VoucherStatus::Pending);
        assert_eq!(v.outstanding(), 1000.0 - 350.3);
    }

    #[test]
    fn test_explicit_paid_amount_wins() {
        let v = Voucher::normalize(&json!({
            "amount": 500,
            "paidAmount": 0,
            "payments": [{"amount": 100}]
        }));
        assert_eq!(v.paid_amount, 0.0);
    }

    #[test]
    fn test_overpayment_allowed() {
        let mut v = Voucher::normalize(&json!({"amount": 100, "status": "paid"}));
        v.record_payment(VoucherPayment { amount: 150.0, date: None, method: None, reference: None });
        assert_eq!(v.paid_amount, 150.0);
        assert_eq!(v.outstanding(), -50.0);
        assert_eq!(v.status, VoucherStatus::Paid);
    }

    #[test]
    fn test_unpaid_is_not_paid() {
        assert_eq!(VoucherStatus::parse("Unpaid"), VoucherStatus::Pending);
        assert_eq!(VoucherStatus::parse("PAID"), VoucherStatus::Paid);
        assert_eq!(VoucherStatus::parse("overdue (unpaid)"), VoucherStatus::Overdue);
        assert_eq!(VoucherStatus::parse(""), VoucherStatus::Draft);
    }
}
