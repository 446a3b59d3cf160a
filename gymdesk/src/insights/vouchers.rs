//! Voucher summary (payment or receipt)

use serde::Serialize;
use shared::models::{Voucher, VoucherStatus};
use shared::money::{sub, sum_amounts, to_f64};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherSummary {
    pub count: usize,
    pub draft: usize,
    pub pending: usize,
    pub paid: usize,
    pub overdue: usize,
    pub total_amount: f64,
    pub total_paid: f64,
    /// `total_amount - total_paid`; negative when vouchers were overpaid
    pub outstanding: f64,
    /// Unpaid balance on overdue vouchers
    pub overdue_amount: f64,
}

pub fn voucher_summary(vouchers: &[Voucher]) -> VoucherSummary {
    let count = |status: VoucherStatus| vouchers.iter().filter(|v| v.status == status).count();
    let total_amount = sum_amounts(vouchers.iter().map(|v| v.amount));
    let total_paid = sum_amounts(vouchers.iter().map(|v| v.paid_amount));
    let overdue_amount = sum_amounts(
        vouchers
            .iter()
            .filter(|v| v.status == VoucherStatus::Overdue)
            .map(|v| v.outstanding()),
    );

    VoucherSummary {
        count: vouchers.len(),
        draft: count(VoucherStatus::Draft),
        pending: count(VoucherStatus::Pending),
        paid: count(VoucherStatus::Paid),
        overdue: count(VoucherStatus::Overdue),
        total_amount: to_f64(total_amount),
        total_paid: to_f64(total_paid),
        outstanding: to_f64(sub(total_amount, total_paid)),
        overdue_amount: to_f64(overdue_amount),
    }
}
