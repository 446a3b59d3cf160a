//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts travel as `f64` on the wire and in view-models; sums and
//! products are done in `Decimal` so that long reductions over receipts
//! or payroll rows do not accumulate binary floating point drift.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Largest magnitude accepted from the backend (AED 1,000,000,000,000)
///
/// The product of two bounded values still fits in a `Decimal`.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Convert f64 to Decimal for calculation
///
/// Non-finite input (NaN, ±Infinity) and magnitudes above [`MAX_AMOUNT`]
/// become zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    if value.abs() > MAX_AMOUNT {
        tracing::warn!(value = ?value, "Out-of-range amount in monetary calculation, defaulting to zero");
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::warn!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

fn out_of_range(op: &'static str, a: Decimal, b: Decimal) -> Decimal {
    tracing::warn!(op, a = %a, b = %b, "Monetary calculation out of range, defaulting to zero");
    Decimal::ZERO
}

/// `a + b`, zero on overflow
#[inline]
pub fn add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| out_of_range("add", a, b))
}

/// `a - b`, zero on overflow
#[inline]
pub fn sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| out_of_range("sub", a, b))
}

/// `a * b`, zero on overflow
#[inline]
pub fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| out_of_range("mul", a, b))
}

/// `a / b`, zero when `b` is zero or the quotient overflows
#[inline]
pub fn div(a: Decimal, b: Decimal) -> Decimal {
    a.checked_div(b).unwrap_or_else(|| out_of_range("div", a, b))
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Sum a sequence of f64 amounts in decimal space
pub fn sum_amounts<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = f64>,
{
    amounts.into_iter().map(to_decimal).fold(Decimal::ZERO, add)
}

/// Round to a whole number the way the dashboard's outbound payloads do:
/// halves go toward positive infinity (`-2.5 → -2`, `2.5 → 3`).
pub fn round_half_up(value: Decimal) -> Decimal {
    value.checked_add(Decimal::new(5, 1)).unwrap_or(value).floor()
}

/// `part / whole * 100`, or zero when `whole` is not positive
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}
