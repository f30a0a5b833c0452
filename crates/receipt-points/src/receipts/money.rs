//! Monetary string handling for receipt totals and item prices.
//!
//! Amounts travel as strings (`"35.35"`) and are parsed into [`Decimal`] so cent arithmetic
//! stays exact. Parsing never fails outward: a malformed amount is worth zero.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Parse an amount, returning `None` for blank or malformed input.
pub fn try_parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed).ok()
}

/// Parse an amount, degrading malformed input to zero.
pub fn parse_amount(raw: &str) -> Decimal {
    try_parse_amount(raw).unwrap_or(Decimal::ZERO)
}

/// Whole cents, truncated toward zero. `None` only when the amount is too large to scale.
pub fn to_cents(amount: Decimal) -> Option<i128> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.trunc().to_i128())
}

/// Render with exactly two fraction digits, truncating any sub-cent remainder.
pub fn canonical(amount: Decimal) -> String {
    let mut value = amount.round_dp_with_strategy(2, RoundingStrategy::ToZero);
    value.rescale(2);
    value.to_string()
}
