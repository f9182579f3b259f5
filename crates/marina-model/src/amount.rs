//! Currency helpers.
//!
//! Balances are fixed-point decimals. Everything shown to the user or written
//! to disk carries exactly two fraction digits.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ParseError, Result};

/// Parse a decimal amount such as `1500.00` or `-12.5`.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed).map_err(|_| ParseError::InvalidAmount {
        value: trimmed.to_string(),
    })
}

/// Render an amount with exactly two fraction digits.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}
