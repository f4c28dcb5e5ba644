//! Conversion of user-entered amounts into wire minor units.
//!
//! The wire format carries amounts as integers in the smallest denomination
//! (1 coin = 100 000 minor units) while the form collects decimal text in
//! the major unit. Converting through binary floats drifts for inputs like
//! "0.001", so the conversion goes through `rust_decimal` instead.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Minor units per major display unit.
pub const MINOR_UNITS_PER_COIN: i64 = 100_000;

/// Decimal places the wire format can represent; anything finer is below
/// one minor unit.
pub const MAX_DECIMAL_PLACES: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is blank")]
    Blank,
    #[error("amount is not a number")]
    NotANumber,
    #[error("amount must be greater than zero")]
    NotPositive,
    #[error("amount is finer than one minor unit")]
    TooPrecise,
    #[error("amount is too large")]
    OutOfRange,
}

/// Parses decimal text in the major unit into integer minor units.
///
/// Rejects blank input, non-numeric input, zero or negative values, values
/// finer than one minor unit, and values that overflow the wire integer.
pub fn parse_minor_units(raw: &str) -> Result<i64, AmountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Blank);
    }
    let amount: Decimal = trimmed.parse().map_err(|_| AmountError::NotANumber)?;
    if amount <= Decimal::ZERO {
        return Err(AmountError::NotPositive);
    }
    let scaled = amount
        .checked_mul(Decimal::from(MINOR_UNITS_PER_COIN))
        .ok_or(AmountError::OutOfRange)?;
    if !scaled.fract().is_zero() {
        return Err(AmountError::TooPrecise);
    }
    scaled.trunc().to_i64().ok_or(AmountError::OutOfRange)
}

/// Lenient conversion used by payload construction: blank or unparseable
/// input becomes 0 minor units, and anything finer than one minor unit
/// truncates toward zero. Strict checking belongs to `validate`, which runs
/// first; this keeps construction total.
pub fn minor_units_or_zero(raw: &str) -> i64 {
    raw.trim()
        .parse::<Decimal>()
        .ok()
        .and_then(|amount| amount.checked_mul(Decimal::from(MINOR_UNITS_PER_COIN)))
        .and_then(|scaled| scaled.trunc().to_i64())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_decimal_places_matches_the_minor_unit_scale() {
        assert_eq!(10i64.pow(MAX_DECIMAL_PLACES), MINOR_UNITS_PER_COIN);
    }

    #[test]
    fn converts_typical_decimal_input() {
        assert_eq!(parse_minor_units("1.5"), Ok(150_000));
        assert_eq!(parse_minor_units("0.00123"), Ok(123));
        assert_eq!(parse_minor_units("21"), Ok(2_100_000));
    }

    #[test]
    fn converts_the_float_trap_case_exactly() {
        // 0.001 * 100000 is 100.00000000000001 in f64 arithmetic.
        assert_eq!(parse_minor_units("0.001"), Ok(100));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_minor_units("  0.5 "), Ok(50_000));
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(parse_minor_units(""), Err(AmountError::Blank));
        assert_eq!(parse_minor_units("   "), Err(AmountError::Blank));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(parse_minor_units("ten"), Err(AmountError::NotANumber));
        assert_eq!(parse_minor_units("1.2.3"), Err(AmountError::NotANumber));
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(parse_minor_units("0"), Err(AmountError::NotPositive));
        assert_eq!(parse_minor_units("0.0"), Err(AmountError::NotPositive));
        assert_eq!(parse_minor_units("-1"), Err(AmountError::NotPositive));
    }

    #[test]
    fn rejects_sub_minor_unit_precision() {
        assert_eq!(parse_minor_units("0.000001"), Err(AmountError::TooPrecise));
        // Exactly five decimal places is one minor unit and fine.
        assert_eq!(parse_minor_units("0.00001"), Ok(1));
    }

    #[test]
    fn lenient_conversion_defaults_to_zero() {
        assert_eq!(minor_units_or_zero(""), 0);
        assert_eq!(minor_units_or_zero("not a number"), 0);
        assert_eq!(minor_units_or_zero("0.00123"), 123);
        assert_eq!(minor_units_or_zero("1.5"), 150_000);
    }

    #[test]
    fn lenient_conversion_truncates_excess_precision() {
        assert_eq!(minor_units_or_zero("0.000019"), 1);
    }
}
