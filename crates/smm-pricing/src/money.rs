//! Conversion of decimal amounts into whole currency units
//!
//! Every amount leaving the engine is a non-negative `i64`. Values below zero
//! become zero and values beyond `i64` saturate.

use rust_decimal::prelude::*;

/// Round half away from zero to a whole unit, clamped at zero
#[inline]
pub fn round_to_unit(value: Decimal) -> i64 {
    to_unit(value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

/// Round down to a whole unit, clamped at zero
#[inline]
pub fn floor_to_unit(value: Decimal) -> i64 {
    to_unit(value.floor())
}

fn to_unit(whole: Decimal) -> i64 {
    if whole <= Decimal::ZERO {
        return 0;
    }
    whole.to_i64().unwrap_or(i64::MAX)
}
