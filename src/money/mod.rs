//! Integer minor-unit (cent) arithmetic.
//!
//! Every monetary value in the engine is a signed 64-bit count of minor
//! units. Floating point only appears at the conversion boundary in
//! [`to_minor_units`]; all arithmetic past that point is integer and
//! overflow-checked.

use crate::errors::EngineError;

/// Converts a major-unit decimal amount into minor units, rounding to the
/// nearest cent with ties away from zero.
pub fn to_minor_units(major: f64) -> Result<i64, EngineError> {
    if !major.is_finite() {
        return Err(EngineError::ArithmeticOverflow);
    }
    let scaled = major * 100.0;
    let rounded = if scaled >= 0.0 {
        (scaled + 0.5).floor()
    } else {
        (scaled - 0.5).ceil()
    };
    if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
        return Err(EngineError::ArithmeticOverflow);
    }
    Ok(rounded as i64)
}

/// Computes `floor(base * percent / 100)` through a 128-bit intermediate.
///
/// The result never exceeds `base` for non-negative `base` and
/// `percent <= 100`.
pub fn percentage_of(base: i64, percent: u8) -> Result<i64, EngineError> {
    if percent > 100 {
        return Err(EngineError::InvalidAllocation(format!(
            "percent {} is outside 0..=100",
            percent
        )));
    }
    let share = (base as i128 * percent as i128).div_euclid(100);
    i64::try_from(share).map_err(|_| EngineError::ArithmeticOverflow)
}

/// Sums minor-unit values, failing on overflow instead of wrapping.
pub fn checked_sum<I>(values: I) -> Result<i64, EngineError>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().try_fold(0i64, checked_add)
}

pub fn checked_add(a: i64, b: i64) -> Result<i64, EngineError> {
    a.checked_add(b).ok_or(EngineError::ArithmeticOverflow)
}

pub fn checked_sub(a: i64, b: i64) -> Result<i64, EngineError> {
    a.checked_sub(b).ok_or(EngineError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_major_amounts_to_cents() {
        assert_eq!(to_minor_units(0.0).unwrap(), 0);
        assert_eq!(to_minor_units(12.34).unwrap(), 1234);
        assert_eq!(to_minor_units(-12.34).unwrap(), -1234);
        assert_eq!(to_minor_units(0.005).unwrap(), 1);
        assert_eq!(to_minor_units(-0.005).unwrap(), -1);
    }

    #[test]
    fn rejects_non_finite_major_amounts() {
        assert!(to_minor_units(f64::NAN).is_err());
        assert!(to_minor_units(f64::INFINITY).is_err());
    }

    #[test]
    fn percentage_floors_and_never_exceeds_base() {
        assert_eq!(percentage_of(12_000_000, 10).unwrap(), 1_200_000);
        assert_eq!(percentage_of(999, 33).unwrap(), 329);
        assert_eq!(percentage_of(100, 100).unwrap(), 100);
        assert_eq!(percentage_of(0, 50).unwrap(), 0);
        assert_eq!(percentage_of(i64::MAX, 100).unwrap(), i64::MAX);
    }

    #[test]
    fn percentage_rejects_out_of_range_percent() {
        let err = percentage_of(100, 101).expect_err("percent above 100");
        assert!(matches!(err, EngineError::InvalidAllocation(_)));
    }

    #[test]
    fn sum_detects_overflow() {
        assert_eq!(checked_sum([1, 2, 3]).unwrap(), 6);
        let err = checked_sum([i64::MAX, 1]).expect_err("overflow");
        assert!(matches!(err, EngineError::ArithmeticOverflow));
    }
}
