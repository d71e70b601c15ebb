// Decimal rounding helpers shared by the route model and the calculator

/// Largest number of fractional digits `round_to` supports
pub const MAX_DIGITS: u32 = 18;

/// Rounds `value` to `digits` fractional digits, halves away from zero.
///
/// The exact binary value of the double is rounded, not `value * 10^digits`:
/// 2.675 is stored as 2.67499999... and rounds to 2.67.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let digits = digits.min(MAX_DIGITS);

    // value == mantissa * 2^exponent
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    if exponent >= 0 {
        // already an integer
        return value;
    }

    let scale = 10u128.pow(digits);
    let scaled = mantissa as u128 * scale;
    let shift = exponent.unsigned_abs();
    let rounded = if shift > 120 {
        // scaled < 2^117, below half a unit
        0
    } else {
        let quotient = scaled >> shift;
        let remainder = scaled - (quotient << shift);
        if remainder >= 1u128 << (shift - 1) {
            quotient + 1
        } else {
            quotient
        }
    };

    let magnitude = rounded as f64 / scale as f64;
    if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Rounds to 6 fractional digits, the precision used for every kilometre figure
pub fn round_km(value: f64) -> f64 {
    round_to(value, 6)
}

/// Rounds to 2 fractional digits, the precision used for every minute figure
pub fn round_minutes(value: f64) -> f64 {
    round_to(value, 2)
}

/// Rounds to the nearest integer with halves going up (towards +inf).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Kilometres to whole metres
pub fn km_to_meters(km: f64) -> u64 {
    round_half_up(km.abs() * 1000.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.234_567_8, 6), 1.234_568);
        assert_eq!(round_to(8.044, 2), 8.04);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(3.0, 2), 3.0);
        assert_eq!(round_to(0.0, 6), 0.0);
    }

    #[test]
    fn test_round_to_uses_stored_value() {
        // each literal is stored slightly below the written half
        assert_eq!(round_minutes(6.045), 6.04);
        assert_eq!(round_minutes(2.675), 2.67);
        assert_eq!(round_minutes(0.015), 0.01);
        assert_eq!(round_minutes(1.005), 1.0);
        assert_eq!(round_km(2.000_002_5), 2.000_002);
        assert_eq!(round_minutes(-2.675), -2.67);
    }

    #[test]
    fn test_round_to_exact_halves_go_away_from_zero() {
        assert_eq!(round_minutes(0.125), 0.13);
        assert_eq!(round_minutes(6.035), 6.04);
        assert_eq!(round_km(1.000_000_5), 1.000_001);
        assert_eq!(round_minutes(-0.125), -0.13);
    }

    #[test]
    fn test_round_to_tiny_values() {
        assert_eq!(round_km(1e-300), 0.0);
        assert_eq!(round_km(f64::MIN_POSITIVE), 0.0);
        assert_eq!(round_km(4e-7), 0.0);
        assert_eq!(round_km(6e-7), 0.000_001);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(332.5), 333.0);
        assert_eq!(round_half_up(167.22), 167.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(0.49), 0.0);
        // 0.49999999999999994 + 0.5 rounds to 1.0 in floating point
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn test_km_to_meters() {
        assert_eq!(km_to_meters(0.2), 200);
        assert_eq!(km_to_meters(-0.05), 50);
        assert_eq!(km_to_meters(0.0), 0);
    }
}
