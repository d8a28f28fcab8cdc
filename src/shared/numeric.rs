//! Numeric coercion helpers shared by the import pipeline and projections.
//!
//! Exported spreadsheets are loose about numbers, so every helper here is
//! total: bad input becomes zero instead of an error.

/// Parse a cell as a floating-point number.
/// Blank text, unparsable text and non-finite values all become `0.0`.
pub fn parse_number_or_zero(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Round half up to the nearest integer (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> f64 {
    // Compare against the floor; exact just below one half and above 2^52
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round half up to one decimal place.
pub fn round_to_one_decimal(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Convert a rounded, non-negative float into a count. Negative or
/// non-finite input clamps to zero.
pub fn to_count(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        0
    } else {
        round_half_up(value) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_or_zero() {
        assert_eq!(parse_number_or_zero("1200"), 1200.0);
        assert_eq!(parse_number_or_zero("  42.5 "), 42.5);
        assert_eq!(parse_number_or_zero("abc"), 0.0);
        assert_eq!(parse_number_or_zero(""), 0.0);
        assert_eq!(parse_number_or_zero("NaN"), 0.0);
        assert_eq!(parse_number_or_zero("inf"), 0.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_round_half_up_float_edges() {
        assert_eq!(round_half_up(0.49999999999999994), 0.0);

        let odd_above_2_52 = 4_503_599_627_370_497.0;
        assert_eq!(round_half_up(odd_above_2_52), odd_above_2_52);
        assert_eq!(to_count(odd_above_2_52), 4_503_599_627_370_497);
    }

    #[test]
    fn test_round_to_one_decimal() {
        assert_eq!(round_to_one_decimal(33.333), 33.3);
        assert_eq!(round_to_one_decimal(41.25), 41.3);
        assert_eq!(round_to_one_decimal(0.0), 0.0);
    }

    #[test]
    fn test_to_count() {
        assert_eq!(to_count(14.6), 15);
        assert_eq!(to_count(-3.0), 0);
        assert_eq!(to_count(f64::NAN), 0);
    }
}
