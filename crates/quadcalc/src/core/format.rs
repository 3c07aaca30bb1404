//! Display formatting for results

/// Significant digits kept when rendering a result
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Magnitudes at or above this render in exponent form
pub const EXPONENT_ABOVE: f64 = 1e21;

/// Magnitudes below this render in exponent form
pub const EXPONENT_BELOW: f64 = 1e-6;

/// Formats a value in its canonical minimal decimal form
///
/// The value is rounded to [`SIGNIFICANT_DIGITS`] and then printed with the
/// shortest text that reads back as the rounded value, which hides binary
/// representation noise: `0.1 + 0.2` renders as `0.3`.
///
/// Very large and very small magnitudes use exponent form with an explicit
/// exponent sign, e.g. `1e+21` and `1.5e-7`.
#[must_use]
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        // Covers -0.0 too
        return "0".to_string();
    }

    let rounded = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse::<f64>()
        .unwrap_or(value);

    let magnitude = rounded.abs();
    if magnitude < EXPONENT_ABOVE && magnitude >= EXPONENT_BELOW {
        return format!("{rounded}");
    }

    let text = format!("{rounded:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integers() {
        assert_eq!(format_result(14.0), "14");
        assert_eq!(format_result(-3.0), "-3");
        assert_eq!(format_result(1.0), "1");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn test_format_hides_representation_noise() {
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.1 * 3.0), "3.3");
        assert_eq!(format_result(0.7 - 0.1), "0.6");
    }

    #[test]
    fn test_format_simple_fractions() {
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(0.125), "0.125");
    }

    #[test]
    fn test_format_repeating_fractions() {
        assert_eq!(format_result(1.0 / 3.0), "0.333333333333333");
        assert_eq!(format_result(2.0 / 3.0), "0.666666666666667");
    }

    #[test]
    fn test_format_large_integer() {
        assert_eq!(format_result(1e15), "1000000000000000");
    }

    #[test]
    fn test_format_huge_uses_exponent() {
        assert_eq!(format_result(1e300), "1e+300");
        assert_eq!(format_result(1e21), "1e+21");
        assert_eq!(format_result(-2.5e22), "-2.5e+22");
        assert_eq!(format_result(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_tiny_uses_exponent() {
        assert_eq!(format_result(1e-300), "1e-300");
        assert_eq!(format_result(1.5e-7), "1.5e-7");
        assert_eq!(format_result(1e-7 / 3.0), "3.33333333333333e-8");
        assert_eq!(format_result(0.000_001), "0.000001");
    }

    #[test]
    fn test_format_non_finite_passthrough() {
        assert_eq!(format_result(f64::INFINITY), "inf");
        assert_eq!(format_result(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_reparses_to_nearby_value() {
        for value in [123.456, 98765.4321, 0.000_123, 42.000_000_1] {
            let text = format_result(value);
            let back: f64 = text.parse().unwrap();
            assert!((back - value).abs() <= value.abs() * 1e-14, "{value} -> {text}");
        }
    }
}
