//! Sanitizers for raw form input.
//!
//! These reproduce the clamping a host form applies before handing values to
//! the chart. The renderer itself never clamps.

use super::MIN_AXIS_COUNT;

/// Default upper bound for the number of axes offered to users.
pub const DEFAULT_MAX_AXIS_COUNT: usize = 10;

/// Default upper bound of a single value input field.
pub const DEFAULT_MAX_VALUE_INPUT: f64 = 20.0;

/// Clamps a requested axis count.
///
/// Requests below the polygon minimum return 0, which hosts treat as "no
/// chart"; requests above `max_axis_count` return `max_axis_count`.
#[must_use]
pub fn clamp_axis_count(requested: i64, max_axis_count: usize) -> usize {
    match usize::try_from(requested) {
        Ok(count) if count >= MIN_AXIS_COUNT => count.min(max_axis_count),
        _ => 0,
    }
}

/// Clamps a value into `[0, step_count]`; NaN becomes 0.
#[must_use]
pub fn sanitize_value(raw: f64, step_count: u32) -> f64 {
    if raw.is_nan() || raw < 0.0 {
        0.0
    } else {
        raw.min(f64::from(step_count))
    }
}

/// Parses the longest leading decimal number of `input`, or NaN.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so
/// `"3.5kg"` parses as 3.5 while `"t9"` yields NaN. A signed or unsigned
/// `Infinity` prefix parses as the matching infinity.
#[must_use]
pub fn parse_leading_float(input: &str) -> f64 {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while bytes.get(fraction_end).is_some_and(u8::is_ascii_digit) {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        if mantissa_digits > 0 {
            end = fraction_end;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Parses and clamps a value typed into a form field.
#[must_use]
pub fn parse_value_input(input: &str, step_count: u32) -> f64 {
    sanitize_value(parse_leading_float(input), step_count)
}

#[cfg(test)]
mod tests {
    use super::{clamp_axis_count, parse_leading_float, parse_value_input, sanitize_value};

    #[test]
    fn axis_count_below_minimum_disables_chart() {
        assert_eq!(clamp_axis_count(2, 10), 0);
        assert_eq!(clamp_axis_count(-4, 10), 0);
        assert_eq!(clamp_axis_count(3, 10), 3);
        assert_eq!(clamp_axis_count(11, 10), 10);
    }

    #[test]
    fn values_clamp_into_step_band() {
        assert_eq!(sanitize_value(f64::NAN, 5), 0.0);
        assert_eq!(sanitize_value(-2.0, 5), 0.0);
        assert_eq!(sanitize_value(2.5, 5), 2.5);
        assert_eq!(sanitize_value(9.0, 5), 5.0);
    }

    #[test]
    fn leading_float_parse_ignores_trailing_text() {
        assert_eq!(parse_leading_float("3.5kg"), 3.5);
        assert_eq!(parse_leading_float("  42"), 42.0);
        assert_eq!(parse_leading_float(".5"), 0.5);
        assert_eq!(parse_leading_float("7."), 7.0);
        assert_eq!(parse_leading_float("1e2x"), 100.0);
        assert_eq!(parse_leading_float("2e"), 2.0);
        assert_eq!(parse_leading_float("-1.25"), -1.25);
        assert!(parse_leading_float("t9").is_nan());
        assert!(parse_leading_float("").is_nan());
        assert!(parse_leading_float("-.").is_nan());
        assert_eq!(parse_leading_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_leading_float(" -Infinityx"), f64::NEG_INFINITY);
        assert!(parse_leading_float("inf").is_nan());
    }

    #[test]
    fn value_input_parses_then_clamps() {
        assert_eq!(parse_value_input("text", 4), 0.0);
        assert_eq!(parse_value_input("-3", 4), 0.0);
        assert_eq!(parse_value_input("12abc", 4), 4.0);
        assert_eq!(parse_value_input("1.5", 4), 1.5);
        assert_eq!(parse_value_input("Infinity", 4), 4.0);
        assert_eq!(parse_value_input("-Infinity", 4), 0.0);
    }
}
