// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Floating point rendering with a fixed number of significant digits.
//!
//! The value is rounded to `precision` significant digits first, and then laid out
//! either in positional form (`1234.5`, `0.00012`) or in scientific form
//! (`1.2345e+03`). Trailing zeros in the fraction are always trimmed.
//!
//! | [`SciNotation`] | layout                                                        |
//! |-----------------|---------------------------------------------------------------|
//! | `Never`         | positional                                                    |
//! | `Always`        | scientific                                                    |
//! | `Auto`          | scientific if the magnitude is below `1e-4` or `>= 10^precision` |
//!
//! `Auto` looks at the value before rounding, so `9.99995e-5` at precision 3 renders as
//! `1e-04` and not as `0.0001`.

use crate::{Precision, SciNotation};

pub const NAN_STR: &str = "NaN";
pub const INF_STR: &str = "inf";
pub const NEG_INF_STR: &str = "-inf";

/// No `f64` carries more significant decimal digits than this. Larger precisions are
/// clamped to it.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Render `value` rounded to `precision` significant digits. A precision of 0 is
/// treated as 1, and one above [`MAX_SIGNIFICANT_DIGITS`] as that maximum.
///
/// ```
/// use r3bl_iochannel::{Precision, SciNotation, dtos};
///
/// assert_eq!(dtos(1.23456, Precision(3), SciNotation::Auto), "1.23");
/// assert_eq!(dtos(1234.5, Precision(2), SciNotation::Auto), "1.2e+03");
/// assert_eq!(dtos(1234.5, Precision(2), SciNotation::Never), "1200");
/// assert_eq!(dtos(0.000_012_5, Precision(14), SciNotation::Never), "0.0000125");
/// ```
#[must_use]
pub fn dtos(value: f64, precision: Precision, sci: SciNotation) -> String {
    if value.is_nan() {
        return NAN_STR.into();
    }
    if value.is_infinite() {
        return if value > 0.0 { INF_STR } else { NEG_INF_STR }.into();
    }
    if value == 0.0 {
        return "0".into();
    }

    let precision = precision.0.clamp(1, MAX_SIGNIFICANT_DIGITS);
    let Some(rounded) = RoundedDecimal::new(value, precision) else {
        // The std formatter always yields a mantissa and an exponent.
        return format!("{value}");
    };

    let use_sci = match sci {
        SciNotation::Never => false,
        SciNotation::Always => true,
        SciNotation::Auto => {
            let magnitude = value.abs();
            let upper = 10_f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
            magnitude < 1e-4 || magnitude >= upper
        }
    };

    if use_sci {
        rounded.to_scientific()
    } else {
        rounded.to_positional()
    }
}

/// Render an `f32`. The value goes through its shortest round trip representation
/// before widening, so `0.1_f32` renders as `0.1` and not `0.100000001490116`.
#[must_use]
pub fn ftos(value: f32, precision: Precision, sci: SciNotation) -> String {
    let widened = value.to_string().parse::<f64>().unwrap_or(f64::from(value));
    dtos(widened, precision, sci)
}

/// `±0.d₁d₂…dₙ × 10^(exponent+1)`, with trailing zeros of the digits removed.
#[derive(Debug, PartialEq)]
struct RoundedDecimal {
    negative: bool,
    digits: String,
    exponent: i64,
}

impl RoundedDecimal {
    fn new(value: f64, precision: usize) -> Option<Self> {
        let formatted = format!("{:.*e}", precision - 1, value);
        let (mantissa, exponent) = formatted.split_once('e')?;
        let exponent = exponent.parse::<i64>().ok()?;
        let negative = mantissa.starts_with('-');

        let mut digits: String =
            mantissa.chars().filter(char::is_ascii_digit).collect();
        let trimmed_len = digits.trim_end_matches('0').len().max(1);
        digits.truncate(trimmed_len);

        Some(Self {
            negative,
            digits,
            exponent,
        })
    }

    fn sign(&self) -> &'static str { if self.negative { "-" } else { "" } }

    fn to_scientific(&self) -> String {
        let (lead, rest) = self.digits.split_at(1);
        let mut acc = String::from(self.sign());
        acc.push_str(lead);
        if !rest.is_empty() {
            acc.push('.');
            acc.push_str(rest);
        }
        let exp_sign = if self.exponent < 0 { '-' } else { '+' };
        acc.push_str(&format!("e{exp_sign}{:02}", self.exponent.unsigned_abs()));
        acc
    }

    fn to_positional(&self) -> String {
        let mut acc = String::from(self.sign());
        match usize::try_from(self.exponent) {
            Ok(exponent) => {
                let int_len = exponent + 1;
                if self.digits.len() <= int_len {
                    acc.push_str(&self.digits);
                    acc.extend(std::iter::repeat_n('0', int_len - self.digits.len()));
                } else {
                    let (int_part, frac_part) = self.digits.split_at(int_len);
                    acc.push_str(int_part);
                    acc.push('.');
                    acc.push_str(frac_part);
                }
            }
            Err(_) => {
                let leading_zeros =
                    usize::try_from(-self.exponent - 1).unwrap_or_default();
                acc.push_str("0.");
                acc.extend(std::iter::repeat_n('0', leading_zeros));
                acc.push_str(&self.digits);
            }
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{DEFAULT_PRECISION, assert_eq2};

    #[test_case(1.0, 14, SciNotation::Auto, "1")]
    #[test_case(-2.5, 14, SciNotation::Auto, "-2.5")]
    #[test_case(0.1, 14, SciNotation::Auto, "0.1")]
    #[test_case(1.0 / 3.0, 5, SciNotation::Auto, "0.33333")]
    #[test_case(2.0 / 3.0, 3, SciNotation::Auto, "0.667")]
    #[test_case(123_456.0, 3, SciNotation::Auto, "1.23e+05")]
    #[test_case(123_456.0, 3, SciNotation::Never, "123000")]
    #[test_case(0.000_1, 14, SciNotation::Auto, "0.0001")]
    #[test_case(0.000_01, 14, SciNotation::Auto, "1e-05")]
    #[test_case(0.000_01, 14, SciNotation::Never, "0.00001")]
    #[test_case(42.0, 14, SciNotation::Always, "4.2e+01")]
    #[test_case(-6.02e23, 14, SciNotation::Always, "-6.02e+23")]
    #[test_case(1.5e-300, 2, SciNotation::Auto, "1.5e-300")]
    #[test_case(9.99, 2, SciNotation::Auto, "10")]
    #[test_case(7.25, 0, SciNotation::Auto, "7")]
    #[test_case(9.999_95e-5, 3, SciNotation::Auto, "1e-04")]
    #[test_case(999.96, 3, SciNotation::Auto, "1000")]
    #[test_case(1.5, usize::MAX, SciNotation::Auto, "1.5")]
    #[test_case(0.5, 70_000, SciNotation::Never, "0.5")]
    fn test_dtos(value: f64, precision: usize, sci: SciNotation, expected: &str) {
        assert_eq2!(dtos(value, Precision(precision), sci), expected);
    }

    #[test]
    fn test_dtos_special_values() {
        let p = Precision::default();
        assert_eq2!(dtos(f64::NAN, p, SciNotation::Auto), "NaN");
        assert_eq2!(dtos(f64::INFINITY, p, SciNotation::Always), "inf");
        assert_eq2!(dtos(f64::NEG_INFINITY, p, SciNotation::Never), "-inf");
        assert_eq2!(dtos(0.0, p, SciNotation::Always), "0");
    }

    #[test]
    fn test_ftos_uses_shortest_representation() {
        assert_eq2!(ftos(0.1, Precision::default(), SciNotation::Auto), "0.1");
        assert_eq2!(ftos(-3.76, Precision(2), SciNotation::Auto), "-3.8");
    }

    #[test]
    fn test_positional_output_reads_back_within_precision() {
        // Rounding to `p` significant digits is off by at most half a unit in the last
        // kept digit, relative to a leading digit of at least 1.
        let samples = [
            std::f64::consts::PI,
            -std::f64::consts::E,
            1.0e-9,
            6.022_140_76e23,
            -0.000_123_456_789,
            987_654_321.123,
        ];
        for precision in [1_usize, 3, 7, DEFAULT_PRECISION] {
            let tolerance = 0.5 * 10_f64.powi(1 - i32::try_from(precision).unwrap());
            for value in samples {
                let rendered = dtos(value, Precision(precision), SciNotation::Never);
                let parsed: f64 = rendered.parse().unwrap();
                let relative_error = ((parsed - value) / value).abs();
                assert!(
                    relative_error <= tolerance,
                    "{value} @ {precision} -> {rendered} ({relative_error})"
                );
            }
        }
    }
}
