use crate::shared::error::NumberError;
use crate::shared::strictness::Strictness;

/// Returns the number token for an `f64`, in the shortest decimal form whose
/// parse recovers the exact bit pattern. Non-finite values are an error
/// outside of lenient mode; in lenient mode they become the bare literals
/// `NaN`, `Infinity` and `-Infinity`.
pub(crate) fn f64_token(value: f64, strictness: Strictness) -> Result<String, NumberError> {
    if !value.is_finite() {
        return non_finite_token(non_finite_name_f64(value), strictness);
    }
    let mut buf = ryu::Buffer::new();
    Ok(canonical_exponent(buf.format_finite(value)))
}

/// The `f32` analog of [f64_token].
pub(crate) fn f32_token(value: f32, strictness: Strictness) -> Result<String, NumberError> {
    if !value.is_finite() {
        return non_finite_token(non_finite_name_f32(value), strictness);
    }
    let mut buf = ryu::Buffer::new();
    Ok(canonical_exponent(buf.format_finite(value)))
}

fn non_finite_token(name: &'static str, strictness: Strictness) -> Result<String, NumberError> {
    if strictness.is_lenient() {
        Ok(name.to_owned())
    } else {
        Err(NumberError::NonFinite(name))
    }
}

fn non_finite_name_f64(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}

fn non_finite_name_f32(value: f32) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}

/// Rewrites ryu's exponent notation to the canonical output form: the
/// exponent marker is a capital `E`, and the mantissa always carries a
/// fraction, so `1e300` becomes `1.0E300`. Numbers without an exponent pass
/// through unchanged. ryu never emits a `+` on positive exponents, and
/// neither does this.
fn canonical_exponent(shortest: &str) -> String {
    match shortest.find('e') {
        None => shortest.to_owned(),
        Some(pos) => {
            let (mantissa, exponent) = (&shortest[..pos], &shortest[pos + 1..]);
            let mut token = String::with_capacity(shortest.len() + 3);
            token.push_str(mantissa);
            if !mantissa.contains('.') {
                token.push_str(".0");
            }
            token.push('E');
            token.push_str(exponent);
            token
        }
    }
}

/// Checks caller-supplied number text against the JSON number grammar: an
/// optional minus sign, an integer part without superfluous leading zeros, an
/// optional fraction with at least one digit, and an optional signed
/// exponent. Exponent digits may carry leading zeros; a leading `+` and a
/// bare trailing `.` are not accepted. The non-finite tokens `NaN`,
/// `Infinity` and `-Infinity` pass only in lenient mode.
pub(crate) fn is_valid_number_token(text: &str, strictness: Strictness) -> bool {
    if strictness.is_lenient() && matches!(text, "NaN" | "Infinity" | "-Infinity") {
        return true;
    }
    let bytes = text.as_bytes();
    let mut i = 0usize;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        _ => return false,
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
            return false;
        }
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
            return false;
        }
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }
    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case::zero(0.0, "0.0")]
    #[case::neg_zero(-0.0, "-0.0")]
    #[case::six(6.0, "6.0")]
    #[case::seven(7.0, "7.0")]
    #[case::neg_two(-2.0, "-2.0")]
    #[case::fraction(0.25, "0.25")]
    #[case::pi(3.141592653589793, "3.141592653589793")]
    #[case::exp_5(1.234e5, "123400.0")]
    #[case::exp_20(1.234e20, "1.234E20")]
    #[case::exp_300(1e300, "1.0E300")]
    #[case::exp_neg_10(1.234e-10, "1.234E-10")]
    #[case::neg_exp_20(-1.234e20, "-1.234E20")]
    #[case::min_subnormal(5e-324, "5.0E-324")]
    fn test_f64_token(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(f64_token(value, Strictness::LegacyStrict).unwrap(), expected);
        assert_eq!(f64_token(value, Strictness::Lenient).unwrap(), expected);
    }

    #[rstest]
    #[case::two(2.0, "2.0")]
    #[case::fraction(0.5, "0.5")]
    #[case::exp_20(1.234e20, "1.234E20")]
    #[case::exp_neg_10(1.234e-10, "1.234E-10")]
    fn test_f32_token(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(f32_token(value, Strictness::LegacyStrict).unwrap(), expected);
    }

    #[rstest]
    #[case::nan(f64::NAN, "NaN")]
    #[case::infinity(f64::INFINITY, "Infinity")]
    #[case::neg_infinity(f64::NEG_INFINITY, "-Infinity")]
    fn test_f64_non_finite(#[case] value: f64, #[case] token: &str) {
        assert_eq!(f64_token(value, Strictness::Lenient).unwrap(), token);
        for strictness in [Strictness::LegacyStrict, Strictness::Strict] {
            assert_eq!(
                f64_token(value, strictness).unwrap_err().to_string(),
                format!("Numeric values must be finite, but was {token}")
            );
        }
    }

    #[test]
    fn test_f32_non_finite() {
        assert_eq!(f32_token(f32::NAN, Strictness::Lenient).unwrap(), "NaN");
        assert_eq!(
            f32_token(f32::NEG_INFINITY, Strictness::Strict)
                .unwrap_err()
                .to_string(),
            "Numeric values must be finite, but was -Infinity"
        );
    }

    #[test]
    fn test_f64_token_round_trips() {
        for value in [
            0.1, -0.1, 1.5, 1e16, 1e17, -1e-5, 123456.789e40, f64::MAX, f64::MIN_POSITIVE,
        ] {
            let token = f64_token(value, Strictness::LegacyStrict).unwrap();
            let reparsed: f64 = token.parse().unwrap();
            assert_eq!(reparsed.to_bits(), value.to_bits(), "token {token}");
        }
    }

    #[rstest]
    #[case::neg_zero_fraction("-0.0")]
    #[case::one("1.0")]
    #[case::max_double("1.7976931348623157E308")]
    #[case::min_subnormal("4.9E-324")]
    #[case::zero_fraction("0.0")]
    #[case::long_zero("0.00")]
    #[case::neg_half("-0.5")]
    #[case::pi("3.141592653589793")]
    #[case::zero("0")]
    #[case::cent("0.01")]
    #[case::zero_exp("0e0")]
    #[case::plus_exp("1e+0")]
    #[case::minus_exp("1e-0")]
    #[case::padded_exp("1e0000")]
    #[case::padded_exp_digits("1e00001")]
    #[case::pos_exp("1e+1")]
    fn test_accepted_number_tokens(#[case] text: &str) {
        assert!(is_valid_number_token(text, Strictness::LegacyStrict), "{text}");
        assert!(is_valid_number_token(text, Strictness::Strict), "{text}");
        assert!(is_valid_number_token(text, Strictness::Lenient), "{text}");
    }

    #[rstest]
    #[case::empty("")]
    #[case::dot(".")]
    #[case::leading_zeros("00")]
    #[case::leading_zero_digit("01")]
    #[case::neg_leading_zeros("-00")]
    #[case::bare_minus("-")]
    #[case::double_minus("--1")]
    #[case::leading_plus("+1")]
    #[case::bare_plus("+")]
    #[case::comma("1,0")]
    #[case::trailing_dot("0.")]
    #[case::leading_dot(".1")]
    #[case::bare_exp("e1")]
    #[case::dot_exp(".e1")]
    #[case::leading_dot_exp(".1e1")]
    #[case::exp_no_digits_minus("1e-")]
    #[case::exp_no_digits_plus("1e+")]
    #[case::exp_double_minus("1e--1")]
    #[case::exp_plus_minus("1e+-1")]
    #[case::double_exp("1e1e1")]
    #[case::plus_before_exp("1+e1")]
    #[case::fractional_exp("1e1.0")]
    #[case::text("some text")]
    fn test_rejected_number_tokens(#[case] text: &str) {
        for strictness in [
            Strictness::LegacyStrict,
            Strictness::Strict,
            Strictness::Lenient,
        ] {
            assert!(!is_valid_number_token(text, strictness), "{text}");
        }
    }

    #[rstest]
    #[case::nan("NaN")]
    #[case::infinity("Infinity")]
    #[case::neg_infinity("-Infinity")]
    fn test_non_finite_tokens_lenient_only(#[case] text: &str) {
        assert!(is_valid_number_token(text, Strictness::Lenient));
        assert!(!is_valid_number_token(text, Strictness::LegacyStrict));
        assert!(!is_valid_number_token(text, Strictness::Strict));
    }
}
