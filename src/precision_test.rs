#![allow(clippy::float_cmp)]

use super::*;

fn fractional_digits(text: &str) -> usize {
    text.split_once('.').map_or(0, |(_, frac)| frac.len())
}

// =============================================================
// to_dom_precision
// =============================================================

#[test]
fn dom_precision_strips_float_noise() {
    assert_eq!(to_dom_precision(12.000_000_000_000_002), 12.0);
    assert_eq!(to_dom_precision(0.1 + 0.2), 0.3);
}

#[test]
fn dom_precision_keeps_four_digits() {
    assert_eq!(to_dom_precision(1.0 / 3.0), 0.3333);
    assert_eq!(to_dom_precision(2.0 / 3.0), 0.6667);
    assert_eq!(to_dom_precision(1234.567_89), 1234.5679);
}

#[test]
fn dom_precision_leaves_whole_numbers_alone() {
    assert_eq!(to_dom_precision(0.0), 0.0);
    assert_eq!(to_dom_precision(8.0), 8.0);
    assert_eq!(to_dom_precision(-240.0), -240.0);
}

#[test]
fn dom_precision_handles_negative_values() {
    assert_eq!(to_dom_precision(-1.0 / 3.0), -0.3333);
}

#[test]
fn dom_precision_rounds_half_toward_positive_infinity() {
    assert_eq!(to_dom_precision(0.123_45), 0.1235);
    assert_eq!(to_dom_precision(-7.123_45), -7.1234);
    assert_eq!(to_dom_precision(99.999_95), 100.0);
}

#[test]
fn dom_precision_is_deterministic() {
    let v = 19.999_999_999;
    assert_eq!(to_dom_precision(v).to_bits(), to_dom_precision(v).to_bits());
}

#[test]
fn dom_precision_never_returns_negative_zero() {
    let n = to_dom_precision(-0.000_01);
    assert_eq!(n, 0.0);
    assert!(n.is_sign_positive());
    assert!(to_dom_precision(-0.0).is_sign_positive());
}

// =============================================================
// Non-finite input
// =============================================================

#[test]
fn nan_passes_through() {
    assert!(to_dom_precision(f64::NAN).is_nan());
}

#[test]
fn infinities_pass_through() {
    assert_eq!(to_dom_precision(f64::INFINITY), f64::INFINITY);
    assert_eq!(to_dom_precision(f64::NEG_INFINITY), f64::NEG_INFINITY);
}

#[test]
fn overflowing_scale_passes_through() {
    assert_eq!(to_dom_precision(f64::MAX), f64::MAX);
    assert_eq!(to_dom_precision(f64::MIN), f64::MIN);
}

// =============================================================
// to_fixed
// =============================================================

#[test]
fn fixed_keeps_two_digits() {
    assert_eq!(to_fixed(120.333_333_3), 120.33);
    assert_eq!(to_fixed(2.0 / 3.0), 0.67);
    assert_eq!(to_fixed(12.000_000_000_000_002), 12.0);
}

// =============================================================
// Precision
// =============================================================

#[test]
fn precision_default_is_dom() {
    assert_eq!(Precision::default(), Precision::DOM);
    assert_eq!(Precision::default().digits(), 4);
}

#[test]
fn precision_presets_match_constructor() {
    assert_eq!(Precision::new(4), Ok(Precision::DOM));
    assert_eq!(Precision::new(2), Ok(Precision::FIXED));
}

#[test]
fn precision_zero_digits_rounds_to_integers() {
    let p = Precision::new(0).unwrap();
    assert_eq!(p.normalize(2.5), 3.0);
    assert_eq!(p.normalize(-2.5), -2.0);
    assert_eq!(p.normalize(0.5), 1.0);
    assert_eq!(p.normalize(2.499), 2.0);
}

#[test]
fn precision_zero_digits_negative_half_is_positive_zero() {
    let p = Precision::new(0).unwrap();
    let n = p.normalize(-0.5);
    assert_eq!(n, 0.0);
    assert!(n.is_sign_positive());
}

#[test]
fn precision_one_digit_exact_halves() {
    let p = Precision::new(1).unwrap();
    assert_eq!(p.normalize(0.25), 0.3);
    assert_eq!(p.normalize(-0.25), -0.2);
}

#[test]
fn precision_rounding_does_not_trip_on_just_below_half() {
    let p = Precision::new(0).unwrap();
    assert_eq!(p.normalize(0.499_999_999_999_999_94), 0.0);
}

#[test]
fn precision_max_digits_accepted() {
    let p = Precision::new(MAX_PRECISION_DIGITS).unwrap();
    assert_eq!(p.digits(), MAX_PRECISION_DIGITS);
}

#[test]
fn precision_too_many_digits_rejected() {
    let err = Precision::new(MAX_PRECISION_DIGITS + 1).unwrap_err();
    assert_eq!(
        err,
        PrecisionError::TooManyDigits { digits: MAX_PRECISION_DIGITS + 1, max: MAX_PRECISION_DIGITS }
    );
    assert!(err.to_string().contains("exceeds maximum"));
}

#[test]
fn precision_format_bounds_fractional_digits() {
    for digits in 0..=6 {
        let p = Precision::new(digits).unwrap();
        for v in [1.0 / 3.0, 2.0 / 3.0, 1.0 / 7.0, -5.0 / 9.0, 1234.567_891] {
            let text = p.format(v);
            assert!(
                fractional_digits(&text) <= digits as usize,
                "{v} at {digits} digits rendered as {text}"
            );
        }
    }
}

#[test]
fn precision_serde_is_bare_integer() {
    assert_eq!(serde_json::to_string(&Precision::DOM).unwrap(), "4");
    let p: Precision = serde_json::from_str("2").unwrap();
    assert_eq!(p, Precision::FIXED);
}

#[test]
fn precision_serde_rejects_too_many_digits() {
    let result: Result<Precision, _> = serde_json::from_str("40");
    assert!(result.is_err());
}

// =============================================================
// format_coord
// =============================================================

#[test]
fn format_coord_drops_trailing_zero() {
    assert_eq!(format_coord(8.0), "8");
    assert_eq!(format_coord(-20.0), "-20");
}

#[test]
fn format_coord_keeps_fraction() {
    assert_eq!(format_coord(120.3333), "120.3333");
    assert_eq!(format_coord(0.0001), "0.0001");
}

#[test]
fn format_coord_zero_has_no_sign() {
    assert_eq!(format_coord(0.0), "0");
    assert_eq!(format_coord(-0.0), "0");
}

#[test]
fn format_coord_non_finite_uses_dom_spelling() {
    assert_eq!(format_coord(f64::NAN), "NaN");
    assert_eq!(format_coord(f64::INFINITY), "Infinity");
    assert_eq!(format_coord(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn dom_precision_one_third_renders_four_digits() {
    assert_eq!(Precision::DOM.format(1.0 / 3.0), "0.3333");
}
