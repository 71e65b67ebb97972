use verbatim_json::numeric::{
    parse_f64, parse_i64, parse_u64, render_f64, render_i64, render_u64, scan_number, write_f64,
};
use verbatim_json::{JsonError, Number, Precision};

fn reason(err: JsonError) -> &'static str {
    match err {
        JsonError::InvalidNumericLiteral { reason, .. } => reason,
        other => panic!("expected InvalidNumericLiteral, got {other:?}"),
    }
}

// ============================================================================
// Scanning
// ============================================================================

#[test]
fn scan_stops_at_first_non_number_byte() {
    assert_eq!(scan_number(b"123abc"), 3);
    assert_eq!(scan_number(b"-0.5e+10,"), 8);
    assert_eq!(scan_number(b"7]"), 1);
}

#[test]
fn scan_single_leading_zero() {
    assert_eq!(scan_number(b"0123"), 1);
    assert_eq!(scan_number(b"-01"), 2);
}

#[test]
fn scan_accepts_incomplete_parts() {
    assert_eq!(scan_number(b"-"), 1);
    assert_eq!(scan_number(b"1.e5"), 4);
    assert_eq!(scan_number(b"1e"), 2);
    assert_eq!(scan_number(b"abc"), 0);
    assert_eq!(scan_number(b""), 0);
}

// ============================================================================
// Integer conversion
// ============================================================================

#[test]
fn u64_fast_takes_leading_digits() {
    assert_eq!(parse_u64("123", Precision::Fast).unwrap(), 123);
    assert_eq!(parse_u64("123abc", Precision::Fast).unwrap(), 123);
    assert_eq!(parse_u64("1.0000000003", Precision::Fast).unwrap(), 1);
}

#[test]
fn u64_limits() {
    assert_eq!(
        parse_u64("18446744073709551615", Precision::Strict).unwrap(),
        u64::MAX
    );
    let err = parse_u64("18446744073709551616", Precision::Fast).unwrap_err();
    assert_eq!(reason(err), "out of range for u64");
}

#[test]
fn u64_rejects_text_without_digits() {
    assert_eq!(reason(parse_u64("", Precision::Fast).unwrap_err()), "no digits");
    assert_eq!(reason(parse_u64("-1", Precision::Fast).unwrap_err()), "no digits");
    assert_eq!(reason(parse_u64("abc", Precision::Fast).unwrap_err()), "no digits");
}

#[test]
fn u64_strict_requires_exact_text() {
    assert_eq!(
        reason(parse_u64("123abc", Precision::Strict).unwrap_err()),
        "does not round-trip exactly"
    );
    assert!(parse_u64("007", Precision::Strict).is_err());
    assert_eq!(parse_u64("007", Precision::Fast).unwrap(), 7);
}

#[test]
fn i64_limits() {
    assert_eq!(
        parse_i64("-9223372036854775808", Precision::Strict).unwrap(),
        i64::MIN
    );
    assert_eq!(
        reason(parse_i64("-9223372036854775809", Precision::Fast).unwrap_err()),
        "out of range for i64"
    );
    assert_eq!(parse_i64("42", Precision::Strict).unwrap(), 42);
}

#[test]
fn i64_strict_rejects_negative_zero() {
    assert_eq!(parse_i64("-0", Precision::Fast).unwrap(), 0);
    assert!(parse_i64("-0", Precision::Strict).is_err());
}

// ============================================================================
// Float conversion
// ============================================================================

#[test]
fn f64_fast_conversion() {
    assert_eq!(parse_f64("2.5", Precision::Fast).unwrap(), 2.5);
    assert_eq!(parse_f64("-1e3", Precision::Fast).unwrap(), -1000.0);
    assert_eq!(parse_f64("1.", Precision::Fast).unwrap(), 1.0);
    assert_eq!(parse_f64("1.50", Precision::Fast).unwrap(), 1.5);
    assert_eq!(parse_f64("0e-400", Precision::Fast).unwrap(), 0.0);
}

#[test]
fn f64_bare_point_keeps_exponent() {
    assert_eq!(parse_f64("1.e5", Precision::Fast).unwrap(), 100000.0);
    assert_eq!(parse_f64("-2.E-1", Precision::Fast).unwrap(), -0.2);
    assert!(parse_f64("1.e5", Precision::Strict).is_err());
    assert_eq!(Number::from_literal("1.e5", Precision::Fast), Number::Float(100000.0));
    assert_eq!(Number::from_literal("1.e5", Precision::Strict), Number::raw("1.e5"));
}

#[test]
fn f64_rejects_overflow_and_underflow() {
    assert_eq!(
        reason(parse_f64("1e400", Precision::Fast).unwrap_err()),
        "out of range for f64"
    );
    assert_eq!(
        reason(parse_f64("-1e400", Precision::Fast).unwrap_err()),
        "out of range for f64"
    );
    assert_eq!(
        reason(parse_f64("1e-400", Precision::Fast).unwrap_err()),
        "underflows f64"
    );
}

#[test]
fn f64_rejects_text_without_digits() {
    assert_eq!(reason(parse_f64("-", Precision::Fast).unwrap_err()), "no digits");
    assert_eq!(reason(parse_f64(".5", Precision::Fast).unwrap_err()), "no digits");
}

#[test]
fn f64_strict_accepts_shortest_form() {
    assert_eq!(parse_f64("1.5", Precision::Strict).unwrap(), 1.5);
    assert_eq!(parse_f64("100.0", Precision::Strict).unwrap(), 100.0);
    assert_eq!(parse_f64("1e21", Precision::Strict).unwrap(), 1e21);
    assert_eq!(parse_f64("-0.0", Precision::Strict).unwrap(), 0.0);
}

#[test]
fn f64_strict_rejects_other_spellings() {
    for text in ["1.50", "2.5e+1", "1E21", "0.10", "1.0000000000000000001"] {
        assert_eq!(
            reason(parse_f64(text, Precision::Strict).unwrap_err()),
            "does not round-trip exactly",
            "{text} should fail strict conversion"
        );
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn render_integers() {
    assert_eq!(render_u64(0), "0");
    assert_eq!(render_u64(u64::MAX), "18446744073709551615");
    assert_eq!(render_i64(i64::MIN), "-9223372036854775808");
    assert_eq!(render_i64(-5), "-5");
}

#[test]
fn render_floats_shortest_round_trip() {
    assert_eq!(render_f64(1.0), "1.0");
    assert_eq!(render_f64(0.1), "0.1");
    assert_eq!(render_f64(-2.75), "-2.75");
    assert_eq!(render_f64(1e21), "1e21");
    assert_eq!(render_f64(0.1 + 0.2), "0.30000000000000004");
}

#[test]
fn render_non_finite() {
    assert_eq!(render_f64(f64::NAN), "NaN");
    assert_eq!(render_f64(f64::INFINITY), "inf");
    assert_eq!(render_f64(f64::NEG_INFINITY), "-inf");
}

#[test]
fn write_appends() {
    let mut out = String::from("x=");
    write_f64(&mut out, 0.5);
    assert_eq!(out, "x=0.5");
}

#[test]
fn rendered_floats_rescan_as_floats() {
    for value in [1.0, 1e21, 1e-7, 123456.0, -0.0] {
        let text = render_f64(value);
        assert_eq!(scan_number(text.as_bytes()), text.len());
        assert!(matches!(
            Number::from_literal(&text, Precision::Strict),
            Number::Float(_)
        ));
    }
}

#[test]
fn precision_serde_names() {
    assert_eq!(serde_json::to_string(&Precision::Strict).unwrap(), "\"strict\"");
    let fast: Precision = serde_json::from_str("\"fast\"").unwrap();
    assert_eq!(fast, Precision::Fast);
    assert_eq!(Precision::default(), Precision::Fast);
}

// ============================================================================
// Number classification
// ============================================================================

#[test]
fn classify_literals() {
    assert_eq!(Number::from_literal("7", Precision::Fast), Number::Unsigned(7));
    assert_eq!(Number::from_literal("-7", Precision::Fast), Number::Signed(-7));
    assert_eq!(Number::from_literal("7.0", Precision::Fast), Number::Float(7.0));
    assert_eq!(Number::from_literal("7e0", Precision::Fast), Number::Float(7.0));
}

#[test]
fn classify_falls_back_to_raw() {
    assert_eq!(
        Number::from_literal("18446744073709551616", Precision::Fast),
        Number::raw("18446744073709551616")
    );
    assert_eq!(
        Number::from_literal("1.50", Precision::Strict),
        Number::raw("1.50")
    );
    assert_eq!(Number::from_literal("-", Precision::Fast), Number::raw("-"));
}

#[test]
fn classify_negative_zero_integer_as_raw() {
    assert_eq!(Number::from_literal("-0", Precision::Fast), Number::raw("-0"));
    assert_eq!(Number::from_literal("-0", Precision::Strict), Number::raw("-0"));
    assert_eq!(Number::from_literal("0", Precision::Fast), Number::Unsigned(0));
    assert_eq!(Number::from_literal("-0.0", Precision::Fast), Number::Float(-0.0));
}

#[test]
fn number_predicates() {
    assert!(Number::Unsigned(1).is_u64());
    assert!(Number::Signed(-1).is_i64());
    assert!(Number::Float(1.5).is_f64());
    assert!(Number::raw("1").is_raw());
    assert!(!Number::raw("1").is_u64());
    assert_eq!(Number::raw("12").as_raw(), Some("12"));
    assert_eq!(Number::Unsigned(12).as_raw(), None);
    assert_eq!(Number::default(), Number::Signed(0));
}

// ============================================================================
// Number coercion
// ============================================================================

#[test]
fn coerce_native_representations() {
    assert_eq!(Number::Unsigned(5).as_i64().unwrap(), 5);
    assert_eq!(Number::Signed(-1).as_u64().unwrap(), u64::MAX);
    assert_eq!(Number::Float(3.9).as_i64().unwrap(), 3);
    assert_eq!(Number::Float(-3.9).as_u64().unwrap(), 0);
    assert_eq!(Number::Signed(-2).as_f64().unwrap(), -2.0);
}

#[test]
fn coerce_raw_text() {
    assert_eq!(Number::raw("1.0000000003").as_u64().unwrap(), 1);
    assert_eq!(Number::raw("-12abc").as_i64().unwrap(), -12);
    assert_eq!(Number::raw("1.50").as_f64().unwrap(), 1.5);
    assert!(Number::raw("abc").as_u64().is_err());
    assert!(Number::raw("18446744073709551616").as_u64().is_err());
}

#[test]
fn number_text_forms() {
    assert_eq!(Number::Float(2.0).to_text(), "2.0");
    assert_eq!(Number::raw("1e400").to_string(), "1e400");
    let mut out = String::new();
    Number::Signed(-3).write_to(&mut out);
    assert_eq!(out, "-3");
}
